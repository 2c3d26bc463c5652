//! `--set name=value` assignments.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use form_core::FormSession;

/// One field assignment from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

impl FromStr for Assignment {
    type Err = anyhow::Error;

    /// Splits on the first `=`; the value may itself contain `=` or be empty.
    fn from_str(s: &str) -> Result<Self> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("expected NAME=VALUE, got `{s}`"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(anyhow!("missing field name in `{s}`"));
        }
        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Apply assignments in command-line order, as if typed one after another.
pub fn apply_assignments(session: &mut FormSession, assignments: &[Assignment]) -> Result<()> {
    for assignment in assignments {
        session
            .set_value(&assignment.name, assignment.value.as_str())
            .with_context(|| format!("form {}", session.definition().id))?;
    }
    Ok(())
}
