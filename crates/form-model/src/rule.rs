//! Structured validation rules.
//!
//! Rules are written in the pipe-separated notation used by the form
//! definitions (`required|numeric|min:50|max:800`) and parsed once, when the
//! definition is loaded, into a list of [`Constraint`]s. Constraints are
//! combined with AND semantics and evaluated in declaration order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced while parsing a rule string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleParseError {
    #[error("unknown constraint `{name}`")]
    UnknownConstraint { name: String },
    #[error("constraint `{name}` requires an argument")]
    MissingArgument { name: String },
    #[error("constraint `{name}` does not take an argument")]
    UnexpectedArgument { name: String },
    #[error("constraint `{name}` has an invalid number `{value}`")]
    InvalidNumber { name: String, value: String },
    #[error("constraint `between` expects `min,max`, got `{value}`")]
    InvalidBetween { value: String },
    #[error("empty constraint in rule `{rule}`")]
    EmptyConstraint { rule: String },
}

/// A single primitive check.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Value must be non-blank.
    Required,
    /// Value must parse as a finite number.
    Numeric,
    /// Value must be a string. Form values always are, so this only
    /// switches size comparisons to character counts.
    String,
    /// Value must look like an e-mail address.
    Email,
    Min(f64),
    Max(f64),
    Between(f64, f64),
    /// Value must be one of the listed options.
    In(Vec<String>),
    /// Value must equal the value of another field.
    Same(String),
}

impl Constraint {
    /// Key used for message lookup.
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::Numeric => "numeric",
            Constraint::String => "string",
            Constraint::Email => "email",
            Constraint::Min(_) => "min",
            Constraint::Max(_) => "max",
            Constraint::Between(_, _) => "between",
            Constraint::In(_) => "in",
            Constraint::Same(_) => "same",
        }
    }

    /// Name of the field this constraint reads besides its own.
    pub fn referenced_field(&self) -> Option<&str> {
        match self {
            Constraint::Same(other) => Some(other),
            _ => None,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Min(n) => write!(f, "min:{n}"),
            Constraint::Max(n) => write!(f, "max:{n}"),
            Constraint::Between(min, max) => write!(f, "between:{min},{max}"),
            Constraint::In(options) => write!(f, "in:{}", options.join(",")),
            Constraint::Same(other) => write!(f, "same:{other}"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Constraint {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s.trim(), None),
        };
        let no_arg = |constraint: Constraint| match arg {
            Some(_) => Err(RuleParseError::UnexpectedArgument {
                name: name.to_string(),
            }),
            None => Ok(constraint),
        };
        let required_arg = || {
            arg.filter(|value| !value.is_empty())
                .ok_or_else(|| RuleParseError::MissingArgument {
                    name: name.to_string(),
                })
        };
        let number = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| RuleParseError::InvalidNumber {
                    name: name.to_string(),
                    value: value.to_string(),
                })
        };

        match name {
            "required" => no_arg(Constraint::Required),
            "numeric" => no_arg(Constraint::Numeric),
            "string" => no_arg(Constraint::String),
            "email" => no_arg(Constraint::Email),
            "min" => Ok(Constraint::Min(number(required_arg()?)?)),
            "max" => Ok(Constraint::Max(number(required_arg()?)?)),
            "between" => {
                let value = required_arg()?;
                let (min, max) =
                    value
                        .split_once(',')
                        .ok_or_else(|| RuleParseError::InvalidBetween {
                            value: value.to_string(),
                        })?;
                Ok(Constraint::Between(number(min)?, number(max)?))
            }
            "in" => Ok(Constraint::In(
                required_arg()?
                    .split(',')
                    .map(|option| option.trim().to_string())
                    .collect(),
            )),
            "same" => Ok(Constraint::Same(required_arg()?.to_string())),
            _ => Err(RuleParseError::UnknownConstraint {
                name: name.to_string(),
            }),
        }
    }
}

/// An ordered, AND-combined list of constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rule {
    constraints: Vec<Constraint>,
}

impl Rule {
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn is_required(&self) -> bool {
        self.has(|c| matches!(c, Constraint::Required))
    }

    /// Size constraints compare numerically only when the rule says so.
    pub fn is_numeric(&self) -> bool {
        self.has(|c| matches!(c, Constraint::Numeric))
    }

    /// Allowed options when the rule carries an `in` constraint.
    pub fn options(&self) -> Option<&[String]> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::In(options) => Some(options.as_slice()),
            _ => None,
        })
    }

    fn has(&self, predicate: impl Fn(&Constraint) -> bool) -> bool {
        self.constraints.iter().any(predicate)
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Rule::default());
        }
        let constraints = s
            .split('|')
            .map(|part| {
                if part.trim().is_empty() {
                    Err(RuleParseError::EmptyConstraint {
                        rule: s.to_string(),
                    })
                } else {
                    part.parse()
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Rule { constraints })
    }
}

impl TryFrom<String> for Rule {
    type Error = RuleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, constraint) in self.constraints.iter().enumerate() {
            if idx > 0 {
                f.write_str("|")?;
            }
            write!(f, "{constraint}")?;
        }
        Ok(())
    }
}
