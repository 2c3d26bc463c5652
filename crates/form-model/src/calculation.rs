use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::ItemType;

/// Output of the yarn calculation. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub item_type: ItemType,
    /// Grams of yarn, rounded to two decimals.
    pub total_quantity: f64,
    /// Number of 50 g packs, from the unrounded total.
    pub pack_count: u32,
    pub formula_trace: String,
}

/// One unmet calculation precondition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingInput {
    pub field: String,
    pub message: String,
}

impl MissingInput {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Whether the calculation may run, and if not, why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readiness {
    pub ready: bool,
    pub missing: Vec<MissingInput>,
}

impl Readiness {
    pub fn from_missing(missing: Vec<MissingInput>) -> Self {
        Self {
            ready: missing.is_empty(),
            missing,
        }
    }

    pub fn missing_reasons(&self) -> Vec<String> {
        self.missing.iter().map(ToString::to_string).collect()
    }

    pub fn mentions(&self, field: &str) -> bool {
        self.missing.iter().any(|m| m.field == field)
    }
}
