use serde::Serialize;
use thiserror::Error;

use crate::calculation::MissingInput;

/// Misuse of the session API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// A field-level validation failure. Recoverable: corrected input clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Why a calculation did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("calculation inputs incomplete: {}", join_missing(.0))]
    NotReady(Vec<MissingInput>),
    #[error("unsupported item type: {0}")]
    UnsupportedItemType(String),
    /// The total, in grams, needs more packs than a `u32` can count.
    #[error("yarn quantity out of range: {0} g")]
    QuantityOutOfRange(String),
}

fn join_missing(missing: &[MissingInput]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, FormError>;
