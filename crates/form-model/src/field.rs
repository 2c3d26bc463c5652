use serde::{Deserialize, Serialize};

use crate::rule::Rule;

/// Static metadata for one field. Immutable once the form is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Unique key. Dots nest the value in the session's values output
    /// (`bodyMeasurements.waist`).
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default, rename = "default")]
    pub default_value: String,
    #[serde(default, rename = "rules")]
    pub rule: Rule,
}

impl FieldDefinition {
    /// Path segments of the field name.
    pub fn path(&self) -> impl Iterator<Item = &str> {
        self.name.split('.')
    }
}

/// Per-session mutable state of one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldState {
    pub value: String,
    pub disabled: bool,
    pub touched: bool,
    pub dirty: bool,
    /// Last validation failure, kept even while the field is disabled.
    pub error: Option<String>,
    /// Effective label after dependency overrides.
    pub label: String,
    /// Effective placeholder after dependency overrides.
    pub placeholder: String,
}

impl FieldState {
    /// Fresh state holding the definition's default value.
    pub fn from_definition(definition: &FieldDefinition) -> Self {
        Self {
            value: definition.default_value.clone(),
            label: definition.label.clone(),
            placeholder: definition.placeholder.clone(),
            ..Self::default()
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
