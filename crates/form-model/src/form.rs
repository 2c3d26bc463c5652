//! A complete form definition: fields, dependencies and options.

use serde::{Deserialize, Serialize};

use crate::dependency::{DependencyRule, MeasurementBinding};
use crate::field::FieldDefinition;

/// When validation runs, and whether errors are visible before interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    /// Re-validate on every value change.
    pub validate_on_change: bool,
    /// Re-validate a field when it loses focus.
    pub validate_on_blur: bool,
    /// Expose errors for untouched fields.
    pub show_errors_on_init: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            validate_on_change: true,
            validate_on_blur: true,
            show_errors_on_init: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub options: FormOptions,
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub dependencies: Vec<DependencyRule>,
    #[serde(default)]
    pub measurements: Vec<MeasurementBinding>,
}

impl FormDefinition {
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    /// Fields whose value drives some other field.
    pub fn driver_fields(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .map(|dep| dep.driver.as_str())
            .chain(self.measurements.iter().map(|m| m.size_field.as_str()))
    }

    pub fn measurement(&self, field: &str) -> Option<&MeasurementBinding> {
        self.measurements.iter().find(|m| m.field == field)
    }
}
