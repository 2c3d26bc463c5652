//! Dependency resolution.
//!
//! [`derive_field_state`] is a pure function of the form definition, the size
//! table and the current values. It is re-run after every mutation; nothing
//! it returns depends on earlier runs.

use std::collections::BTreeMap;

use form_model::{Effect, FormDefinition, SizeRange, SizeRangeTable};
use form_validate::FieldLookup;

/// A value the resolver wants written into a target field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoSet {
    Set(String),
    Clear,
}

impl AutoSet {
    pub fn value(&self) -> &str {
        match self {
            AutoSet::Set(value) => value,
            AutoSet::Clear => "",
        }
    }
}

/// Per-field overrides derived from the driver values.
///
/// Fields absent from a map keep their defaults: enabled, no auto-set value,
/// the label and placeholder from their definition, no size range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedState {
    pub disabled: BTreeMap<String, bool>,
    pub auto_set: BTreeMap<String, AutoSet>,
    pub ranges: BTreeMap<String, SizeRange>,
    pub labels: BTreeMap<String, String>,
    pub placeholders: BTreeMap<String, String>,
}

impl DerivedState {
    pub fn is_disabled(&self, field: &str) -> bool {
        self.disabled.get(field).copied().unwrap_or(false)
    }

    pub fn auto_value(&self, field: &str) -> Option<&str> {
        self.auto_set.get(field).map(AutoSet::value)
    }

    pub fn range(&self, field: &str) -> Option<SizeRange> {
        self.ranges.get(field).copied()
    }
}

/// Evaluate every dependency and measurement binding against `values`.
///
/// Dependencies apply in declaration order; when two touch the same target,
/// the later enable/disable, auto-set or override wins. `noop` leaves the
/// target exactly as it is.
pub fn derive_field_state<L>(
    form: &FormDefinition,
    sizes: &SizeRangeTable,
    values: &L,
) -> DerivedState
where
    L: FieldLookup + ?Sized,
{
    let mut derived = DerivedState::default();

    for dependency in &form.dependencies {
        let driver_value = values.value(&dependency.driver).unwrap_or_default().trim();
        let target = &dependency.target;
        derived.disabled.entry(target.clone()).or_insert(false);

        for effect in dependency.effects_for(driver_value) {
            match effect {
                Effect::Disable => {
                    derived.disabled.insert(target.clone(), true);
                }
                Effect::Enable => {
                    derived.disabled.insert(target.clone(), false);
                }
                Effect::Set(value) => {
                    derived.auto_set.insert(target.clone(), AutoSet::Set(value.clone()));
                }
                Effect::Clear => {
                    derived.auto_set.insert(target.clone(), AutoSet::Clear);
                }
                Effect::Label(label) => {
                    derived.labels.insert(target.clone(), label.clone());
                }
                Effect::Placeholder(text) => {
                    derived.placeholders.insert(target.clone(), text.clone());
                }
                Effect::Noop => {}
            }
        }
    }

    for binding in &form.measurements {
        let size = values.value(&binding.size_field).unwrap_or_default();
        if let Some(range) = sizes.lookup(size, binding.measurement) {
            derived.ranges.insert(binding.field.clone(), range);
        }
    }

    derived
}
