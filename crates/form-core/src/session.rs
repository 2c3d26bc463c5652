//! The form session: single owner of field values and their status.
//!
//! Sessions are synchronous and not meant to be shared between threads;
//! a multi-threaded host should keep one owner that serialises mutations.

use std::collections::{BTreeMap, HashMap};

use form_model::{
    FieldDefinition, FieldState, FormDefinition, FormError, FormOptions, SizeRange,
    SizeRangeTable, ValidationError,
};
use form_standards::{FormVariant, StandardsError, load_form, load_size_ranges};
use form_validate::{
    FieldLookup, MeasurementCheck, RuleEvaluator, check_measurement, is_blank, parse_number,
};
use tracing::{debug, info, warn};

use crate::redact::redact_value;
use crate::resolver::{DerivedState, derive_field_state};
use crate::values::FormValues;

/// Create a session for `form` with the given size range table.
pub fn create_form(form: FormDefinition, sizes: SizeRangeTable) -> FormSession {
    FormSession::new(form).with_size_ranges(sizes)
}

#[derive(Debug, Clone)]
pub struct FormSession {
    form: FormDefinition,
    sizes: SizeRangeTable,
    evaluator: RuleEvaluator,
    /// Same order as `form.fields`.
    states: Vec<FieldState>,
    index: HashMap<String, usize>,
    derived: DerivedState,
    submitted: bool,
}

impl FormSession {
    /// Create a session holding every field's default value.
    ///
    /// Defaults are validated straight away; whether the errors show is
    /// governed by [`FormOptions::show_errors_on_init`].
    pub fn new(form: FormDefinition) -> Self {
        let states = form.fields.iter().map(FieldState::from_definition).collect();
        let index = form
            .fields
            .iter()
            .enumerate()
            .map(|(idx, field)| (field.name.clone(), idx))
            .collect();
        let mut session = Self {
            form,
            sizes: SizeRangeTable::default(),
            evaluator: RuleEvaluator::default(),
            states,
            index,
            derived: DerivedState::default(),
            submitted: false,
        };
        session.resolve(true);
        session.validate_fields();
        session
    }

    /// Session for a built-in variant, with the built-in size table.
    pub fn from_variant(variant: FormVariant) -> Result<Self, StandardsError> {
        Ok(create_form(load_form(variant)?, load_size_ranges()?))
    }

    /// Use `sizes` for measurement ranges.
    #[must_use]
    pub fn with_size_ranges(mut self, sizes: SizeRangeTable) -> Self {
        self.sizes = sizes;
        self.resolve(false);
        self.validate_fields();
        self
    }

    /// Use a custom evaluator, e.g. with different message wording.
    #[must_use]
    pub fn with_evaluator(mut self, evaluator: RuleEvaluator) -> Self {
        self.evaluator = evaluator;
        self.validate_fields();
        self
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.form
    }

    pub fn options(&self) -> FormOptions {
        self.form.options
    }

    /// Store a user edit, then re-run dependencies and validation.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let idx = self.position(name)?;
        let value = value.into();
        debug!(field = name, value = redact_value(&value), "value changed");
        if self.states[idx].disabled {
            debug!(field = name, "value written to a disabled field");
        }
        let state = &mut self.states[idx];
        state.value = value;
        state.dirty = true;
        state.touched = true;

        self.resolve(true);
        if self.form.options.validate_on_change {
            self.validate_fields();
        }
        Ok(())
    }

    /// Mark a field as visited (blur), re-validating if configured to.
    pub fn touch(&mut self, name: &str) -> Result<(), FormError> {
        let idx = self.position(name)?;
        self.states[idx].touched = true;
        if self.form.options.validate_on_blur {
            self.validate_fields();
        }
        Ok(())
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.state(name).map(|state| state.value.as_str())
    }

    pub fn state(&self, name: &str) -> Option<&FieldState> {
        self.index.get(name).map(|&idx| &self.states[idx])
    }

    /// Unknown fields report `false`.
    pub fn is_field_disabled(&self, name: &str) -> bool {
        self.state(name).is_some_and(|state| state.disabled)
    }

    /// The error to display for a field.
    ///
    /// Disabled fields never show an error. Enabled fields show theirs once
    /// touched, edited or submitted, or straight away when the form shows
    /// errors on init.
    pub fn field_error(&self, name: &str) -> Option<&str> {
        let state = self.state(name)?;
        if state.disabled {
            return None;
        }
        let visible = self.form.options.show_errors_on_init
            || self.submitted
            || state.touched
            || state.dirty;
        if visible { state.error.as_deref() } else { None }
    }

    /// Effective label after dependency overrides.
    pub fn field_label(&self, name: &str) -> Option<&str> {
        self.state(name).map(|state| state.label.as_str())
    }

    /// Effective placeholder after dependency overrides.
    pub fn field_placeholder(&self, name: &str) -> Option<&str> {
        self.state(name).map(|state| state.placeholder.as_str())
    }

    /// Size-specific range currently recommended for a measurement field.
    pub fn field_range(&self, name: &str) -> Option<SizeRange> {
        self.derived.range(name)
    }

    /// Overrides from the last dependency resolution.
    pub fn derived(&self) -> &DerivedState {
        &self.derived
    }

    /// True iff no enabled field holds an error. Disabled fields never
    /// count, whatever their stored error. Reflects the last validation pass.
    pub fn is_valid(&self) -> bool {
        self.states
            .iter()
            .all(|state| state.disabled || state.error.is_none())
    }

    pub fn is_dirty(&self) -> bool {
        self.states.iter().any(|state| state.dirty)
    }

    /// Every enabled field's error, by field name.
    pub fn errors(&self) -> BTreeMap<String, String> {
        self.enabled_errors()
            .map(|(field, message)| (field.name.clone(), message.to_string()))
            .collect()
    }

    /// Every enabled field's error, in field order.
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        self.enabled_errors()
            .map(|(field, message)| ValidationError::new(field.name.clone(), message))
            .collect()
    }

    /// Re-validate every enabled field now.
    pub fn validate(&mut self) -> bool {
        self.validate_fields();
        self.is_valid()
    }

    /// Validate and hand back the values, or every enabled field's error.
    pub fn submit(&mut self) -> Result<FormValues, Vec<ValidationError>> {
        self.submitted = true;
        if self.validate() {
            info!(form = %self.form.id, "form submitted");
            Ok(self.values())
        } else {
            let errors = self.validation_errors();
            warn!(form = %self.form.id, error_count = errors.len(), "form has errors");
            Err(errors)
        }
    }

    /// Restore every field to its default value and drop all dirty and
    /// touched flags. Dependencies are resolved once so disabled state
    /// matches the defaults again.
    ///
    /// The defaults are checked again, so [`is_valid`](Self::is_valid) agrees
    /// with a fresh session; the errors stay hidden until the field is
    /// touched, edited or submitted.
    pub fn reset(&mut self) {
        for (state, field) in self.states.iter_mut().zip(&self.form.fields) {
            *state = FieldState::from_definition(field);
        }
        self.submitted = false;
        self.resolve(true);
        self.validate_fields();
        debug!(form = %self.form.id, "form reset to defaults");
    }

    /// Empty every field and drop all dirty and touched flags.
    ///
    /// Unlike [`reset`](Self::reset) no default and no auto-set value is
    /// written: every value reads `""` afterwards. Disabled flags, labels and
    /// placeholders are recomputed for the empty values, and the empty values
    /// are checked like any other, with their errors hidden.
    pub fn clear(&mut self) {
        for (state, field) in self.states.iter_mut().zip(&self.form.fields) {
            *state = FieldState {
                value: String::new(),
                ..FieldState::from_definition(field)
            };
        }
        self.submitted = false;
        self.resolve(false);
        self.validate_fields();
        debug!(form = %self.form.id, "form cleared");
    }

    /// Snapshot of all values, dotted names nested.
    pub fn values(&self) -> FormValues {
        let mut values = FormValues::new();
        for (field, state) in self.form.fields.iter().zip(&self.states) {
            values.insert(&field.name, state.value.clone());
        }
        values
    }

    /// Field definitions paired with their current state, in form order.
    pub fn fields(&self) -> impl Iterator<Item = (&FieldDefinition, &FieldState)> {
        self.form.fields.iter().zip(&self.states)
    }

    fn position(&self, name: &str) -> Result<usize, FormError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    fn enabled_errors(&self) -> impl Iterator<Item = (&FieldDefinition, &str)> {
        self.fields().filter_map(|(field, state)| {
            if state.disabled {
                return None;
            }
            state.error.as_deref().map(|message| (field, message))
        })
    }

    /// Re-derive overrides and apply them. Auto-set values are written only
    /// when `apply_values` is set; a value written into a driver field can
    /// change other targets, so resolution repeats until nothing changes.
    fn resolve(&mut self, apply_values: bool) {
        let max_rounds = self.form.dependencies.len() + 1;
        for _ in 0..max_rounds {
            self.derived = derive_field_state(&self.form, &self.sizes, &*self);
            if !apply_values || !self.apply_auto_set() {
                break;
            }
        }
        self.apply_overrides();
    }

    /// Returns true when a driver field's value changed.
    fn apply_auto_set(&mut self) -> bool {
        let mut driver_changed = false;
        for (target, auto) in &self.derived.auto_set {
            let Some(&idx) = self.index.get(target) else {
                continue;
            };
            let state = &mut self.states[idx];
            if state.value == auto.value() {
                continue;
            }
            debug!(
                field = %target,
                value = redact_value(auto.value()),
                "dependency updated value"
            );
            state.value = auto.value().to_string();
            if self.form.driver_fields().any(|driver| driver == target) {
                driver_changed = true;
            }
        }
        driver_changed
    }

    fn apply_overrides(&mut self) {
        for (field, state) in self.form.fields.iter().zip(self.states.iter_mut()) {
            state.disabled = self.derived.is_disabled(&field.name);
            state.label = self
                .derived
                .labels
                .get(&field.name)
                .unwrap_or(&field.label)
                .clone();
            state.placeholder = self
                .derived
                .placeholders
                .get(&field.name)
                .unwrap_or(&field.placeholder)
                .clone();
        }
    }

    /// Validate enabled fields. Disabled fields keep whatever error they had.
    fn validate_fields(&mut self) {
        let outcomes: Vec<(usize, Option<String>)> = self
            .fields()
            .enumerate()
            .filter(|(_, (_, state))| !state.disabled)
            .map(|(idx, (field, state))| (idx, self.check_field(field, &state.value)))
            .collect();
        for (idx, error) in outcomes {
            self.states[idx].error = error;
        }
    }

    fn check_field(&self, field: &FieldDefinition, value: &str) -> Option<String> {
        if let Err(error) = self.evaluator.check(field, value, self) {
            return Some(error.message);
        }
        let binding = self.form.measurement(&field.name)?;
        if is_blank(value) {
            return None;
        }
        let number = parse_number(value)?;
        let size = self.value(&binding.size_field).unwrap_or_default();
        let check = MeasurementCheck {
            field: &field.name,
            label: self.field_label(&field.name).unwrap_or(&field.label),
            measurement: binding.measurement,
        };
        check_measurement(&self.sizes, &check, size, number)
            .err()
            .map(|error| error.message)
    }
}

impl FieldLookup for FormSession {
    fn value(&self, name: &str) -> Option<&str> {
        FormSession::value(self, name)
    }

    fn label<'a>(&'a self, name: &'a str) -> &'a str {
        self.field_label(name).unwrap_or(name)
    }
}
