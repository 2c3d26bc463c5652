use std::sync::LazyLock;

use form_model::{Constraint, FieldDefinition, Rule, ValidationError};
use regex::Regex;
use tracing::trace;

use crate::context::FieldLookup;
use crate::messages::MessageCatalog;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid e-mail regex"));

/// A value is blank when it holds nothing but whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parse a form value as a finite number.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Evaluates parsed rules against field values.
#[derive(Debug, Clone, Default)]
pub struct RuleEvaluator {
    catalog: MessageCatalog,
}

impl RuleEvaluator {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Check a field's current value against its rule.
    pub fn check<L>(
        &self,
        field: &FieldDefinition,
        value: &str,
        lookup: &L,
    ) -> Result<(), ValidationError>
    where
        L: FieldLookup + ?Sized,
    {
        self.check_rule(&field.name, &field.rule, value, lookup)
    }

    /// Check `value` against `rule` on behalf of the field called `name`.
    ///
    /// Fail-fast: the first failing constraint in declaration order produces
    /// the error and the rest are skipped.
    pub fn check_rule<L>(
        &self,
        name: &str,
        rule: &Rule,
        value: &str,
        lookup: &L,
    ) -> Result<(), ValidationError>
    where
        L: FieldLookup + ?Sized,
    {
        if is_blank(value) {
            if rule.is_required() {
                trace!(field = name, constraint = "required", "blank value rejected");
                return Err(self.failure(name, &Constraint::Required, false, lookup));
            }
            return Ok(());
        }

        let numeric = rule.is_numeric();
        for constraint in rule.constraints() {
            let passed = passes(constraint, value, numeric, lookup);
            trace!(field = name, constraint = constraint.name(), passed, "constraint evaluated");
            if !passed {
                return Err(self.failure(name, constraint, numeric, lookup));
            }
        }
        Ok(())
    }

    fn failure<L>(
        &self,
        name: &str,
        constraint: &Constraint,
        numeric: bool,
        lookup: &L,
    ) -> ValidationError
    where
        L: FieldLookup + ?Sized,
    {
        let attribute = lookup.label(name);
        let message = match constraint {
            Constraint::Min(min) => {
                let min = min.to_string();
                self.catalog.render(
                    "min",
                    numeric,
                    &[("attribute", attribute), ("min", min.as_str())],
                )
            }
            Constraint::Max(max) => {
                let max = max.to_string();
                self.catalog.render(
                    "max",
                    numeric,
                    &[("attribute", attribute), ("max", max.as_str())],
                )
            }
            Constraint::Between(min, max) => {
                let (min, max) = (min.to_string(), max.to_string());
                self.catalog.render(
                    "between",
                    numeric,
                    &[
                        ("attribute", attribute),
                        ("min", min.as_str()),
                        ("max", max.as_str()),
                    ],
                )
            }
            Constraint::In(options) => {
                let values = options.join(", ");
                self.catalog.render(
                    "in",
                    numeric,
                    &[("attribute", attribute), ("values", values.as_str())],
                )
            }
            Constraint::Same(other) => self.catalog.render(
                "same",
                numeric,
                &[("attribute", attribute), ("other", lookup.label(other))],
            ),
            other => self
                .catalog
                .render(other.name(), numeric, &[("attribute", attribute)]),
        };
        ValidationError::new(name, message)
    }
}

fn passes<L>(constraint: &Constraint, value: &str, numeric: bool, lookup: &L) -> bool
where
    L: FieldLookup + ?Sized,
{
    match constraint {
        Constraint::Required => !is_blank(value),
        Constraint::Numeric => parse_number(value).is_some(),
        Constraint::String => true,
        Constraint::Email => EMAIL_REGEX.is_match(value.trim()),
        Constraint::Min(min) => measure(value, numeric) >= *min,
        Constraint::Max(max) => measure(value, numeric) <= *max,
        Constraint::Between(min, max) => {
            let size = measure(value, numeric);
            *min <= size && size <= *max
        }
        Constraint::In(options) => options.iter().any(|option| option == value.trim()),
        Constraint::Same(other) => lookup.value(other).unwrap_or_default() == value,
    }
}

/// The quantity size constraints compare: the number itself for numeric
/// rules, otherwise the character count.
fn measure(value: &str, numeric: bool) -> f64 {
    if numeric && let Some(number) = parse_number(value) {
        return number;
    }
    value.chars().count() as f64
}
