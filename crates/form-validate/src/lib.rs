//! Field validation.
//!
//! [`RuleEvaluator`] checks a value against a field's parsed [`Rule`]:
//! constraints are AND-combined, evaluated in declaration order, and the first
//! failure is the one reported. Empty values pass unless the rule contains
//! `required`.
//!
//! [`check_measurement`] is the second pass for body measurements, whose valid
//! range depends on the value of a sibling size field.
//!
//! [`Rule`]: form_model::Rule

mod context;
mod evaluator;
mod measurement;
mod messages;

pub use context::FieldLookup;
pub use evaluator::{RuleEvaluator, is_blank, parse_number};
pub use measurement::{MeasurementCheck, check_measurement, size_error_message};
pub use messages::MessageCatalog;
