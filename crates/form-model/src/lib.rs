//! Data model for declarative forms.
//!
//! Field definitions, parsed validation rules, dependency rules between
//! driver and target fields, size range lookups and the yarn calculation
//! result types. Nothing in this crate evaluates anything; the validator,
//! resolver and session live in `form-validate` and `form-core`.

pub mod calculation;
pub mod dependency;
pub mod enums;
pub mod error;
pub mod field;
pub mod form;
pub mod rule;
pub mod size;

pub use calculation::{CalculationResult, MissingInput, Readiness};
pub use dependency::{DependencyCase, DependencyRule, Effect, EffectParseError, MeasurementBinding};
pub use enums::{ItemType, MeasurementType, ParseEnumError, Size, SleevesLength};
pub use error::{CalculationError, FormError, Result, ValidationError};
pub use field::{FieldDefinition, FieldState};
pub use form::{FormDefinition, FormOptions};
pub use rule::{Constraint, Rule, RuleParseError};
pub use size::{SizeRange, SizeRangeTable};
