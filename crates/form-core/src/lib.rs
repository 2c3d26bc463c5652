//! Form session engine.
//!
//! A [`FormSession`] owns the values and status of every field. Each change
//! runs, to completion and in order:
//!
//! 1. [`derive_field_state`] over the current values, which yields disabled
//!    flags, auto-set values, label overrides and size ranges;
//! 2. rule validation of every enabled field, followed by the size-based
//!    measurement pass.
//!
//! The yarn [`calculate`] function reads a session but never changes it.

pub mod calculation;
pub mod redact;
pub mod resolver;
pub mod session;
pub mod values;

pub use calculation::{
    YarnInputs, calculate, calculate_yarn, format_result, is_ready_for_calculation, readiness,
};
pub use resolver::{AutoSet, DerivedState, derive_field_state};
pub use session::{FormSession, create_form};
pub use values::{FormValue, FormValues};
