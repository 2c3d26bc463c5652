//! Size-dependent range checks for body measurements.
//!
//! The static rule language cannot express "waist must be 70-80 cm when the
//! size is M", because the range depends on another field. This pass runs
//! after the rule evaluator and only when a size is selected.

use form_model::{MeasurementType, SizeRange, SizeRangeTable, ValidationError};
use tracing::trace;

/// The field being checked.
#[derive(Debug, Clone, Copy)]
pub struct MeasurementCheck<'a> {
    pub field: &'a str,
    pub label: &'a str,
    pub measurement: MeasurementType,
}

/// Check `value` against the range for `size`.
///
/// An empty size, or a size without a range for this measurement, accepts
/// every value.
pub fn check_measurement(
    table: &SizeRangeTable,
    check: &MeasurementCheck<'_>,
    size: &str,
    value: f64,
) -> Result<(), ValidationError> {
    let size = size.trim();
    if size.is_empty() {
        return Ok(());
    }
    let Some(range) = table.lookup(size, check.measurement) else {
        trace!(field = check.field, size, "no size range, value accepted");
        return Ok(());
    };
    match size_error_message(check.label, size, range, value) {
        Some(message) => Err(ValidationError::new(check.field, message)),
        None => Ok(()),
    }
}

/// Message for a value outside `range`, distinguishing the violated bound.
pub fn size_error_message(
    label: &str,
    size: &str,
    range: SizeRange,
    value: f64,
) -> Option<String> {
    if value < range.min {
        Some(format!(
            "{label} must be at least {} cm for size {size}.",
            range.min
        ))
    } else if value > range.max {
        Some(format!("{label} cannot exceed {} cm for size {size}.", range.max))
    } else {
        None
    }
}
