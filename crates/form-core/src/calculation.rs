//! Yarn quantity calculation.
//!
//! Formulas, per item type, in grams of yarn:
//!
//! - scarf: `length * 100 * 3 / yarnLength`
//! - sweater: `(waist + chest + hips) * 100 * 12 / (3 * yarnLength)`
//! - dress: `(waist + chest + hips) * 100 * m / (3 * yarnLength)` with `m` 30
//!   for short sleeves and 40 otherwise
//!
//! The pack count comes from the unrounded total; only the reported total is
//! rounded to two decimals.

use form_model::{
    CalculationError, CalculationResult, ItemType, MissingInput, Readiness, SleevesLength,
};
use form_validate::{FieldLookup, parse_number};
use tracing::debug;

use crate::session::FormSession;

/// Grams of yarn in one pack.
pub const PACK_GRAMS: f64 = 50.0;

const SHORT_SLEEVE_MULTIPLIER: f64 = 30.0;
const LONG_SLEEVE_MULTIPLIER: f64 = 40.0;
const SWEATER_MULTIPLIER: f64 = 12.0;
const SCARF_MULTIPLIER: f64 = 3.0;

/// Field names the calculation reads.
pub mod fields {
    pub const YARN_LENGTH: &str = "yarnLength";
    pub const ITEM_TYPE: &str = "itemType";
    pub const LENGTH: &str = "length";
    pub const SLEEVES_LENGTH: &str = "sleevesLength";
    pub const WAIST: &str = "bodyMeasurements.waist";
    pub const CHEST: &str = "bodyMeasurements.chest";
    pub const HIPS: &str = "bodyMeasurements.hips";
}

/// Calculation inputs taken from form values.
///
/// Numbers are `None` when the value is blank or not a number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YarnInputs {
    pub yarn_length: Option<f64>,
    pub item_type: String,
    pub length: Option<f64>,
    pub sleeves_length: String,
    pub waist: Option<f64>,
    pub chest: Option<f64>,
    pub hips: Option<f64>,
}

impl YarnInputs {
    pub fn from_lookup<L>(values: &L) -> Self
    where
        L: FieldLookup + ?Sized,
    {
        let text = |name: &str| values.value(name).unwrap_or_default().trim().to_string();
        let number = |name: &str| values.value(name).and_then(parse_number);
        Self {
            yarn_length: number(fields::YARN_LENGTH),
            item_type: text(fields::ITEM_TYPE),
            length: number(fields::LENGTH),
            sleeves_length: text(fields::SLEEVES_LENGTH),
            waist: number(fields::WAIST),
            chest: number(fields::CHEST),
            hips: number(fields::HIPS),
        }
    }

    fn body_sum(&self) -> f64 {
        self.waist.unwrap_or_default()
            + self.chest.unwrap_or_default()
            + self.hips.unwrap_or_default()
    }

    fn sleeve_multiplier(&self) -> f64 {
        if self.sleeves_length == SleevesLength::Short.as_str() {
            SHORT_SLEEVE_MULTIPLIER
        } else {
            LONG_SLEEVE_MULTIPLIER
        }
    }
}

fn is_positive(value: Option<f64>) -> bool {
    value.is_some_and(|v| v > 0.0)
}

/// Check the calculation preconditions. Every unmet one is reported.
pub fn readiness(inputs: &YarnInputs) -> Readiness {
    let mut missing = Vec::new();

    if !is_positive(inputs.yarn_length) {
        missing.push(MissingInput::new(
            fields::YARN_LENGTH,
            "Yarn length must be greater than 0",
        ));
    }
    if inputs.item_type.is_empty() {
        missing.push(MissingInput::new(fields::ITEM_TYPE, "Item type is required"));
    }

    let item_type = inputs.item_type.parse::<ItemType>().ok();
    if item_type == Some(ItemType::Scarf) && !is_positive(inputs.length) {
        missing.push(MissingInput::new(fields::LENGTH, "Length is required for scarfs"));
    }
    if item_type.is_some_and(|item| item.uses_body_measurements()) {
        let body = [
            (fields::WAIST, inputs.waist, "Waist"),
            (fields::CHEST, inputs.chest, "Chest"),
            (fields::HIPS, inputs.hips, "Hips"),
        ];
        for (field, value, label) in body {
            if !is_positive(value) {
                missing.push(MissingInput::new(
                    field,
                    format!("{label} measurement is required for sweaters and dresses"),
                ));
            }
        }
    }
    if item_type == Some(ItemType::Dress) && inputs.sleeves_length.is_empty() {
        missing.push(MissingInput::new(
            fields::SLEEVES_LENGTH,
            "Sleeves length is required for dresses",
        ));
    }

    Readiness::from_missing(missing)
}

/// Readiness of a session's current values.
pub fn is_ready_for_calculation(session: &FormSession) -> Readiness {
    readiness(&YarnInputs::from_lookup(session))
}

/// Compute the yarn estimate.
///
/// Unmet preconditions are reported before an unknown item type.
pub fn calculate_yarn(inputs: &YarnInputs) -> Result<CalculationResult, CalculationError> {
    let readiness = readiness(inputs);
    if !readiness.ready {
        return Err(CalculationError::NotReady(readiness.missing));
    }
    let item_type: ItemType = inputs
        .item_type
        .parse()
        .map_err(|_| CalculationError::UnsupportedItemType(inputs.item_type.clone()))?;
    // Readiness guarantees a positive yarn length.
    let yarn = inputs.yarn_length.unwrap_or_default();

    let (total, trace) = match item_type {
        ItemType::Scarf => {
            let length = inputs.length.unwrap_or_default();
            let total = length * 100.0 * SCARF_MULTIPLIER / yarn;
            (total, format!("({length} × 100 × 3) ÷ {yarn} = {total:.2}"))
        }
        ItemType::Sweater | ItemType::Dress => {
            let multiplier = if item_type == ItemType::Sweater {
                SWEATER_MULTIPLIER
            } else {
                inputs.sleeve_multiplier()
            };
            let total = inputs.body_sum() * 100.0 * multiplier / (3.0 * yarn);
            let trace = format!(
                "(({} + {} + {}) × 100 × {multiplier}) ÷ (3 × {yarn}) = {total:.2}",
                inputs.waist.unwrap_or_default(),
                inputs.chest.unwrap_or_default(),
                inputs.hips.unwrap_or_default(),
            );
            (total, trace)
        }
    };

    let packs = pack_count(total)
        .ok_or_else(|| CalculationError::QuantityOutOfRange(format!("{total:.2}")))?;
    let result = CalculationResult {
        item_type,
        total_quantity: round_to_cents(total),
        pack_count: packs,
        formula_trace: trace,
    };
    debug!(
        item_type = %result.item_type,
        total = result.total_quantity,
        packs = result.pack_count,
        "yarn calculated"
    );
    Ok(result)
}

/// Compute the yarn estimate from a session's current values.
pub fn calculate(session: &FormSession) -> Result<CalculationResult, CalculationError> {
    calculate_yarn(&YarnInputs::from_lookup(session))
}

/// Human summary of a result.
pub fn format_result(result: &CalculationResult) -> String {
    format!(
        "Total Yarn: {}g\nPacks Needed: {} packs ({}g each)\nItem Type: {}\nFormula: {}",
        result.total_quantity,
        result.pack_count,
        PACK_GRAMS,
        result.item_type,
        result.formula_trace
    )
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `None` when the pack count is not finite or does not fit a `u32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pack_count(total: f64) -> Option<u32> {
    let packs = (total / PACK_GRAMS).ceil().max(0.0);
    if packs.is_finite() && packs <= f64::from(u32::MAX) {
        Some(packs as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scarf(length: f64, yarn: f64) -> YarnInputs {
        YarnInputs {
            yarn_length: Some(yarn),
            item_type: "scarf".to_string(),
            length: Some(length),
            ..YarnInputs::default()
        }
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_to_cents(366.666_666), 366.67);
        assert_eq!(round_to_cents(225.0), 225.0);
        assert_eq!(round_to_cents(0.125), 0.13);
    }

    #[test]
    fn pack_count_uses_unrounded_total() {
        assert_eq!(pack_count(250.0), Some(5));
        assert_eq!(pack_count(250.0011), Some(6));
        assert_eq!(pack_count(0.0), Some(0));
    }

    #[test]
    fn pack_count_rejects_values_past_u32() {
        assert_eq!(pack_count(f64::from(u32::MAX) * PACK_GRAMS), Some(u32::MAX));
        assert_eq!(pack_count(f64::from(u32::MAX) * PACK_GRAMS + PACK_GRAMS), None);
        assert_eq!(pack_count(f64::INFINITY), None);
    }

    #[test]
    fn tiny_yarn_length_is_out_of_range() {
        assert_eq!(
            calculate_yarn(&scarf(300.0, 0.000_000_1)),
            Err(CalculationError::QuantityOutOfRange(
                "900000000000.00".to_string()
            ))
        );
    }

    #[test]
    fn scarf_trace() {
        let result = calculate_yarn(&scarf(150.0, 200.0)).unwrap();
        assert_eq!(result.formula_trace, "(150 × 100 × 3) ÷ 200 = 225.00");
        assert_eq!(result.total_quantity, 225.0);
        assert_eq!(result.pack_count, 5);
    }

    #[test]
    fn unknown_item_type_after_readiness() {
        let mut inputs = scarf(150.0, 200.0);
        inputs.item_type = "hat".to_string();
        assert_eq!(
            calculate_yarn(&inputs),
            Err(CalculationError::UnsupportedItemType("hat".to_string()))
        );

        inputs.yarn_length = None;
        assert!(matches!(
            calculate_yarn(&inputs),
            Err(CalculationError::NotReady(missing)) if missing.len() == 1
        ));
    }

    #[test]
    fn readiness_lists_every_missing_measurement() {
        let inputs = YarnInputs {
            yarn_length: Some(100.0),
            item_type: "dress".to_string(),
            waist: Some(80.0),
            ..YarnInputs::default()
        };
        let readiness = readiness(&inputs);
        assert!(!readiness.ready);
        assert!(!readiness.mentions(fields::WAIST));
        assert!(readiness.mentions(fields::CHEST));
        assert!(readiness.mentions(fields::HIPS));
        assert!(readiness.mentions(fields::SLEEVES_LENGTH));
    }

    #[test]
    fn negative_length_is_not_ready() {
        let readiness = readiness(&scarf(-5.0, 100.0));
        assert_eq!(
            readiness.missing_reasons(),
            vec!["length: Length is required for scarfs".to_string()]
        );
    }
}
