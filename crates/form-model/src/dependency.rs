//! Declarative dependencies between driver and target fields.
//!
//! A [`DependencyRule`] maps the current value of one driver field to a list
//! of [`Effect`]s on one target field. Effects are written in the same
//! `name:argument` notation as validation rules (`set:long`, `disable`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::MeasurementType;

/// Error produced while parsing an effect string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectParseError {
    #[error("unknown effect `{0}`")]
    Unknown(String),
    #[error("effect `{0}` requires an argument")]
    MissingArgument(String),
}

/// What a dependency does to its target field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Effect {
    /// Overwrite the target's value.
    Set(String),
    /// Empty the target's value.
    Clear,
    /// Leave the target untouched.
    Noop,
    Disable,
    Enable,
    /// Override the label shown for the target.
    Label(String),
    /// Override the placeholder shown for the target.
    Placeholder(String),
}

impl FromStr for Effect {
    type Err = EffectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg)),
            None => (s.trim(), None),
        };
        let argument = || {
            arg.map(ToString::to_string)
                .ok_or_else(|| EffectParseError::MissingArgument(name.to_string()))
        };
        match name {
            "set" => Ok(Effect::Set(argument()?)),
            "clear" => Ok(Effect::Clear),
            "noop" => Ok(Effect::Noop),
            "disable" => Ok(Effect::Disable),
            "enable" => Ok(Effect::Enable),
            "label" => Ok(Effect::Label(argument()?)),
            "placeholder" => Ok(Effect::Placeholder(argument()?)),
            _ => Err(EffectParseError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for Effect {
    type Error = EffectParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Effect> for String {
    fn from(effect: Effect) -> Self {
        effect.to_string()
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Set(value) => write!(f, "set:{value}"),
            Effect::Clear => f.write_str("clear"),
            Effect::Noop => f.write_str("noop"),
            Effect::Disable => f.write_str("disable"),
            Effect::Enable => f.write_str("enable"),
            Effect::Label(label) => write!(f, "label:{label}"),
            Effect::Placeholder(text) => write!(f, "placeholder:{text}"),
        }
    }
}

/// Effects applied when the driver holds a particular value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyCase {
    pub when: String,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

/// `driver` value -> effects on `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRule {
    pub driver: String,
    pub target: String,
    #[serde(default)]
    pub cases: Vec<DependencyCase>,
    /// Effects when no case matches the driver value (including empty).
    #[serde(default)]
    pub otherwise: Vec<Effect>,
}

impl DependencyRule {
    /// Effects that apply for the given driver value.
    pub fn effects_for(&self, driver_value: &str) -> &[Effect] {
        self.cases
            .iter()
            .find(|case| case.when == driver_value)
            .map_or(self.otherwise.as_slice(), |case| case.effects.as_slice())
    }
}

/// Ties a measurement field to the size field that selects its valid range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementBinding {
    pub field: String,
    pub measurement: MeasurementType,
    pub size_field: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> DependencyRule {
        DependencyRule {
            driver: "itemType".to_string(),
            target: "sleevesLength".to_string(),
            cases: vec![
                DependencyCase {
                    when: "dress".to_string(),
                    effects: vec![Effect::Enable, Effect::Noop],
                },
                DependencyCase {
                    when: "sweater".to_string(),
                    effects: vec![Effect::Disable, Effect::Set("long".to_string())],
                },
            ],
            otherwise: vec![Effect::Disable, Effect::Clear],
        }
    }

    #[test]
    fn effects_for_matching_case() {
        let rule = rule();
        assert_eq!(
            rule.effects_for("sweater"),
            &[Effect::Disable, Effect::Set("long".to_string())]
        );
    }

    #[test]
    fn effects_for_falls_back_to_otherwise() {
        let rule = rule();
        assert_eq!(rule.effects_for("scarf"), &[Effect::Disable, Effect::Clear]);
        assert_eq!(rule.effects_for(""), &[Effect::Disable, Effect::Clear]);
    }

    #[test]
    fn parses_effect_notation() {
        assert_eq!("set:long".parse::<Effect>().unwrap(), Effect::Set("long".into()));
        assert_eq!(
            "label:Choose Dress Color (Not Available)".parse::<Effect>().unwrap(),
            Effect::Label("Choose Dress Color (Not Available)".into())
        );
        assert_eq!("set:".parse::<Effect>().unwrap(), Effect::Set(String::new()));
        assert_eq!(
            "set".parse::<Effect>(),
            Err(EffectParseError::MissingArgument("set".into()))
        );
        assert!(matches!(
            "hide".parse::<Effect>(),
            Err(EffectParseError::Unknown(_))
        ));
    }
}
