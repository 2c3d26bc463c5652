//! Type-safe enumerations for the yarn calculator.
//!
//! Form values are always strings; these enums are what the calculation
//! engine and the size table work with once a value has been accepted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Kind of garment the yarn estimate is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Scarf,
    Sweater,
    Dress,
}

impl ItemType {
    pub const ALL: [ItemType; 3] = [ItemType::Scarf, ItemType::Sweater, ItemType::Dress];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Scarf => "scarf",
            ItemType::Sweater => "sweater",
            ItemType::Dress => "dress",
        }
    }

    /// Whether the item is fitted to body measurements.
    pub fn uses_body_measurements(&self) -> bool {
        matches!(self, ItemType::Sweater | ItemType::Dress)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "scarf" => Ok(ItemType::Scarf),
            "sweater" => Ok(ItemType::Sweater),
            "dress" => Ok(ItemType::Dress),
            _ => Err(ParseEnumError::new("item type", s)),
        }
    }
}

/// Sleeve length of a dress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleevesLength {
    Short,
    Long,
}

impl SleevesLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            SleevesLength::Short => "short",
            SleevesLength::Long => "long",
        }
    }
}

impl fmt::Display for SleevesLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SleevesLength {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "short" => Ok(SleevesLength::Short),
            "long" => Ok(SleevesLength::Long),
            _ => Err(ParseEnumError::new("sleeves length", s)),
        }
    }
}

/// Garment size. Ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
    #[serde(rename = "XL")]
    Xl,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::S, Size::M, Size::L, Size::Xl];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Size {
    type Err = ParseEnumError;

    /// Case-insensitive, so `"xl"` and `"XL"` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Size::S),
            "M" => Ok(Size::M),
            "L" => Ok(Size::L),
            "XL" => Ok(Size::Xl),
            _ => Err(ParseEnumError::new("size", s)),
        }
    }
}

/// Body measurement whose valid range depends on the selected size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementType {
    Waist,
    Chest,
    Hips,
}

impl MeasurementType {
    pub const ALL: [MeasurementType; 3] = [
        MeasurementType::Waist,
        MeasurementType::Chest,
        MeasurementType::Hips,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementType::Waist => "waist",
            MeasurementType::Chest => "chest",
            MeasurementType::Hips => "hips",
        }
    }
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MeasurementType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "waist" => Ok(MeasurementType::Waist),
            "chest" => Ok(MeasurementType::Chest),
            "hips" => Ok(MeasurementType::Hips),
            _ => Err(ParseEnumError::new("measurement type", s)),
        }
    }
}
