use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{MeasurementType, Size};

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// `(size, measurement) -> range` lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SizeRangeTable {
    ranges: BTreeMap<Size, BTreeMap<MeasurementType, SizeRange>>,
}

impl SizeRangeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, size: Size, measurement: MeasurementType, range: SizeRange) {
        self.ranges
            .entry(size)
            .or_default()
            .insert(measurement, range);
    }

    pub fn get(&self, size: Size, measurement: MeasurementType) -> Option<SizeRange> {
        self.ranges.get(&size)?.get(&measurement).copied()
    }

    /// Lookup by the raw value of a size field. Empty or unknown sizes have
    /// no range.
    pub fn lookup(&self, size: &str, measurement: MeasurementType) -> Option<SizeRange> {
        let size = size.parse::<Size>().ok()?;
        self.get(size, measurement)
    }

    pub fn sizes(&self) -> impl Iterator<Item = Size> + '_ {
        self.ranges.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
