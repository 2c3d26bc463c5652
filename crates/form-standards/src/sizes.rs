#![deny(unsafe_code)]

use std::collections::BTreeMap;

use form_model::{MeasurementType, Size, SizeRange, SizeRangeTable};

use crate::error::StandardsError;

const SIZE_RANGES: &str = include_str!("../data/size_ranges.toml");

type RawTable = BTreeMap<String, BTreeMap<String, SizeRange>>;

/// The built-in size range table.
pub fn load_size_ranges() -> Result<SizeRangeTable, StandardsError> {
    parse_size_ranges(SIZE_RANGES, "size_ranges.toml")
}

/// Parse a size table keyed by size, then measurement.
pub fn parse_size_ranges(source: &str, origin: &str) -> Result<SizeRangeTable, StandardsError> {
    let raw: RawTable = toml::from_str(source).map_err(|source| StandardsError::Toml {
        origin: origin.to_string(),
        source,
    })?;

    let mut table = SizeRangeTable::new();
    for (size_name, measurements) in raw {
        let size = size_name
            .parse::<Size>()
            .map_err(|_| StandardsError::UnknownSize {
                size: size_name.clone(),
            })?;
        for (measurement_name, range) in measurements {
            let measurement = measurement_name.parse::<MeasurementType>().map_err(|_| {
                StandardsError::UnknownMeasurement {
                    size: size_name.clone(),
                    measurement: measurement_name.clone(),
                }
            })?;
            if range.min > range.max {
                return Err(StandardsError::InvertedRange {
                    size: size_name,
                    measurement: measurement_name,
                    min: range.min,
                    max: range.max,
                });
            }
            table.insert(size, measurement, range);
        }
    }
    Ok(table)
}
