#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown form `{name}` (expected one of: {expected})")]
    UnknownForm { name: String, expected: String },

    #[error("form {form}: field name must not be empty")]
    EmptyFieldName { form: String },

    #[error("form {form}: duplicate field `{field}`")]
    DuplicateField { form: String, field: String },

    #[error("form {form}: field `{field}` is nested under field `{parent}`")]
    ConflictingPath {
        form: String,
        field: String,
        parent: String,
    },

    #[error("form {form}: {context} refers to unknown field `{field}`")]
    UnknownField {
        form: String,
        field: String,
        context: String,
    },

    #[error("size table: unknown size `{size}`")]
    UnknownSize { size: String },

    #[error("size table: unknown measurement `{measurement}` for size {size}")]
    UnknownMeasurement { size: String, measurement: String },

    #[error("size table: size {size} {measurement} has min {min} above max {max}")]
    InvertedRange {
        size: String,
        measurement: String,
        min: f64,
        max: f64,
    },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unknown_field(form: &str, field: &str, context: impl Into<String>) -> Self {
        Self::UnknownField {
            form: form.to_string(),
            field: field.to_string(),
            context: context.into(),
        }
    }
}
