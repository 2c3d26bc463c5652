#![deny(unsafe_code)]

//! Built-in form definitions and the garment size range table.
//!
//! Definitions are TOML resources compiled into the crate. User-supplied
//! definition files go through the same checks as the built-in ones.

pub mod error;
pub mod forms;
pub mod sizes;

pub use crate::error::StandardsError;
pub use crate::forms::{FormVariant, load_form, load_form_file, parse_form};
pub use crate::sizes::{load_size_ranges, parse_size_ranges};
