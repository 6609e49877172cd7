//! # Boxcut Core
//!
//! Error types and unit handling shared by the boxcut crates.

pub mod error;
pub mod units;

pub use error::{BoxError, ConfigResult, ConfigurationError, GeometryError, Result};
pub use units::{format_length, get_unit_label, parse_length, MeasurementSystem};
