//! Error types for box geometry generation.
//!
//! This module provides structured error types for parameter validation
//! and geometric degeneracy detection.

use thiserror::Error;

/// Errors raised while resolving raw options into a working box spec.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A dimension or thickness is zero or negative.
    #[error("Parameter '{name}' must be positive: {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A tab count resolved below the minimum of one tab per edge.
    #[error("Tab count for the {axis} axis must resolve to at least 1: {count}")]
    TabCount { axis: &'static str, count: f64 },

    /// External sizing left no interior after subtracting the walls.
    #[error("External {axis} dimension {value} leaves no interior for thickness {thickness}")]
    NoInterior {
        axis: &'static str,
        value: f64,
        thickness: f64,
    },

    /// The kerf is negative.
    #[error("Kerf must not be negative: {0}")]
    NegativeKerf(f64),
}

/// Errors raised when a validated spec still cannot produce usable geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Gap corrections consume an entire tab segment on this axis.
    #[error("Edge on the {axis} axis leaves no material for a tab: segment {segment:.3} after gap correction {correction:.3}")]
    ZeroLengthRun {
        axis: &'static str,
        segment: f64,
        correction: f64,
    },

    /// The material is too thin to carry a dimple bump.
    #[error("Material thickness {thickness} is too small for a dimple of radius {radius}")]
    DimpleTooLarge { thickness: f64, radius: f64 },
}

/// Top-level error type for box generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoxError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Result type alias for box generation.
pub type Result<T> = std::result::Result<T, BoxError>;

/// Result type alias for parameter resolution.
pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;
