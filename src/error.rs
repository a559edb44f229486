//! Error types.
//!
//! Only domain violations are errors. Singular geometry (circular or
//! equatorial orbits) is advertised through [`crate::Singularities`] instead.

use thiserror::Error;

pub type ElementsResult<T> = Result<T, ElementsError>;

/// A value outside the elliptic-orbit domain.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ElementsError {
    #[error("semi-major axis must be positive, got {0}")]
    SemiMajorAxis(f64),

    #[error("eccentricity must be in [0, 1), got {0}")]
    Eccentricity(f64),

    #[error("inclination must be in [0, pi] radians, got {0}")]
    Inclination(f64),

    #[error("{field} is not finite: {value}")]
    NotFinite { field: &'static str, value: f64 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid range for {parameter}: [{min}, {max}]")]
    Range {
        parameter: &'static str,
        min: f64,
        max: f64,
    },

    #[error("invalid initial elements: {0}")]
    Elements(#[from] ElementsError),

    #[error("{0}")]
    Invalid(String),
}
