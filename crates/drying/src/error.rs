//! Error types for the rockdry-drying crate.

use rockdry_weather::WeatherError;

/// Error type for all fallible operations in the rockdry-drying crate.
///
/// Only structurally invalid input ends up here. Missing reference data
/// (rock types, sun profile) degrades the result instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DryingError {
    /// Wrapped error from weather series validation.
    #[error(transparent)]
    Weather(#[from] WeatherError),

    /// Returned when a rock type has impossible physical properties.
    #[error("invalid rock type {name:?}: {reason}")]
    InvalidRockType {
        /// Rock type name.
        name: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a snow depth is negative or non-finite.
    #[error("invalid snow depth: {value}")]
    InvalidSnowDepth {
        /// The invalid depth in inches.
        value: f64,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
