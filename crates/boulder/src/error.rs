//! Error types for the rockdry-boulder crate.

use rockdry_weather::WeatherError;

/// Error type for all fallible operations in the rockdry-boulder crate.
///
/// Missing or unusable boulder metadata never produces an error; it lowers
/// the confidence score instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BoulderError {
    /// Returned when a forecast series is malformed.
    #[error("invalid forecast: {0}")]
    InvalidForecast(#[from] WeatherError),

    /// Returned when a refinement or forecast parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_forecast() {
        let e = BoulderError::from(WeatherError::OutOfOrder { index: 3 });
        assert!(e.to_string().starts_with("invalid forecast: "));
    }

    #[test]
    fn display_invalid_config() {
        let e = BoulderError::InvalidConfig {
            reason: "window_days must be >= 1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: window_days must be >= 1"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<BoulderError>();
    }
}
