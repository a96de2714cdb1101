//! Error types for the rockdry-weather crate.

/// Error type for all fallible operations in the rockdry-weather crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WeatherError {
    /// Returned when a weather series is empty.
    #[error("weather series is empty")]
    EmptySeries,

    /// Returned when a sample field is NaN or infinite.
    #[error("non-finite {field} at index {index}")]
    NonFinite {
        /// Index of the offending sample.
        index: usize,
        /// Name of the offending field.
        field: &'static str,
    },

    /// Returned when precipitation is negative.
    #[error("negative precipitation at index {index}: {value}")]
    NegativePrecipitation {
        /// Index of the offending sample.
        index: usize,
        /// The negative value.
        value: f64,
    },

    /// Returned when timestamps are not strictly ascending.
    #[error("timestamps out of order at index {index}")]
    OutOfOrder {
        /// Index of the first sample that is not after its predecessor.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_series() {
        let e = WeatherError::EmptySeries;
        assert_eq!(e.to_string(), "weather series is empty");
    }

    #[test]
    fn error_non_finite() {
        let e = WeatherError::NonFinite {
            index: 3,
            field: "temperature",
        };
        assert_eq!(e.to_string(), "non-finite temperature at index 3");
    }

    #[test]
    fn error_negative_precipitation() {
        let e = WeatherError::NegativePrecipitation {
            index: 7,
            value: -0.5,
        };
        assert_eq!(e.to_string(), "negative precipitation at index 7: -0.5");
    }

    #[test]
    fn error_out_of_order() {
        let e = WeatherError::OutOfOrder { index: 12 };
        assert_eq!(e.to_string(), "timestamps out of order at index 12");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<WeatherError>();
    }
}
