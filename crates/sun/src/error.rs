//! Error types for the rockdry-sun crate.

/// Error type for all fallible operations in the rockdry-sun crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SunError {
    /// Returned when a coordinate is non-finite or out of range.
    #[error("invalid coordinate: lat={lat}, lon={lon}")]
    InvalidCoordinate {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },

    /// Returned when an aspect string is not a compass point.
    #[error("unknown aspect: {value:?}")]
    UnknownAspect {
        /// The unparsed value.
        value: String,
    },

    /// Returned when a sun-exposure profile is inconsistent.
    #[error("invalid sun exposure profile: {reason}")]
    InvalidProfile {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an exposure configuration parameter is invalid.
    #[error("invalid exposure configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_coordinate() {
        let e = SunError::InvalidCoordinate {
            lat: 91.0,
            lon: 10.0,
        };
        assert_eq!(e.to_string(), "invalid coordinate: lat=91, lon=10");
    }

    #[test]
    fn error_unknown_aspect() {
        let e = SunError::UnknownAspect {
            value: "up".to_string(),
        };
        assert_eq!(e.to_string(), "unknown aspect: \"up\"");
    }

    #[test]
    fn error_invalid_profile() {
        let e = SunError::InvalidProfile {
            reason: "aspects sum to 140".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid sun exposure profile: aspects sum to 140"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<SunError>();
    }
}
