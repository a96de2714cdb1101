//! A single weather reading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One weather observation or forecast step.
///
/// Units follow the upstream weather provider: degrees Fahrenheit, inches of
/// precipitation per sampling interval, percent relative humidity, miles per
/// hour and percent cloud cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSample {
    /// Start of the sampling interval (UTC).
    pub timestamp: DateTime<Utc>,
    /// Air temperature (°F).
    pub temperature: f64,
    /// Precipitation over the interval (inches).
    #[serde(default)]
    pub precipitation: f64,
    /// Relative humidity (%).
    pub humidity: f64,
    /// Wind speed (mph).
    pub wind_speed: f64,
    /// Cloud cover (%).
    pub cloud_cover: f64,
}

impl WeatherSample {
    /// Creates a new sample.
    pub fn new(
        timestamp: DateTime<Utc>,
        temperature: f64,
        precipitation: f64,
        humidity: f64,
        wind_speed: f64,
        cloud_cover: f64,
    ) -> Self {
        Self {
            timestamp,
            temperature,
            precipitation,
            humidity,
            wind_speed,
            cloud_cover,
        }
    }

    /// Returns `true` when precipitation exceeds `threshold`.
    pub fn is_wet(&self, threshold: f64) -> bool {
        self.precipitation > threshold
    }

    /// Returns `true` at or below the freezing point.
    pub fn is_freezing(&self) -> bool {
        self.temperature <= crate::FREEZING_F
    }
}
