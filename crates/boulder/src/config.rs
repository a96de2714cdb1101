//! Configuration for boulder refinement and forecast replay.

use rockdry_sun::ExposureConfig;

use crate::error::BoulderError;

/// Parameters for per-boulder refinement.
///
/// # Example
///
/// ```
/// use rockdry_boulder::RefineConfig;
///
/// let config = RefineConfig::new().with_window_days(3);
/// assert_eq!(config.window_days(), 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct RefineConfig {
    window_days: u32,
    default_tree_coverage_percent: f64,
    default_daily_sun_hours: f64,
    exposure: ExposureConfig,
}

impl RefineConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: a 6-day sun window, 30% tree coverage and 5 sun hours per
    /// day when nothing better is known, and the default [`ExposureConfig`].
    pub fn new() -> Self {
        Self {
            window_days: 6,
            default_tree_coverage_percent: 30.0,
            default_daily_sun_hours: 5.0,
            exposure: ExposureConfig::new(),
        }
    }

    /// Sets the number of days sun hours are integrated over.
    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    /// Sets the tree coverage assumed when nothing is known.
    pub fn with_default_tree_coverage_percent(mut self, percent: f64) -> Self {
        self.default_tree_coverage_percent = percent;
        self
    }

    /// Sets the daily sun hours assumed when the aspect is unknown.
    pub fn with_default_daily_sun_hours(mut self, hours: f64) -> Self {
        self.default_daily_sun_hours = hours;
        self
    }

    /// Sets the astronomical sun-hour integration parameters.
    pub fn with_exposure(mut self, exposure: ExposureConfig) -> Self {
        self.exposure = exposure;
        self
    }

    // --- Accessors ---

    /// Returns the sun window in days.
    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Returns the fallback tree coverage (%).
    pub fn default_tree_coverage_percent(&self) -> f64 {
        self.default_tree_coverage_percent
    }

    /// Returns the fallback daily sun hours.
    pub fn default_daily_sun_hours(&self) -> f64 {
        self.default_daily_sun_hours
    }

    /// Returns the astronomical integration parameters.
    pub fn exposure(&self) -> &ExposureConfig {
        &self.exposure
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), BoulderError> {
        if self.window_days == 0 {
            return Err(BoulderError::InvalidConfig {
                reason: "window_days must be >= 1".to_string(),
            });
        }
        if !self.default_tree_coverage_percent.is_finite()
            || !(0.0..=100.0).contains(&self.default_tree_coverage_percent)
        {
            return Err(BoulderError::InvalidConfig {
                reason: format!(
                    "default_tree_coverage_percent must be in [0, 100], got {}",
                    self.default_tree_coverage_percent
                ),
            });
        }
        if !self.default_daily_sun_hours.is_finite()
            || !(0.0..=24.0).contains(&self.default_daily_sun_hours)
        {
            return Err(BoulderError::InvalidConfig {
                reason: format!(
                    "default_daily_sun_hours must be in [0, 24], got {}",
                    self.default_daily_sun_hours
                ),
            });
        }
        self.exposure
            .validate()
            .map_err(|e| BoulderError::InvalidConfig {
                reason: e.to_string(),
            })
    }
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters for replaying a weather forecast.
#[derive(Clone, Debug)]
pub struct ForecastConfig {
    wet_threshold_in: f64,
    heavy_rain_in: f64,
    hours_per_heavy_inch: f64,
    min_period_hours: f64,
}

impl ForecastConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: an hour is wet at 0.01in, rain beyond 0.5in adds 12 hours
    /// of drying per inch, and periods shorter than one hour are dropped.
    pub fn new() -> Self {
        Self {
            wet_threshold_in: rockdry_weather::DEFAULT_WET_THRESHOLD_IN,
            heavy_rain_in: 0.5,
            hours_per_heavy_inch: 12.0,
            min_period_hours: 1.0,
        }
    }

    /// Sets the precipitation at or above which an hour turns the rock wet.
    pub fn with_wet_threshold_in(mut self, inches: f64) -> Self {
        self.wet_threshold_in = inches;
        self
    }

    /// Sets the accumulated rain beyond which drying takes longer.
    pub fn with_heavy_rain_in(mut self, inches: f64) -> Self {
        self.heavy_rain_in = inches;
        self
    }

    /// Sets the extra drying hours per inch of heavy rain.
    pub fn with_hours_per_heavy_inch(mut self, hours: f64) -> Self {
        self.hours_per_heavy_inch = hours;
        self
    }

    /// Sets the shortest period kept in the output.
    pub fn with_min_period_hours(mut self, hours: f64) -> Self {
        self.min_period_hours = hours;
        self
    }

    // --- Accessors ---

    /// Returns the wet-hour threshold (inches).
    pub fn wet_threshold_in(&self) -> f64 {
        self.wet_threshold_in
    }

    /// Returns the heavy-rain threshold (inches).
    pub fn heavy_rain_in(&self) -> f64 {
        self.heavy_rain_in
    }

    /// Returns the extra drying hours per heavy inch.
    pub fn hours_per_heavy_inch(&self) -> f64 {
        self.hours_per_heavy_inch
    }

    /// Returns the shortest kept period (hours).
    pub fn min_period_hours(&self) -> f64 {
        self.min_period_hours
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), BoulderError> {
        if !self.wet_threshold_in.is_finite() || self.wet_threshold_in <= 0.0 {
            return Err(BoulderError::InvalidConfig {
                reason: format!(
                    "wet_threshold_in must be finite and > 0, got {}",
                    self.wet_threshold_in
                ),
            });
        }
        for (value, name) in [
            (self.heavy_rain_in, "heavy_rain_in"),
            (self.hours_per_heavy_inch, "hours_per_heavy_inch"),
            (self.min_period_hours, "min_period_hours"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BoulderError::InvalidConfig {
                    reason: format!("{name} must be finite and >= 0, got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::new()
    }
}
