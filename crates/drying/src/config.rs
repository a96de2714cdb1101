//! Configuration for the location drying engine.

use crate::error::DryingError;

/// Tunable thresholds for the location drying engine.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use rockdry_drying::DryingConfig;
///
/// let config = DryingConfig::new()
///     .with_snow_depth_threshold_in(1.0)
///     .with_ice_lookback_hours(24.0);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct DryingConfig {
    wet_threshold_in: f64,
    snow_depth_threshold_in: f64,
    ice_lookback_hours: f64,
    seepage_multiplier: f64,
    wet_sensitive_multiplier: f64,
    dry_cutoff_hours: f64,
    trend_window: usize,
}

impl DryingConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `wet_threshold_in = 0.01`, `snow_depth_threshold_in = 0.5`,
    /// `ice_lookback_hours = 48`, `seepage_multiplier = 1.4`,
    /// `wet_sensitive_multiplier = 1.5`, `dry_cutoff_hours = 0.5`,
    /// `trend_window = 24` samples.
    pub fn new() -> Self {
        Self {
            wet_threshold_in: rockdry_weather::DEFAULT_WET_THRESHOLD_IN,
            snow_depth_threshold_in: 0.5,
            ice_lookback_hours: 48.0,
            seepage_multiplier: 1.4,
            wet_sensitive_multiplier: 1.5,
            dry_cutoff_hours: 0.5,
            trend_window: 24,
        }
    }

    /// Sets the precipitation above which a sample counts as wet.
    pub fn with_wet_threshold_in(mut self, inches: f64) -> Self {
        self.wet_threshold_in = inches;
        self
    }

    /// Sets the snow depth above which the snow state applies.
    pub fn with_snow_depth_threshold_in(mut self, inches: f64) -> Self {
        self.snow_depth_threshold_in = inches;
        self
    }

    /// Sets how far back precipitation counts toward ice risk.
    pub fn with_ice_lookback_hours(mut self, hours: f64) -> Self {
        self.ice_lookback_hours = hours;
        self
    }

    /// Sets the drying-time multiplier for locations with seepage.
    pub fn with_seepage_multiplier(mut self, factor: f64) -> Self {
        self.seepage_multiplier = factor;
        self
    }

    /// Sets the drying-time multiplier for wet-sensitive rock.
    pub fn with_wet_sensitive_multiplier(mut self, factor: f64) -> Self {
        self.wet_sensitive_multiplier = factor;
        self
    }

    /// Sets the remaining time below which rock is reported dry.
    pub fn with_dry_cutoff_hours(mut self, hours: f64) -> Self {
        self.dry_cutoff_hours = hours;
        self
    }

    /// Sets the number of recent samples used for trend and spread.
    pub fn with_trend_window(mut self, samples: usize) -> Self {
        self.trend_window = samples;
        self
    }

    // --- Accessors ---

    /// Returns the wet-sample precipitation threshold (inches).
    pub fn wet_threshold_in(&self) -> f64 {
        self.wet_threshold_in
    }

    /// Returns the snow-depth threshold (inches).
    pub fn snow_depth_threshold_in(&self) -> f64 {
        self.snow_depth_threshold_in
    }

    /// Returns the ice-risk precipitation lookback (hours).
    pub fn ice_lookback_hours(&self) -> f64 {
        self.ice_lookback_hours
    }

    /// Returns the seepage multiplier.
    pub fn seepage_multiplier(&self) -> f64 {
        self.seepage_multiplier
    }

    /// Returns the wet-sensitive multiplier.
    pub fn wet_sensitive_multiplier(&self) -> f64 {
        self.wet_sensitive_multiplier
    }

    /// Returns the dry cutoff (hours).
    pub fn dry_cutoff_hours(&self) -> f64 {
        self.dry_cutoff_hours
    }

    /// Returns the trend window (samples).
    pub fn trend_window(&self) -> usize {
        self.trend_window
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), DryingError> {
        for (value, name) in [
            (self.wet_threshold_in, "wet_threshold_in"),
            (self.snow_depth_threshold_in, "snow_depth_threshold_in"),
            (self.dry_cutoff_hours, "dry_cutoff_hours"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DryingError::InvalidConfig {
                    reason: format!("{name} must be finite and >= 0, got {value}"),
                });
            }
        }
        for (value, name) in [
            (self.ice_lookback_hours, "ice_lookback_hours"),
            (self.seepage_multiplier, "seepage_multiplier"),
            (self.wet_sensitive_multiplier, "wet_sensitive_multiplier"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DryingError::InvalidConfig {
                    reason: format!("{name} must be finite and > 0, got {value}"),
                });
            }
        }
        if self.trend_window < 3 {
            return Err(DryingError::InvalidConfig {
                reason: format!("trend_window must be >= 3, got {}", self.trend_window),
            });
        }
        Ok(())
    }
}

impl Default for DryingConfig {
    fn default() -> Self {
        Self::new()
    }
}
