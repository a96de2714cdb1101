//! Direct-sun hours on a single face by integrating the sun path.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::aspect::Aspect;
use crate::error::SunError;
use crate::position::{bearing_difference, solar_position};

/// Parameters for sun-path integration.
///
/// # Example
///
/// ```
/// use rockdry_sun::ExposureConfig;
///
/// let config = ExposureConfig::new().with_step_minutes(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ExposureConfig {
    step_minutes: u32,
    min_elevation_deg: f64,
    max_incidence_deg: f64,
    tree_shade_fraction: f64,
}

impl ExposureConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: 15-minute steps, sun must be 5° above the horizon and
    /// within 90° of the face's bearing, full canopy blocks 70% of sun.
    pub fn new() -> Self {
        Self {
            step_minutes: 15,
            min_elevation_deg: 5.0,
            max_incidence_deg: 90.0,
            tree_shade_fraction: 0.7,
        }
    }

    /// Sets the integration step.
    pub fn with_step_minutes(mut self, minutes: u32) -> Self {
        self.step_minutes = minutes;
        self
    }

    /// Sets the minimum solar elevation that counts as direct sun.
    pub fn with_min_elevation_deg(mut self, deg: f64) -> Self {
        self.min_elevation_deg = deg;
        self
    }

    /// Sets the widest sun-to-face bearing difference that counts.
    pub fn with_max_incidence_deg(mut self, deg: f64) -> Self {
        self.max_incidence_deg = deg;
        self
    }

    /// Sets the share of sun blocked by 100% canopy.
    pub fn with_tree_shade_fraction(mut self, fraction: f64) -> Self {
        self.tree_shade_fraction = fraction;
        self
    }

    /// Returns the integration step in minutes.
    pub fn step_minutes(&self) -> u32 {
        self.step_minutes
    }

    /// Returns the minimum solar elevation.
    pub fn min_elevation_deg(&self) -> f64 {
        self.min_elevation_deg
    }

    /// Returns the maximum sun-to-face bearing difference.
    pub fn max_incidence_deg(&self) -> f64 {
        self.max_incidence_deg
    }

    /// Returns the share of sun blocked by full canopy.
    pub fn tree_shade_fraction(&self) -> f64 {
        self.tree_shade_fraction
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), SunError> {
        if self.step_minutes == 0 || self.step_minutes > 60 {
            return Err(SunError::InvalidConfig {
                reason: format!("step_minutes must be in 1..=60, got {}", self.step_minutes),
            });
        }
        if !self.min_elevation_deg.is_finite() || !(-10.0..=45.0).contains(&self.min_elevation_deg)
        {
            return Err(SunError::InvalidConfig {
                reason: format!(
                    "min_elevation_deg must be in [-10, 45], got {}",
                    self.min_elevation_deg
                ),
            });
        }
        if !self.max_incidence_deg.is_finite()
            || self.max_incidence_deg <= 0.0
            || self.max_incidence_deg > 180.0
        {
            return Err(SunError::InvalidConfig {
                reason: format!(
                    "max_incidence_deg must be in (0, 180], got {}",
                    self.max_incidence_deg
                ),
            });
        }
        if !self.tree_shade_fraction.is_finite() || !(0.0..=1.0).contains(&self.tree_shade_fraction)
        {
            return Err(SunError::InvalidConfig {
                reason: format!(
                    "tree_shade_fraction must be in [0, 1], got {}",
                    self.tree_shade_fraction
                ),
            });
        }
        Ok(())
    }
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Hours of direct sun on a face over `days` days starting at `start`.
///
/// A step counts when the sun is above the configured elevation and its
/// bearing is within the configured incidence of the face's aspect. The
/// total is reduced by canopy shade: `hours × (1 − shade × tree/100)`.
///
/// # Errors
///
/// Returns [`SunError::InvalidCoordinate`] for an invalid position and
/// [`SunError::InvalidConfig`] for an invalid configuration.
#[tracing::instrument(skip(config), level = "debug")]
pub fn direct_sun_hours(
    lat: f64,
    lon: f64,
    aspect: Aspect,
    start: DateTime<Utc>,
    days: u32,
    tree_coverage_percent: f64,
    config: &ExposureConfig,
) -> Result<f64, SunError> {
    config.validate()?;

    let step = Duration::minutes(config.step_minutes as i64);
    let step_hours = config.step_minutes as f64 / 60.0;
    let n_steps = days as i64 * 24 * 60 / config.step_minutes as i64;
    let face = aspect.azimuth_deg();

    let mut sunny_steps = 0usize;
    let mut at = start;
    for _ in 0..n_steps {
        let sun = solar_position(lat, lon, at)?;
        if sun.elevation_deg > config.min_elevation_deg
            && bearing_difference(sun.azimuth_deg, face) < config.max_incidence_deg
        {
            sunny_steps += 1;
        }
        at += step;
    }

    let open_sky = sunny_steps as f64 * step_hours;
    let shade = config.tree_shade_fraction * tree_coverage_percent.clamp(0.0, 100.0) / 100.0;
    let hours = open_sky * (1.0 - shade);
    debug!(open_sky, hours, "integrated direct sun");
    Ok(hours)
}
