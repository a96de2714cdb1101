//! Solar elevation and azimuth from position and time.
//!
//! Uses the NOAA general solar position approximation (fractional-year
//! Fourier series for the equation of time and declination). Accuracy is
//! well under a degree, which is far finer than the 15-minute integration
//! step it feeds.

use std::f64::consts::PI;

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::error::SunError;

/// Apparent position of the sun in the local sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Degrees above the horizon (negative at night).
    pub elevation_deg: f64,
    /// Degrees clockwise from true north, in `[0, 360)`.
    pub azimuth_deg: f64,
}

/// Computes the sun's elevation and azimuth.
///
/// # Errors
///
/// Returns [`SunError::InvalidCoordinate`] when latitude is outside
/// `[-90, 90]`, longitude outside `[-180, 180]`, or either is non-finite.
pub fn solar_position(lat: f64, lon: f64, at: DateTime<Utc>) -> Result<SolarPosition, SunError> {
    if !lat.is_finite() || !lon.is_finite() || lat.abs() > 90.0 || lon.abs() > 180.0 {
        return Err(SunError::InvalidCoordinate { lat, lon });
    }

    let hour = at.hour() as f64 + at.minute() as f64 / 60.0 + at.second() as f64 / 3600.0;
    let days_in_year = if at.date_naive().leap_year() { 366.0 } else { 365.0 };
    let gamma = 2.0 * PI / days_in_year * (at.ordinal0() as f64 + (hour - 12.0) / 24.0);

    // Equation of time (minutes) and declination (radians).
    let eqtime = 229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin());
    let decl = 0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin();

    let true_solar_minutes = hour * 60.0 + eqtime + 4.0 * lon;
    let hour_angle = (true_solar_minutes / 4.0 - 180.0).to_radians();

    let phi = lat.to_radians();
    let cos_zenith =
        (phi.sin() * decl.sin() + phi.cos() * decl.cos() * hour_angle.cos()).clamp(-1.0, 1.0);
    let elevation_deg = 90.0 - cos_zenith.acos().to_degrees();

    // Azimuth measured from south (west positive), then rotated to north.
    let from_south = hour_angle
        .sin()
        .atan2(hour_angle.cos() * phi.sin() - decl.tan() * phi.cos());
    let azimuth_deg = (from_south.to_degrees() + 180.0).rem_euclid(360.0);

    Ok(SolarPosition {
        elevation_deg,
        azimuth_deg,
    })
}

/// Smallest absolute difference between two compass bearings, in degrees.
pub(crate) fn bearing_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}
