//! Series-level validation.

use crate::error::WeatherError;
use crate::sample::WeatherSample;

/// Checks the structural invariants of a weather series.
///
/// A valid series is non-empty, strictly ascending in time, contains only
/// finite values and has no negative precipitation. Gaps between samples
/// are allowed.
///
/// # Errors
///
/// Returns the first violation found, scanning from the oldest sample.
pub fn validate_series(samples: &[WeatherSample]) -> Result<(), WeatherError> {
    if samples.is_empty() {
        return Err(WeatherError::EmptySeries);
    }

    for (index, s) in samples.iter().enumerate() {
        for (value, field) in [
            (s.temperature, "temperature"),
            (s.precipitation, "precipitation"),
            (s.humidity, "humidity"),
            (s.wind_speed, "wind_speed"),
            (s.cloud_cover, "cloud_cover"),
        ] {
            if !value.is_finite() {
                return Err(WeatherError::NonFinite { index, field });
            }
        }
        if s.precipitation < 0.0 {
            return Err(WeatherError::NegativePrecipitation {
                index,
                value: s.precipitation,
            });
        }
        if index > 0 && s.timestamp <= samples[index - 1].timestamp {
            return Err(WeatherError::OutOfOrder { index });
        }
    }

    Ok(())
}

/// Typical spacing between consecutive samples, in hours.
///
/// Uses the median spacing so that a few gaps do not distort it. Returns
/// 1.0 when the series has fewer than two samples.
pub fn sampling_interval_hours(samples: &[WeatherSample]) -> f64 {
    let mut spacings: Vec<f64> = samples
        .windows(2)
        .map(|w| (w[1].timestamp - w[0].timestamp).num_seconds() as f64 / 3600.0)
        .filter(|h| *h > 0.0)
        .collect();
    if spacings.is_empty() {
        return 1.0;
    }
    spacings.sort_by(|a, b| a.total_cmp(b));
    spacings[spacings.len() / 2]
}
