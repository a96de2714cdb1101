//! Hourly drying power and time-weighted drying progress.
//!
//! Drying power is a dimensionless multiplier where 1.0 is a baseline hour.
//! A warm, breezy, dry, sunny hour counts for more than one baseline hour;
//! a cold, humid, overcast one counts for less.

use chrono::{DateTime, Utc};
use rockdry_weather::{WeatherSample, sampling_interval_hours};

/// Temperature contribution (°F).
pub fn temperature_factor(temperature: f64) -> f64 {
    if temperature > 70.0 {
        1.3
    } else if temperature >= 65.0 {
        1.15
    } else if temperature < 50.0 {
        0.6
    } else if temperature < 55.0 {
        0.8
    } else {
        1.0
    }
}

/// Wind contribution (mph).
pub fn wind_factor(wind_speed: f64) -> f64 {
    if (5.0..=15.0).contains(&wind_speed) {
        1.25
    } else if wind_speed > 15.0 && wind_speed <= 25.0 {
        1.1
    } else if wind_speed < 3.0 {
        0.85
    } else {
        1.0
    }
}

/// Relative humidity contribution (%).
pub fn humidity_factor(humidity: f64) -> f64 {
    if humidity < 40.0 {
        1.3
    } else if humidity < 50.0 {
        1.15
    } else if humidity > 80.0 {
        0.6
    } else if humidity > 70.0 {
        0.75
    } else {
        1.0
    }
}

/// Cloud cover contribution (%).
pub fn cloud_factor(cloud_cover: f64) -> f64 {
    if cloud_cover < 30.0 {
        1.2
    } else if cloud_cover < 50.0 {
        1.1
    } else if cloud_cover > 80.0 {
        0.85
    } else {
        1.0
    }
}

/// Product of the four weather contributions, without sun exposure.
pub fn weather_multiplier(sample: &WeatherSample) -> f64 {
    temperature_factor(sample.temperature)
        * wind_factor(sample.wind_speed)
        * humidity_factor(sample.humidity)
        * cloud_factor(sample.cloud_cover)
}

/// Drying power of one sample, scaled by a location's sun-exposure factor.
pub fn drying_power(sample: &WeatherSample, sun_factor: f64) -> f64 {
    weather_multiplier(sample) * sun_factor
}

/// Accumulated drying since the end of a rain event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DryingProgress {
    /// Wall-clock hours since the rain stopped.
    pub elapsed_hours: f64,
    /// Power-weighted hours, i.e. baseline-equivalent drying achieved.
    pub effective_hours: f64,
    /// `effective_hours / elapsed_hours`, 0 when no time has elapsed.
    pub mean_power: f64,
}

impl DryingProgress {
    /// Fraction of `required_hours` already covered, in `[0, 1]`.
    pub fn fraction_of(&self, required_hours: f64) -> f64 {
        if required_hours <= 0.0 {
            return 1.0;
        }
        (self.effective_hours / required_hours).clamp(0.0, 1.0)
    }

    /// Hours still needed: `required × (1 − progress)`.
    pub fn remaining_hours(&self, required_hours: f64) -> f64 {
        required_hours.max(0.0) * (1.0 - self.fraction_of(required_hours))
    }
}

/// Integrates drying power between `rain_end` and `now`.
///
/// Each history sample at or after `rain_end` contributes its power times
/// its sampling interval, clipped at `now`. Time between the end of the
/// recorded history and `now` is weighted with the power of `current`.
/// Gaps inside the history contribute nothing.
pub fn drying_progress(
    history: &[WeatherSample],
    current: &WeatherSample,
    rain_end: DateTime<Utc>,
    now: DateTime<Utc>,
    sun_factor: f64,
) -> DryingProgress {
    let elapsed_hours = hours_between(rain_end, now).max(0.0);
    if elapsed_hours == 0.0 {
        return DryingProgress {
            elapsed_hours,
            effective_hours: 0.0,
            mean_power: 0.0,
        };
    }

    let interval = sampling_interval_hours(history);
    let mut effective_hours = 0.0;
    let mut covered_until = rain_end;
    for s in history
        .iter()
        .filter(|s| s.timestamp >= rain_end && s.timestamp < now)
    {
        let weight = interval.min(hours_between(s.timestamp, now));
        effective_hours += drying_power(s, sun_factor) * weight;
        covered_until = s.timestamp + chrono::Duration::seconds((weight * 3600.0) as i64);
    }

    let tail = hours_between(covered_until, now);
    if tail > 0.0 {
        effective_hours += drying_power(current, sun_factor) * tail;
    }

    DryingProgress {
        elapsed_hours,
        effective_hours,
        mean_power: effective_hours / elapsed_hours,
    }
}

fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / 3600.0
}
