//! Total drying time a rock type needs after a given amount of rain.

use rockdry_weather::WeatherSample;

use crate::config::DryingConfig;
use crate::power::weather_multiplier;
use crate::rock::RockType;

/// Hours of baseline drying needed after `rain_amount` inches of rain.
///
/// Scales the rock's base time by rain amount (0.1in is the reference,
/// clamped to `[0.5, 3.0]`) and porosity (5% is the reference, clamped to
/// `[0.7, 1.5]`), then divides by the current weather and sun-exposure
/// multipliers. Seepage and wet-sensitive rock lengthen the result.
pub fn required_drying_hours(
    rock: &RockType,
    rain_amount: f64,
    current: &WeatherSample,
    sun_factor: f64,
    has_seepage_risk: bool,
    config: &DryingConfig,
) -> f64 {
    let rain_scale = (rain_amount / 0.1).clamp(0.5, 3.0);
    let porosity_scale = (1.0 + (rock.porosity_percent - 5.0) / 100.0).clamp(0.7, 1.5);

    let mut hours = rock.base_drying_hours * rain_scale * porosity_scale;
    hours /= weather_multiplier(current);
    hours /= sun_factor.max(f64::EPSILON);

    if has_seepage_risk {
        hours *= config.seepage_multiplier();
    }
    if rock.is_wet_sensitive {
        hours *= config.wet_sensitive_multiplier();
    }
    hours
}
