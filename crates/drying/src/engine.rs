//! Location drying engine.

use chrono::Duration;
use rockdry_sun::SunExposureProfile;
use rockdry_weather::{
    RainEvent, WeatherSample, find_last_rain_event, history_span_hours, sampling_interval_hours,
    temperature_spread, validate_series, warming_trend,
};
use tracing::debug;

use crate::confidence::{ConfidenceInputs, confidence_score};
use crate::config::DryingConfig;
use crate::error::DryingError;
use crate::melt::{MeltConditions, MeltKind, estimate_melt};
use crate::power::drying_progress;
use crate::requirement::required_drying_hours;
use crate::rock::{RockType, primary_rock_type};
use crate::status::{
    DryingCondition, DryingStatus, RockDryingStatus, is_safe, round_up_tenth, status_message,
};

/// Ice thickness assumed per inch of recent precipitation.
const ICE_DEPTH_PER_INCH_PRECIP: f64 = 10.0;

/// Snapshot of everything known about a location.
#[derive(Debug, Clone, Copy)]
pub struct LocationInput<'a> {
    pub rock_types: &'a [RockType],
    /// Current conditions. Its timestamp is the reference time.
    pub current: &'a WeatherSample,
    /// Chronologically ordered history up to the reference time.
    pub history: &'a [WeatherSample],
    pub sun_profile: Option<&'a SunExposureProfile>,
    pub has_seepage_risk: bool,
    /// Snow depth on the ground (inches), if reported.
    pub snow_depth_in: Option<f64>,
}

/// Wet/dry outcome before it is dressed up as a status.
struct Verdict {
    condition: DryingCondition,
    hours_until_dry: f64,
    required_hours: f64,
}

/// Computes the drying verdict for a location.
///
/// # Errors
///
/// Returns [`DryingError`] when the history is empty or malformed, a rock
/// type has impossible properties, the snow depth is invalid or the config
/// fails validation. Missing rock types or sun profile degrade the result
/// instead.
#[tracing::instrument(skip(input, config), fields(rock_types = input.rock_types.len(), history = input.history.len()))]
pub fn compute_location_status(
    input: &LocationInput<'_>,
    config: &DryingConfig,
) -> Result<RockDryingStatus, DryingError> {
    config.validate()?;
    validate_series(input.history)?;
    validate_series(std::slice::from_ref(input.current))?;
    if let Some(depth) = input.snow_depth_in
        && (!depth.is_finite() || depth < 0.0)
    {
        return Err(DryingError::InvalidSnowDepth { value: depth });
    }
    for rock in input.rock_types {
        rock.validate()?;
    }

    let now = input.current.timestamp;
    let event = find_last_rain_event(input.history, config.wet_threshold_in());

    let Some(primary) = primary_rock_type(input.rock_types) else {
        debug!("no rock types, reporting unknown");
        return Ok(RockDryingStatus::unknown(event.map(|e| e.end_time)));
    };
    let wet_sensitive = input.rock_types.iter().any(|r| r.is_wet_sensitive);
    let sun_factor = input
        .sun_profile
        .map_or(1.0, SunExposureProfile::exposure_factor);

    let verdict = classify(input, config, primary, wet_sensitive, sun_factor, event.as_ref());
    debug!(
        condition = ?verdict.condition,
        hours_until_dry = verdict.hours_until_dry,
        required_hours = verdict.required_hours,
        "location classified"
    );

    let is_wet = verdict.condition != DryingCondition::Dry;
    let hours_until_dry = if is_wet {
        round_up_tenth(verdict.hours_until_dry)
    } else {
        0.0
    };

    let status = if !is_wet {
        DryingStatus::Good
    } else if wet_sensitive {
        DryingStatus::Critical
    } else if matches!(verdict.condition, DryingCondition::Snow | DryingCondition::Ice)
        || verdict.hours_until_dry >= 0.5 * verdict.required_hours
    {
        DryingStatus::Poor
    } else {
        DryingStatus::Fair
    };

    let last_rain_timestamp = if verdict.condition == DryingCondition::Raining {
        Some(now)
    } else {
        event.as_ref().map(|e| e.end_time)
    };

    let interval = sampling_interval_hours(input.history);
    let history_hours = history_span_hours(input.history) + interval;
    let hours_since_rain = match verdict.condition {
        DryingCondition::Raining => Some(0.0),
        _ => event.as_ref().map(|e| e.hours_since_end(now)),
    };
    let window_start = input.history.len().saturating_sub(config.trend_window());
    let confidence = confidence_score(&ConfidenceInputs {
        history_hours,
        has_sun_profile: input.sun_profile.is_some(),
        hours_since_rain,
        temperature_spread: temperature_spread(&input.history[window_start..]),
        wet_sensitive_wet: wet_sensitive && is_wet,
        dry_hours: (!is_wet).then(|| hours_since_rain.unwrap_or(history_hours)),
    });

    Ok(RockDryingStatus {
        is_wet,
        is_safe: is_safe(is_wet, wet_sensitive, verdict.condition),
        is_wet_sensitive: wet_sensitive,
        hours_until_dry,
        last_rain_timestamp,
        status,
        message: status_message(&primary.name, verdict.condition, wet_sensitive, hours_until_dry),
        rock_types: input.rock_types.iter().map(|r| r.name.clone()).collect(),
        primary_rock_type: Some(primary.name.clone()),
        primary_group_name: (!primary.group_name.is_empty()).then(|| primary.group_name.clone()),
        confidence_score: confidence,
        condition: verdict.condition,
    })
}

fn classify(
    input: &LocationInput<'_>,
    config: &DryingConfig,
    primary: &RockType,
    wet_sensitive: bool,
    sun_factor: f64,
    event: Option<&RainEvent>,
) -> Verdict {
    let current = input.current;
    let now = current.timestamp;
    let trend = warming_trend(input.history, config.trend_window());

    let melt = |kind, depth_in| {
        estimate_melt(&MeltConditions {
            kind,
            depth_in,
            temperature: current.temperature,
            wind_speed: current.wind_speed,
            warming_trend: trend,
            at: now,
            rock: primary,
            sun_profile: input.sun_profile,
        })
    };

    if let Some(depth) = input.snow_depth_in
        && depth > config.snow_depth_threshold_in()
    {
        let est = melt(MeltKind::Snow, depth);
        return Verdict {
            condition: DryingCondition::Snow,
            hours_until_dry: est.total_hours,
            required_hours: est.total_hours,
        };
    }

    if current.is_freezing() {
        let cutoff = now - Duration::seconds((config.ice_lookback_hours() * 3600.0) as i64);
        let recent: f64 = input
            .history
            .iter()
            .filter(|s| s.timestamp > cutoff && s.timestamp < now)
            .map(|s| s.precipitation)
            .sum::<f64>()
            + current.precipitation;
        if recent > config.wet_threshold_in() {
            let est = melt(MeltKind::Ice, recent * ICE_DEPTH_PER_INCH_PRECIP);
            return Verdict {
                condition: DryingCondition::Ice,
                hours_until_dry: est.total_hours,
                required_hours: est.total_hours,
            };
        }
    }

    // Rock types are combined into one requirement through the primary type,
    // but wet-sensitivity applies if any type is sensitive.
    let governing = RockType {
        is_wet_sensitive: wet_sensitive,
        ..primary.clone()
    };
    let required = |rain| {
        required_drying_hours(
            &governing,
            rain,
            current,
            sun_factor,
            input.has_seepage_risk,
            config,
        )
    };

    if current.is_wet(config.wet_threshold_in()) {
        let rain = event
            .map_or(0.0, |e| e.total_rain)
            .max(current.precipitation);
        let hours = required(rain);
        return Verdict {
            condition: DryingCondition::Raining,
            hours_until_dry: hours,
            required_hours: hours,
        };
    }

    let Some(event) = event else {
        return Verdict {
            condition: DryingCondition::Dry,
            hours_until_dry: 0.0,
            required_hours: 0.0,
        };
    };

    let required_hours = required(event.total_rain);
    let progress = drying_progress(input.history, current, event.end_time, now, sun_factor);
    let remaining = progress.remaining_hours(required_hours);
    debug!(
        elapsed = progress.elapsed_hours,
        effective = progress.effective_hours,
        mean_power = progress.mean_power,
        remaining,
        "drying progress"
    );

    let condition = if remaining < config.dry_cutoff_hours() {
        DryingCondition::Dry
    } else {
        DryingCondition::Drying
    };
    Verdict {
        condition,
        hours_until_dry: remaining,
        required_hours,
    }
}
