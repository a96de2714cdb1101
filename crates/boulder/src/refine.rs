//! Per-boulder refinement of a location verdict.

use chrono::{DateTime, Utc};
use rockdry_drying::confidence::clamp_confidence;
use rockdry_drying::status::{round_up_tenth, status_message};
use rockdry_drying::RockDryingStatus;
use rockdry_sun::Aspect;
use rockdry_weather::WeatherSample;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ForecastConfig, RefineConfig};
use crate::error::BoulderError;
use crate::forecast::{ForecastStart, simulate_forecast};
use crate::status::BoulderDryingStatus;
use crate::sun_hours::estimate_sun_hours;
use crate::tree::resolve_tree_coverage;

/// Metadata known about a boulder. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoulderInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub aspect: Option<Aspect>,
    /// Cached canopy cover over the boulder (%). 0 means never measured.
    #[serde(default)]
    pub tree_coverage_percent: Option<f64>,
}

impl BoulderInput {
    /// `(latitude, longitude)` when both are known.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// What every boulder at one location shares.
#[derive(Debug, Clone, Copy)]
pub struct RefineContext<'a> {
    pub location: &'a RockDryingStatus,
    /// Tree coverage from the location's sun-exposure profile.
    pub location_tree_coverage_percent: Option<f64>,
    /// Base drying hours of the location's primary rock type.
    pub base_drying_hours: f64,
    /// Start of the sun window.
    pub reference_time: DateTime<Utc>,
    pub forecast: Option<&'a [WeatherSample]>,
}

/// Drying-time multiplier from average daily sun hours.
pub fn sun_modifier(daily_sun_hours: f64) -> f64 {
    if daily_sun_hours >= 8.0 {
        0.7
    } else if daily_sun_hours >= 6.0 {
        0.85
    } else if daily_sun_hours >= 4.0 {
        1.0
    } else if daily_sun_hours >= 2.0 {
        1.15
    } else {
        1.3
    }
}

/// Drying-time multiplier from tree coverage (%).
pub fn tree_modifier(tree_coverage_percent: f64) -> f64 {
    if tree_coverage_percent > 75.0 {
        1.3
    } else if tree_coverage_percent > 50.0 {
        1.15
    } else if tree_coverage_percent > 25.0 {
        1.05
    } else {
        1.0
    }
}

/// Rescales a location's hours-until-dry for one boulder.
pub fn adjusted_hours_until_dry(
    location_hours: f64,
    daily_sun_hours: f64,
    tree_coverage_percent: f64,
) -> f64 {
    round_up_tenth(
        location_hours * sun_modifier(daily_sun_hours) * tree_modifier(tree_coverage_percent),
    )
}

/// Refines the shared location verdict for one boulder.
///
/// The sun and tree modifiers scale the boulder's whole drying time, so the
/// remaining-to-required ratio, and with it the location's fair/poor band,
/// carries over unchanged.
///
/// # Errors
///
/// Returns [`BoulderError`] for an invalid configuration or a malformed
/// forecast. Missing or unusable boulder metadata lowers confidence instead.
#[tracing::instrument(skip_all, fields(boulder = boulder.id.as_deref().unwrap_or("-")))]
pub fn refine_boulder(
    boulder: &BoulderInput,
    ctx: &RefineContext<'_>,
    config: &RefineConfig,
    forecast_config: &ForecastConfig,
) -> Result<BoulderDryingStatus, BoulderError> {
    config.validate()?;

    let tree = resolve_tree_coverage(
        boulder.tree_coverage_percent,
        ctx.location_tree_coverage_percent,
        config,
    );
    let sun = estimate_sun_hours(
        boulder.position(),
        boulder.aspect,
        tree.percent,
        ctx.reference_time,
        config,
    );

    let boulder_confidence = 100 - i32::from(sun.penalty) - i32::from(tree.penalty());
    let confidence = clamp_confidence(boulder_confidence.min(i32::from(ctx.location.confidence_score)));

    let mut drying = ctx.location.clone();
    drying.confidence_score = confidence;
    if drying.is_wet {
        drying.hours_until_dry =
            adjusted_hours_until_dry(drying.hours_until_dry, sun.daily_hours, tree.percent);
        drying.message = status_message(
            drying.rock_label(),
            drying.condition,
            drying.is_wet_sensitive,
            drying.hours_until_dry,
        );
    }
    debug!(
        hours_until_dry = drying.hours_until_dry,
        daily_sun = sun.daily_hours,
        tree = tree.percent,
        confidence,
        "boulder refined"
    );

    let forecast = ctx
        .forecast
        .map(|f| {
            simulate_forecast(
                f,
                ForecastStart {
                    hours_until_dry: drying.hours_until_dry,
                    base_drying_hours: ctx.base_drying_hours,
                },
                forecast_config,
            )
        })
        .transpose()?;

    Ok(BoulderDryingStatus {
        drying,
        boulder_id: boulder.id.clone(),
        latitude: boulder.latitude,
        longitude: boulder.longitude,
        aspect: boulder.aspect,
        sun_exposure_hours: sun.hours,
        tree_coverage_percent: tree.percent,
        sun_hours_source: sun.source,
        tree_coverage_source: tree.source,
        forecast,
    })
}
