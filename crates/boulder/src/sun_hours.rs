//! Direct-sun hours for a boulder face over the refinement window.

use chrono::{DateTime, Utc};
use rockdry_sun::{Aspect, direct_sun_hours};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::RefineConfig;

/// Confidence points lost without GPS.
pub const NO_GPS_PENALTY: u8 = 20;
/// Confidence points lost without an aspect.
pub const NO_ASPECT_PENALTY: u8 = 25;
/// Confidence points lost when the solar computation fails.
pub const SUN_FAILURE_PENALTY: u8 = 15;

/// Which strategy supplied the sun hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SunHoursSource {
    /// Integrated solar path at the boulder's position.
    Astronomical,
    /// Typical hours for the face's aspect.
    AspectFallback,
    /// Fixed hours per day.
    Default,
}

impl SunHoursSource {
    /// Strategies in the order they are tried.
    pub const CHAIN: [SunHoursSource; 3] = [Self::Astronomical, Self::AspectFallback, Self::Default];
}

/// Sun hours over the window and what they cost in confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunHoursEstimate {
    /// Total direct-sun hours over the window.
    pub hours: f64,
    /// Average per day over the window.
    pub daily_hours: f64,
    pub source: SunHoursSource,
    /// Confidence points lost for missing or failed inputs.
    pub penalty: u8,
}

/// Estimates sun hours for a face from the first strategy that applies.
///
/// `position` is `(latitude, longitude)`. A failed astronomical computation
/// (for example an out-of-range coordinate) falls through to the aspect
/// table and costs [`SUN_FAILURE_PENALTY`].
pub fn estimate_sun_hours(
    position: Option<(f64, f64)>,
    aspect: Option<Aspect>,
    tree_coverage_percent: f64,
    start: DateTime<Utc>,
    config: &RefineConfig,
) -> SunHoursEstimate {
    let days = config.window_days();
    let mut penalty = 0u8;
    if position.is_none() {
        penalty += NO_GPS_PENALTY;
    }
    if aspect.is_none() {
        penalty += NO_ASPECT_PENALTY;
    }

    let default_hours = config.default_daily_sun_hours() * f64::from(days);
    let (source, hours) = SunHoursSource::CHAIN
        .into_iter()
        .find_map(|source| {
            let hours = match (source, position, aspect) {
                (SunHoursSource::Astronomical, Some((lat, lon)), Some(aspect)) => {
                    match direct_sun_hours(
                        lat,
                        lon,
                        aspect,
                        start,
                        days,
                        tree_coverage_percent,
                        config.exposure(),
                    ) {
                        Ok(hours) => Some(hours),
                        Err(e) => {
                            warn!(error = %e, "solar computation failed, using aspect table");
                            penalty += SUN_FAILURE_PENALTY;
                            None
                        }
                    }
                }
                (SunHoursSource::AspectFallback, _, Some(aspect)) => {
                    Some(aspect.fallback_daily_sun_hours() * f64::from(days))
                }
                (SunHoursSource::Default, _, _) => Some(default_hours),
                _ => None,
            };
            hours.map(|h| (source, h))
        })
        .unwrap_or((SunHoursSource::Default, default_hours));

    debug!(hours, ?source, penalty, "sun hours estimated");
    SunHoursEstimate {
        hours,
        daily_hours: hours / f64::from(days),
        source,
        penalty,
    }
}
