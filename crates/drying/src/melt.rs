//! Snow and ice melt estimation.
//!
//! Above freezing, melt follows an exponential rate in temperature scaled
//! by sun, rock and wind. At or below freezing the estimate depends on the
//! recent warming trend: a clear trend projects a thaw, otherwise a
//! [`SeasonalMeltFallback`] picks a conservative, season-aware figure.

use chrono::{DateTime, Datelike, Utc};
use rockdry_sun::SunExposureProfile;
use rockdry_weather::FREEZING_F;
use serde::Serialize;
use tracing::debug;

use crate::rock::RockType;

/// Trend (°F/h) above which a freezing surface is projected to thaw.
const THAW_TREND_F_PER_H: f64 = 0.2;

/// Temperature assumed once a projected thaw has happened.
const THAWED_TEMP_F: f64 = 34.0;

/// What is covering the rock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MeltKind {
    Snow,
    Ice,
}

impl MeltKind {
    fn base_rate(self) -> f64 {
        match self {
            MeltKind::Snow => 0.02,
            MeltKind::Ice => 0.03,
        }
    }

    fn rate_growth(self) -> f64 {
        match self {
            MeltKind::Snow => 1.12,
            MeltKind::Ice => 1.15,
        }
    }

    fn cap_hours(self) -> f64 {
        match self {
            MeltKind::Snow => 336.0,
            MeltKind::Ice => 168.0,
        }
    }

    fn tail_fraction(self) -> f64 {
        match self {
            MeltKind::Snow => 0.5,
            MeltKind::Ice => 0.4,
        }
    }

    fn wind_multiplier(self, wind_speed: f64) -> f64 {
        let (moderate, strong) = match self {
            MeltKind::Snow => (1.2, 1.4),
            MeltKind::Ice => (1.3, 1.6),
        };
        if wind_speed > 15.0 {
            strong
        } else if wind_speed >= 5.0 {
            moderate
        } else {
            1.0
        }
    }
}

/// Northern-hemisphere meteorological season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Season of a calendar month (1-12).
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }
}

/// Fixed hours plus hours per inch of cover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonRule {
    pub base_hours: f64,
    pub hours_per_inch: f64,
}

impl SeasonRule {
    fn hours(&self, depth_in: f64) -> f64 {
        self.base_hours + self.hours_per_inch * depth_in
    }
}

/// Season-aware melt estimate used when freezing conditions show no thaw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalMeltFallback {
    pub summer: SeasonRule,
    /// Spring and autumn.
    pub shoulder: SeasonRule,
    pub winter: SeasonRule,
}

impl SeasonalMeltFallback {
    /// Preset for snow cover.
    pub fn snow() -> Self {
        Self {
            summer: SeasonRule {
                base_hours: 48.0,
                hours_per_inch: 12.0,
            },
            shoulder: SeasonRule {
                base_hours: 96.0,
                hours_per_inch: 24.0,
            },
            winter: SeasonRule {
                base_hours: 168.0,
                hours_per_inch: 36.0,
            },
        }
    }

    /// Preset for ice.
    pub fn ice() -> Self {
        Self {
            summer: SeasonRule {
                base_hours: 12.0,
                hours_per_inch: 4.0,
            },
            shoulder: SeasonRule {
                base_hours: 36.0,
                hours_per_inch: 8.0,
            },
            winter: SeasonRule {
                base_hours: 72.0,
                hours_per_inch: 12.0,
            },
        }
    }

    /// Preset for `kind`.
    pub fn for_kind(kind: MeltKind) -> Self {
        match kind {
            MeltKind::Snow => Self::snow(),
            MeltKind::Ice => Self::ice(),
        }
    }

    /// Melt hours for `depth_in` inches of cover in `season`.
    pub fn hours(&self, season: Season, depth_in: f64) -> f64 {
        let rule = match season {
            Season::Summer => &self.summer,
            Season::Spring | Season::Autumn => &self.shoulder,
            Season::Winter => &self.winter,
        };
        rule.hours(depth_in)
    }
}

/// Which path produced a [`MeltEstimate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "method")]
pub enum MeltMethod {
    /// Melt at the current above-freezing temperature.
    Thermal,
    /// Projected thaw from the warming trend, then melt at 34°F.
    ThawThenMelt { thaw_hours: f64 },
    /// No thaw in sight; seasonal heuristic.
    Seasonal { season: Season },
}

/// Inputs to [`estimate_melt`].
#[derive(Debug, Clone, Copy)]
pub struct MeltConditions<'a> {
    pub kind: MeltKind,
    /// Depth of cover in inches.
    pub depth_in: f64,
    /// Current temperature (°F).
    pub temperature: f64,
    /// Current wind speed (mph).
    pub wind_speed: f64,
    /// Recent warming trend (°F/h), if known.
    pub warming_trend: Option<f64>,
    /// Reference time, used for the season.
    pub at: DateTime<Utc>,
    pub rock: &'a RockType,
    pub sun_profile: Option<&'a SunExposureProfile>,
}

/// Hours until cover has melted and the rock has dried.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeltEstimate {
    pub melt_hours: f64,
    pub tail_drying_hours: f64,
    pub total_hours: f64,
    pub method: MeltMethod,
}

/// Estimates melt plus post-melt drying for snow or ice cover.
pub fn estimate_melt(c: &MeltConditions<'_>) -> MeltEstimate {
    let kind = c.kind;
    let depth = c.depth_in.max(0.0);

    let (raw_hours, method) = if c.temperature > FREEZING_F {
        let hours = depth / melt_rate(c, c.temperature);
        (adjust_for_trend(hours, c.warming_trend), MeltMethod::Thermal)
    } else if let Some(trend) = c.warming_trend
        && trend >= THAW_TREND_F_PER_H
    {
        let thaw_hours = (FREEZING_F - c.temperature) / trend + 1.0;
        let hours = thaw_hours + depth / melt_rate(c, THAWED_TEMP_F);
        (hours, MeltMethod::ThawThenMelt { thaw_hours })
    } else {
        let season = Season::from_month(c.at.month());
        let hours = SeasonalMeltFallback::for_kind(kind).hours(season, depth);
        (hours, MeltMethod::Seasonal { season })
    };

    let melt_hours = raw_hours.min(kind.cap_hours());
    let tail_drying_hours = c.rock.base_drying_hours * kind.tail_fraction();
    debug!(?kind, depth, melt_hours, ?method, "melt estimate");

    MeltEstimate {
        melt_hours,
        tail_drying_hours,
        total_hours: melt_hours + tail_drying_hours,
        method,
    }
}

fn melt_rate(c: &MeltConditions<'_>, temperature: f64) -> f64 {
    let kind = c.kind;
    let mut rate = kind.base_rate() * kind.rate_growth().powf(temperature - FREEZING_F);
    if kind == MeltKind::Snow {
        rate *= sun_multiplier(c.sun_profile) * thermal_multiplier(c.rock);
    }
    rate * kind.wind_multiplier(c.wind_speed)
}

/// South faces melt up to 50% faster, west faces up to 25%; trees slow
/// melt by up to 40%.
fn sun_multiplier(profile: Option<&SunExposureProfile>) -> f64 {
    let Some(p) = profile else {
        return 1.0;
    };
    let aspect = 1.0 + 0.5 * p.south_facing_percent / 100.0 + 0.25 * p.west_facing_percent / 100.0;
    let trees = 1.0 - 0.4 * (p.tree_coverage_percent / 100.0).clamp(0.0, 1.0);
    aspect * trees
}

/// Dense, low-porosity rock conducts heat and melts cover faster.
fn thermal_multiplier(rock: &RockType) -> f64 {
    (1.0 + (10.0 - rock.porosity_percent) / 40.0).clamp(0.7, 1.3)
}

fn adjust_for_trend(hours: f64, trend: Option<f64>) -> f64 {
    match trend {
        Some(t) if t >= 0.5 => hours * 0.7,
        Some(t) if t >= 0.2 => hours * 0.85,
        Some(t) if t <= -0.5 => hours * 1.3,
        Some(t) if t <= -0.2 => hours * 1.15,
        _ => hours,
    }
}
