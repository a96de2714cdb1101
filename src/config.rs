use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level rockdry configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RockdryConfig {
    /// Location engine settings.
    #[serde(default)]
    pub drying: DryingToml,

    /// Boulder refinement settings.
    #[serde(default)]
    pub refine: RefineToml,

    /// Forecast replay settings.
    #[serde(default)]
    pub forecast: ForecastToml,
}

impl RockdryConfig {
    /// Reads a TOML config, or returns defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DryingToml {
    #[serde(default = "default_wet_threshold_in")]
    pub wet_threshold_in: f64,
    #[serde(default = "default_snow_depth_threshold_in")]
    pub snow_depth_threshold_in: f64,
    #[serde(default = "default_ice_lookback_hours")]
    pub ice_lookback_hours: f64,
    #[serde(default = "default_seepage_multiplier")]
    pub seepage_multiplier: f64,
    #[serde(default = "default_wet_sensitive_multiplier")]
    pub wet_sensitive_multiplier: f64,
    #[serde(default = "default_dry_cutoff_hours")]
    pub dry_cutoff_hours: f64,
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
}

impl Default for DryingToml {
    fn default() -> Self {
        Self {
            wet_threshold_in: default_wet_threshold_in(),
            snow_depth_threshold_in: default_snow_depth_threshold_in(),
            ice_lookback_hours: default_ice_lookback_hours(),
            seepage_multiplier: default_seepage_multiplier(),
            wet_sensitive_multiplier: default_wet_sensitive_multiplier(),
            dry_cutoff_hours: default_dry_cutoff_hours(),
            trend_window: default_trend_window(),
        }
    }
}

fn default_wet_threshold_in() -> f64 {
    0.01
}
fn default_snow_depth_threshold_in() -> f64 {
    0.5
}
fn default_ice_lookback_hours() -> f64 {
    48.0
}
fn default_seepage_multiplier() -> f64 {
    1.4
}
fn default_wet_sensitive_multiplier() -> f64 {
    1.5
}
fn default_dry_cutoff_hours() -> f64 {
    0.5
}
fn default_trend_window() -> usize {
    24
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefineToml {
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_tree_coverage_percent")]
    pub default_tree_coverage_percent: f64,
    #[serde(default = "default_daily_sun_hours")]
    pub default_daily_sun_hours: f64,
    #[serde(default)]
    pub exposure: ExposureToml,
}

impl Default for RefineToml {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            default_tree_coverage_percent: default_tree_coverage_percent(),
            default_daily_sun_hours: default_daily_sun_hours(),
            exposure: ExposureToml::default(),
        }
    }
}

fn default_window_days() -> u32 {
    6
}
fn default_tree_coverage_percent() -> f64 {
    30.0
}
fn default_daily_sun_hours() -> f64 {
    5.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExposureToml {
    #[serde(default = "default_step_minutes")]
    pub step_minutes: u32,
    #[serde(default = "default_min_elevation_deg")]
    pub min_elevation_deg: f64,
    #[serde(default = "default_max_incidence_deg")]
    pub max_incidence_deg: f64,
    #[serde(default = "default_tree_shade_fraction")]
    pub tree_shade_fraction: f64,
}

impl Default for ExposureToml {
    fn default() -> Self {
        Self {
            step_minutes: default_step_minutes(),
            min_elevation_deg: default_min_elevation_deg(),
            max_incidence_deg: default_max_incidence_deg(),
            tree_shade_fraction: default_tree_shade_fraction(),
        }
    }
}

fn default_step_minutes() -> u32 {
    15
}
fn default_min_elevation_deg() -> f64 {
    5.0
}
fn default_max_incidence_deg() -> f64 {
    90.0
}
fn default_tree_shade_fraction() -> f64 {
    0.7
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastToml {
    #[serde(default = "default_wet_threshold_in")]
    pub wet_threshold_in: f64,
    #[serde(default = "default_heavy_rain_in")]
    pub heavy_rain_in: f64,
    #[serde(default = "default_hours_per_heavy_inch")]
    pub hours_per_heavy_inch: f64,
    #[serde(default = "default_min_period_hours")]
    pub min_period_hours: f64,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            wet_threshold_in: default_wet_threshold_in(),
            heavy_rain_in: default_heavy_rain_in(),
            hours_per_heavy_inch: default_hours_per_heavy_inch(),
            min_period_hours: default_min_period_hours(),
        }
    }
}

fn default_heavy_rain_in() -> f64 {
    0.5
}
fn default_hours_per_heavy_inch() -> f64 {
    12.0
}
fn default_min_period_hours() -> f64 {
    1.0
}
