//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use crate::config::*;

use rockdry_boulder::{ForecastConfig, RefineConfig};
use rockdry_drying::DryingConfig;
use rockdry_sun::ExposureConfig;

/// Builds a validated [`DryingConfig`] from the TOML drying section.
pub fn build_drying_config(drying: &DryingToml) -> Result<DryingConfig> {
    let cfg = DryingConfig::new()
        .with_wet_threshold_in(drying.wet_threshold_in)
        .with_snow_depth_threshold_in(drying.snow_depth_threshold_in)
        .with_ice_lookback_hours(drying.ice_lookback_hours)
        .with_seepage_multiplier(drying.seepage_multiplier)
        .with_wet_sensitive_multiplier(drying.wet_sensitive_multiplier)
        .with_dry_cutoff_hours(drying.dry_cutoff_hours)
        .with_trend_window(drying.trend_window);
    cfg.validate().context("invalid [drying] config")?;
    Ok(cfg)
}

/// Builds an [`ExposureConfig`] from the TOML exposure section.
pub fn build_exposure_config(exposure: &ExposureToml) -> ExposureConfig {
    ExposureConfig::new()
        .with_step_minutes(exposure.step_minutes)
        .with_min_elevation_deg(exposure.min_elevation_deg)
        .with_max_incidence_deg(exposure.max_incidence_deg)
        .with_tree_shade_fraction(exposure.tree_shade_fraction)
}

/// Builds a validated [`RefineConfig`] from the TOML refine section.
pub fn build_refine_config(refine: &RefineToml) -> Result<RefineConfig> {
    let cfg = RefineConfig::new()
        .with_window_days(refine.window_days)
        .with_default_tree_coverage_percent(refine.default_tree_coverage_percent)
        .with_default_daily_sun_hours(refine.default_daily_sun_hours)
        .with_exposure(build_exposure_config(&refine.exposure));
    cfg.validate().context("invalid [refine] config")?;
    Ok(cfg)
}

/// Builds a validated [`ForecastConfig`] from the TOML forecast section.
pub fn build_forecast_config(forecast: &ForecastToml) -> Result<ForecastConfig> {
    let cfg = ForecastConfig::new()
        .with_wet_threshold_in(forecast.wet_threshold_in)
        .with_heavy_rain_in(forecast.heavy_rain_in)
        .with_hours_per_heavy_inch(forecast.hours_per_heavy_inch)
        .with_min_period_hours(forecast.min_period_hours);
    cfg.validate().context("invalid [forecast] config")?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_convert_cleanly() {
        let cfg = RockdryConfig::default();
        let drying = build_drying_config(&cfg.drying).unwrap();
        assert_eq!(drying.trend_window(), 24);
        let refine = build_refine_config(&cfg.refine).unwrap();
        assert_eq!(refine.window_days(), 6);
        assert_eq!(refine.exposure().step_minutes(), 15);
        let forecast = build_forecast_config(&cfg.forecast).unwrap();
        assert_eq!(forecast.heavy_rain_in(), 0.5);
    }

    #[test]
    fn invalid_values_name_the_section() {
        let mut cfg = RockdryConfig::default();
        cfg.refine.window_days = 0;
        let err = build_refine_config(&cfg.refine).unwrap_err();
        assert!(format!("{err:#}").contains("[refine]"));

        cfg.drying.seepage_multiplier = -1.0;
        let err = build_drying_config(&cfg.drying).unwrap_err();
        assert!(format!("{err:#}").contains("seepage_multiplier"));
    }

    #[test]
    fn exposure_fields_carry_over() {
        let exposure = ExposureToml {
            step_minutes: 10,
            min_elevation_deg: 3.0,
            max_incidence_deg: 80.0,
            tree_shade_fraction: 0.5,
        };
        let cfg = build_exposure_config(&exposure);
        assert_eq!(cfg.step_minutes(), 10);
        assert_eq!(cfg.min_elevation_deg(), 3.0);
        assert_eq!(cfg.max_incidence_deg(), 80.0);
        assert_eq!(cfg.tree_shade_fraction(), 0.5);
    }
}
