//! Boulders command: per-boulder refinement of a location verdict.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use rockdry_boulder::{RefineContext, refine_boulders};
use rockdry_drying::{compute_location_status, primary_rock_type};

use crate::cli::BouldersArgs;
use crate::config::RockdryConfig;
use crate::convert;
use crate::input::{BoulderRequest, read_json, write_json};

/// Run the boulder pipeline.
pub fn run(args: BouldersArgs) -> Result<()> {
    let _cmd = info_span!("boulders").entered();

    // 1. Config
    let config = RockdryConfig::load(args.config.as_deref())?;
    let drying_cfg = convert::build_drying_config(&config.drying)?;
    let refine_cfg = convert::build_refine_config(&config.refine)?;
    let forecast_cfg = convert::build_forecast_config(&config.forecast)?;

    // 2. Request
    let request: BoulderRequest = read_json(&args.input)?;
    info!(boulders = request.boulders.len(), "boulder request loaded");

    // 3. Location verdict
    let location = &request.location;
    let status = compute_location_status(&location.as_input(), &drying_cfg)
        .context("failed to compute location status")?;
    debug!(condition = ?status.condition, "location status computed");

    // 4. Refinement
    let base_drying_hours = primary_rock_type(&location.rock_types)
        .map(|r| r.base_drying_hours)
        .unwrap_or(0.0);
    let forecast = if args.no_forecast {
        None
    } else {
        request.forecast.as_deref()
    };
    let ctx = RefineContext {
        location: &status,
        location_tree_coverage_percent: location.sun_profile.map(|p| p.tree_coverage_percent),
        base_drying_hours,
        reference_time: request
            .reference_time
            .unwrap_or(location.current.timestamp),
        forecast,
    };

    let refined = refine_boulders(&request.boulders, &ctx, &refine_cfg, &forecast_cfg)
        .context("failed to refine boulders")?;
    info!(refined = refined.len(), "boulders refined");

    write_json(&refined, args.output.as_deref())
}
