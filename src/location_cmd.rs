//! Location command: one wet/dry verdict for a climbing area.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rockdry_drying::compute_location_status;

use crate::cli::LocationArgs;
use crate::config::RockdryConfig;
use crate::convert;
use crate::input::{LocationRequest, read_json, write_json};

/// Run the location pipeline.
pub fn run(args: LocationArgs) -> Result<()> {
    let _cmd = info_span!("location").entered();

    let config = RockdryConfig::load(args.config.as_deref())?;
    let drying_cfg = convert::build_drying_config(&config.drying)?;

    let request: LocationRequest = read_json(&args.input)?;
    info!(
        rock_types = request.rock_types.len(),
        history = request.history.len(),
        "location request loaded"
    );

    let status = compute_location_status(&request.as_input(), &drying_cfg)
        .context("failed to compute location status")?;
    info!(
        condition = ?status.condition,
        hours_until_dry = status.hours_until_dry,
        confidence = status.confidence_score,
        "location status computed"
    );

    write_json(&status, args.output.as_deref())
}
