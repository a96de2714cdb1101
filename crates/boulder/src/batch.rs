//! Parallel refinement of every boulder at a location.

use rayon::prelude::*;
use tracing::info;

use crate::config::{ForecastConfig, RefineConfig};
use crate::error::BoulderError;
use crate::refine::{BoulderInput, RefineContext, refine_boulder};
use crate::status::BoulderDryingStatus;

/// Refines `boulders` against one shared location verdict in parallel.
///
/// Output order matches input order. The first error aborts the batch.
pub fn refine_boulders(
    boulders: &[BoulderInput],
    ctx: &RefineContext<'_>,
    config: &RefineConfig,
    forecast_config: &ForecastConfig,
) -> Result<Vec<BoulderDryingStatus>, BoulderError> {
    config.validate()?;
    forecast_config.validate()?;

    let refined = boulders
        .par_iter()
        .map(|b| refine_boulder(b, ctx, config, forecast_config))
        .collect::<Result<Vec<_>, _>>()?;
    info!(n_boulders = refined.len(), "refined boulders");
    Ok(refined)
}
