//! Boulder drying verdict.

use rockdry_drying::RockDryingStatus;
use rockdry_sun::Aspect;
use serde::{Deserialize, Serialize};

use crate::forecast::DryingForecastPeriod;
use crate::sun_hours::SunHoursSource;
use crate::tree::TreeCoverageSource;

/// A location verdict refined for one boulder.
///
/// Serializes with the location fields inlined next to the boulder fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoulderDryingStatus {
    #[serde(flatten)]
    pub drying: RockDryingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boulder_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub aspect: Option<Aspect>,
    /// Direct-sun hours over the refinement window.
    pub sun_exposure_hours: f64,
    pub tree_coverage_percent: f64,
    pub sun_hours_source: SunHoursSource,
    pub tree_coverage_source: TreeCoverageSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Vec<DryingForecastPeriod>>,
}
