//! Rock type reference data.

use serde::{Deserialize, Serialize};

use crate::error::DryingError;

/// Physical drying properties of a rock type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RockType {
    /// Display name, e.g. "Sandstone".
    pub name: String,
    /// Hours to dry after 0.1in of rain under ideal conditions.
    pub base_drying_hours: f64,
    /// Porosity (%). Higher porosity holds more water.
    pub porosity_percent: f64,
    /// Rock that is permanently damaged by climbing while wet.
    pub is_wet_sensitive: bool,
    /// Broader family, e.g. "Sedimentary".
    #[serde(default)]
    pub group_name: String,
}

impl RockType {
    /// Checks that the physical properties are plausible.
    pub fn validate(&self) -> Result<(), DryingError> {
        if !self.base_drying_hours.is_finite() || self.base_drying_hours <= 0.0 {
            return Err(DryingError::InvalidRockType {
                name: self.name.clone(),
                reason: format!(
                    "base_drying_hours must be finite and > 0, got {}",
                    self.base_drying_hours
                ),
            });
        }
        if !self.porosity_percent.is_finite() || !(0.0..=100.0).contains(&self.porosity_percent) {
            return Err(DryingError::InvalidRockType {
                name: self.name.clone(),
                reason: format!(
                    "porosity_percent must be in [0, 100], got {}",
                    self.porosity_percent
                ),
            });
        }
        Ok(())
    }
}

/// Picks the rock type that governs a location's verdict.
///
/// The slowest-drying rock wins, so a crag of mixed granite and sandstone is
/// judged by the sandstone. Ties prefer wet-sensitive rock. Returns `None`
/// for an empty slice.
pub fn primary_rock_type(rock_types: &[RockType]) -> Option<&RockType> {
    rock_types.iter().max_by(|a, b| {
        a.base_drying_hours
            .total_cmp(&b.base_drying_hours)
            .then(a.is_wet_sensitive.cmp(&b.is_wet_sensitive))
    })
}
