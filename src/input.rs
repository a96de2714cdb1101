//! JSON request documents and file/stdout helpers.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use rockdry_boulder::BoulderInput;
use rockdry_drying::{LocationInput, RockType};
use rockdry_sun::SunExposureProfile;
use rockdry_weather::WeatherSample;

/// Everything the location engine needs, as one JSON document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    #[serde(default)]
    pub rock_types: Vec<RockType>,
    pub current: WeatherSample,
    #[serde(default)]
    pub history: Vec<WeatherSample>,
    #[serde(default)]
    pub sun_profile: Option<SunExposureProfile>,
    #[serde(default)]
    pub has_seepage_risk: bool,
    #[serde(default)]
    pub snow_depth_in: Option<f64>,
}

impl LocationRequest {
    /// Borrows the request as engine input.
    pub fn as_input(&self) -> LocationInput<'_> {
        LocationInput {
            rock_types: &self.rock_types,
            current: &self.current,
            history: &self.history,
            sun_profile: self.sun_profile.as_ref(),
            has_seepage_risk: self.has_seepage_risk,
            snow_depth_in: self.snow_depth_in,
        }
    }
}

/// A location request plus the boulders to refine against it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoulderRequest {
    pub location: LocationRequest,
    #[serde(default)]
    pub boulders: Vec<BoulderInput>,
    #[serde(default)]
    pub forecast: Option<Vec<WeatherSample>>,
    /// Start of the sun window and forecast replay. Defaults to the
    /// current sample's timestamp.
    #[serde(default)]
    pub reference_time: Option<DateTime<Utc>>,
}

/// Reads and parses a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse JSON request: {}", path.display()))
}

/// Writes pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    match path {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("failed to write output file: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write to stdout")
        }
    }
}
