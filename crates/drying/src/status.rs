//! Location drying verdict.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Severity of a drying verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DryingStatus {
    Good,
    Fair,
    Poor,
    Critical,
}

/// Engine state that produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DryingCondition {
    Raining,
    Snow,
    Ice,
    Drying,
    Dry,
    /// No rock type data for the location.
    Unknown,
}

/// Wet/dry verdict for a climbing location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RockDryingStatus {
    pub is_wet: bool,
    pub is_safe: bool,
    pub is_wet_sensitive: bool,
    /// Zero exactly when the rock is dry.
    pub hours_until_dry: f64,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_rain_timestamp: Option<DateTime<Utc>>,
    pub status: DryingStatus,
    pub message: String,
    pub rock_types: Vec<String>,
    #[serde(default)]
    pub primary_rock_type: Option<String>,
    #[serde(default)]
    pub primary_group_name: Option<String>,
    pub confidence_score: u8,
    pub condition: DryingCondition,
}

impl RockDryingStatus {
    /// Verdict for a location without rock type data.
    pub fn unknown(last_rain_timestamp: Option<DateTime<Utc>>) -> Self {
        Self {
            is_wet: false,
            is_safe: true,
            is_wet_sensitive: false,
            hours_until_dry: 0.0,
            last_rain_timestamp,
            status: DryingStatus::Good,
            message: "No rock type data for this location; assuming dry".to_string(),
            rock_types: Vec::new(),
            primary_rock_type: None,
            primary_group_name: None,
            confidence_score: 30,
            condition: DryingCondition::Unknown,
        }
    }

    /// Name used in messages.
    pub fn rock_label(&self) -> &str {
        self.primary_rock_type.as_deref().unwrap_or("Rock")
    }
}

/// Whether climbing is safe given the verdict.
///
/// Dry rock is always safe. Wet rock is unsafe when it is wet-sensitive or
/// covered in snow or ice.
pub fn is_safe(is_wet: bool, is_wet_sensitive: bool, condition: DryingCondition) -> bool {
    !is_wet
        || (!is_wet_sensitive && matches!(condition, DryingCondition::Raining | DryingCondition::Drying))
}

/// Human-readable message for a verdict.
pub fn status_message(
    rock: &str,
    condition: DryingCondition,
    is_wet_sensitive: bool,
    hours_until_dry: f64,
) -> String {
    if is_wet_sensitive && condition != DryingCondition::Dry {
        return format!(
            "DO NOT CLIMB: {rock} is wet-sensitive and still wet. Climbing now can \
             permanently break holds. About {hours_until_dry:.1} hours until dry."
        );
    }
    match condition {
        DryingCondition::Raining => {
            format!("Currently raining. {rock} needs about {hours_until_dry:.1} hours to dry.")
        }
        DryingCondition::Snow => format!(
            "Snow on the rock. About {hours_until_dry:.0} hours to melt and dry."
        ),
        DryingCondition::Ice => format!(
            "Ice likely after recent precipitation below freezing. About \
             {hours_until_dry:.0} hours to thaw and dry."
        ),
        DryingCondition::Drying => {
            format!("{rock} is drying. About {hours_until_dry:.1} hours until dry.")
        }
        DryingCondition::Dry => format!("{rock} is dry. Good to climb."),
        DryingCondition::Unknown => {
            "No rock type data for this location; assuming dry".to_string()
        }
    }
}

/// Rounds wet hours up to the next tenth, never below 0.1.
pub fn round_up_tenth(hours: f64) -> f64 {
    (((hours * 10.0) - 1e-9).ceil() / 10.0).max(0.1)
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        Some(Raw::Other(_)) | None => None,
    })
}
