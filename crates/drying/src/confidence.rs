//! Confidence score for a drying verdict.

use crate::{MAX_CONFIDENCE, MIN_CONFIDENCE};

/// Evidence the confidence score is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfidenceInputs {
    /// Hours of weather history available.
    pub history_hours: f64,
    /// Whether a sun-exposure profile was available.
    pub has_sun_profile: bool,
    /// Hours since the last rain event ended, if any rain was seen.
    pub hours_since_rain: Option<f64>,
    /// Standard deviation of recent temperatures (°F).
    pub temperature_spread: f64,
    /// Wet-sensitive rock that is currently wet.
    pub wet_sensitive_wet: bool,
    /// Hours the rock has been dry, if it is dry.
    pub dry_hours: Option<f64>,
}

/// Scores how much the verdict can be trusted, in `[20, 95]`.
///
/// Starts at 75 and adjusts for history length, sun data, time since rain,
/// temperature volatility and extended dry spells.
pub fn confidence_score(inputs: &ConfidenceInputs) -> u8 {
    let mut score: i32 = 75;

    if inputs.history_hours < 24.0 {
        score -= 15;
    } else if inputs.history_hours < 48.0 {
        score -= 8;
    }

    if !inputs.has_sun_profile {
        score -= 10;
    }

    match inputs.hours_since_rain {
        Some(h) if h < 6.0 => score -= 5,
        Some(h) if h > 72.0 => score += 8,
        _ => {}
    }

    if inputs.temperature_spread > 15.0 {
        score -= 8;
    } else if inputs.temperature_spread > 8.0 {
        score -= 4;
    }

    if inputs.wet_sensitive_wet {
        score -= 5;
    }

    if inputs.dry_hours.is_some_and(|h| h > 96.0) {
        score += 10;
    }

    clamp_confidence(score)
}

/// Clamps a raw score into the reported confidence range.
pub fn clamp_confidence(score: i32) -> u8 {
    score.clamp(i32::from(MIN_CONFIDENCE), i32::from(MAX_CONFIDENCE)) as u8
}
