//! Reconstruction of the most recent contiguous precipitation event.
//!
//! Rain is modelled as discrete events rather than independent readings:
//! 0.3in over 30 minutes and 0.3in over 12 hours carry the same total but
//! very different intensity, and therefore different drying requirements.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::debug;

use crate::sample::WeatherSample;
use crate::series::sampling_interval_hours;

/// A maximal contiguous run of wet samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RainEvent {
    /// Timestamp of the oldest wet sample in the run.
    pub start_time: DateTime<Utc>,
    /// End of the most recent wet sample's interval.
    pub end_time: DateTime<Utc>,
    /// Total precipitation over the event (inches).
    pub total_rain: f64,
    /// Event length in hours, including the last sample's interval.
    pub duration_hours: f64,
    /// Highest single-sample precipitation, normalised to inches per hour.
    pub max_hourly_rate: f64,
    /// `total_rain / duration_hours`.
    pub avg_hourly_rate: f64,
}

impl RainEvent {
    /// Hours between the end of this event and `now`, floored at zero.
    pub fn hours_since_end(&self, now: DateTime<Utc>) -> f64 {
        ((now - self.end_time).num_seconds() as f64 / 3600.0).max(0.0)
    }
}

/// Finds the most recent rain event in a chronologically ordered series.
///
/// Scans from the newest sample backwards, skipping trailing dry samples.
/// Wet samples (precipitation strictly above `wet_threshold`) are
/// accumulated until the first dry sample closes the event.
///
/// Returns `None` when no sample exceeds the threshold.
pub fn find_last_rain_event(history: &[WeatherSample], wet_threshold: f64) -> Option<RainEvent> {
    let interval = sampling_interval_hours(history);

    let newest_wet = history.iter().rposition(|s| s.is_wet(wet_threshold))?;

    let mut total_rain = 0.0;
    let mut max_sample = 0.0_f64;
    let mut oldest_wet = newest_wet;
    for i in (0..=newest_wet).rev() {
        let s = &history[i];
        if !s.is_wet(wet_threshold) {
            break;
        }
        total_rain += s.precipitation;
        max_sample = max_sample.max(s.precipitation);
        oldest_wet = i;
    }

    let start_time = history[oldest_wet].timestamp;
    let end_time =
        history[newest_wet].timestamp + Duration::seconds((interval * 3600.0).round() as i64);
    let duration_hours = (end_time - start_time).num_seconds() as f64 / 3600.0;

    let event = RainEvent {
        start_time,
        end_time,
        total_rain,
        duration_hours,
        max_hourly_rate: max_sample / interval,
        avg_hourly_rate: total_rain / duration_hours,
    };
    debug!(
        total_rain = event.total_rain,
        duration_hours = event.duration_hours,
        samples = newest_wet - oldest_wet + 1,
        "found rain event"
    );
    Some(event)
}
