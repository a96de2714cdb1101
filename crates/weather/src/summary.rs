//! Summary statistics over weather series.

use chrono::{DateTime, Utc};

use crate::sample::WeatherSample;

/// Sample standard deviation of temperature (N-1 denominator).
///
/// Returns 0.0 with fewer than two samples.
pub fn temperature_spread(samples: &[WeatherSample]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = samples.iter().map(|s| s.temperature).sum::<f64>() / nf;
    let var = samples
        .iter()
        .map(|s| (s.temperature - mean) * (s.temperature - mean))
        .sum::<f64>()
        / (nf - 1.0);
    var.sqrt()
}

/// Least-squares temperature slope (°F per hour) over the last `window`
/// samples.
///
/// Time is measured from the actual timestamps, so gaps are honoured.
/// Returns `None` with fewer than three samples in the window or when all
/// timestamps coincide.
pub fn warming_trend(samples: &[WeatherSample], window: usize) -> Option<f64> {
    let start = samples.len().saturating_sub(window);
    let recent = &samples[start..];
    if recent.len() < 3 {
        return None;
    }

    let t0 = recent[0].timestamp;
    let points: Vec<(f64, f64)> = recent
        .iter()
        .map(|s| ((s.timestamp - t0).num_seconds() as f64 / 3600.0, s.temperature))
        .collect();

    let n = points.len() as f64;
    let mx = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let my = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for &(x, y) in &points {
        sxy += (x - mx) * (y - my);
        sxx += (x - mx) * (x - mx);
    }
    if sxx == 0.0 {
        return None;
    }
    Some(sxy / sxx)
}

/// Total precipitation in samples strictly after `since`.
pub fn precipitation_since(samples: &[WeatherSample], since: DateTime<Utc>) -> f64 {
    samples
        .iter()
        .filter(|s| s.timestamp > since)
        .map(|s| s.precipitation)
        .sum()
}

/// Hours between the oldest and newest sample.
pub fn history_span_hours(samples: &[WeatherSample]) -> f64 {
    match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (last.timestamp - first.timestamp).num_seconds() as f64 / 3600.0,
        _ => 0.0,
    }
}
