//! Hour-by-hour replay of a weather forecast into wet and dry periods.
//!
//! The replay is a two-state machine. A dry boulder turns wet on the first
//! hour with measurable rain. A wet boulder accumulates rain, and each new
//! rainy hour resets the clock; it turns dry once enough rain-free hours
//! have passed to cover the drying time for the rain it has taken. More rain
//! never shortens the drying still owed when it falls.

use chrono::{DateTime, Duration, Utc};
use rockdry_weather::{WeatherSample, sampling_interval_hours, validate_series};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ForecastConfig;
use crate::error::BoulderError;

/// Condition of a forecast period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastStatus {
    Dry,
    /// Wet, but at least half way through drying.
    Drying,
    Wet,
}

/// A contiguous stretch of the forecast with one wet/dry state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryingForecastPeriod {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_dry: bool,
    pub status: ForecastStatus,
    /// Drying still needed when the period closes.
    pub hours_until_dry: f64,
    /// Rain that fell during the period (inches).
    pub rain_amount: f64,
}

impl DryingForecastPeriod {
    /// Length of the period in hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end_time - self.start_time).num_seconds() as f64 / 3600.0
    }
}

/// State of the boulder when the forecast begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastStart {
    /// Remaining drying hours now; 0 for a dry boulder.
    pub hours_until_dry: f64,
    /// Hours for the rock to dry after a light rain.
    pub base_drying_hours: f64,
}

impl ForecastStart {
    fn is_wet(&self) -> bool {
        self.hours_until_dry > 0.0
    }
}

struct OpenPeriod {
    start: DateTime<Utc>,
    is_dry: bool,
    rain: f64,
    drying_hours: f64,
    hours_since_rain: f64,
}

impl OpenPeriod {
    fn dry(start: DateTime<Utc>) -> Self {
        Self {
            start,
            is_dry: true,
            rain: 0.0,
            drying_hours: 0.0,
            hours_since_rain: 0.0,
        }
    }

    fn remaining(&self) -> f64 {
        if self.is_dry {
            0.0
        } else {
            (self.drying_hours - self.hours_since_rain).max(0.0)
        }
    }

    fn status(&self) -> ForecastStatus {
        if self.is_dry {
            ForecastStatus::Dry
        } else if self.drying_hours <= 0.0 || self.hours_since_rain / self.drying_hours >= 0.5 {
            ForecastStatus::Drying
        } else {
            ForecastStatus::Wet
        }
    }
}

/// Accumulates closed periods, dropping ones shorter than the minimum.
struct Timeline {
    periods: Vec<DryingForecastPeriod>,
    min_period_hours: f64,
}

impl Timeline {
    /// Closes `open` at `end` and returns where the next period starts.
    ///
    /// A period shorter than the minimum is discarded and the next period
    /// inherits its start. A period of the same kind as the previous one is
    /// merged into it.
    fn close(&mut self, open: &OpenPeriod, end: DateTime<Utc>) -> DateTime<Utc> {
        let period = DryingForecastPeriod {
            start_time: open.start,
            end_time: end,
            is_dry: open.is_dry,
            status: open.status(),
            hours_until_dry: open.remaining(),
            rain_amount: open.rain,
        };
        if period.duration_hours() < self.min_period_hours {
            debug!(start = %period.start_time, dry = period.is_dry, "discarding short period");
            return open.start;
        }
        match self.periods.last_mut() {
            Some(last) if last.is_dry == period.is_dry && last.end_time == period.start_time => {
                last.end_time = period.end_time;
                last.rain_amount += period.rain_amount;
                last.hours_until_dry = period.hours_until_dry;
                last.status = period.status;
            }
            _ => self.periods.push(period),
        }
        end
    }

    /// Closes the final period at the horizon.
    ///
    /// A short trailing period is folded into its predecessor so the
    /// timeline still reaches the horizon.
    fn finish(mut self, open: &OpenPeriod, horizon: DateTime<Utc>) -> Vec<DryingForecastPeriod> {
        let next = self.close(open, horizon);
        if next != horizon
            && let Some(last) = self.periods.last_mut()
        {
            last.end_time = horizon;
        } else if next != horizon && horizon > open.start {
            self.periods.push(DryingForecastPeriod {
                start_time: open.start,
                end_time: horizon,
                is_dry: open.is_dry,
                status: open.status(),
                hours_until_dry: open.remaining(),
                rain_amount: open.rain,
            });
        }
        self.periods
    }
}

/// Replays `forecast` from `start` and returns the wet/dry periods.
///
/// Periods are contiguous: each period's end is the next one's start, the
/// first starts at the first forecast sample and the last ends one sampling
/// interval after the final sample.
///
/// # Errors
///
/// Returns [`BoulderError::InvalidForecast`] when the forecast is empty or
/// malformed, and [`BoulderError::InvalidConfig`] for an invalid config.
#[tracing::instrument(skip(forecast, config), fields(hours = forecast.len()))]
pub fn simulate_forecast(
    forecast: &[WeatherSample],
    start: ForecastStart,
    config: &ForecastConfig,
) -> Result<Vec<DryingForecastPeriod>, BoulderError> {
    config.validate()?;
    validate_series(forecast)?;

    let interval = sampling_interval_hours(forecast);
    let step = Duration::seconds((interval * 3600.0).round() as i64);
    let drying_hours_for = |rain: f64| {
        start.base_drying_hours
            + (rain - config.heavy_rain_in()).max(0.0) * config.hours_per_heavy_inch()
    };

    let mut timeline = Timeline {
        periods: Vec::new(),
        min_period_hours: config.min_period_hours(),
    };
    let first = forecast[0].timestamp;
    let mut open = if start.is_wet() {
        OpenPeriod {
            start: first,
            is_dry: false,
            rain: 0.0,
            drying_hours: start.hours_until_dry,
            hours_since_rain: 0.0,
        }
    } else {
        OpenPeriod::dry(first)
    };

    for sample in forecast {
        let rainy = sample.precipitation >= config.wet_threshold_in();
        if open.is_dry {
            if rainy {
                let next_start = timeline.close(&open, sample.timestamp);
                debug!(at = %sample.timestamp, "forecast turns wet");
                open = OpenPeriod {
                    start: next_start,
                    is_dry: false,
                    rain: sample.precipitation,
                    drying_hours: drying_hours_for(sample.precipitation),
                    hours_since_rain: 0.0,
                };
            }
            continue;
        }

        if rainy {
            open.rain += sample.precipitation;
            open.drying_hours = open.remaining().max(drying_hours_for(open.rain));
            open.hours_since_rain = 0.0;
        } else {
            open.hours_since_rain += interval;
            if open.hours_since_rain >= open.drying_hours {
                let end = sample.timestamp + step;
                let next_start = timeline.close(&open, end);
                debug!(at = %end, "forecast dries out");
                open = OpenPeriod::dry(next_start);
            }
        }
    }

    let horizon = forecast[forecast.len() - 1].timestamp + step;
    Ok(timeline.finish(&open, horizon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap()
    }

    fn hourly(precip: &[f64]) -> Vec<WeatherSample> {
        precip
            .iter()
            .enumerate()
            .map(|(h, &p)| WeatherSample::new(t0() + Duration::hours(h as i64), 60.0, p, 60.0, 5.0, 50.0))
            .collect()
    }

    fn dry_start(base: f64) -> ForecastStart {
        ForecastStart {
            hours_until_dry: 0.0,
            base_drying_hours: base,
        }
    }

    #[test]
    fn dry_forecast_is_one_dry_period() {
        let periods = simulate_forecast(&hourly(&[0.0; 48]), dry_start(12.0), &ForecastConfig::new()).unwrap();
        assert_eq!(periods.len(), 1);
        assert!(periods[0].is_dry);
        assert_eq!(periods[0].status, ForecastStatus::Dry);
        assert_eq!(periods[0].start_time, t0());
        assert_eq!(periods[0].end_time, t0() + Duration::hours(48));
    }

    #[test]
    fn rain_then_drying() {
        let mut p = vec![0.0; 30];
        p[5] = 0.2;
        p[6] = 0.1;
        let periods = simulate_forecast(&hourly(&p), dry_start(10.0), &ForecastConfig::new()).unwrap();
        assert_eq!(periods.len(), 3);
        assert!(periods[0].is_dry);
        assert_eq!(periods[0].end_time, t0() + Duration::hours(5));
        assert!(!periods[1].is_dry);
        assert!((periods[1].rain_amount - 0.3).abs() < 1e-12);
        // last rain at hour 6, ten dry hours 7..=16, dry from hour 17
        assert_eq!(periods[1].end_time, t0() + Duration::hours(17));
        assert_eq!(periods[1].hours_until_dry, 0.0);
        assert!(periods[2].is_dry);
        assert_eq!(periods[2].end_time, t0() + Duration::hours(30));
    }

    #[test]
    fn heavy_rain_extends_drying() {
        let mut p = vec![0.0; 48];
        p[0] = 1.0;
        let periods = simulate_forecast(&hourly(&p), dry_start(10.0), &ForecastConfig::new()).unwrap();
        // 10 + (1.0 - 0.5) * 12 = 16 dry hours after hour 0
        assert_eq!(periods[0].start_time, t0());
        assert!(!periods[0].is_dry);
        assert_eq!(periods[0].end_time, t0() + Duration::hours(17));
    }

    #[test]
    fn wet_at_horizon_reports_remaining() {
        let mut p = vec![0.0; 6];
        p[0] = 0.3;
        let periods = simulate_forecast(&hourly(&p), dry_start(20.0), &ForecastConfig::new()).unwrap();
        assert_eq!(periods.len(), 1);
        let wet = &periods[0];
        assert!(!wet.is_dry);
        assert_eq!(wet.hours_until_dry, 15.0);
        assert_eq!(wet.status, ForecastStatus::Wet);
        assert_eq!(wet.end_time, t0() + Duration::hours(6));
    }

    #[test]
    fn currently_wet_starts_with_remaining_hours() {
        let start = ForecastStart {
            hours_until_dry: 4.0,
            base_drying_hours: 24.0,
        };
        let periods = simulate_forecast(&hourly(&[0.0; 12]), start, &ForecastConfig::new()).unwrap();
        assert_eq!(periods.len(), 2);
        assert!(!periods[0].is_dry);
        assert_eq!(periods[0].status, ForecastStatus::Drying);
        assert_eq!(periods[0].end_time, t0() + Duration::hours(4));
        assert!(periods[1].is_dry);
    }

    fn first_dry_hour(periods: &[DryingForecastPeriod]) -> Option<DateTime<Utc>> {
        periods.iter().find(|p| p.is_dry).map(|p| p.start_time)
    }

    #[test]
    fn rain_never_dries_a_wet_boulder_sooner() {
        let start = ForecastStart {
            hours_until_dry: 100.0,
            base_drying_hours: 24.0,
        };
        let config = ForecastConfig::new();
        let plain = simulate_forecast(&hourly(&[0.0; 144]), start, &config).unwrap();
        let plain_dry = first_dry_hour(&plain).expect("dries within the horizon");
        assert_eq!(plain_dry, t0() + Duration::hours(100));

        for rain_hour in [0, 10, 50, 90] {
            let mut p = vec![0.0; 144];
            p[rain_hour] = 0.02;
            let rainy = simulate_forecast(&hourly(&p), start, &config).unwrap();
            let rainy_dry = first_dry_hour(&rainy).expect("dries within the horizon");
            assert!(
                rainy_dry >= plain_dry,
                "rain at hour {rain_hour}: dry at {rainy_dry}, without rain {plain_dry}"
            );
        }

        // a drizzle at hour 0 keeps the full 100h owed, counted after the rain
        let mut p = vec![0.0; 144];
        p[0] = 0.02;
        let rainy = simulate_forecast(&hourly(&p), start, &config).unwrap();
        assert_eq!(first_dry_hour(&rainy), Some(t0() + Duration::hours(101)));
    }

    #[test]
    fn heavy_rain_still_extends_a_short_remaining_time() {
        let start = ForecastStart {
            hours_until_dry: 2.0,
            base_drying_hours: 10.0,
        };
        let mut p = vec![0.0; 48];
        p[0] = 1.0;
        let periods = simulate_forecast(&hourly(&p), start, &ForecastConfig::new()).unwrap();
        // max(2, 10 + (1.0 - 0.5) * 12) = 16 dry hours after hour 0
        assert_eq!(first_dry_hour(&periods), Some(t0() + Duration::hours(17)));
    }

    #[test]
    fn short_periods_are_absorbed() {
        let samples: Vec<_> = (0..24)
            .map(|i| {
                let p = if i == 8 { 0.05 } else { 0.0 };
                WeatherSample::new(t0() + Duration::minutes(15 * i), 60.0, p, 60.0, 5.0, 50.0)
            })
            .collect();
        let start = dry_start(0.25);
        let periods = simulate_forecast(&samples, start, &ForecastConfig::new()).unwrap();
        assert_eq!(periods.len(), 1, "{periods:?}");
        assert_eq!(periods[0].start_time, t0());
        assert_eq!(periods[0].end_time, t0() + Duration::hours(6));
    }

    #[test]
    fn empty_forecast_is_an_error() {
        assert!(matches!(
            simulate_forecast(&[], dry_start(10.0), &ForecastConfig::new()),
            Err(BoulderError::InvalidForecast(_))
        ));
    }
}
