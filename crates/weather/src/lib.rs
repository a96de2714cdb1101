//! # rockdry-weather
//!
//! Weather samples and the time-series primitives every other rockdry crate
//! builds on.
//!
//! ## Architecture
//!
//! ```text
//!  ┌──────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//!  │  WeatherSample   │────▶│ validate_series  │────▶│ find_last_rain   │
//!  │  (one reading)   │     │ (caller bugs)    │     │ _event           │
//!  └──────────────────┘     └──────────────────┘     └──────────────────┘
//!                                    │
//!                                    ▼
//!                           ┌──────────────────┐
//!                           │  summary helpers │
//!                           │ (spread, trend)  │
//!                           └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use rockdry_weather::{WeatherSample, find_last_rain_event};
//!
//! let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
//! let history: Vec<WeatherSample> = (0..6)
//!     .map(|h| {
//!         let precip = if (2..4).contains(&h) { 0.2 } else { 0.0 };
//!         WeatherSample::new(t0 + Duration::hours(h), 60.0, precip, 70.0, 5.0, 40.0)
//!     })
//!     .collect();
//!
//! let event = find_last_rain_event(&history, 0.01).unwrap();
//! assert!((event.total_rain - 0.4).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `sample` | Single weather reading |
//! | `series` | Series validation |
//! | `rain_event` | Most recent contiguous precipitation event |
//! | `summary` | Temperature spread, warming trend, precipitation totals |
//! | `error` | Error types |

mod error;
mod rain_event;
mod sample;
mod series;
mod summary;

pub use error::WeatherError;
pub use rain_event::{RainEvent, find_last_rain_event};
pub use sample::WeatherSample;
pub use series::{sampling_interval_hours, validate_series};
pub use summary::{
    history_span_hours, precipitation_since, temperature_spread, warming_trend,
};

/// Precipitation (inches per interval) above which a sample counts as wet.
pub const DEFAULT_WET_THRESHOLD_IN: f64 = 0.01;

/// Freezing point of water in degrees Fahrenheit.
pub const FREEZING_F: f64 = 32.0;
