//! Location-level rock drying engine.
//!
//! Turns a location's rock types, current conditions, weather history and
//! sun-exposure geometry into a single wet/dry verdict with an estimate of
//! the hours left until the rock is climbable.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐   ┌────────────────┐   ┌──────────────────┐   ┌──────────────┐
//!  │ classify     │──▶│ required time  │──▶│ time-weighted    │──▶│ status +     │
//!  │ (snow/ice/   │   │ (rock, rain,   │   │ progress / melt  │   │ confidence   │
//!  │  rain/dry)   │   │  conditions)   │   │ estimate         │   │              │
//!  └──────────────┘   └────────────────┘   └──────────────────┘   └──────────────┘
//! ```
//!
//! The engine is pure: every input is an already-fetched snapshot and
//! nothing is retained between calls, so it can be called from any number
//! of threads at once.

pub mod confidence;
pub mod config;
pub mod engine;
pub mod error;
pub mod melt;
pub mod power;
pub mod requirement;
pub mod rock;
pub mod status;

pub use confidence::{ConfidenceInputs, confidence_score};
pub use config::DryingConfig;
pub use engine::{LocationInput, compute_location_status};
pub use error::DryingError;
pub use melt::{
    MeltConditions, MeltEstimate, MeltKind, MeltMethod, Season, SeasonRule, SeasonalMeltFallback,
    estimate_melt,
};
pub use power::{DryingProgress, drying_power, drying_progress, weather_multiplier};
pub use requirement::required_drying_hours;
pub use rock::{RockType, primary_rock_type};
pub use status::{DryingCondition, DryingStatus, RockDryingStatus};

/// Lowest confidence score ever reported.
pub const MIN_CONFIDENCE: u8 = 20;

/// Highest confidence score ever reported.
pub const MAX_CONFIDENCE: u8 = 95;
