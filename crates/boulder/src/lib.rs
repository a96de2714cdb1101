//! Boulder-level refinement of location drying verdicts.
//!
//! A location verdict describes a whole crag. Individual boulders differ in
//! how much sun their face gets and how much canopy shades them, so each
//! boulder's time-to-dry is rescaled from the location's figure.
//!
//! # Pipeline
//!
//! ```text
//!                    ┌──────────────────────┐
//!                    │ location verdict     │
//!                    └──────────┬───────────┘
//!                               │
//!        ┌──────────────────────┼──────────────────────┐
//!        ▼                      ▼                      ▼
//!  ┌────────────┐        ┌────────────┐        ┌──────────────┐
//!  │ tree cover │        │ sun hours  │        │ forecast     │
//!  │ chain      │───────▶│ chain      │        │ replay       │
//!  └─────┬──────┘        └─────┬──────┘        └──────┬───────┘
//!        └───────────┬─────────┘                      │
//!                    ▼                                │
//!           ┌──────────────────┐                      │
//!           │ modifiers +      │◀─────────────────────┘
//!           │ confidence       │
//!           └──────────────────┘
//! ```
//!
//! Both chains try their strategies in order and record which one produced
//! the value together with its confidence penalty. Many boulders sharing a
//! location are refined in parallel with [`refine_boulders`].
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`sun_hours`] | Astronomical, aspect and default sun-hour strategies |
//! | [`tree`] | Tree-coverage resolution |
//! | [`refine`] | Modifiers, confidence and the per-boulder verdict |
//! | [`forecast`] | Hour-by-hour replay of a weather forecast |
//! | [`batch`] | Parallel refinement |

pub mod batch;
pub mod config;
pub mod error;
pub mod forecast;
pub mod refine;
pub mod status;
pub mod sun_hours;
pub mod tree;

pub use batch::refine_boulders;
pub use config::{ForecastConfig, RefineConfig};
pub use error::BoulderError;
pub use forecast::{DryingForecastPeriod, ForecastStart, ForecastStatus, simulate_forecast};
pub use refine::{
    BoulderInput, RefineContext, adjusted_hours_until_dry, refine_boulder, sun_modifier,
    tree_modifier,
};
pub use status::BoulderDryingStatus;
pub use sun_hours::{SunHoursEstimate, SunHoursSource, estimate_sun_hours};
pub use tree::{TreeCoverageEstimate, TreeCoverageSource, resolve_tree_coverage};
