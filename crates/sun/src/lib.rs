//! Sun exposure for climbing areas and individual boulders.
//!
//! Two views of the same question, "how much sun does this rock get?":
//!
//! - [`SunExposureProfile::exposure_factor`] turns a location's aggregate
//!   geometry (aspect mix, slab/overhang share, tree canopy) into a drying
//!   multiplier.
//! - [`direct_sun_hours`] integrates the astronomical sun path against a
//!   single face's compass aspect at a GPS position.
//!
//! Nothing here is cached; solar geometry is cheap and time-dependent, so it
//! is recomputed on every call.

pub mod aspect;
pub mod error;
pub mod exposure;
pub mod position;
pub mod profile;

pub use aspect::Aspect;
pub use error::SunError;
pub use exposure::{ExposureConfig, direct_sun_hours};
pub use position::{SolarPosition, solar_position};
pub use profile::{SunExposureProfile, tree_cover_penalty};
