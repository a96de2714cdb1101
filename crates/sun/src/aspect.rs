//! Compass aspect of a rock face.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SunError;

/// The compass direction a face points toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Aspect {
    /// All eight aspects clockwise from north.
    pub const ALL: [Aspect; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Azimuth the face points toward, degrees clockwise from true north.
    pub fn azimuth_deg(self) -> f64 {
        match self {
            Self::N => 0.0,
            Self::NE => 45.0,
            Self::E => 90.0,
            Self::SE => 135.0,
            Self::S => 180.0,
            Self::SW => 225.0,
            Self::W => 270.0,
            Self::NW => 315.0,
        }
    }

    /// Typical hours of direct sun per day when no position is known.
    ///
    /// Northern-hemisphere values: south faces see the most sun, north faces
    /// the least, and afternoon (west) sun edges out morning (east) sun.
    pub fn fallback_daily_sun_hours(self) -> f64 {
        match self {
            Self::S => 8.0,
            Self::SW => 7.0,
            Self::SE => 6.5,
            Self::W => 5.5,
            Self::E => 5.0,
            Self::NW => 3.5,
            Self::NE => 3.0,
            Self::N => 2.0,
        }
    }

    /// Short compass label (`"N"`, `"SW"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Aspect {
    type Err = SunError;

    /// Accepts short labels and full names, case-insensitively
    /// (`"sw"`, `"South-West"`, `"southwest"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "n" | "north" => Ok(Self::N),
            "ne" | "northeast" => Ok(Self::NE),
            "e" | "east" => Ok(Self::E),
            "se" | "southeast" => Ok(Self::SE),
            "s" | "south" => Ok(Self::S),
            "sw" | "southwest" => Ok(Self::SW),
            "w" | "west" => Ok(Self::W),
            "nw" | "northwest" => Ok(Self::NW),
            _ => Err(SunError::UnknownAspect {
                value: s.to_string(),
            }),
        }
    }
}
