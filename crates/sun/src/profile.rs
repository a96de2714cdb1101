//! Location-level sun exposure geometry.

use serde::{Deserialize, Serialize};

use crate::error::SunError;

/// Aggregate exposure geometry for a climbing area.
///
/// All values are percentages in `[0, 100]`. The four aspect shares should
/// sum to about 100; slab and overhang shares sum to at most 100 (the
/// remainder is vertical rock).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SunExposureProfile {
    pub south_facing_percent: f64,
    pub west_facing_percent: f64,
    pub east_facing_percent: f64,
    pub north_facing_percent: f64,
    pub slab_percent: f64,
    pub overhang_percent: f64,
    pub tree_coverage_percent: f64,
}

/// Tolerance on the aspect-share sum.
const ASPECT_SUM_TOLERANCE: f64 = 5.0;

impl SunExposureProfile {
    /// Drying multiplier from aspect, rock angle and tree canopy.
    ///
    /// South and west faces, and slabs, dry faster; north faces and
    /// overhangs slower. The result is clamped to `[0.5, 1.5]` both before
    /// and after the tree-cover penalty.
    pub fn exposure_factor(&self) -> f64 {
        let aspect_bonus = self.south_facing_percent / 100.0 * 0.30
            + self.west_facing_percent / 100.0 * 0.15
            + self.east_facing_percent / 100.0 * 0.05
            - self.north_facing_percent / 100.0 * 0.15;
        let angle_bonus = self.slab_percent / 100.0 * 0.20 - self.overhang_percent / 100.0 * 0.10;

        let factor = (1.0 + aspect_bonus + angle_bonus).clamp(0.5, 1.5);
        (factor * tree_cover_penalty(self.tree_coverage_percent)).clamp(0.5, 1.5)
    }

    /// Checks that the profile is internally consistent.
    ///
    /// The drying engine accepts any profile; this is for callers that want
    /// to reject bad reference data at load time.
    pub fn validate(&self) -> Result<(), SunError> {
        for (value, name) in [
            (self.south_facing_percent, "south_facing_percent"),
            (self.west_facing_percent, "west_facing_percent"),
            (self.east_facing_percent, "east_facing_percent"),
            (self.north_facing_percent, "north_facing_percent"),
            (self.slab_percent, "slab_percent"),
            (self.overhang_percent, "overhang_percent"),
            (self.tree_coverage_percent, "tree_coverage_percent"),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(SunError::InvalidProfile {
                    reason: format!("{name} must be in [0, 100], got {value}"),
                });
            }
        }

        let aspect_sum = self.south_facing_percent
            + self.west_facing_percent
            + self.east_facing_percent
            + self.north_facing_percent;
        if (aspect_sum - 100.0).abs() > ASPECT_SUM_TOLERANCE {
            return Err(SunError::InvalidProfile {
                reason: format!("aspect shares sum to {aspect_sum}, expected ~100"),
            });
        }

        let angle_sum = self.slab_percent + self.overhang_percent;
        if angle_sum > 100.0 {
            return Err(SunError::InvalidProfile {
                reason: format!("slab + overhang is {angle_sum}, must be <= 100"),
            });
        }

        Ok(())
    }
}

/// Step penalty for canopy shade.
pub fn tree_cover_penalty(tree_coverage_percent: f64) -> f64 {
    if tree_coverage_percent > 75.0 {
        0.7
    } else if tree_coverage_percent > 50.0 {
        0.8
    } else if tree_coverage_percent > 25.0 {
        0.9
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn facing(s: f64, w: f64, e: f64, n: f64) -> SunExposureProfile {
        SunExposureProfile {
            south_facing_percent: s,
            west_facing_percent: w,
            east_facing_percent: e,
            north_facing_percent: n,
            ..Default::default()
        }
    }

    #[test]
    fn all_south_open_slab() {
        let p = SunExposureProfile {
            slab_percent: 100.0,
            ..facing(100.0, 0.0, 0.0, 0.0)
        };
        // 1 + 0.30 + 0.20 = 1.5
        assert_relative_eq!(p.exposure_factor(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn all_north_overhang() {
        let p = SunExposureProfile {
            overhang_percent: 100.0,
            ..facing(0.0, 0.0, 0.0, 100.0)
        };
        // 1 - 0.15 - 0.10 = 0.75
        assert_relative_eq!(p.exposure_factor(), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn mixed_aspects() {
        let p = facing(40.0, 30.0, 20.0, 10.0);
        // 1 + 0.12 + 0.045 + 0.01 - 0.015 = 1.16
        assert_relative_eq!(p.exposure_factor(), 1.16, epsilon = 1e-12);
    }

    #[test]
    fn heavy_canopy_hits_lower_clamp() {
        let p = SunExposureProfile {
            overhang_percent: 100.0,
            tree_coverage_percent: 90.0,
            ..facing(0.0, 0.0, 0.0, 100.0)
        };
        // 0.75 * 0.7 = 0.525
        assert_relative_eq!(p.exposure_factor(), 0.525, epsilon = 1e-12);
        let p = SunExposureProfile {
            north_facing_percent: 100.0,
            overhang_percent: 100.0,
            tree_coverage_percent: 100.0,
            ..Default::default()
        };
        assert!(p.exposure_factor() >= 0.5);
    }

    #[test]
    fn tree_penalty_steps() {
        assert_eq!(tree_cover_penalty(0.0), 1.0);
        assert_eq!(tree_cover_penalty(25.0), 1.0);
        assert_eq!(tree_cover_penalty(26.0), 0.9);
        assert_eq!(tree_cover_penalty(51.0), 0.8);
        assert_eq!(tree_cover_penalty(76.0), 0.7);
    }

    #[test]
    fn validate_accepts_consistent_profile() {
        let p = SunExposureProfile {
            slab_percent: 30.0,
            overhang_percent: 20.0,
            tree_coverage_percent: 10.0,
            ..facing(50.0, 20.0, 20.0, 10.0)
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_sums_and_ranges() {
        assert!(facing(80.0, 40.0, 20.0, 0.0).validate().is_err());
        let p = SunExposureProfile {
            slab_percent: 70.0,
            overhang_percent: 40.0,
            ..facing(100.0, 0.0, 0.0, 0.0)
        };
        assert!(p.validate().is_err());
        let p = SunExposureProfile {
            tree_coverage_percent: -1.0,
            ..facing(100.0, 0.0, 0.0, 0.0)
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{"southFacingPercent":60,"westFacingPercent":20,
            "eastFacingPercent":10,"northFacingPercent":10,"slabPercent":0,
            "overhangPercent":0,"treeCoveragePercent":40}"#;
        let p: SunExposureProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.south_facing_percent, 60.0);
        assert_eq!(p.tree_coverage_percent, 40.0);
    }
}
