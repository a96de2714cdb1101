//! Tree-coverage resolution for a boulder.
//!
//! Strategies, tried in order:
//!
//! 1. the boulder's own cached coverage,
//! 2. the location's sun-exposure profile,
//! 3. a fixed default.
//!
//! A coverage of exactly 0 is treated as "never measured" at every stage.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RefineConfig;

/// Which strategy supplied the tree coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TreeCoverageSource {
    BoulderCache,
    Location,
    Default,
}

impl TreeCoverageSource {
    /// Strategies in the order they are tried.
    pub const CHAIN: [TreeCoverageSource; 3] = [Self::BoulderCache, Self::Location, Self::Default];

    /// Confidence points lost when this strategy is used.
    pub fn penalty(self) -> u8 {
        match self {
            Self::BoulderCache => 0,
            Self::Location => 15,
            Self::Default => 20,
        }
    }
}

/// Resolved tree coverage and where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeCoverageEstimate {
    pub percent: f64,
    pub source: TreeCoverageSource,
}

impl TreeCoverageEstimate {
    /// Confidence points lost for this estimate.
    pub fn penalty(&self) -> u8 {
        self.source.penalty()
    }
}

/// Picks the first usable tree coverage from the strategy chain.
pub fn resolve_tree_coverage(
    boulder_cached: Option<f64>,
    location: Option<f64>,
    config: &RefineConfig,
) -> TreeCoverageEstimate {
    let known = |v: Option<f64>| v.filter(|p| p.is_finite() && *p > 0.0).map(|p| p.min(100.0));

    let estimate = TreeCoverageSource::CHAIN
        .into_iter()
        .find_map(|source| {
            let percent = match source {
                TreeCoverageSource::BoulderCache => known(boulder_cached),
                TreeCoverageSource::Location => known(location),
                TreeCoverageSource::Default => Some(config.default_tree_coverage_percent()),
            }?;
            Some(TreeCoverageEstimate { percent, source })
        })
        .unwrap_or(TreeCoverageEstimate {
            percent: config.default_tree_coverage_percent(),
            source: TreeCoverageSource::Default,
        });
    debug!(percent = estimate.percent, source = ?estimate.source, "tree coverage resolved");
    estimate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boulder_cache_wins() {
        let e = resolve_tree_coverage(Some(45.0), Some(10.0), &RefineConfig::new());
        assert_eq!(e.source, TreeCoverageSource::BoulderCache);
        assert_eq!(e.percent, 45.0);
        assert_eq!(e.penalty(), 0);
    }

    #[test]
    fn zero_cache_falls_through_to_location() {
        let e = resolve_tree_coverage(Some(0.0), Some(60.0), &RefineConfig::new());
        assert_eq!(e.source, TreeCoverageSource::Location);
        assert_eq!(e.percent, 60.0);
        assert_eq!(e.penalty(), 15);
    }

    #[test]
    fn nothing_known_uses_default() {
        let e = resolve_tree_coverage(None, Some(0.0), &RefineConfig::new());
        assert_eq!(e.source, TreeCoverageSource::Default);
        assert_eq!(e.percent, 30.0);
        assert_eq!(e.penalty(), 20);
    }

    #[test]
    fn garbage_cache_is_ignored() {
        let e = resolve_tree_coverage(Some(f64::NAN), None, &RefineConfig::new());
        assert_eq!(e.source, TreeCoverageSource::Default);
    }
}
