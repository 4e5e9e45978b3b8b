//! Static algorithm registry: display name → factory.
//!
//! Consumers (CLI, UIs) enumerate `Algorithm::ALL`, parse a name with `FromStr`,
//! and build a ready-to-run instance bound to a point set.

use std::fmt;
use std::str::FromStr;

use crate::algo::{ConvexHull, GiftWrapping, GrahamScan, MonotoneChain, QuickHull};
use crate::types::{HullCfg, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    GiftWrapping,
    GrahamScan,
    MonotoneChain,
    QuickHull,
}

impl Algorithm {
    /// Every registered algorithm, in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::GiftWrapping,
        Algorithm::GrahamScan,
        Algorithm::MonotoneChain,
        Algorithm::QuickHull,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::GiftWrapping => "GiftWrapping",
            Algorithm::GrahamScan => "GrahamScan",
            Algorithm::MonotoneChain => "MonotoneChain",
            Algorithm::QuickHull => "QuickHull",
        }
    }

    pub fn build(self, points: impl Into<Vec<Point>>) -> Box<dyn ConvexHull> {
        self.build_with(points, HullCfg::default())
    }

    /// Build with explicit tolerances; algorithms without tunables ignore `cfg`.
    pub fn build_with(self, points: impl Into<Vec<Point>>, cfg: HullCfg) -> Box<dyn ConvexHull> {
        match self {
            Algorithm::GiftWrapping => Box::new(GiftWrapping::with_cfg(points, cfg)),
            Algorithm::GrahamScan => Box::new(GrahamScan::with_cfg(points, cfg)),
            Algorithm::MonotoneChain => Box::new(MonotoneChain::new(points)),
            Algorithm::QuickHull => Box::new(QuickHull::new(points)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected one of GiftWrapping, GrahamScan, MonotoneChain, QuickHull)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Case-insensitive; ignores `-`, `_` and spaces ("graham-scan", "quick_hull").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().to_ascii_lowercase() == key)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// One instance of every registered algorithm, each owning a copy of `points`.
pub fn instantiate_all(points: &[Point]) -> Vec<(&'static str, Box<dyn ConvexHull>)> {
    Algorithm::ALL
        .into_iter()
        .map(|a| (a.name(), a.build(points.to_vec())))
        .collect()
}
