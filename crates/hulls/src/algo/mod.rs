//! Hull algorithms behind one contract.
//!
//! Purpose
//! - `ConvexHull` exposes a batch `run` and a lazy `run_incremental` trace.
//! - Each algorithm is an independent type owning its point set; the
//!   `registry` selects them by name.
//!
//! Conventions
//! - Final hulls are closed rings (first vertex repeated at the end) for all four
//!   algorithms. GiftWrapping, GrahamScan and MonotoneChain walk counterclockwise,
//!   QuickHull clockwise (y axis up).
//! - Collinear boundary points are never hull vertices.
//! - Input problems (`primitives::validate`) are reported before a trace yields
//!   anything. Only `NonTermination` can surface mid-trace, as its last item.
//!
//! Code cross-refs: `primitives::{orientation, validate}`, `types::{Hull, HullCfg}`

mod gift_wrapping;
mod graham_scan;
mod monotone_chain;
mod quick_hull;

pub use gift_wrapping::{GiftWrapping, GiftWrappingTrace};
pub use graham_scan::{GrahamScan, GrahamScanTrace};
pub use monotone_chain::{MonotoneChain, MonotoneChainTrace};
pub use quick_hull::{QuickHull, QuickHullTrace};

use crate::error::HullError;
use crate::primitives::orientation;
use crate::types::{Hull, Point};

/// Lazy sequence of intermediate hull states; the last item equals `run`'s output.
pub type Trace<'a> = Box<dyn Iterator<Item = Result<Hull, HullError>> + Send + 'a>;

/// Shared contract of the hull algorithms.
pub trait ConvexHull: Send + Sync {
    /// Display name, as listed in the registry.
    fn name(&self) -> &'static str;

    /// The point set this instance was built with.
    fn points(&self) -> &[Point];

    /// Compute the hull from scratch.
    fn run(&self) -> Result<Hull, HullError>;

    /// Start a fresh step-by-step trace. Nothing is shared between calls.
    fn run_incremental(&self) -> Result<Trace<'_>, HullError>;
}

/// Push `p` onto a convex chain after popping every vertex that would not make a
/// strict left turn. Used as a stack with peek-at-depth-2.
#[inline]
pub(crate) fn push_left_turn(chain: &mut Vec<Point>, p: Point) {
    while chain.len() >= 2 && orientation(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0
    {
        chain.pop();
    }
    chain.push(p);
}

/// Extremal query on already validated input.
#[inline]
pub(crate) fn require(p: Option<Point>) -> Result<Point, HullError> {
    p.ok_or(HullError::InsufficientPoints { distinct: 0 })
}

#[cfg(test)]
mod tests;
