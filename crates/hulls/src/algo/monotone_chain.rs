//! Andrew's monotone chain: lower and upper chains built in one lockstep pass.

use std::iter::FusedIterator;

use tracing::debug;

use super::{push_left_turn, ConvexHull, Trace};
use crate::error::HullError;
use crate::primitives::{lex_cmp, validate};
use crate::types::{Hull, Point};

/// Andrew's monotone chain (returns the hull counterclockwise, starting and
/// ending at the lexicographically smallest point).
#[derive(Clone, Debug)]
pub struct MonotoneChain {
    points: Vec<Point>,
}

impl MonotoneChain {
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    fn sorted(&self) -> Result<Vec<Point>, HullError> {
        validate(&self.points)?;
        let mut pts = self.points.clone();
        pts.sort_by(lex_cmp);
        Ok(pts)
    }
}

/// Lower and upper chains advanced together: step `i` feeds `sorted[i]` to the
/// lower chain and `sorted[n - 1 - i]` to the upper chain.
#[derive(Clone, Debug, Default)]
struct Chains {
    lower: Vec<Point>,
    upper: Vec<Point>,
}

impl Chains {
    fn step(&mut self, sorted: &[Point], i: usize) {
        push_left_turn(&mut self.lower, sorted[i]);
        push_left_turn(&mut self.upper, sorted[sorted.len() - 1 - i]);
    }

    /// Raw concatenation of both chains, as held mid-pass.
    fn snapshot(&self) -> Hull {
        let mut pts = Vec::with_capacity(self.lower.len() + self.upper.len());
        pts.extend_from_slice(&self.lower);
        pts.extend_from_slice(&self.upper);
        Hull::new(pts)
    }

    /// Closed ring: the upper chain's first point repeats the lower chain's last
    /// point and is dropped; its last point repeats the lower chain's first and
    /// closes the ring.
    fn into_hull(self) -> Hull {
        let Chains { mut lower, upper } = self;
        lower.extend(upper.into_iter().skip(1));
        Hull::new(lower)
    }
}

impl ConvexHull for MonotoneChain {
    fn name(&self) -> &'static str {
        "MonotoneChain"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn run(&self) -> Result<Hull, HullError> {
        let sorted = self.sorted()?;
        let mut chains = Chains::default();
        for i in 0..sorted.len() {
            chains.step(&sorted, i);
        }
        let hull = chains.into_hull();
        debug!(n = sorted.len(), h = hull.len() - 1, "monotone_chain");
        Ok(hull)
    }

    fn run_incremental(&self) -> Result<Trace<'_>, HullError> {
        let sorted = self.sorted()?;
        Ok(Box::new(MonotoneChainTrace {
            sorted,
            next: 0,
            chains: Some(Chains::default()),
        }))
    }
}

/// Trace of a monotone chain pass: both chains after every step, then the hull.
#[derive(Clone, Debug)]
pub struct MonotoneChainTrace {
    sorted: Vec<Point>,
    next: usize,
    chains: Option<Chains>,
}

impl Iterator for MonotoneChainTrace {
    type Item = Result<Hull, HullError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.sorted.len() {
            let chains = self.chains.as_mut()?;
            chains.step(&self.sorted, self.next);
            self.next += 1;
            return Some(Ok(chains.snapshot()));
        }
        self.chains.take().map(|c| Ok(c.into_hull()))
    }
}

impl FusedIterator for MonotoneChainTrace {}
