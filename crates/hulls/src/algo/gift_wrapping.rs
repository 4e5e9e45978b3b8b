//! Jarvis march: wrap the point set one supporting edge at a time. O(n·h).

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::{require, ConvexHull, Trace};
use crate::error::HullError;
use crate::primitives::{distance, lowest_leftmost, orientation, validate};
use crate::types::{Hull, HullCfg, Point};

/// Gift wrapping (Jarvis march).
///
/// Starts at the lexicographically smallest point and walks counterclockwise.
/// Collinear ties keep the point farthest from the current vertex, so points in
/// the middle of a hull edge are skipped. The hull is closed explicitly.
#[derive(Clone, Debug)]
pub struct GiftWrapping {
    points: Vec<Point>,
    cfg: HullCfg,
}

impl GiftWrapping {
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self::with_cfg(points, HullCfg::default())
    }

    pub fn with_cfg(points: impl Into<Vec<Point>>, cfg: HullCfg) -> Self {
        Self {
            points: points.into(),
            cfg,
        }
    }

    fn step_limit(&self) -> usize {
        self.cfg.max_wrap_steps.unwrap_or(self.points.len())
    }
}

/// Whether `q` replaces `candidate` as the vertex following `current`.
#[inline]
fn improves(current: Point, candidate: Option<Point>, q: Point) -> bool {
    if q == current {
        return false;
    }
    match candidate {
        None => true,
        Some(c) => match orientation(current, c, q) {
            o if o < 0 => true,
            0 => distance(current, q) > distance(current, c),
            _ => false,
        },
    }
}

impl ConvexHull for GiftWrapping {
    fn name(&self) -> &'static str {
        "GiftWrapping"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn run(&self) -> Result<Hull, HullError> {
        validate(&self.points)?;
        let start = require(lowest_leftmost(&self.points))?;
        let limit = self.step_limit();
        let mut hull = vec![start];
        let mut current = start;
        loop {
            let mut candidate = None;
            for &q in &self.points {
                if improves(current, candidate, q) {
                    candidate = Some(q);
                }
            }
            let next = require(candidate)?;
            if next == start {
                hull.push(start);
                break;
            }
            if hull.len() >= limit {
                debug!(steps = hull.len(), "gift wrapping exceeded its step bound");
                return Err(HullError::NonTermination { steps: hull.len() });
            }
            hull.push(next);
            current = next;
        }
        debug!(n = self.points.len(), h = hull.len() - 1, "gift_wrapping");
        Ok(Hull::new(hull))
    }

    fn run_incremental(&self) -> Result<Trace<'_>, HullError> {
        validate(&self.points)?;
        let start = require(lowest_leftmost(&self.points))?;
        Ok(Box::new(GiftWrappingTrace {
            points: &self.points,
            hull: vec![start],
            start,
            current: start,
            candidate: None,
            cursor: 0,
            limit: self.step_limit(),
            done: false,
        }))
    }
}

/// Trace of a Jarvis march.
///
/// Emits `confirmed vertices ++ [candidate]` whenever the candidate improves
/// during a scan, then the closed hull.
#[derive(Clone, Debug)]
pub struct GiftWrappingTrace<'a> {
    points: &'a [Point],
    hull: Vec<Point>,
    start: Point,
    current: Point,
    candidate: Option<Point>,
    cursor: usize,
    limit: usize,
    done: bool,
}

impl Iterator for GiftWrappingTrace<'_> {
    type Item = Result<Hull, HullError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            while let Some(&q) = self.points.get(self.cursor) {
                self.cursor += 1;
                if improves(self.current, self.candidate, q) {
                    self.candidate = Some(q);
                    let mut snapshot = Vec::with_capacity(self.hull.len() + 1);
                    snapshot.extend_from_slice(&self.hull);
                    snapshot.push(q);
                    return Some(Ok(Hull::new(snapshot)));
                }
            }
            // scan finished: confirm the candidate
            let next = match require(self.candidate.take()) {
                Ok(next) => next,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            if next == self.start {
                self.done = true;
                self.hull.push(self.start);
                return Some(Ok(Hull::new(std::mem::take(&mut self.hull))));
            }
            if self.hull.len() >= self.limit {
                self.done = true;
                return Some(Err(HullError::NonTermination {
                    steps: self.hull.len(),
                }));
            }
            trace!(x = next.x, y = next.y, "gift_wrapping confirmed vertex");
            self.hull.push(next);
            self.current = next;
            self.cursor = 0;
        }
    }
}

impl FusedIterator for GiftWrappingTrace<'_> {}
