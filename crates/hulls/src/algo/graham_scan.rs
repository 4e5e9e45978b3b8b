//! Graham scan: angular sort about a pivot, then a single left-turn stack pass.

use std::cmp::Ordering;
use std::f64::consts::TAU;
use std::iter::FusedIterator;

use tracing::debug;

use super::{push_left_turn, require, ConvexHull, Trace};
use crate::error::HullError;
use crate::primitives::{bottom_leftmost, distance, orientation, validate};
use crate::types::{Hull, HullCfg, Point};

/// Graham scan about the `bottom_leftmost` pivot (maximum y, then minimum x).
///
/// The hull starts and ends at the pivot and runs counterclockwise.
#[derive(Clone, Debug)]
pub struct GrahamScan {
    points: Vec<Point>,
    cfg: HullCfg,
}

/// A point paired with its sweep angle about the pivot; lives only during sorting.
#[derive(Clone, Copy, Debug)]
struct AnglePoint {
    point: Point,
    angle: f64,
}

impl GrahamScan {
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self::with_cfg(points, HullCfg::default())
    }

    pub fn with_cfg(points: impl Into<Vec<Point>>, cfg: HullCfg) -> Self {
        Self {
            points: points.into(),
            cfg,
        }
    }

    /// Pivot plus the remaining points in sweep order, one point per direction.
    fn prepare(&self) -> Result<(Point, Vec<Point>), HullError> {
        validate(&self.points)?;
        let pivot = require(bottom_leftmost(&self.points))?;
        let sorted = sort_by_angle(&self.points, pivot, self.cfg.angle_eps);
        Ok((pivot, sorted))
    }
}

/// Polar angle of `p` about `pivot` in [0, 2π), measured from the pivot's
/// westward ray.
///
/// The pivot has maximal y, so every other point lies in the closed lower half
/// plane; starting at the west ray makes the ascending sweep run counterclockwise
/// from west through south to east, with same-row points (east) last.
#[inline]
fn sweep_angle(pivot: Point, p: Point) -> f64 {
    let d = pivot - p;
    let a = d.y.atan2(d.x);
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// Sort by sweep angle and keep only the farthest point of every same-direction group.
///
/// Two points share a direction when their angles differ by at most `eps` and
/// they are collinear with the pivot. Near-equal angles of non-collinear points
/// are both kept and left to the stack. Equal angles sort nearest first.
fn sort_by_angle(points: &[Point], pivot: Point, eps: f64) -> Vec<Point> {
    let mut annotated: Vec<AnglePoint> = points
        .iter()
        .filter(|&&p| p != pivot)
        .map(|&p| AnglePoint {
            point: p,
            angle: sweep_angle(pivot, p),
        })
        .collect();
    annotated.sort_by(|a, b| {
        a.angle
            .partial_cmp(&b.angle)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                distance(pivot, a.point)
                    .partial_cmp(&distance(pivot, b.point))
                    .unwrap_or(Ordering::Equal)
            })
    });

    let mut kept: Vec<AnglePoint> = Vec::with_capacity(annotated.len());
    for ap in annotated {
        match kept.last_mut() {
            Some(last)
                if (ap.angle - last.angle).abs() <= eps
                    && orientation(pivot, last.point, ap.point) == 0 =>
            {
                if distance(pivot, ap.point) > distance(pivot, last.point) {
                    *last = ap;
                }
            }
            _ => kept.push(ap),
        }
    }
    kept.into_iter().map(|ap| ap.point).collect()
}

impl ConvexHull for GrahamScan {
    fn name(&self) -> &'static str {
        "GrahamScan"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn run(&self) -> Result<Hull, HullError> {
        let (pivot, sorted) = self.prepare()?;
        let mut stack = Vec::with_capacity(sorted.len() + 2);
        stack.push(pivot);
        for p in sorted {
            push_left_turn(&mut stack, p);
        }
        stack.push(pivot);
        debug!(n = self.points.len(), h = stack.len() - 1, "graham_scan");
        Ok(Hull::new(stack))
    }

    fn run_incremental(&self) -> Result<Trace<'_>, HullError> {
        let (pivot, sorted) = self.prepare()?;
        Ok(Box::new(GrahamScanTrace {
            pivot,
            pending: sorted.into_iter(),
            stack: Vec::new(),
            done: false,
        }))
    }
}

/// Trace of a Graham scan: the stack after every push, then the closed hull.
#[derive(Clone, Debug)]
pub struct GrahamScanTrace {
    pivot: Point,
    pending: std::vec::IntoIter<Point>,
    stack: Vec<Point>,
    done: bool,
}

impl Iterator for GrahamScanTrace {
    type Item = Result<Hull, HullError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.stack.is_empty() {
            self.stack.push(self.pivot);
            return Some(Ok(Hull::new(self.stack.clone())));
        }
        match self.pending.next() {
            Some(p) => {
                push_left_turn(&mut self.stack, p);
                Some(Ok(Hull::new(self.stack.clone())))
            }
            None => {
                self.done = true;
                self.stack.push(self.pivot);
                Some(Ok(Hull::new(std::mem::take(&mut self.stack))))
            }
        }
    }
}

impl FusedIterator for GrahamScanTrace {}
