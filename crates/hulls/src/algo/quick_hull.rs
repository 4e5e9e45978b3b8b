//! QuickHull: split by the extreme x points, recurse on the farthest point of
//! each outer subset.
//!
//! The extreme points are the lexicographic minimum and maximum, so a shared x
//! coordinate (a vertical hull edge) never makes a mid-edge point the split anchor.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::{require, ConvexHull, Trace};
use crate::error::HullError;
use crate::primitives::{distance_to_line, highest_rightmost, lowest_leftmost, orientation, validate};
use crate::types::{Hull, Point};

/// QuickHull. The ring runs clockwise: from the leftmost point `a` across the
/// points left of `a → b` (`b` rightmost), then back across the others.
#[derive(Clone, Debug)]
pub struct QuickHull {
    points: Vec<Point>,
}

impl QuickHull {
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// `(a, b, S1, S2)`: extreme points and the subsets strictly left of `a → b`
    /// and of `b → a`. Points on the segment are discarded.
    fn partition(&self) -> Result<(Point, Point, Vec<Point>, Vec<Point>), HullError> {
        validate(&self.points)?;
        let a = require(lowest_leftmost(&self.points))?;
        let b = require(highest_rightmost(&self.points))?;
        let s1 = strictly_left(&self.points, a, b);
        let s2 = strictly_left(&self.points, b, a);
        Ok((a, b, s1, s2))
    }
}

fn strictly_left(points: &[Point], p: Point, q: Point) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(|&x| orientation(p, q, x) > 0)
        .collect()
}

/// Point of `subset` farthest from the line `p q`; ties go to the first occurrence.
fn farthest(subset: &[Point], p: Point, q: Point) -> Option<Point> {
    let mut best: Option<(Point, f64)> = None;
    for &x in subset {
        let d = distance_to_line(x, p, q);
        if best.map_or(true, |(_, bd)| d > bd) {
            best = Some((x, d));
        }
    }
    best.map(|(x, _)| x)
}

/// Split `subset` (all strictly left of `p → q`) at its farthest point `c`.
/// Returns `(c, left of p → c, left of c → q)`; everything else is inside the
/// triangle `p c q`.
fn split(subset: &[Point], p: Point, q: Point) -> Option<(Point, Vec<Point>, Vec<Point>)> {
    let c = farthest(subset, p, q)?;
    Some((c, strictly_left(subset, p, c), strictly_left(subset, c, q)))
}

enum Task {
    /// Hull vertices strictly between `p` and `q`, from points left of `p → q`.
    FindHull { subset: Vec<Point>, p: Point, q: Point },
    Emit(Point),
}

/// Append the hull vertices strictly between `p` and `q` to `out`, in order.
///
/// Same visiting order as the textbook recursion
/// `find_hull(S1', p, c) ++ [c] ++ find_hull(S2', c, q)`, driven by an explicit
/// task stack so deep splits cannot overflow the call stack.
fn find_hull(subset: Vec<Point>, p: Point, q: Point, out: &mut Vec<Point>) {
    let mut tasks = vec![Task::FindHull { subset, p, q }];
    while let Some(task) = tasks.pop() {
        match task {
            Task::Emit(c) => out.push(c),
            Task::FindHull { subset, p, q } => {
                if let Some((c, left, right)) = split(&subset, p, q) {
                    tasks.push(Task::FindHull {
                        subset: right,
                        p: c,
                        q,
                    });
                    tasks.push(Task::Emit(c));
                    tasks.push(Task::FindHull { subset: left, p, q: c });
                }
            }
        }
    }
}

impl ConvexHull for QuickHull {
    fn name(&self) -> &'static str {
        "QuickHull"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn run(&self) -> Result<Hull, HullError> {
        let (a, b, s1, s2) = self.partition()?;
        let mut ring = vec![a];
        find_hull(s1, a, b, &mut ring);
        ring.push(b);
        find_hull(s2, b, a, &mut ring);
        ring.push(a);
        debug!(n = self.points.len(), h = ring.len() - 1, "quick_hull");
        Ok(Hull::new(ring))
    }

    fn run_incremental(&self) -> Result<Trace<'_>, HullError> {
        let (a, b, s1, s2) = self.partition()?;
        Ok(Box::new(QuickHullTrace {
            edges: vec![
                Edge {
                    from: a,
                    outside: s1,
                },
                Edge {
                    from: b,
                    outside: s2,
                },
            ],
            started: false,
        }))
    }
}

/// Ring edge from `from` to the next edge's `from`, with the points still
/// strictly outside it.
#[derive(Clone, Debug)]
struct Edge {
    from: Point,
    outside: Vec<Point>,
}

/// Stepwise reveal of the QuickHull recursion.
///
/// The first item is the ring `a → b → a`; every further item splits the first
/// ring edge that still has outside points at its farthest point. The last item
/// is the finished hull.
#[derive(Clone, Debug)]
pub struct QuickHullTrace {
    edges: Vec<Edge>,
    started: bool,
}

impl QuickHullTrace {
    fn ring(&self) -> Hull {
        let mut pts: Vec<Point> = self.edges.iter().map(|e| e.from).collect();
        if let Some(first) = self.edges.first() {
            pts.push(first.from);
        }
        Hull::new(pts)
    }
}

impl Iterator for QuickHullTrace {
    type Item = Result<Hull, HullError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(Ok(self.ring()));
        }
        let k = self.edges.iter().position(|e| !e.outside.is_empty())?;
        let p = self.edges[k].from;
        let q = self.edges[(k + 1) % self.edges.len()].from;
        let outside = std::mem::take(&mut self.edges[k].outside);
        let (c, left, right) = split(&outside, p, q)?;
        trace!(x = c.x, y = c.y, edge = k, "quick_hull split");
        self.edges[k].outside = left;
        self.edges.insert(
            k + 1,
            Edge {
                from: c,
                outside: right,
            },
        );
        Some(Ok(self.ring()))
    }
}

impl FusedIterator for QuickHullTrace {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn farthest_prefers_first_occurrence() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(4.0, 0.0);
        let subset = vec![Point::new(1.0, 2.0), Point::new(3.0, 2.0), Point::new(2.0, 1.0)];
        assert_eq!(farthest(&subset, p, q), Some(Point::new(1.0, 2.0)));
        assert_eq!(farthest(&[], p, q), None);
    }

    #[test]
    fn ring_runs_clockwise_from_leftmost() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(2.0, 2.0),
        ];
        let hull = QuickHull::new(pts).run().unwrap();
        // a = (0,0), b = (4,4): (0,4) lies left of a → b, (4,0) right of it
        assert_eq!(
            hull.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 4.0),
                Point::new(4.0, 4.0),
                Point::new(4.0, 0.0),
                Point::new(0.0, 0.0),
            ]
        );
        assert!(hull.signed_area() < 0.0);
    }

    #[test]
    fn trace_grows_from_the_initial_segment() {
        let pts: Vec<Point> = (0..12)
            .map(|k| {
                let t = k as f64 * std::f64::consts::TAU / 12.0;
                Point::new(t.cos(), t.sin())
            })
            .collect();
        let qh = QuickHull::new(pts);
        let steps: Vec<Hull> = qh
            .run_incremental()
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(steps[0].len(), 3);
        for w in steps.windows(2) {
            assert_eq!(w[1].len(), w[0].len() + 1);
        }
        assert_eq!(steps.last().unwrap(), &qh.run().unwrap());
    }
}
