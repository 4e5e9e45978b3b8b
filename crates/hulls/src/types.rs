//! Basic 2D types and tolerances shared by all hull algorithms.
//!
//! - `Point`: a plain `f64` pair; value semantics, exact equality.
//! - `Hull`: an ordered ring of input points (closed: first vertex repeated).
//! - `HullCfg`: centralizes the tolerance and the wrap bound.

use nalgebra::Vector2;

/// A point in the plane. Equality is exact coordinate match.
pub type Point = Vector2<f64>;

/// Hull configuration (tolerances and guards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Two polar angles closer than this are treated as one direction (GrahamScan).
    pub angle_eps: f64,
    /// Upper bound on gift-wrapping steps. `None` means "number of input points".
    pub max_wrap_steps: Option<usize>,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            angle_eps: 1e-6,
            max_wrap_steps: None,
        }
    }
}

/// Ordered boundary of a convex polygon, or a partial state of one during a trace.
///
/// Final hulls returned by `run` are closed rings: the first vertex is repeated
/// at the end. Intermediate trace snapshots carry whatever the algorithm holds
/// at that step and need not be closed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull(Vec<Point>);

impl Hull {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// All points, including the closing duplicate if present.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Distinct ring vertices (the closing duplicate stripped).
    pub fn vertices(&self) -> &[Point] {
        if self.is_closed() {
            &self.0[..self.0.len() - 1]
        } else {
            &self.0
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the ring repeats its first vertex at the end.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.0.len() > 1 && self.0.first() == self.0.last()
    }

    #[inline]
    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }

    /// Signed area of the ring (shoelace); positive for counterclockwise order.
    pub fn signed_area(&self) -> f64 {
        let v = self.vertices();
        let n = v.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|k| {
                let p = v[k];
                let q = v[(k + 1) % n];
                p.x * q.y - p.y * q.x
            })
            .sum();
        0.5 * twice
    }
}
