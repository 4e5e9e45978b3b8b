//! Geometric primitives shared by every hull algorithm.
//!
//! Purpose
//! - One orientation convention for the whole crate: `orientation(a, b, p) = +1`
//!   iff `p` lies strictly left of the directed line `a → b` (counterclockwise turn
//!   with the y axis pointing up).
//! - Extremal-point queries with first-occurrence tie-breaking.
//! - `validate`: the up-front input check every algorithm runs before producing output.
//!
//! All functions are pure; the algorithms call them from independent instances.

use std::cmp::Ordering;

use crate::error::HullError;
use crate::types::Point;

/// Cross product of `b − a` and `p − a` (twice the signed triangle area).
#[inline]
pub fn cross(a: Point, b: Point, p: Point) -> f64 {
    let ab = b - a;
    let ap = p - a;
    ab.x * ap.y - ab.y * ap.x
}

/// +1 if `p` is strictly left of `a → b`, −1 if strictly right, 0 if collinear.
#[inline]
pub fn orientation(a: Point, b: Point, p: Point) -> i32 {
    let c = cross(a, b, p);
    if c > 0.0 {
        1
    } else if c < 0.0 {
        -1
    } else {
        0
    }
}

#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (q - p).norm()
}

/// Perpendicular distance from `p` to the line through `a` and `b` (`a != b`).
#[inline]
pub fn distance_to_line(p: Point, a: Point, b: Point) -> f64 {
    cross(a, b, p).abs() / distance(a, b)
}

/// Point with minimum x; ties go to the first occurrence.
///
/// Query helper only. With several points at the minimum x the first one can
/// sit mid-edge, so the algorithms anchor on [`lowest_leftmost`] instead.
pub fn leftmost(points: &[Point]) -> Option<Point> {
    first_extreme(points, |cand, best| cand.x < best.x)
}

/// Point with maximum x; ties go to the first occurrence.
///
/// Query helper only; QuickHull anchors on [`highest_rightmost`].
pub fn rightmost(points: &[Point]) -> Option<Point> {
    first_extreme(points, |cand, best| cand.x > best.x)
}

/// Among the points sharing the maximum y, the leftmost (GrahamScan pivot).
///
/// "Bottom" follows the screen convention where y grows downwards.
pub fn bottom_leftmost(points: &[Point]) -> Option<Point> {
    first_extreme(points, |cand, best| {
        cand.y > best.y || (cand.y == best.y && cand.x < best.x)
    })
}

/// Lexicographic minimum: minimum x, ties broken by minimum y.
///
/// Unlike `leftmost`, this point is always a hull vertex, even when several
/// points share the minimum x.
pub fn lowest_leftmost(points: &[Point]) -> Option<Point> {
    first_extreme(points, |cand, best| lex_cmp(cand, best) == Ordering::Less)
}

/// Lexicographic maximum: maximum x, ties broken by maximum y. Always a hull vertex.
pub fn highest_rightmost(points: &[Point]) -> Option<Point> {
    first_extreme(points, |cand, best| lex_cmp(cand, best) == Ordering::Greater)
}

/// Order by x, then by y. Inputs are validated finite before any sort.
#[inline]
pub(crate) fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

fn first_extreme(points: &[Point], better: impl Fn(&Point, &Point) -> bool) -> Option<Point> {
    let mut iter = points.iter();
    let mut best = *iter.next()?;
    for p in iter {
        if better(p, &best) {
            best = *p;
        }
    }
    Some(best)
}

/// Reject inputs without a well-defined hull.
///
/// Errors
/// - `NonFinite` for the first NaN/infinite coordinate.
/// - `InsufficientPoints` when fewer than 3 distinct points are given.
/// - `Collinear` when every point lies on one line; carries the two extreme
///   points (lexicographic min and max) as the degenerate segment.
pub fn validate(points: &[Point]) -> Result<(), HullError> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }
    let Some(&a) = points.first() else {
        return Err(HullError::InsufficientPoints { distinct: 0 });
    };
    let Some(&b) = points.iter().find(|p| **p != a) else {
        return Err(HullError::InsufficientPoints { distinct: 1 });
    };
    if points.iter().any(|&p| orientation(a, b, p) != 0) {
        return Ok(());
    }
    let mut distinct = points.to_vec();
    distinct.sort_by(lex_cmp);
    distinct.dedup();
    match (distinct.first(), distinct.last()) {
        (Some(&start), Some(&end)) if distinct.len() >= 3 => {
            Err(HullError::Collinear { start, end })
        }
        _ => Err(HullError::InsufficientPoints {
            distinct: distinct.len(),
        }),
    }
}
