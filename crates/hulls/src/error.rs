use crate::types::Point;

/// Failure modes shared by every hull algorithm.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum HullError {
    #[error("a convex hull needs at least 3 distinct points, found {distinct}")]
    InsufficientPoints { distinct: usize },

    /// Every point lies on one line; the hull degenerates to the segment `start`–`end`.
    #[error("all points are collinear; hull degenerates to segment ({}, {})-({}, {})", .start.x, .start.y, .end.x, .end.y)]
    Collinear { start: Point, end: Point },

    #[error("gift wrapping did not return to its start point within {steps} steps")]
    NonTermination { steps: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}
