//! Convex hulls of planar point sets: four classical algorithms behind one contract.
//!
//! - `primitives`: orientation test, distances, extremal-point queries, input validation.
//! - `algo`: GiftWrapping, GrahamScan, MonotoneChain, QuickHull; each offers a batch
//!   `run` and a lazy `run_incremental` trace for step-by-step visualization.
//! - `registry`: static name → factory table used by front ends.
//! - `sample`: seeded point sets for demos, benches and tests.
//!
//! Orientation convention: `orientation(a, b, p) = +1` iff `p` is strictly left of
//! `a → b` with the y axis pointing up.

pub mod algo;
pub mod error;
pub mod primitives;
pub mod registry;
pub mod sample;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algo::{ConvexHull, Trace};
pub use error::HullError;
pub use registry::Algorithm;
pub use types::{Hull, HullCfg, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algo::{ConvexHull, GiftWrapping, GrahamScan, MonotoneChain, QuickHull, Trace};
    pub use crate::error::HullError;
    pub use crate::primitives::{
        bottom_leftmost, distance, highest_rightmost, lowest_leftmost, orientation, validate,
    };
    pub use crate::registry::{instantiate_all, Algorithm};
    pub use crate::sample::{draw_circle, draw_uniform, ReplayToken, UniformCfg};
    pub use crate::types::{Hull, HullCfg, Point};
}
