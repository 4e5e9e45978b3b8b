//! Seeded random point sets (uniform rectangle with thinning, circle pattern).
//!
//! Purpose
//! - Feed demos, benches and property tests with reproducible inputs.
//!   Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::primitives::distance;
use crate::types::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform sampler over a `width × height` canvas.
#[derive(Clone, Copy, Debug)]
pub struct UniformCfg {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    /// Fraction of each side left empty on both borders. Clamped to [0, 0.49].
    pub margin_frac: f64,
    /// Later points closer than this to an earlier kept point are dropped. `<= 0` keeps all.
    pub min_separation: f64,
}

impl Default for UniformCfg {
    fn default() -> Self {
        Self {
            count: 250,
            width: 800.0,
            height: 600.0,
            margin_frac: 0.1,
            min_separation: 9.0,
        }
    }
}

/// Draw `cfg.count` uniform points, then thin them to `cfg.min_separation`.
/// The result may hold fewer than `count` points.
pub fn draw_uniform(cfg: UniformCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let m = cfg.margin_frac.clamp(0.0, 0.49);
    let (x0, y0) = (cfg.width * m, cfg.height * m);
    let (w, h) = (cfg.width * (1.0 - 2.0 * m), cfg.height * (1.0 - 2.0 * m));
    let raw = (0..cfg.count).map(|_| Point::new(x0 + rng.gen::<f64>() * w, y0 + rng.gen::<f64>() * h));
    thin(raw, cfg.min_separation)
}

/// Keep each point only if it is at least `min_sep` away from every point kept before it.
pub fn thin(points: impl IntoIterator<Item = Point>, min_sep: f64) -> Vec<Point> {
    let mut kept: Vec<Point> = Vec::new();
    for p in points {
        if min_sep <= 0.0 || kept.iter().all(|&q| distance(p, q) >= min_sep) {
            kept.push(p);
        }
    }
    kept
}

/// `count` points evenly spaced on a circle; every point is a hull vertex.
pub fn draw_circle(count: usize, center: Point, radius: f64) -> Vec<Point> {
    let delta = std::f64::consts::TAU / count.max(1) as f64;
    (0..count)
        .map(|k| {
            let t = k as f64 * delta;
            center + Point::new(radius * t.cos(), radius * t.sin())
        })
        .collect()
}
