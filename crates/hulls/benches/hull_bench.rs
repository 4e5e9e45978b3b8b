//! Criterion benchmarks for the four hull algorithms.
//! Focus sizes: n in {100, 1000, 10000} uniform points, plus 1000 points on a circle
//! (h = n, the worst case for gift wrapping).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p hulls

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hulls::prelude::*;

fn uniform(n: usize, seed: u64) -> Vec<Point> {
    let cfg = UniformCfg {
        count: n,
        width: 1.0e4,
        height: 1.0e4,
        min_separation: 0.0,
        ..UniformCfg::default()
    };
    draw_uniform(cfg, ReplayToken::new(seed))
}

fn bench_hulls(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[100usize, 1000, 10000] {
        for algo in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algo.name(), n), &n, |b, &n| {
                b.iter_batched(
                    || algo.build(uniform(n, 43)),
                    |h| {
                        let _hull = h.run().unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    let ring = draw_circle(1000, Point::new(0.0, 0.0), 1.0);
    for algo in Algorithm::ALL {
        group.bench_with_input(BenchmarkId::new(format!("{algo}/circle"), 1000), &ring, |b, ring| {
            b.iter_batched(
                || algo.build(ring.clone()),
                |h| {
                    let _hull = h.run().unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_traces(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace");
    let pts = uniform(1000, 44);
    for algo in Algorithm::ALL {
        group.bench_with_input(BenchmarkId::new(algo.name(), 1000), &pts, |b, pts| {
            b.iter_batched(
                || algo.build(pts.clone()),
                |h| h.run_incremental().unwrap().count(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hulls, bench_traces);
criterion_main!(benches);
