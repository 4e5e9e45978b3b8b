//! Contract tests shared by all four algorithms (driven through the registry).

use proptest::prelude::*;

use crate::error::HullError;
use crate::primitives::{lex_cmp, orientation, validate};
use crate::registry::{instantiate_all, Algorithm};
use crate::sample::{draw_circle, draw_uniform, ReplayToken, UniformCfg};
use crate::types::{Hull, Point};

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn sorted_vertices(hull: &Hull) -> Vec<Point> {
    let mut v = hull.vertices().to_vec();
    v.sort_by(lex_cmp);
    v
}

/// Orientation of every consecutive vertex triple, wrapping around the ring.
fn turns(hull: &Hull) -> Vec<i32> {
    let v = hull.vertices();
    let n = v.len();
    (0..n)
        .map(|k| orientation(v[k], v[(k + 1) % n], v[(k + 2) % n]))
        .collect()
}

fn expected_turn(a: Algorithm) -> i32 {
    match a {
        Algorithm::QuickHull => -1,
        _ => 1,
    }
}

fn full_trace(a: Algorithm, points: &[Point]) -> Vec<Hull> {
    let algo = a.build(points.to_vec());
    let trace = algo.run_incremental().expect("valid input");
    trace.collect::<Result<_, _>>().expect("trace completes")
}

#[test]
fn square_with_interior_point() {
    let input = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)]);
    let expected = pts(&[(0.0, 0.0), (0.0, 4.0), (4.0, 0.0), (4.0, 4.0)]);
    for a in Algorithm::ALL {
        let hull = a.build(input.clone()).run().unwrap();
        assert!(hull.is_closed(), "{a}");
        assert_eq!(sorted_vertices(&hull), expected, "{a}");
    }
}

#[test]
fn collinear_interior_point_is_excluded() {
    let input = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 0.0)]);
    let expected = pts(&[(0.0, 0.0), (2.0, 2.0), (3.0, 0.0)]);
    for a in Algorithm::ALL {
        let hull = a.build(input.clone()).run().unwrap();
        assert_eq!(sorted_vertices(&hull), expected, "{a}");
    }
}

#[test]
fn fewer_than_three_points_fail_fast() {
    let input = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    for a in Algorithm::ALL {
        let algo = a.build(input.clone());
        let expected = HullError::InsufficientPoints { distinct: 2 };
        assert_eq!(algo.run(), Err(expected.clone()), "{a}");
        assert_eq!(algo.run_incremental().err(), Some(expected), "{a}");
        assert_eq!(
            a.build(Vec::new()).run(),
            Err(HullError::InsufficientPoints { distinct: 0 })
        );
    }
}

#[test]
fn collinear_input_reports_the_segment() {
    let input = pts(&[(1.0, 2.0), (3.0, 6.0), (0.0, 0.0), (2.0, 4.0)]);
    let expected = HullError::Collinear {
        start: Point::new(0.0, 0.0),
        end: Point::new(3.0, 6.0),
    };
    for a in Algorithm::ALL {
        let algo = a.build(input.clone());
        assert_eq!(algo.run(), Err(expected.clone()), "{a}");
        assert_eq!(algo.run_incremental().err(), Some(expected.clone()), "{a}");
    }
}

#[test]
fn triangle_returns_all_three_points() {
    let input = pts(&[(0.0, 0.0), (5.0, 1.0), (2.0, 3.0)]);
    let mut expected = input.clone();
    expected.sort_by(lex_cmp);
    for a in Algorithm::ALL {
        let hull = a.build(input.clone()).run().unwrap();
        assert_eq!(hull.len(), 4, "{a}");
        assert_eq!(sorted_vertices(&hull), expected, "{a}");
    }
}

#[test]
fn thin_far_triangle_keeps_every_vertex() {
    // the two far points are less than 1e-6 rad apart as seen from the origin
    let input = pts(&[(0.0, 0.0), (1e7, -1.0), (1e7, -1.5)]);
    let mut expected = input.clone();
    expected.sort_by(lex_cmp);
    for a in Algorithm::ALL {
        let hull = a.build(input.clone()).run().unwrap();
        assert_eq!(sorted_vertices(&hull), expected, "{a}");
        assert!(turns(&hull).iter().all(|&t| t == expected_turn(a)), "{a}");
    }
}

#[test]
fn duplicates_do_not_change_the_hull() {
    let base = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (1.0, 1.0)]);
    let mut doubled = base.clone();
    doubled.extend(base.iter().rev().copied());
    for a in Algorithm::ALL {
        let once = a.build(base.clone()).run().unwrap();
        let twice = a.build(doubled.clone()).run().unwrap();
        assert_eq!(sorted_vertices(&once), sorted_vertices(&twice), "{a}");
        assert_eq!(twice.vertices().len(), 4, "{a}");
    }
}

#[test]
fn run_is_idempotent_and_matches_trace_end() {
    let cfg = UniformCfg {
        count: 300,
        ..UniformCfg::default()
    };
    for seed in 0..4 {
        let input = draw_uniform(cfg, ReplayToken::new(seed));
        for a in Algorithm::ALL {
            let algo = a.build(input.clone());
            let first = algo.run().unwrap();
            assert_eq!(algo.run().unwrap(), first, "{a}");
            let steps = full_trace(a, &input);
            assert_eq!(steps.last(), Some(&first), "{a}");
        }
    }
}

#[test]
fn circle_points_are_all_vertices() {
    let input = draw_circle(36, Point::new(400.0, 300.0), 200.0);
    for a in Algorithm::ALL {
        let hull = a.build(input.clone()).run().unwrap();
        assert_eq!(hull.vertices().len(), 36, "{a}");
        assert!(turns(&hull).iter().all(|&t| t == expected_turn(a)), "{a}");
    }
}

#[test]
fn traces_are_fresh_per_call() {
    let input = draw_uniform(UniformCfg::default(), ReplayToken::new(11));
    for a in Algorithm::ALL {
        let algo = a.build(input.clone());
        // abandon one trace early; the next call starts over
        let head: Vec<_> = algo.run_incremental().unwrap().take(3).collect();
        let again: Vec<_> = algo.run_incremental().unwrap().take(3).collect();
        assert_eq!(head, again, "{a}");
    }
}

#[test]
fn instances_run_concurrently() {
    let input = draw_uniform(UniformCfg::default(), ReplayToken::new(3));
    let algos = instantiate_all(&input);
    let hulls: Vec<Hull> = std::thread::scope(|s| {
        let handles: Vec<_> = algos
            .iter()
            .map(|(_, algo)| s.spawn(move || algo.run().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    let reference = sorted_vertices(&hulls[0]);
    for h in &hulls[1..] {
        assert_eq!(sorted_vertices(h), reference);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Small integer grid: cross products are exact and distinct directions differ
    // by far more than the GrahamScan angle tolerance.
    #[test]
    fn algorithms_agree_on_grid_inputs(
        raw in prop::collection::vec((-50i32..=50, -50i32..=50), 0..48)
    ) {
        let input: Vec<Point> = raw
            .iter()
            .map(|&(x, y)| Point::new(x as f64, y as f64))
            .collect();
        match validate(&input) {
            Err(e) => {
                for a in Algorithm::ALL {
                    prop_assert_eq!(a.build(input.clone()).run(), Err(e.clone()));
                }
            }
            Ok(()) => {
                let mut reference: Option<Vec<Point>> = None;
                for a in Algorithm::ALL {
                    let hull = a.build(input.clone()).run().unwrap();
                    prop_assert!(hull.is_closed());
                    prop_assert!(hull.points().iter().all(|p| input.contains(p)));
                    prop_assert!(turns(&hull).iter().all(|&t| t == expected_turn(a)));
                    let steps = full_trace(a, &input);
                    prop_assert_eq!(steps.last(), Some(&hull));
                    let verts = sorted_vertices(&hull);
                    let first = reference.get_or_insert_with(|| verts.clone());
                    prop_assert_eq!(&*first, &verts);
                }
            }
        }
    }

    #[test]
    fn every_input_point_is_inside_the_hull(
        raw in prop::collection::vec((-1.0e3f64..1.0e3, -1.0e3f64..1.0e3), 3..64)
    ) {
        let input: Vec<Point> = raw.iter().map(|&(x, y)| Point::new(x, y)).collect();
        prop_assume!(validate(&input).is_ok());
        let hull = Algorithm::MonotoneChain.build(input.clone()).run().unwrap();
        let v = hull.vertices();
        for &p in &input {
            for k in 0..v.len() {
                let q = v[(k + 1) % v.len()];
                let c = crate::primitives::cross(v[k], q, p);
                prop_assert!(c >= -1e-6 * (1.0 + (q - v[k]).norm() * (p - v[k]).norm()));
            }
        }
    }
}
