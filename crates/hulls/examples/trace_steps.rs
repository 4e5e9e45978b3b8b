//! Print an incremental hull trace step by step, the way a visual front end
//! would pull it.
//!
//! Usage:
//!   cargo run -p hulls --example trace_steps -- GrahamScan 40 7
//!
//! Arguments: algorithm name (default QuickHull), point count (default 40),
//! seed (default 1). Each line shows the snapshot size and its last point; the
//! final line repeats the batch result for comparison.

use hulls::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let algo: Algorithm = match args.next().as_deref().unwrap_or("QuickHull").parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(40);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);

    let cfg = UniformCfg {
        count,
        ..UniformCfg::default()
    };
    let points = draw_uniform(cfg, ReplayToken::new(seed));
    println!("{algo}: {} points (seed {seed})", points.len());

    let hull = algo.build(points);
    let trace = match hull.run_incremental() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    for (k, step) in trace.enumerate() {
        match step {
            Ok(h) => {
                let last = h.points().last().copied().unwrap_or(Point::new(0.0, 0.0));
                println!("step {k:4}: {:3} pts, last ({:7.1}, {:7.1})", h.len(), last.x, last.y);
            }
            Err(e) => println!("step {k:4}: {e}"),
        }
    }
    match hull.run() {
        Ok(h) => println!("batch: {} vertices, area {:.1}", h.vertices().len(), h.signed_area().abs()),
        Err(e) => println!("batch: {e}"),
    }
}
