use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hulls::prelude::*;
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::{CfgRecord, Produced, RunRecord};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner: algorithms, traces, sampling and timing")]
struct Cmd {
    /// GrahamScan same-angle tolerance (radians)
    #[arg(long, global = true, default_value_t = 1e-6)]
    angle_eps: f64,

    /// Gift wrapping step bound; defaults to the number of input points
    #[arg(long, global = true)]
    max_wrap_steps: Option<usize>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// List the registered algorithms
    List,
    /// Compute a hull and write it as an x,y CSV
    Run {
        #[arg(long)]
        algo: Algorithm,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write every incremental snapshot as a JSON array
    Trace {
        #[arg(long)]
        algo: Algorithm,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Draw a seeded random point set
    Sample {
        #[arg(long, default_value_t = 250)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        /// Minimum distance between kept points
        #[arg(long, default_value_t = 9.0)]
        min_sep: f64,
        /// Evenly spaced points on a circle instead of uniform noise
        #[arg(long)]
        circle: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Average wall-clock time of `run` per algorithm
    Bench {
        /// Point file; a seeded sample is drawn when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value_t = 250)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        repeats: u32,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = HullCfg {
        angle_eps: cmd.angle_eps,
        max_wrap_steps: cmd.max_wrap_steps,
    };
    match cmd.action {
        Action::List => list(),
        Action::Run { algo, input, out } => run(algo, cfg, &input, &out),
        Action::Trace { algo, input, out } => trace(algo, cfg, &input, &out),
        Action::Sample {
            count,
            seed,
            width,
            height,
            min_sep,
            circle,
            out,
        } => {
            let ucfg = UniformCfg {
                count,
                width,
                height,
                min_separation: min_sep,
                ..UniformCfg::default()
            };
            sample(ucfg, seed, circle, &out)
        }
        Action::Bench {
            input,
            count,
            seed,
            repeats,
        } => bench(cfg, input.as_deref(), count, seed, repeats),
        Action::Report => report(),
    }
}

fn list() -> Result<()> {
    for a in Algorithm::ALL {
        println!("{a}");
    }
    Ok(())
}

fn run(algo: Algorithm, cfg: HullCfg, input: &Path, out: &Path) -> Result<()> {
    let points = io::read_points(input)?;
    tracing::info!(%algo, n = points.len(), input = %input.display(), "run");
    let hull = algo
        .build_with(points.clone(), cfg)
        .run()
        .with_context(|| format!("{algo} on {}", input.display()))?;
    io::write_points(out, hull.points())?;
    tracing::info!(vertices = hull.vertices().len(), out = %out.display(), "hull written");
    RunRecord::new(Produced::hull(algo.name(), &hull))
        .with_cfg(cfg)
        .with_input(input, &points)
        .write_beside(out)?;
    Ok(())
}

fn trace(algo: Algorithm, cfg: HullCfg, input: &Path, out: &Path) -> Result<()> {
    let points = io::read_points(input)?;
    tracing::info!(%algo, n = points.len(), input = %input.display(), "trace");
    let instance = algo.build_with(points.clone(), cfg);
    let mut steps = Vec::new();
    let mut failure = None;
    for step in instance
        .run_incremental()
        .with_context(|| format!("{algo} on {}", input.display()))?
    {
        match step {
            Ok(h) => steps.push(h.points().iter().map(|p| [p.x, p.y]).collect::<Vec<_>>()),
            Err(e) => {
                tracing::warn!(error = %e, "trace stopped");
                failure = Some(e.to_string());
            }
        }
    }
    let doc = json!({
        "algorithm": algo.name(),
        "steps": steps,
        "error": failure,
    });
    io::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(steps = steps.len(), out = %out.display(), "trace written");
    RunRecord::new(Produced::Trace {
        algorithm: algo.name(),
        steps: steps.len(),
        stopped: failure,
    })
    .with_cfg(cfg)
    .with_input(input, &points)
    .write_beside(out)?;
    Ok(())
}

fn sample(ucfg: UniformCfg, seed: u64, circle: bool, out: &Path) -> Result<()> {
    let points = if circle {
        let center = Point::new(ucfg.width / 2.0, ucfg.height / 2.0);
        let radius = 0.4 * ucfg.width.min(ucfg.height);
        draw_circle(ucfg.count, center, radius)
    } else {
        draw_uniform(ucfg, ReplayToken::new(seed))
    };
    tracing::info!(requested = ucfg.count, kept = points.len(), seed, circle, "sample");
    io::write_points(out, &points)?;
    RunRecord::new(Produced::Sample {
        seed,
        requested: ucfg.count,
        kept: points.len(),
        circle,
        width: ucfg.width,
        height: ucfg.height,
        min_separation: ucfg.min_separation,
    })
    .write_beside(out)?;
    Ok(())
}

#[derive(Serialize)]
struct Timing {
    algorithm: &'static str,
    mean_ms: f64,
    vertices: usize,
}

fn bench(cfg: HullCfg, input: Option<&Path>, count: usize, seed: u64, repeats: u32) -> Result<()> {
    let points = match input {
        Some(path) => io::read_points(path)?,
        None => draw_uniform(
            UniformCfg {
                count,
                ..UniformCfg::default()
            },
            ReplayToken::new(seed),
        ),
    };
    let repeats = repeats.max(1);
    let mut timings = Vec::with_capacity(Algorithm::ALL.len());
    for algo in Algorithm::ALL {
        let instance = algo.build_with(points.clone(), cfg);
        let start = Instant::now();
        let mut vertices = 0;
        for _ in 0..repeats {
            vertices = instance.run().with_context(|| algo.to_string())?.vertices().len();
        }
        let mean_ms = start.elapsed().as_secs_f64() * 1e3 / f64::from(repeats);
        tracing::info!(%algo, n = points.len(), mean_ms, vertices, "bench");
        timings.push(Timing {
            algorithm: algo.name(),
            mean_ms,
            vertices,
        });
    }
    println!("{}", serde_json::to_string_pretty(&timings)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "hulls_version": hulls::VERSION,
        "algorithms": Algorithm::ALL.iter().map(|a| a.name()).collect::<Vec<_>>(),
        "cfg": CfgRecord::from(HullCfg::default()),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
