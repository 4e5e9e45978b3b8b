//! Run records: a `<artifact>.meta.json` next to every CSV/JSON the CLI writes.
//!
//! A record names the hull configuration, summarizes the input point set and
//! describes what was produced, so a hull or trace can be regenerated from it.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use hulls::{Hull, HullCfg, Point};
use serde::Serialize;

/// Serializable mirror of [`HullCfg`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CfgRecord {
    pub angle_eps: f64,
    pub max_wrap_steps: Option<usize>,
}

impl From<HullCfg> for CfgRecord {
    fn from(cfg: HullCfg) -> Self {
        Self {
            angle_eps: cfg.angle_eps,
            max_wrap_steps: cfg.max_wrap_steps,
        }
    }
}

/// Size and extent of the point set an artifact was computed from.
#[derive(Clone, Debug, Serialize)]
pub struct PointSetSummary {
    pub path: String,
    pub points: usize,
    pub distinct: usize,
    /// `[min_x, min_y, max_x, max_y]`; absent for an empty set.
    pub bounds: Option<[f64; 4]>,
}

impl PointSetSummary {
    pub fn describe(path: &Path, points: &[Point]) -> Self {
        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| {
            a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
        });
        sorted.dedup();
        let bounds = points.iter().fold(None, |acc: Option<[f64; 4]>, p| {
            Some(match acc {
                None => [p.x, p.y, p.x, p.y],
                Some([x0, y0, x1, y1]) => [x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)],
            })
        });
        Self {
            path: path.to_string_lossy().into_owned(),
            points: points.len(),
            distinct: sorted.len(),
            bounds,
        }
    }
}

/// What the artifact holds.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Produced {
    Hull {
        algorithm: &'static str,
        vertices: usize,
        area: f64,
        counterclockwise: bool,
    },
    Trace {
        algorithm: &'static str,
        steps: usize,
        stopped: Option<String>,
    },
    Sample {
        seed: u64,
        requested: usize,
        kept: usize,
        circle: bool,
        width: f64,
        height: f64,
        min_separation: f64,
    },
}

impl Produced {
    pub fn hull(algorithm: &'static str, hull: &Hull) -> Self {
        let area = hull.signed_area();
        Produced::Hull {
            algorithm,
            vertices: hull.vertices().len(),
            area: area.abs(),
            counterclockwise: area > 0.0,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RunRecord {
    pub hulls_version: &'static str,
    pub code_rev: String,
    pub cfg: Option<CfgRecord>,
    pub input: Option<PointSetSummary>,
    pub produced: Produced,
    pub output: String,
}

impl RunRecord {
    pub fn new(produced: Produced) -> Self {
        Self {
            hulls_version: hulls::VERSION,
            code_rev: code_rev(),
            cfg: None,
            input: None,
            produced,
            output: String::new(),
        }
    }

    pub fn with_cfg(mut self, cfg: HullCfg) -> Self {
        self.cfg = Some(cfg.into());
        self
    }

    pub fn with_input(mut self, path: &Path, points: &[Point]) -> Self {
        self.input = Some(PointSetSummary::describe(path, points));
        self
    }

    /// Write the record beside `artifact` and return the record's path.
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        self.output = artifact.to_string_lossy().into_owned();
        let path = record_path(artifact);
        crate::io::ensure_parent(&path)?;
        std::fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(record = %path.display(), "run record written");
        Ok(path)
    }
}

/// `out/hull.csv` -> `out/hull.meta.json`.
fn record_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("meta.json")
}

/// Commit the binary was built from: `GIT_COMMIT` at build or run time, else `git`.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
