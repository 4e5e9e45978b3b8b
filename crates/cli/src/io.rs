//! CSV point files (`x,y` header) read and written through polars.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use hulls::Point;
use polars::prelude::*;

/// Read an `x,y` CSV. Integer columns are cast to f64; missing cells are an error.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("{}: row {row} is missing a coordinate", path.display()),
        })
        .collect()
}

/// Write points as an `x,y` CSV, creating parent directories as needed.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    ensure_parent(path)?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}
