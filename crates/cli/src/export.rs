//! Point sinks: JSON, CSV, Parquet and plain text.

use anyhow::{Context, Result};
use clap::ValueEnum;
use polars::prelude::*;
use rotated_grid::GridCoord;
use serde::Serialize;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Parquet,
    Text,
}

#[derive(Serialize)]
struct PointRow {
    x: f32,
    y: f32,
}

fn frame(points: &[GridCoord]) -> Result<DataFrame> {
    let xs: Vec<f32> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f32> = points.iter().map(|p| p.y).collect();
    Ok(df!("x" => xs, "y" => ys)?)
}

/// Write `points` to `w` in the requested format.
pub fn write_points<W: Write>(w: &mut W, points: &[GridCoord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<PointRow> = points.iter().map(|p| PointRow { x: p.x, y: p.y }).collect();
            serde_json::to_writer_pretty(&mut *w, &rows)?;
            writeln!(w)?;
        }
        OutputFormat::Csv => {
            let mut df = frame(points)?;
            CsvWriter::new(&mut *w)
                .include_header(true)
                .finish(&mut df)
                .context("writing csv")?;
        }
        OutputFormat::Parquet => {
            let mut df = frame(points)?;
            ParquetWriter::new(&mut *w)
                .finish(&mut df)
                .context("writing parquet")?;
        }
        OutputFormat::Text => {
            for p in points {
                writeln!(w, "{} {}", p.x, p.y)?;
            }
        }
    }
    w.flush()?;
    Ok(())
}
