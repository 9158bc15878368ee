use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rotated_grid::{Angle, GridCoord, GridParams};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod export;
mod provenance;

use export::{write_points, OutputFormat};

#[derive(Parser)]
#[command(name = "rotated-grid")]
#[command(about = "Lattice points of a rotated grid that fall inside a rectangle")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Produce the points (stdout unless --out is given)
    Generate {
        #[command(flatten)]
        grid: GridArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Output file; a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print only the number of points
    Count {
        #[command(flatten)]
        grid: GridArgs,
    },
}

/// Grid parameters as given on the command line.
#[derive(Args, Clone, Debug, Serialize)]
pub struct GridArgs {
    /// Rectangle width
    #[arg(long)]
    pub width: f32,
    /// Rectangle height
    #[arg(long)]
    pub height: f32,
    /// Lattice step along the rotated x axis
    #[arg(long)]
    pub dx: f32,
    /// Lattice step along the rotated y axis
    #[arg(long)]
    pub dy: f32,
    /// Phase offset along the rotated x axis
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x0: f32,
    /// Phase offset along the rotated y axis
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub y0: f32,
    /// Rotation of the lattice (degrees unless --radians)
    #[arg(long, allow_negative_numbers = true)]
    pub angle: f64,
    /// Interpret --angle in radians
    #[arg(long)]
    pub radians: bool,
}

impl GridArgs {
    fn params(&self) -> GridParams {
        let angle = if self.radians {
            Angle::from_radians(self.angle)
        } else {
            Angle::from_degrees(self.angle)
        };
        GridParams::new(
            self.width,
            self.height,
            self.dx,
            self.dy,
            self.x0,
            self.y0,
            angle,
        )
    }

    fn points(&self) -> Result<Vec<GridCoord>> {
        let grid = self
            .params()
            .positions()
            .context("invalid grid parameters")?;
        Ok(grid.collect())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate { grid, format, out } => generate(&grid, format, out),
        Action::Count { grid } => count(&grid),
    }
}

fn generate(grid: &GridArgs, format: OutputFormat, out: Option<PathBuf>) -> Result<()> {
    let points = grid.points()?;
    tracing::info!(points = points.len(), ?format, out = ?out, "generate");
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            let file =
                File::create(&path).with_context(|| format!("creating {}", path.display()))?;
            write_points(&mut BufWriter::new(file), &points, format)?;
            let sidecar = provenance::write_sidecar(&path, grid, points.len())?;
            tracing::info!(sidecar = %sidecar.display(), "provenance written");
        }
        None => write_points(&mut std::io::stdout(), &points, format)?,
    }
    Ok(())
}

fn count(grid: &GridArgs) -> Result<()> {
    let n = grid
        .params()
        .positions()
        .context("invalid grid parameters")?
        .count();
    println!("{n}");
    Ok(())
}
