//! Render a rotated grid as ASCII art for quick visual sanity.
//!
//! Usage:
//!   cargo run -p rotated-grid --example ascii_preview -- [angle_deg] [step]
//!
//! Each character cell covers one unit of a 60 x 24 rectangle; cells that
//! contain at least one point are drawn as `*`.

use rotated_grid::{Angle, GridParams};

const WIDTH: usize = 60;
const HEIGHT: usize = 24;

fn main() {
    let mut args = std::env::args().skip(1);
    let deg: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(30.0);
    let step: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3.0);

    let params = GridParams::new(
        WIDTH as f32,
        HEIGHT as f32,
        step,
        step,
        0.0,
        0.0,
        Angle::from_degrees(deg),
    );
    let grid = match params.positions() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("ascii_preview: {err}");
            std::process::exit(2);
        }
    };

    let mut canvas = vec![vec!['.'; WIDTH]; HEIGHT];
    let mut count = 0usize;
    for p in grid {
        count += 1;
        let (col, row) = (p.x.floor() as usize, p.y.floor() as usize);
        if let Some(cell) = canvas.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = '*';
        }
    }
    for row in canvas {
        println!("{}", row.into_iter().collect::<String>());
    }
    println!("{count} points at {deg}°, step {step}");
}
