//! Scanline enumeration of a lattice clipped to a rotated rectangle.
//!
//! Purpose
//! - Visit only lattice points inside the rotated rectangle, row by row,
//!   instead of filtering the whole wrapping box.
//!
//! Model
//! - `frame`: the rectangle rotated about its center, its four edge lines and
//!   the axis-aligned box that wraps it. Built once, immutable.
//! - `rows`: steps rows `dy` apart through the wrapping box; each row is
//!   intersected with the four edges to find its entry/exit span.
//! - `column`: steps `dx` apart across one row span.
//!
//! Both axes share one phase rule (`first_on_phase_grid`): the lattice is
//! anchored half a box away from the center, shifted by the phase offset,
//! so a given `(dx, dy, x0, y0)` always selects the same lattice.
//!
//! Code cross-refs: `line::Line`, `grid::GridPositions`

mod column;
mod frame;
mod rows;

pub use column::ColumnCursor;
pub use frame::{RectFrame, WrappingBox};
pub use rows::RowScan;

/// Smallest lattice coordinate `>= lower` on the axis whose lattice is
/// `anchor + k * step`, where `anchor = center - floor(extent / step / 2) * step + offset`.
pub(crate) fn first_on_phase_grid(
    center: f32,
    extent: f32,
    step: f32,
    offset: f32,
    lower: f32,
) -> f32 {
    let half_count = (f64::from(extent / step) * 0.5).floor();
    let step = f64::from(step);
    let anchor = f64::from(center) - half_count * step + f64::from(offset);
    (((f64::from(lower) - anchor) / step).ceil() * step + anchor) as f32
}
