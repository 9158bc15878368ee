//! Rotated lattice points inside a rectangle.
//!
//! Given a `width` x `height` rectangle, lattice steps `dx`/`dy`, a phase offset
//! and an angle, enumerate the lattice points that land inside the rectangle
//! once the lattice is rotated by that angle about the rectangle center.
//!
//! Instead of filtering every point of a bounding box, each lattice row is
//! intersected with the rotated rectangle's edges and only the points of the
//! resulting span are produced (`scan`). Everything is lazy: `GridPositions`
//! is an `Iterator<Item = GridCoord>`.
//!
//! ```
//! use rotated_grid::prelude::*;
//!
//! let params = GridParams::new(10.0, 7.0, 2.0, 2.0, 0.0, 0.0, Angle::from_degrees(45.0));
//! let points: Vec<GridCoord> = params.positions()?.collect();
//! assert_eq!(points.len(), 17);
//! # Ok::<(), rotated_grid::GridError>(())
//! ```

pub mod angle;
pub mod coord;
pub mod grid;
pub mod line;
pub mod scan;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use angle::Angle;
pub use coord::GridCoord;
pub use grid::{GridError, GridParams, GridPositions};
pub use vec2::Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::Angle;
    pub use crate::coord::GridCoord;
    pub use crate::grid::{GridError, GridParams, GridPositions};
}
