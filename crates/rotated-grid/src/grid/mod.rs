//! Public grid iterator: rotated lattice points inside an axis-aligned rectangle.
//!
//! Purpose
//! - Validate the construction parameters, build the rotated frame once, and
//!   drive `scan::RowScan` lazily.
//! - Map every point from rotated space back to the rectangle's own frame
//!   (subtract center, rotate by `-angle`, add center).
//!
//! Model
//! - The rectangle is `[0, width] x [0, height]` with origin at its top-left corner.
//! - The lattice is `dx` by `dy`, anchored on the rectangle center, shifted by
//!   `(x0, y0)` and rotated by `angle` about the center.
//! - Points come out row-major in rotated space (rows by increasing y, then x).
//!
//! Code cross-refs: `scan::{RowScan, RectFrame}`, `coord::GridCoord`

use std::f64::consts::FRAC_PI_2;
use std::iter::FusedIterator;

use thiserror::Error;

use crate::angle::Angle;
use crate::coord::GridCoord;
use crate::scan::{RectFrame, RowScan};
use crate::vec2::Vec2;

/// Rejected construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("angle {degrees}° must normalize into 0..=90°")]
    AngleOutOfRange { degrees: f64 },
    #[error("step {param} must be positive, got {value}")]
    NonPositiveStep { param: &'static str, value: f32 },
    #[error("{param} must be positive and finite, got {value}")]
    InvalidExtent { param: &'static str, value: f32 },
    #[error("offset {param} must be finite, got {value}")]
    NonFiniteOffset { param: &'static str, value: f32 },
    #[error("step {param} = {value} is below f32 resolution at the rectangle's scale")]
    StepTooSmall { param: &'static str, value: f32 },
}

/// Construction parameters of a rotated grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    pub width: f32,
    pub height: f32,
    pub dx: f32,
    pub dy: f32,
    /// Phase offset of the lattice along the rotated x axis.
    pub x0: f32,
    /// Phase offset of the lattice along the rotated y axis.
    pub y0: f32,
    pub angle: Angle,
}

impl GridParams {
    pub fn new(
        width: f32,
        height: f32,
        dx: f32,
        dy: f32,
        x0: f32,
        y0: f32,
        angle: Angle,
    ) -> Self {
        Self {
            width,
            height,
            dx,
            dy,
            x0,
            y0,
            angle,
        }
    }

    pub fn with_offset(self, x0: f32, y0: f32) -> Self {
        Self { x0, y0, ..self }
    }

    /// Check the parameters and return the normalized angle.
    ///
    /// Checked in order: angle, dx, dy, width, height, x0, y0, step resolution.
    pub fn validate(&self) -> Result<Angle, GridError> {
        if !self.angle.radians().is_finite() {
            return Err(GridError::AngleOutOfRange {
                degrees: self.angle.degrees(),
            });
        }
        let alpha = self.angle.normalized();
        if alpha < Angle::ZERO || alpha > Angle::QUARTER_TURN {
            return Err(GridError::AngleOutOfRange {
                degrees: self.angle.degrees(),
            });
        }
        for (param, value) in [("dx", self.dx), ("dy", self.dy)] {
            if value.is_nan() || value <= 0.0 {
                return Err(GridError::NonPositiveStep { param, value });
            }
        }
        for (param, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GridError::InvalidExtent { param, value });
            }
        }
        for (param, value) in [("x0", self.x0), ("y0", self.y0)] {
            if !value.is_finite() {
                return Err(GridError::NonFiniteOffset { param, value });
            }
        }
        // Visited coordinates stay within `width + height` of the origin; a
        // step below one ulp there would never advance the cursor.
        let reach = self.width + self.height;
        for (param, value) in [("dx", self.dx), ("dy", self.dy)] {
            if value < reach * f32::EPSILON {
                return Err(GridError::StepTooSmall { param, value });
            }
        }
        debug_assert!((0.0..=FRAC_PI_2).contains(&alpha.radians()));
        Ok(alpha)
    }

    pub fn positions(self) -> Result<GridPositions, GridError> {
        GridPositions::new(self)
    }
}

/// Lazy, finite, forward-only sequence of grid points inside the rectangle.
#[derive(Clone, Debug)]
pub struct GridPositions {
    params: GridParams,
    scan: RowScan,
}

impl GridPositions {
    /// Fails before any geometry is built if `params` is invalid.
    pub fn new(params: GridParams) -> Result<Self, GridError> {
        let alpha = params.validate()?;
        let frame = RectFrame::new(params.width, params.height, alpha);
        let scan = RowScan::new(frame, params.dx, params.dy, params.x0, params.y0);
        let bx = scan.frame().wrapping_box();
        tracing::debug!(
            angle_deg = alpha.degrees(),
            box_w = bx.extent.x,
            box_h = bx.extent.y,
            first_row = scan.first_row(),
            "rotated grid ready"
        );
        Ok(Self { params, scan })
    }

    #[inline]
    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Rectangle center, the rotation pivot.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.scan.center()
    }

    /// Underlying scan in rotated space.
    #[inline]
    pub fn row_scan(&self) -> &RowScan {
        &self.scan
    }

    /// Restart from the first point. Geometry is not rebuilt.
    pub fn reset(&mut self) {
        self.scan.reset();
    }
}

impl Iterator for GridPositions {
    type Item = GridCoord;

    fn next(&mut self) -> Option<GridCoord> {
        let p = self.scan.next()?;
        Some(GridCoord::from(self.scan.frame().to_original(p)))
    }
}

impl FusedIterator for GridPositions {}

#[cfg(test)]
mod tests;
