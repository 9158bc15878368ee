use std::iter::FusedIterator;

use super::first_on_phase_grid;
use crate::vec2::Vec2;

/// Ascending x-coordinates of one row, `dx` apart, on the global x lattice.
///
/// Yields every lattice x in `[entry.x, exit.x]`. Entry and exit are fixed at
/// construction; `reset` rewinds to the first x without recomputing them.
#[derive(Clone, Debug)]
pub struct ColumnCursor {
    first: f32,
    end: f32,
    dx: f32,
    x: f32,
    exhausted: bool,
}

impl ColumnCursor {
    /// `center`/`box_extent` describe the wrapping box that anchors the lattice;
    /// `x0` is the phase offset.
    pub fn new(
        center: Vec2,
        box_extent: Vec2,
        entry: Vec2,
        exit: Vec2,
        dx: f32,
        x0: f32,
    ) -> Self {
        let first = first_on_phase_grid(center.x, box_extent.x, dx, x0, entry.x);
        Self {
            first,
            end: exit.x,
            dx,
            x: first,
            exhausted: false,
        }
    }

    /// First lattice x of the row.
    #[inline]
    pub fn first(&self) -> f32 {
        self.first
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn reset(&mut self) {
        self.x = self.first;
        self.exhausted = false;
    }
}

impl Iterator for ColumnCursor {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.exhausted || self.x.is_nan() || self.x > self.end {
            self.exhausted = true;
            return None;
        }
        let x = self.x;
        self.x += self.dx;
        Some(x)
    }
}

impl FusedIterator for ColumnCursor {}
