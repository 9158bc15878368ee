use std::iter::FusedIterator;

use super::{first_on_phase_grid, ColumnCursor, RectFrame};
use crate::vec2::Vec2;

/// Row-by-row scan of the lattice inside a rotated rectangle (rotated space).
///
/// State machine over `(row, column, finished)`:
/// - `column == None`: `row` has not been entered yet. Entering computes the
///   row span; a row that misses the rectangle moves straight to the next row.
/// - `column == Some(_)`: yield from the column, then drop it and step `row` by `dy`.
/// - `finished`: `row` passed the bottom of the wrapping box. Terminal until `reset`.
#[derive(Clone, Debug)]
pub struct RowScan {
    frame: RectFrame,
    step: Vec2,
    offset: Vec2,
    first_row: f32,
    row: f32,
    column: Option<ColumnCursor>,
    finished: bool,
}

impl RowScan {
    /// Pre: `dx`, `dy` strictly positive.
    pub fn new(frame: RectFrame, dx: f32, dy: f32, x0: f32, y0: f32) -> Self {
        let bx = frame.wrapping_box();
        let first_row =
            first_on_phase_grid(frame.center().y, bx.extent.y, dy, y0, bx.min.y);
        Self {
            frame,
            step: Vec2::new(dx, dy),
            offset: Vec2::new(x0, y0),
            first_row,
            row: first_row,
            column: None,
            finished: false,
        }
    }

    #[inline]
    pub fn frame(&self) -> &RectFrame {
        &self.frame
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.frame.center()
    }

    /// y of the first lattice row inside the wrapping box.
    #[inline]
    pub fn first_row(&self) -> f32 {
        self.first_row
    }

    #[inline]
    pub fn current_row(&self) -> f32 {
        self.row
    }

    #[inline]
    pub fn current_column(&self) -> Option<&ColumnCursor> {
        self.column.as_ref()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Rewind to the first row. The frame is kept as is.
    pub fn reset(&mut self) {
        self.row = self.first_row;
        self.column = None;
        self.finished = false;
    }

    fn enter_row(&mut self) {
        match self.frame.row_span(self.row) {
            Some((entry, exit)) => {
                tracing::trace!(row = self.row, entry = entry.x, exit = exit.x, "row span");
                self.column = Some(ColumnCursor::new(
                    self.frame.center(),
                    self.frame.wrapping_box().extent,
                    entry,
                    exit,
                    self.step.x,
                    self.offset.x,
                ));
            }
            None => {
                tracing::trace!(row = self.row, "row misses rectangle");
                self.row += self.step.y;
            }
        }
    }
}

impl Iterator for RowScan {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        loop {
            if self.finished {
                return None;
            }
            if let Some(column) = self.column.as_mut() {
                if let Some(x) = column.next() {
                    return Some(Vec2::new(x, self.row));
                }
                self.column = None;
                self.row += self.step.y;
                continue;
            }
            if self.row > self.frame.wrapping_box().max().y {
                tracing::trace!(row = self.row, "scan finished");
                self.finished = true;
                continue;
            }
            self.enter_row();
        }
    }
}

impl FusedIterator for RowScan {}
