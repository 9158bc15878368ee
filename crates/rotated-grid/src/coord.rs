//! Output point value.

use std::fmt;

use crate::vec2::{round_f32, Vec2};

/// One generated point, in the rectangle's own (unrotated) frame.
///
/// Equality is plain field equality on the two `f32` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridCoord {
    pub x: f32,
    pub y: f32,
}

impl GridCoord {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round both components to `decimals` places (ties to even).
    /// Meant for comparing against fixtures.
    pub fn round(self, decimals: u8) -> Self {
        Self {
            x: round_f32(self.x, decimals),
            y: round_f32(self.y, decimals),
        }
    }

    /// Max-norm comparison.
    #[inline]
    pub fn approx_eq(&self, other: &GridCoord, eps: f32) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for GridCoord {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<GridCoord> for Vec2 {
    #[inline]
    fn from(c: GridCoord) -> Self {
        c.to_vec2()
    }
}

impl From<GridCoord> for (f32, f32) {
    #[inline]
    fn from(c: GridCoord) -> Self {
        (c.x, c.y)
    }
}

impl PartialEq<Vec2> for GridCoord {
    #[inline]
    fn eq(&self, other: &Vec2) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}
