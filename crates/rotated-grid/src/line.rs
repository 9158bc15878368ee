//! Infinite 2D line with a unit direction, and bounded ray/segment intersection.
//!
//! Code cross-refs: `vec2::{cross, dot, normalized}`, `scan::rows::RowScan`

use crate::vec2::{cross, dot, normalized, project_out, Vec2};

/// Determinant magnitude below which two directions count as parallel.
/// Sized for geometry that passed through `f32`.
pub(crate) const PARALLEL_EPS: f32 = 1e-6;

/// Line through `origin` along a unit `direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    origin: Vec2,
    direction: Vec2,
}

impl Line {
    /// `direction` need not be unit length; it is normalized here.
    /// Pre: `direction` is non-zero.
    #[inline]
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self {
            origin,
            direction: normalized(direction),
        }
    }

    /// Line starting at `a` heading towards `b`.
    #[inline]
    pub fn through(a: Vec2, b: Vec2) -> Self {
        Self::new(a, b - a)
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Point at distance `t` from the origin.
    #[inline]
    pub fn project_out(&self, t: f32) -> Vec2 {
        project_out(self.origin, self.direction, t)
    }

    /// Distance `t` along `self` at which it crosses `other`.
    ///
    /// Solved with Cramer's rule on the two directions. `None` when the lines
    /// are (nearly) parallel, when the crossing lies behind `self`'s origin,
    /// or when the projected length `u` along `other` leaves `[0, max_u²]`.
    ///
    /// Note: `u` is a plain length but is compared against the *square* of
    /// `max_u`. Callers pass wrapping-box extents as `max_u`, and which
    /// corner crossings get accepted depends on this exact bound.
    pub fn intersection_t(&self, other: &Line, max_u: f32) -> Option<f32> {
        let det = cross(self.direction, other.direction);
        if det.abs() < PARALLEL_EPS {
            return None;
        }
        let delta = self.origin - other.origin;
        let t = cross(other.direction, delta) / det;
        let u = dot(project_out(delta, self.direction, t), other.direction);
        (t >= 0.0 && u >= 0.0 && u <= max_u * max_u).then_some(t)
    }
}

/// Same line, opposite direction.
impl std::ops::Neg for Line {
    type Output = Line;
    #[inline]
    fn neg(self) -> Self::Output {
        Line {
            origin: self.origin,
            direction: -self.direction,
        }
    }
}
