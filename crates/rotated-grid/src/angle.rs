//! Radians-based angle value.
//!
//! - `Angle`: a single `f64` in radians; equality and ordering delegate to it.
//! - `normalized`: reduction into the band (-π/2, π/2), exploiting the fact
//!   that a rectangle's wrapping geometry repeats every quarter turn.
//!
//! Code cross-refs: `vec2::{rotate, rotate_around}`, `grid::GridPositions`

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

/// An angle expressed in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };
    pub const QUARTER_TURN: Angle = Angle { radians: FRAC_PI_2 };

    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees * PI / 180.0,
        }
    }

    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// Sine and cosine, evaluated together.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.radians.sin_cos()
    }

    /// Reduce into (-π/2, π/2) by stripping whole half turns, then quarter turns.
    ///
    /// Any finite angle is first brought into (-π, π) by an exact remainder,
    /// so the loops below run at most a few steps whatever the magnitude.
    ///
    /// Pre: the angle is finite. Infinite or NaN input yields NaN in release
    /// builds and trips a debug assertion otherwise.
    pub fn normalized(self) -> Angle {
        debug_assert!(self.radians.is_finite(), "angle must be finite");
        let mut alpha = self.radians % PI;
        while alpha >= PI {
            alpha -= PI;
        }
        while alpha >= FRAC_PI_2 {
            alpha -= FRAC_PI_2;
        }
        while alpha <= -PI {
            alpha += PI;
        }
        while alpha <= -FRAC_PI_2 {
            alpha += FRAC_PI_2;
        }
        Angle { radians: alpha }
    }
}

impl std::ops::Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self::Output {
        Angle {
            radians: -self.radians,
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
