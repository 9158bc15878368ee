//! Pure 2D vector helpers over `nalgebra::Vector2<f32>`.
//!
//! Rotations are counterclockwise for positive angles. Trigonometry is
//! carried in `f64` and the result narrowed to `f32`.

use nalgebra::Vector2;

use crate::angle::Angle;

pub type Vec2 = Vector2<f32>;

/// z-component of the 3D cross product (signed parallelogram area).
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Quarter turn counterclockwise.
#[inline]
pub fn orthogonal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Pre: `v` is not the zero vector (the result is NaN otherwise).
#[inline]
pub fn normalized(v: Vec2) -> Vec2 {
    v / v.norm()
}

#[inline]
pub fn rotate(v: Vec2, angle: Angle) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    rotate_sin_cos(v, sin, cos)
}

/// Rotate by an angle given as its sine and cosine.
#[inline]
pub fn rotate_sin_cos(v: Vec2, sin: f64, cos: f64) -> Vec2 {
    let (x, y) = (f64::from(v.x), f64::from(v.y));
    Vec2::new((x * cos - y * sin) as f32, (x * sin + y * cos) as f32)
}

#[inline]
pub fn rotate_around(v: Vec2, pivot: Vec2, angle: Angle) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    rotate_around_sin_cos(v, pivot, sin, cos)
}

#[inline]
pub fn rotate_around_sin_cos(v: Vec2, pivot: Vec2, sin: f64, cos: f64) -> Vec2 {
    rotate_sin_cos(v - pivot, sin, cos) + pivot
}

/// `v + direction * t`; `direction` is usually, but not necessarily, unit length.
#[inline]
pub fn project_out(v: Vec2, direction: Vec2, t: f32) -> Vec2 {
    v + direction * t
}

/// Round both components to `decimals` places, ties to even.
pub fn round(v: Vec2, decimals: u8) -> Vec2 {
    Vec2::new(round_f32(v.x, decimals), round_f32(v.y, decimals))
}

pub(crate) fn round_f32(value: f32, decimals: u8) -> f32 {
    let scale = 10f64.powi(i32::from(decimals));
    ((f64::from(value) * scale).round_ties_even() / scale) as f32
}
