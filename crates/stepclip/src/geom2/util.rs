//! Point arithmetic on `Vector2<f64>`.
//!
//! Thin named wrappers over nalgebra operators so the clipping code reads in
//! the same vocabulary as the algorithm description (difference, sum, scale,
//! cross). All functions are pure.

use nalgebra::Vector2;

/// `a - b`.
#[inline]
pub fn difference(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    a - b
}

/// `a + b`.
#[inline]
pub fn sum(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    a + b
}

/// `v * k`.
#[inline]
pub fn scale(v: Vector2<f64>, k: f64) -> Vector2<f64> {
    v * k
}

/// 2D determinant `a.x*b.y - a.y*b.x`.
///
/// Used both by the shoelace sum and by half-plane classification.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Taxicab distance `|dx| + |dy|`.
#[inline]
pub fn manhattan(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
