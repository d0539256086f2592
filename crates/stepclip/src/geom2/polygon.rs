//! Vertex-list polygons: signed area and orientation normalization.
//!
//! Convention
//! - Coordinates are raster-style (y grows downward). The shoelace sum
//!   `½ Σ cross(p_i, p_{i+1})` is what we call the signed area; `normalize`
//!   makes it non-negative, and `clip` classifies "inside" with the same sign.
//! - A polygon with fewer than 3 vertices is degenerate: zero area, never clipped.

use nalgebra::Vector2;

use super::util::cross;

/// Ordered, implicitly closed vertex sequence.
///
/// Invariants:
/// - Edge `i` joins `v[i]` and `v[(i+1) % len]`.
/// - Normalization reorders vertices but never changes their count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub v: Vec<Vector2<f64>>,
}

impl Polygon {
    #[inline]
    pub fn new() -> Self {
        Self { v: Vec::new() }
    }

    #[inline]
    pub fn from_points(v: Vec<Vector2<f64>>) -> Self {
        Self { v }
    }

    /// Append a vertex (closes back to `v[0]`).
    #[inline]
    pub fn push(&mut self, p: Vector2<f64>) {
        self.v.push(p);
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.v
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    /// Fewer than 3 vertices: no area, no edges worth clipping.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.v.len() < 3
    }

    /// Edge `(v[i], v[(i+1) % len])`. `None` on an empty polygon.
    #[inline]
    pub fn edge(&self, i: usize) -> Option<(Vector2<f64>, Vector2<f64>)> {
        edge(&self.v, i)
    }

    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.v)
    }

    /// Reverse in place if the signed area is negative. Returns whether it reversed.
    #[inline]
    pub fn normalize(&mut self) -> bool {
        normalize(&mut self.v)
    }
}

impl From<Vec<Vector2<f64>>> for Polygon {
    fn from(v: Vec<Vector2<f64>>) -> Self {
        Self { v }
    }
}

/// Edge `(pts[i], pts[(i+1) % n])` of a closed sequence.
#[inline]
pub fn edge(pts: &[Vector2<f64>], i: usize) -> Option<(Vector2<f64>, Vector2<f64>)> {
    let n = pts.len();
    if n == 0 {
        return None;
    }
    Some((pts[i % n], pts[(i + 1) % n]))
}

/// Shoelace signed area; 0 below 3 vertices.
pub fn signed_area(pts: &[Vector2<f64>]) -> f64 {
    let n = pts.len();
    if n < 3 {
        return 0.0;
    }
    let mut s = 0.0;
    for i in 0..n {
        s += cross(pts[i], pts[(i + 1) % n]);
    }
    s / 2.0
}

/// Reverse `pts` in place if its signed area is negative.
///
/// Idempotent; keeps the point set and `|signed_area|`.
pub fn normalize(pts: &mut [Vector2<f64>]) -> bool {
    if signed_area(pts) < 0.0 {
        pts.reverse();
        true
    } else {
        false
    }
}
