//! Tolerances and the valid region used when filtering intersection candidates.
//!
//! - `ClipCfg`: near-parallel epsilon, duplicate-suppression threshold, region.
//! - `Region`: closed axis-aligned box; unbounded by default.

use nalgebra::Vector2;

/// Clipping configuration (tolerances + valid region).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipCfg {
    /// Lines with `|cross(ab, cd)| < eps_parallel` are treated as parallel.
    pub eps_parallel: f64,
    /// Candidates within this taxicab distance of an incident-edge endpoint are dropped.
    pub dup_threshold: f64,
    /// Candidates outside this box are dropped.
    pub region: Region,
}

impl Default for ClipCfg {
    fn default() -> Self {
        Self {
            eps_parallel: 1e-4,
            dup_threshold: 10.0,
            region: Region::unbounded(),
        }
    }
}

impl ClipCfg {
    /// Restrict candidates to the viewport `[0, width] × [0, height]`.
    #[inline]
    pub fn with_viewport(self, width: f64, height: f64) -> Self {
        Self {
            region: Region::viewport(width, height),
            ..self
        }
    }
}

/// Closed box `min <= p <= max` (componentwise).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Region {
    #[inline]
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self { min, max }
    }
    #[inline]
    pub fn unbounded() -> Self {
        Self {
            min: Vector2::repeat(f64::NEG_INFINITY),
            max: Vector2::repeat(f64::INFINITY),
        }
    }
    /// Raster viewport anchored at the origin.
    #[inline]
    pub fn viewport(width: f64, height: f64) -> Self {
        Self {
            min: Vector2::zeros(),
            max: Vector2::new(width, height),
        }
    }
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
