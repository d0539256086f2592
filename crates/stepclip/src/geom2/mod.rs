//! 2D geometry for vertex-list polygons.
//!
//! Purpose
//! - Point arithmetic, shoelace signed area with orientation normalization,
//!   and infinite-line intersection: the primitives the clip stepper needs.
//! - Keep the API small and numerically explicit (eps passed in, never hidden).
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` in raster coordinates (y down).
//! - Signed area is `½ Σ cross(p_i, p_{i+1})`; normalized polygons have it >= 0.
//!
//! Code cross-refs: `Polygon`, `ClipCfg`, `intersect_lines`, `crate::clip`

mod lines;
mod polygon;
pub mod rand;
mod types;
mod util;

pub use lines::intersect_lines;
pub use polygon::{edge, normalize, signed_area, Polygon};
pub use types::{ClipCfg, Region};
pub use util::{cross, difference, manhattan, scale, sum};

#[cfg(test)]
mod tests;
