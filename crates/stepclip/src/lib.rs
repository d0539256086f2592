//! Step-wise polygon clipping against the edges of a clip polygon.
//!
//! Layout
//! - `geom2`: points, vertex-list polygons, signed area, line intersection.
//! - `clip`: `ClipSession` and the single-edge Sutherland–Hodgman step.
//! - `format`: two-decimal text for status panels.
//!
//! The core never fails: degenerate input yields idle/zero results and
//! rejected intersection candidates are dropped.

pub mod api;
pub mod clip;
pub mod format;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use clip::{ClipSession, CursorPolicy, SessionState, StepReport, Target};
pub use geom2::{ClipCfg, Polygon, Region};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clip::{ClipSession, CursorPolicy, SessionState, Splice, StepReport, Target};
    pub use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{intersect_lines, signed_area, ClipCfg, Polygon, Region};
    pub use nalgebra::Vector2 as Vec2;
}
