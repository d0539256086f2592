//! Step-wise Sutherland–Hodgman clipping.
//!
//! Purpose
//! - Clip a subject polygon against one edge of a clip polygon per call, so a
//!   caller can show the clip unfolding edge by edge.
//!
//! Model
//! - `ClipSession` owns both polygons and the edge cursor. `step` normalizes
//!   both polygons, classifies subject vertices against the current clip edge,
//!   splices outside vertices into their filtered boundary intersections, and
//!   advances the cursor.
//! - Candidate filtering (region + taxicab duplicate threshold) can reject both
//!   intersections of an outside vertex; that vertex is then dropped outright.
//! - For non-convex clip polygons each step is still a half-plane clip; a full
//!   round is not a polygon intersection.
//!
//! Code cross-refs: `geom2::{Polygon, ClipCfg, intersect_lines}`

mod session;
mod step;
mod types;

pub use session::ClipSession;
pub use step::clip_against_edge;
pub use types::{CursorPolicy, SessionState, Splice, StepReport, Target};
