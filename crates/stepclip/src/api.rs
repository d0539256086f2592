//! Flat re-exports of the operation vocabulary plus a stateless single step.
//!
//! Prefer these names in callers that do not need a long-lived session.

pub use crate::clip::{clip_against_edge, ClipSession, Splice, StepReport};
pub use crate::geom2::{
    cross, difference, intersect_lines, manhattan, normalize, scale, signed_area, sum, ClipCfg,
    Polygon, Region,
};

use nalgebra::Vector2;

/// Clip a copy of `subject` against clip edge `edge_index` of `clip`.
///
/// Normalizes copies of both polygons first, like `ClipSession::step`.
/// Returns `None` when either polygon has fewer than 3 vertices.
pub fn clip_once(
    subject: &[Vector2<f64>],
    clip: &[Vector2<f64>],
    edge_index: usize,
    cfg: &ClipCfg,
) -> Option<Vec<Vector2<f64>>> {
    if subject.len() < 3 || clip.len() < 3 {
        return None;
    }
    let mut subject = subject.to_vec();
    let mut clip = clip.to_vec();
    normalize(&mut subject);
    normalize(&mut clip);
    let (a, b) = crate::geom2::edge(&clip, edge_index)?;
    Some(clip_against_edge(&subject, a, b, cfg).0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn clip_once_matches_session_step() {
        let subject = vec![
            vector![0.0, 0.0],
            vector![100.0, 0.0],
            vector![100.0, 100.0],
            vector![0.0, 100.0],
        ];
        let clip = vec![
            vector![50.0, -50.0],
            vector![50.0, 150.0],
            vector![-200.0, 150.0],
            vector![-200.0, -50.0],
        ];
        let cfg = ClipCfg::default();
        let once = clip_once(&subject, &clip, 0, &cfg).unwrap();
        let mut s = ClipSession::from_polygons(subject.into(), clip.into(), cfg);
        s.step().unwrap();
        assert_eq!(once, s.subject().v);
    }

    #[test]
    fn clip_once_refuses_degenerate_input() {
        let tri = vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0]];
        let seg = vec![vector![0.0, 0.0], vector![4.0, 0.0]];
        assert!(clip_once(&tri, &seg, 0, &ClipCfg::default()).is_none());
        assert!(clip_once(&seg, &tri, 0, &ClipCfg::default()).is_none());
    }
}
