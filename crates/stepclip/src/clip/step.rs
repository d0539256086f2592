//! Single half-plane clip of a vertex sequence against one clip edge.

use nalgebra::Vector2;

use crate::geom2::{cross, difference, intersect_lines, manhattan, ClipCfg};

use super::types::Splice;

/// Clip `subject` against the half-plane left of the directed line `a → b`
/// (`cross(b - a, v - a) >= 0` keeps `v`).
///
/// Builds the result in one pass: inside vertices are copied, each outside
/// vertex is replaced by its accepted candidates (possibly none). Incident
/// edges are read as an in-place scan would see them: the predecessor is the
/// last point already emitted (the original last vertex while nothing has been
/// emitted), the successor is the next original vertex (the first emitted
/// point once the scan wraps).
///
/// Returns the new sequence and one `Splice` per outside vertex.
pub fn clip_against_edge(
    subject: &[Vector2<f64>],
    a: Vector2<f64>,
    b: Vector2<f64>,
    cfg: &ClipCfg,
) -> (Vec<Vector2<f64>>, Vec<Splice>) {
    let n = subject.len();
    let ab = difference(b, a);
    let mut out: Vec<Vector2<f64>> = Vec::with_capacity(n + 2);
    let mut splices = Vec::new();
    for (j, &v) in subject.iter().enumerate() {
        if cross(ab, difference(v, a)) >= 0.0 {
            out.push(v);
            continue;
        }
        let prev = out.last().copied().unwrap_or(subject[n - 1]);
        let next = if j + 1 < n {
            subject[j + 1]
        } else {
            out.first().copied().unwrap_or(v)
        };
        let replacements: Vec<Vector2<f64>> = [(prev, v), (v, next)]
            .into_iter()
            .filter_map(|(c, d)| candidate(a, b, c, d, cfg))
            .collect();
        tracing::trace!(
            index = j,
            x = v.x,
            y = v.y,
            replaced_by = replacements.len(),
            "outside vertex"
        );
        out.extend_from_slice(&replacements);
        splices.push(Splice {
            index: j,
            vertex: v,
            replacements,
        });
    }
    (out, splices)
}

/// Intersection of the clip line with incident edge `c → d`, if it survives
/// the region and duplicate filters.
fn candidate(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
    cfg: &ClipCfg,
) -> Option<Vector2<f64>> {
    let e = intersect_lines(a, b, c, d, cfg.eps_parallel)?;
    let keep = cfg.region.contains(e)
        && manhattan(e, c) > cfg.dup_threshold
        && manhattan(e, d) > cfg.dup_threshold;
    keep.then_some(e)
}
