//! Intersection of infinite lines.

use nalgebra::Vector2;

use super::util::{cross, difference, scale, sum};

/// Intersection of line `ab` with line `cd`, or `None` if they are (nearly) parallel.
///
/// Lines, not segments: `t` along `ab` is not clamped. Callers that need
/// segment semantics check the parameter themselves or filter by region.
/// Parallel and coincident lines both report `None` when `|cross(ab, cd)| < eps`.
pub fn intersect_lines(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
    eps: f64,
) -> Option<Vector2<f64>> {
    let ab = difference(b, a);
    let cd = difference(d, c);
    let ac = difference(c, a);
    let denom = cross(ab, cd);
    if !(denom.abs() >= eps) {
        return None;
    }
    let t = cross(ac, cd) / denom;
    Some(sum(a, scale(ab, t)))
}
