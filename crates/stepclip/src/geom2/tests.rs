use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn poly(pts: &[(f64, f64)]) -> Polygon {
    Polygon::from_points(pts.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
}

#[test]
fn triangle_area_is_six() {
    let p = poly(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
    assert_eq!(p.signed_area(), 6.0);
    let q = poly(&[(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)]);
    assert_eq!(q.signed_area(), -6.0);
}

#[test]
fn degenerate_polygons_have_zero_area() {
    assert_eq!(signed_area(&[]), 0.0);
    assert_eq!(signed_area(&[vector![1.0, 2.0]]), 0.0);
    assert_eq!(signed_area(&[vector![1.0, 2.0], vector![5.0, -3.0]]), 0.0);
    let mut p = poly(&[(3.0, 1.0), (0.0, 0.0)]);
    assert!(!p.normalize());
    assert_eq!(p.v, vec![vector![3.0, 1.0], vector![0.0, 0.0]]);
}

#[test]
fn normalize_reverses_negative_winding_only() {
    let mut cw = poly(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
    assert!(cw.signed_area() < 0.0);
    assert!(cw.normalize());
    assert_eq!(cw.signed_area(), 100.0);
    assert_eq!(cw.v[0], vector![10.0, 0.0]);
    assert!(!cw.normalize());
}

#[test]
fn edges_wrap_around() {
    let p = poly(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
    assert_eq!(p.edge(2), Some((vector![0.0, 3.0], vector![0.0, 0.0])));
    assert_eq!(p.edge(3), p.edge(0));
    assert_eq!(Polygon::new().edge(0), None);
}

#[test]
fn intersect_crossing_lines() {
    let e = intersect_lines(
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![2.0, 0.0],
        1e-4,
    )
    .unwrap();
    assert!((e - vector![1.0, 1.0]).norm() < 1e-12);
}

#[test]
fn intersect_is_for_lines_not_segments() {
    // Segments are disjoint; lines meet at (5, 0).
    let e = intersect_lines(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![5.0, 1.0],
        vector![5.0, 2.0],
        1e-4,
    )
    .unwrap();
    assert!((e - vector![5.0, 0.0]).norm() < 1e-12);
}

#[test]
fn intersect_rejects_parallel_and_near_parallel() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert!(intersect_lines(a, b, vector![0.0, 1.0], vector![1.0, 1.0], 1e-4).is_none());
    // Coincident.
    assert!(intersect_lines(a, b, vector![2.0, 0.0], vector![3.0, 0.0], 1e-4).is_none());
    // |denom| = 1e-5 < eps.
    assert!(intersect_lines(a, b, vector![0.0, 1.0], vector![1.0, 1.00001], 1e-4).is_none());
    // Same pair passes with a looser epsilon.
    assert!(intersect_lines(a, b, vector![0.0, 1.0], vector![1.0, 1.00001], 1e-6).is_some());
}

#[test]
fn region_bounds_are_inclusive() {
    let r = Region::viewport(100.0, 50.0);
    assert!(r.contains(vector![0.0, 0.0]));
    assert!(r.contains(vector![100.0, 50.0]));
    assert!(!r.contains(vector![100.5, 10.0]));
    assert!(!r.contains(vector![10.0, -0.1]));
    assert!(Region::unbounded().contains(vector![-1e12, 1e12]));
    let cfg = ClipCfg::default().with_viewport(100.0, 50.0);
    assert_eq!(cfg.region, r);
    assert_eq!(cfg.dup_threshold, 10.0);
}

// Integer-valued coordinates keep every shoelace term exact, so the sign
// after reversal is exactly the negation.
fn int_polygon() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((-1000i32..1000, -1000i32..1000), 0..12).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Vector2::new(x as f64, y as f64))
            .collect()
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(pts in int_polygon()) {
        let area = signed_area(&pts);
        let mut once = pts.clone();
        normalize(&mut once);
        let mut twice = once.clone();
        prop_assert!(!normalize(&mut twice));
        prop_assert_eq!(&once, &twice);
        prop_assert!(signed_area(&once) >= 0.0);
        prop_assert_eq!(signed_area(&once).abs(), area.abs());
        prop_assert_eq!(once.len(), pts.len());
    }
}
