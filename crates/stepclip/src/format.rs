//! Text rendering of areas and vertex lists for status panels and reports.

use nalgebra::Vector2;

/// `(x, y)` pairs with two decimals, joined by `,`.
pub fn format_points(pts: &[Vector2<f64>]) -> String {
    pts.iter()
        .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(",")
}

/// Signed area with two decimals.
pub fn format_area(area: f64) -> String {
    format!("{area:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn points_and_area() {
        let pts = [vector![0.0, 1.5], vector![10.126, -3.0]];
        assert_eq!(format_points(&pts), "(0.00, 1.50),(10.13, -3.00)");
        assert_eq!(format_points(&[]), "");
        assert_eq!(format_area(-6.0), "-6.00");
    }
}
