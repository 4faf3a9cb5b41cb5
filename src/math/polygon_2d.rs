use super::Point2;

/// Computes the signed area of a closed planar polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The loop is closed
/// implicitly; the first vertex must not be repeated at the end.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Unsigned area of a closed planar polygon, independent of winding.
#[must_use]
pub fn polygon_area_2d(points: &[Point2]) -> f64 {
    signed_area_2d(points).abs()
}
