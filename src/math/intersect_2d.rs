use super::Point2;

/// Twice the signed area of triangle `a`, `b`, `c`.
///
/// Positive when `c` lies to the left of the directed line `a → b`.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Strict segment-segment intersection test.
///
/// The segments intersect only when the endpoints of each lie strictly on
/// opposite sides of the other's supporting line. Collinear overlap and
/// endpoint touching are reported as non-intersecting.
#[must_use]
pub fn segments_intersect(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> bool {
    let d1 = orientation(b1, b2, a1);
    let d2 = orientation(b1, b2, a2);
    let d3 = orientation(a1, a2, b1);
    let d4 = orientation(a1, a2, b2);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// Returns `true` if segment `a`–`b` crosses any edge of a closed polygon.
#[must_use]
pub fn segment_crosses_polygon(a: &Point2, b: &Point2, points: &[Point2]) -> bool {
    let n = points.len();
    (0..n).any(|i| segments_intersect(a, b, &points[i], &points[(i + 1) % n]))
}
