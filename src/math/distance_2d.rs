use super::Point2;

/// Returns the minimum distance from point `p` to the segment `a`–`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = *a + ab * t;

    (*p - closest).norm()
}

/// Returns the minimum distance from `p` to the boundary of a closed polygon.
///
/// Every edge is considered, including the closing edge from the last point
/// back to the first. Returns `f64::INFINITY` for an empty point list.
#[must_use]
pub fn distance_to_polygon(p: &Point2, points: &[Point2]) -> f64 {
    let n = points.len();
    let mut min_d = f64::INFINITY;
    for i in 0..n {
        let d = point_to_segment_dist(p, &points[i], &points[(i + 1) % n]);
        if d < min_d {
            min_d = d;
        }
    }
    min_d
}
