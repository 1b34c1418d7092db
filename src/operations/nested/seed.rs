use crate::geometry::Polygon;
use crate::math::{Point2, Vector2, TOLERANCE};

/// Number of boundary samples the seed search makes across the reference.
const SAMPLES_PER_LOOP: usize = 20;

/// Stride between sampled reference vertices.
#[must_use]
pub fn sample_stride(vertex_count: usize) -> usize {
    (vertex_count / SAMPLES_PER_LOOP).max(1)
}

/// Number of vertices [`find_seed`] inspects for a reference of this size.
#[must_use]
pub fn sample_count(vertex_count: usize) -> usize {
    vertex_count.div_ceil(sample_stride(vertex_count))
}

/// Finds an interior start point about `separation` away from the boundary.
///
/// Samples every `n / 20`-th vertex (at least every vertex for small
/// polygons). Each sample is pushed along the perpendicular of its outgoing
/// edge; whichever of the two perpendiculars lands inside the reference is
/// the inward one. Zero-length edges are skipped. Returns the first interior
/// candidate, or `None` when no sample yields one.
#[must_use]
pub fn find_seed(reference: &Polygon, separation: f64) -> Option<Point2> {
    let pts = reference.points();
    let n = pts.len();

    (0..n).step_by(sample_stride(n)).find_map(|i| {
        let vertex = pts[i];
        let edge = pts[(i + 1) % n] - vertex;
        let len = edge.norm();
        if len < TOLERANCE {
            return None;
        }
        let normal = Vector2::new(-edge.y, edge.x) / len;
        [normal, -normal]
            .into_iter()
            .map(|dir| vertex + dir * separation)
            .find(|candidate| reference.contains(candidate))
    })
}
