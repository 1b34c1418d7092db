//! Checks of a generated point sequence against the reference it was offset
//! from.

use crate::geometry::Polygon;
use crate::math::intersect_2d::segment_crosses_polygon;
use crate::math::{heading_degrees, Point2, SEPARATION_TOLERANCE};

/// Returns `true` if every point lies inside `reference`.
#[must_use]
pub fn all_points_inside(points: &[Point2], reference: &Polygon) -> bool {
    points.iter().all(|p| reference.contains(p))
}

/// Indices `i` of segments `points[i] -> points[i + 1]` that cross a
/// reference edge.
#[must_use]
pub fn crossing_edges(points: &[Point2], reference: &Polygon) -> Vec<usize> {
    points
        .windows(2)
        .enumerate()
        .filter(|(_, w)| segment_crosses_polygon(&w[0], &w[1], reference.points()))
        .map(|(i, _)| i)
        .collect()
}

/// Largest heading change between consecutive segments, in degrees `[0, 180]`.
///
/// Zero-length segments are ignored. Returns `0.0` when fewer than two
/// segments remain.
#[must_use]
pub fn max_turn_angle(points: &[Point2]) -> f64 {
    let headings: Vec<f64> = points
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| d.norm() > 0.0)
        .map(|d| heading_degrees(&d))
        .collect();
    headings
        .windows(2)
        .map(|h| {
            let turn = (h[1] - h[0]).rem_euclid(360.0);
            if turn > 180.0 {
                360.0 - turn
            } else {
                turn
            }
        })
        .fold(0.0, f64::max)
}

/// Indices of points whose distance to `reference` falls outside
/// `[min_separation, max_separation]`.
#[must_use]
pub fn separation_violations(
    points: &[Point2],
    reference: &Polygon,
    min_separation: f64,
    max_separation: f64,
) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            let d = reference.distance_to(p);
            d < min_separation - SEPARATION_TOLERANCE || d > max_separation + SEPARATION_TOLERANCE
        })
        .map(|(i, _)| i)
        .collect()
}
