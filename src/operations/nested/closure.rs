use crate::error::{GenerationFailure, LevelResult};
use crate::geometry::Polygon;

use super::params::ClosureRule;
use super::walk::WalkState;

/// Returns `true` when the walk has come back close enough to its start.
///
/// Requires at least `rule.min_points` accepted points and the latest point
/// within `rule.radius_factor * segment_length` of the start point.
#[must_use]
pub fn should_close(walk: &WalkState, rule: &ClosureRule, segment_length: f64) -> bool {
    if walk.accepted_points().len() < rule.min_points {
        return false;
    }
    let gap = nalgebra::distance(&walk.current_point(), &walk.start_point());
    gap <= rule.radius_factor * segment_length
}

/// Seals the walk by repeating its start point exactly at the end.
///
/// When the latest point already equals the start, it doubles as the
/// closing point and nothing is appended.
///
/// # Errors
///
/// Returns `GenerationFailure::DegenerateClosure` if the sealed points do not
/// form a valid polygon.
pub fn seal(walk: WalkState) -> LevelResult<Polygon> {
    let start = walk.start_point();
    let mut points = walk.into_points();
    if points.last() != Some(&start) {
        points.push(start);
    }
    Polygon::from_checked(points).map_err(GenerationFailure::DegenerateClosure)
}
