use crate::geometry::Polygon;
use crate::math::intersect_2d::segment_crosses_polygon;
use crate::math::{heading_degrees, heading_vector, Point2, Vector2, SEPARATION_TOLERANCE};

use super::params::OffsetParameters;

/// Small-angle offsets of the previous heading in try order, in degrees.
pub const SMALL_ADJUSTMENTS: [f64; 7] = [0.0, 5.0, -5.0, 10.0, -10.0, 15.0, -15.0];

/// Spacing of the absolute full-circle sweep, in degrees.
pub const SWEEP_STEP_DEG: f64 = 30.0;

/// Which search phase produced an accepted candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepPhase {
    /// Previous direction kept unchanged.
    Straight,
    /// Previous heading offset by the given number of degrees.
    Adjusted(f64),
    /// Absolute heading from the full sweep, in degrees.
    Sweep(f64),
}

/// An accepted next point and how it was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepCandidate {
    pub point: Point2,
    pub phase: StepPhase,
}

/// Searches for the next point of a walk.
///
/// Candidates lie exactly `segment_length` from `current` and are tried in a
/// fixed order: straight continuation, the [`SMALL_ADJUSTMENTS`] of the
/// previous heading that do not exceed `max_turn_angle`, then an absolute
/// sweep every 30°, so at most 20 candidates are checked. Without a previous
/// direction only the sweep runs. The first candidate passing [`accepts`]
/// wins; `None` means every candidate failed.
#[must_use]
pub fn find_next_point(
    current: &Point2,
    previous_direction: Option<&Vector2>,
    reference: &Polygon,
    params: &OffsetParameters,
    max_turn_angle: f64,
) -> Option<StepCandidate> {
    let len = params.segment_length;

    if let Some(dir) = previous_direction {
        let straight = *current + dir * len;
        if accepts(current, &straight, reference, params) {
            return Some(StepCandidate {
                point: straight,
                phase: StepPhase::Straight,
            });
        }

        let heading = heading_degrees(dir);
        for offset in adjustment_offsets(max_turn_angle) {
            let candidate = *current + heading_vector(heading + offset) * len;
            if accepts(current, &candidate, reference, params) {
                return Some(StepCandidate {
                    point: candidate,
                    phase: StepPhase::Adjusted(offset),
                });
            }
        }
    }

    sweep_headings().find_map(|heading| {
        let candidate = *current + heading_vector(heading) * len;
        accepts(current, &candidate, reference, params).then_some(StepCandidate {
            point: candidate,
            phase: StepPhase::Sweep(heading),
        })
    })
}

/// The three acceptance checks shared by every search phase.
///
/// The candidate must lie inside the reference, the step must not cross a
/// reference edge, and the candidate's distance to the boundary must fall in
/// `[min_separation, max_separation]` (with [`SEPARATION_TOLERANCE`] slack).
#[must_use]
pub fn accepts(
    current: &Point2,
    candidate: &Point2,
    reference: &Polygon,
    params: &OffsetParameters,
) -> bool {
    if !reference.contains(candidate) {
        return false;
    }
    if segment_crosses_polygon(current, candidate, reference.points()) {
        return false;
    }
    let separation = reference.distance_to(candidate);
    separation >= params.min_separation - SEPARATION_TOLERANCE
        && separation <= params.max_separation + SEPARATION_TOLERANCE
}

/// [`SMALL_ADJUSTMENTS`] whose magnitude is within `max_turn_angle`.
pub fn adjustment_offsets(max_turn_angle: f64) -> impl Iterator<Item = f64> {
    SMALL_ADJUSTMENTS
        .into_iter()
        .filter(move |a| a.abs() <= max_turn_angle)
}

/// Absolute sweep headings: 0°, 30°, …, 330°.
pub fn sweep_headings() -> impl Iterator<Item = f64> {
    (0_u32..12).map(|k| f64::from(k) * SWEEP_STEP_DEG)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// 100 × 100 square with a vertex every 10 units, counter-clockwise.
    fn square() -> Polygon {
        let mut pts = Vec::new();
        for i in 0_u32..10 {
            pts.push(Point2::new(f64::from(i) * 10.0, 0.0));
        }
        for i in 0_u32..10 {
            pts.push(Point2::new(100.0, f64::from(i) * 10.0));
        }
        for i in 0_u32..10 {
            pts.push(Point2::new(100.0 - f64::from(i) * 10.0, 100.0));
        }
        for i in 0_u32..10 {
            pts.push(Point2::new(0.0, 100.0 - f64::from(i) * 10.0));
        }
        Polygon::new(pts).unwrap()
    }

    #[test]
    fn baseline_offsets_match_fixed_order() {
        let offsets: Vec<f64> = adjustment_offsets(15.0).collect();
        assert_eq!(offsets, vec![0.0, 5.0, -5.0, 10.0, -10.0, 15.0, -15.0]);
    }

    #[test]
    fn offsets_respect_narrow_limit() {
        let offsets: Vec<f64> = adjustment_offsets(7.0).collect();
        assert_eq!(offsets, vec![0.0, 5.0, -5.0]);
    }

    #[test]
    fn widened_limit_keeps_fixed_set() {
        let offsets: Vec<f64> = adjustment_offsets(60.0).collect();
        assert_eq!(offsets, SMALL_ADJUSTMENTS.to_vec());
        // Straight + 7 adjustments + 12 sweep headings.
        assert_eq!(1 + offsets.len() + sweep_headings().count(), 20);
    }

    #[test]
    fn sweep_has_twelve_headings() {
        let headings: Vec<f64> = sweep_headings().collect();
        assert_eq!(headings.len(), 12);
        assert_abs_diff_eq!(headings[11], 330.0);
    }

    #[test]
    fn straight_continuation_preferred() {
        let sq = square();
        let params = OffsetParameters::default();
        let dir = Vector2::new(1.0, 0.0);
        let found =
            find_next_point(&Point2::new(50.0, 3.0), Some(&dir), &sq, &params, 15.0).unwrap();
        assert_eq!(found.phase, StepPhase::Straight);
        assert_abs_diff_eq!(found.point.x, 52.0);
        assert_abs_diff_eq!(found.point.y, 3.0);
    }

    #[test]
    fn adjusts_when_straight_leaves_band() {
        // Heading straight down from y=2.5 would reach y=0.5, below min separation.
        let sq = square();
        let params = OffsetParameters::default();
        let dir = Vector2::new(0.0, -1.0);
        let found =
            find_next_point(&Point2::new(50.0, 2.5), Some(&dir), &sq, &params, 15.0);
        // No ±15° adjustment of a downward heading stays in band; the sweep does.
        let found = found.unwrap();
        assert!(matches!(found.phase, StepPhase::Sweep(_)));
        let sep = sq.distance_to(&found.point);
        assert!((2.0..=4.0).contains(&sep), "sep={sep}");
    }

    #[test]
    fn small_adjustment_found_before_sweep() {
        // Heading slightly into the wall: a small turn inward suffices.
        let sq = square();
        let params = OffsetParameters::default();
        let dir = heading_vector(-40.0);
        let found =
            find_next_point(&Point2::new(50.0, 3.0), Some(&dir), &sq, &params, 15.0).unwrap();
        assert!(matches!(found.phase, StepPhase::Adjusted(_)), "{found:?}");
    }

    #[test]
    fn first_step_uses_sweep() {
        let sq = square();
        let params = OffsetParameters::default();
        let found = find_next_point(&Point2::new(50.0, 3.0), None, &sq, &params, 15.0).unwrap();
        assert_eq!(found.phase, StepPhase::Sweep(0.0));
        assert_abs_diff_eq!(found.point.x, 52.0);
    }

    #[test]
    fn every_candidate_is_segment_length_away() {
        let sq = square();
        let params = OffsetParameters::default();
        let start = Point2::new(20.0, 3.5);
        let dir = heading_vector(10.0);
        let found = find_next_point(&start, Some(&dir), &sq, &params, 15.0).unwrap();
        assert_abs_diff_eq!(
            nalgebra::distance(&start, &found.point),
            params.segment_length,
            epsilon = 1e-12
        );
    }

    #[test]
    fn exhausted_when_nothing_fits() {
        // Separation band far beyond what the square can offer near its corner.
        let sq = square();
        let params = OffsetParameters {
            target_separation: 45.0,
            min_separation: 45.0,
            max_separation: 46.0,
            ..OffsetParameters::default()
        };
        let found = find_next_point(&Point2::new(3.0, 3.0), None, &sq, &params, 15.0);
        assert!(found.is_none());
    }

    #[test]
    fn rejects_step_across_boundary() {
        let sq = square();
        let params = OffsetParameters {
            min_separation: 0.0,
            max_separation: 100.0,
            ..OffsetParameters::default()
        };
        let inside = Point2::new(99.0, 50.0);
        let outside = Point2::new(101.0, 50.0);
        assert!(!accepts(&inside, &outside, &sq, &params));
        assert!(accepts(&inside, &Point2::new(97.0, 50.0), &sq, &params));
    }
}
