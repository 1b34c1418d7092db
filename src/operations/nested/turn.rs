use crate::math::polygon_2d::Aabb2;

use super::params::TurnControl;
use super::walk::WalkState;

/// What the controller concluded after an accepted step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnUpdate {
    /// Fewer accepted points than the window size; nothing evaluated.
    WindowFilling,
    /// Window area below the threshold; the walk's stuck level was raised.
    Stuck { level: u32, max_turn_angle: f64 },
    /// Window area at or above the threshold; controller back at baseline.
    Progressing,
}

/// Updates the walk's max turn angle from its trailing window.
///
/// Runs once per accepted step. While the window's bounding-box area stays
/// below `control.stuck_area` every call climbs one stuck level (the angle
/// follows [`TurnControl::angle_for`]); any call that sees enough area drops
/// straight back to the baseline.
pub fn regulate(walk: &mut WalkState, control: &TurnControl) -> TurnUpdate {
    if !walk.window_is_full() {
        return TurnUpdate::WindowFilling;
    }
    let area = Aabb2::from_points(walk.recent_history()).map_or(0.0, |bb| bb.area());
    if area < control.stuck_area {
        walk.stuck_level = walk.stuck_level.saturating_add(1);
        walk.current_max_turn_angle = control.angle_for(walk.stuck_level);
        TurnUpdate::Stuck {
            level: walk.stuck_level,
            max_turn_angle: walk.current_max_turn_angle,
        }
    } else {
        walk.stuck_level = 0;
        walk.current_max_turn_angle = control.baseline_angle;
        TurnUpdate::Progressing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    fn small_control() -> TurnControl {
        TurnControl {
            window: 4,
            stuck_area: 10.0,
            ..TurnControl::default()
        }
    }

    #[test]
    fn nothing_happens_while_window_fills() {
        let control = small_control();
        let mut walk = WalkState::new(Point2::new(0.0, 0.0), &control);
        walk.accept(Point2::new(0.1, 0.0));
        assert_eq!(regulate(&mut walk, &control), TurnUpdate::WindowFilling);
        assert_eq!(walk.stuck_level(), 0);
    }

    #[test]
    fn tight_circling_climbs_the_ladder() {
        let control = small_control();
        let mut walk = WalkState::new(Point2::new(0.0, 0.0), &control);
        let mut updates = Vec::new();
        for i in 0_u32..10 {
            let x = if i % 2 == 0 { 1.0 } else { 0.0 };
            walk.accept(Point2::new(x, f64::from(i % 3)));
            updates.push(regulate(&mut walk, &control));
        }
        let angles: Vec<f64> = updates
            .iter()
            .filter_map(|u| match u {
                TurnUpdate::Stuck { max_turn_angle, .. } => Some(*max_turn_angle),
                _ => None,
            })
            .collect();
        assert_eq!(angles, vec![20.0, 25.0, 30.0, 35.0, 40.0, 60.0, 60.0, 60.0]);
        assert_eq!(walk.stuck_level(), 8);
    }

    #[test]
    fn progress_resets_to_baseline() {
        let control = small_control();
        let mut walk = WalkState::new(Point2::new(0.0, 0.0), &control);
        for _ in 0..5 {
            walk.accept(Point2::new(0.5, 0.5));
            walk.accept(Point2::new(0.0, 0.0));
            regulate(&mut walk, &control);
        }
        assert!(walk.stuck_level() > 0);
        assert!(walk.current_max_turn_angle() > control.baseline_angle);

        walk.accept(Point2::new(10.0, 10.0));
        assert_eq!(regulate(&mut walk, &control), TurnUpdate::Progressing);
        assert_eq!(walk.stuck_level(), 0);
        assert_abs_diff_eq!(walk.current_max_turn_angle(), 15.0);
    }

    #[test]
    fn straight_line_has_zero_area() {
        let control = small_control();
        let mut walk = WalkState::new(Point2::new(0.0, 0.0), &control);
        for i in 1_u32..=3 {
            walk.accept(Point2::new(f64::from(i) * 100.0, 0.0));
        }
        assert!(matches!(
            regulate(&mut walk, &control),
            TurnUpdate::Stuck { level: 1, .. }
        ));
    }
}
