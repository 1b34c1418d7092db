use std::collections::VecDeque;

use crate::math::{Point2, Vector2};

use super::params::TurnControl;

/// Live state of one in-progress level.
///
/// Created from a seed point, grown one accepted point at a time, and
/// consumed when the level closes or fails.
#[derive(Debug, Clone)]
pub struct WalkState {
    start_point: Point2,
    current_point: Point2,
    previous_direction: Option<Vector2>,
    accepted_points: Vec<Point2>,
    pub(super) current_max_turn_angle: f64,
    pub(super) stuck_level: u32,
    recent_history_window: VecDeque<Point2>,
    window_len: usize,
}

impl WalkState {
    /// Starts a walk at `seed` with the controller at its baseline.
    #[must_use]
    pub fn new(seed: Point2, control: &TurnControl) -> Self {
        let window_len = control.window.max(1);
        let mut recent_history_window = VecDeque::with_capacity(window_len);
        recent_history_window.push_back(seed);
        Self {
            start_point: seed,
            current_point: seed,
            previous_direction: None,
            accepted_points: vec![seed],
            current_max_turn_angle: control.baseline_angle,
            stuck_level: 0,
            recent_history_window,
            window_len,
        }
    }

    /// Appends `next` and records the unit direction of the step taken.
    pub fn accept(&mut self, next: Point2) {
        let step = next - self.current_point;
        let len = step.norm();
        if len > 0.0 {
            self.previous_direction = Some(step / len);
        }
        self.current_point = next;
        self.accepted_points.push(next);
        if self.recent_history_window.len() == self.window_len {
            self.recent_history_window.pop_front();
        }
        self.recent_history_window.push_back(next);
    }

    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.start_point
    }

    #[must_use]
    pub fn current_point(&self) -> Point2 {
        self.current_point
    }

    #[must_use]
    pub fn previous_direction(&self) -> Option<Vector2> {
        self.previous_direction
    }

    #[must_use]
    pub fn accepted_points(&self) -> &[Point2] {
        &self.accepted_points
    }

    /// Steps taken so far (accepted points after the seed).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.accepted_points.len() - 1
    }

    #[must_use]
    pub fn current_max_turn_angle(&self) -> f64 {
        self.current_max_turn_angle
    }

    #[must_use]
    pub fn stuck_level(&self) -> u32 {
        self.stuck_level
    }

    /// Trailing accepted points used for stuck detection.
    #[must_use]
    pub fn recent_history(&self) -> &VecDeque<Point2> {
        &self.recent_history_window
    }

    /// Returns `true` once the trailing window holds its full size.
    #[must_use]
    pub fn window_is_full(&self) -> bool {
        self.recent_history_window.len() == self.window_len
    }

    pub(super) fn into_points(self) -> Vec<Point2> {
        self.accepted_points
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn control(window: usize) -> TurnControl {
        TurnControl {
            window,
            ..TurnControl::default()
        }
    }

    #[test]
    fn fresh_walk_has_no_direction() {
        let walk = WalkState::new(Point2::new(1.0, 2.0), &TurnControl::default());
        assert!(walk.previous_direction().is_none());
        assert_eq!(walk.accepted_points(), &[Point2::new(1.0, 2.0)]);
        assert_eq!(walk.steps(), 0);
        assert_abs_diff_eq!(walk.current_max_turn_angle(), 15.0);
    }

    #[test]
    fn accept_records_unit_direction() {
        let mut walk = WalkState::new(Point2::new(0.0, 0.0), &TurnControl::default());
        walk.accept(Point2::new(0.0, 2.0));
        let dir = walk.previous_direction().unwrap();
        assert_abs_diff_eq!(dir.x, 0.0);
        assert_abs_diff_eq!(dir.y, 1.0);
        assert_eq!(walk.current_point(), Point2::new(0.0, 2.0));
        assert_eq!(walk.steps(), 1);
    }

    #[test]
    fn window_keeps_only_trailing_points() {
        let mut walk = WalkState::new(Point2::new(0.0, 0.0), &control(3));
        for i in 1_u32..=5 {
            walk.accept(Point2::new(f64::from(i), 0.0));
        }
        assert!(walk.window_is_full());
        let xs: Vec<f64> = walk.recent_history().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![3.0, 4.0, 5.0]);
        assert_eq!(walk.accepted_points().len(), 6);
    }

    #[test]
    fn window_fills_after_enough_points() {
        let mut walk = WalkState::new(Point2::new(0.0, 0.0), &control(4));
        walk.accept(Point2::new(1.0, 0.0));
        walk.accept(Point2::new(2.0, 0.0));
        assert!(!walk.window_is_full());
        walk.accept(Point2::new(3.0, 0.0));
        assert!(walk.window_is_full());
    }
}
