use crate::error::{GenerationFailure, LevelResult};

/// Geometric targets for one nested level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetParameters {
    /// Distance between consecutive generated points.
    pub segment_length: f64,
    /// Separation used to place the seed point.
    pub target_separation: f64,
    /// Lower bound on the distance of every step to the reference boundary.
    pub min_separation: f64,
    /// Upper bound on the distance of every step to the reference boundary.
    pub max_separation: f64,
    /// Hard cap on the number of steps taken for one level.
    pub max_points: usize,
}

impl Default for OffsetParameters {
    fn default() -> Self {
        Self {
            segment_length: 2.0,
            target_separation: 3.0,
            min_separation: 2.0,
            max_separation: 4.0,
            max_points: 2000,
        }
    }
}

impl OffsetParameters {
    /// Checks the parameter invariants without clamping anything.
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailure::InvalidParameters` when a value is not
    /// finite, `segment_length` is not positive, `max_points` is zero, or the
    /// separations violate `0 <= min <= target <= max`.
    pub fn validate(&self) -> LevelResult<()> {
        let values = [
            ("segment_length", self.segment_length),
            ("target_separation", self.target_separation),
            ("min_separation", self.min_separation),
            ("max_separation", self.max_separation),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} = {value} is not finite")));
        }
        if self.segment_length <= 0.0 {
            return Err(invalid(format!(
                "segment_length = {} must be positive",
                self.segment_length
            )));
        }
        if self.max_points == 0 {
            return Err(invalid("max_points must be at least 1".to_owned()));
        }
        if self.min_separation < 0.0 {
            return Err(invalid(format!(
                "min_separation = {} must not be negative",
                self.min_separation
            )));
        }
        if !(self.min_separation <= self.target_separation
            && self.target_separation <= self.max_separation)
        {
            return Err(invalid(format!(
                "separations must satisfy min <= target <= max, got {} / {} / {}",
                self.min_separation, self.target_separation, self.max_separation
            )));
        }
        Ok(())
    }

    /// Returns a copy with all three separations moved inward by `delta`.
    #[must_use]
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            target_separation: self.target_separation + delta,
            min_separation: self.min_separation + delta,
            max_separation: self.max_separation + delta,
            ..*self
        }
    }
}

fn invalid(message: String) -> GenerationFailure {
    GenerationFailure::InvalidParameters(message)
}

/// Tuning for the adaptive turn controller.
///
/// The defaults were tuned for coordinates in roughly `0..1500` per axis and
/// may need scaling for other units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnControl {
    /// Number of trailing accepted points inspected for stuck detection.
    pub window: usize,
    /// Bounding-box area of the window below which the walk counts as stuck.
    pub stuck_area: f64,
    /// Max turn angle (degrees) while the walk is progressing.
    pub baseline_angle: f64,
    /// Increase (degrees) per stuck level while on the ladder.
    pub ladder_step: f64,
    /// Number of stuck levels that climb the ladder.
    pub ladder_len: u32,
    /// Max turn angle (degrees) once the ladder is exhausted.
    pub ceiling_angle: f64,
}

impl Default for TurnControl {
    fn default() -> Self {
        Self {
            window: 30,
            stuck_area: 800.0,
            baseline_angle: 15.0,
            ladder_step: 5.0,
            ladder_len: 5,
            ceiling_angle: 60.0,
        }
    }
}

impl TurnControl {
    /// Max turn angle for a given stuck level.
    #[must_use]
    pub fn angle_for(&self, stuck_level: u32) -> f64 {
        if stuck_level > self.ladder_len {
            self.ceiling_angle
        } else {
            self.baseline_angle + f64::from(stuck_level) * self.ladder_step
        }
    }
}

/// When a walk may be sealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosureRule {
    /// Accepted points (seed included) required before closing is considered.
    pub min_points: usize,
    /// Closing radius as a fraction of the segment length.
    pub radius_factor: f64,
}

impl Default for ClosureRule {
    fn default() -> Self {
        Self {
            min_points: 20,
            radius_factor: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(OffsetParameters::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_segment_length() {
        let params = OffsetParameters {
            segment_length: 0.0,
            ..OffsetParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(GenerationFailure::InvalidParameters(_))
        ));
    }

    #[test]
    fn rejects_unordered_separations() {
        let params = OffsetParameters {
            min_separation: 3.5,
            ..OffsetParameters::default()
        };
        assert!(params.validate().is_err());

        let params = OffsetParameters {
            max_separation: 2.5,
            ..OffsetParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_nan_and_zero_cap() {
        let params = OffsetParameters {
            target_separation: f64::NAN,
            ..OffsetParameters::default()
        };
        assert!(params.validate().is_err());

        let params = OffsetParameters {
            max_points: 0,
            ..OffsetParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn equal_separations_are_allowed() {
        let params = OffsetParameters {
            target_separation: 3.0,
            min_separation: 3.0,
            max_separation: 3.0,
            ..OffsetParameters::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn shifted_moves_all_separations() {
        let p = OffsetParameters::default().shifted(1.5);
        assert!((p.target_separation - 4.5).abs() < 1e-12);
        assert!((p.min_separation - 3.5).abs() < 1e-12);
        assert!((p.max_separation - 5.5).abs() < 1e-12);
        assert!((p.segment_length - 2.0).abs() < 1e-12);
    }

    #[test]
    fn turn_ladder() {
        let tc = TurnControl::default();
        let angles: Vec<f64> = (0..=7).map(|level| tc.angle_for(level)).collect();
        assert_eq!(angles, vec![15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 60.0, 60.0]);
    }
}
