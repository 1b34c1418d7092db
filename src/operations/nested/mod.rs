//! Nested inward-offset polygon generation.
//!
//! Each level walks inside its reference polygon one fixed-length step at a
//! time, keeping every accepted point inside a separation band from the
//! reference boundary, until the walk returns to its start and is sealed.
//! The sealed polygon becomes the reference of the next level.

mod closure;
mod params;
mod seed;
mod step;
mod turn;
mod walk;

pub use closure::{seal, should_close};
pub use params::{ClosureRule, OffsetParameters, TurnControl};
pub use seed::{find_seed, sample_count, sample_stride};
pub use step::{
    accepts, adjustment_offsets, find_next_point, sweep_headings, StepCandidate, StepPhase,
};
pub use turn::{regulate, TurnUpdate};
pub use walk::WalkState;

use tracing::{debug, trace};

use crate::error::{GenerationFailure, LevelResult};
use crate::geometry::Polygon;

/// Progress of a single level.
///
/// A level moves `SeedingStart → Walking → Closed`, or ends in `Failed`
/// from either of the first two states.
#[derive(Debug, Clone)]
pub enum LevelState {
    SeedingStart,
    Walking(WalkState),
    Closed(Polygon),
    Failed(GenerationFailure),
}

impl LevelState {
    /// Returns `true` for `Closed` and `Failed`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed(_) | Self::Failed(_))
    }
}

/// Generates one nested polygon inside a reference polygon.
pub struct NestedPolygon<'a> {
    reference: &'a Polygon,
    params: OffsetParameters,
    turn: TurnControl,
    closure: ClosureRule,
}

impl<'a> NestedPolygon<'a> {
    /// Creates a new `NestedPolygon` operation with default tuning.
    #[must_use]
    pub fn new(reference: &'a Polygon, params: OffsetParameters) -> Self {
        Self {
            reference,
            params,
            turn: TurnControl::default(),
            closure: ClosureRule::default(),
        }
    }

    /// Overrides the adaptive turn controller tuning.
    #[must_use]
    pub fn with_turn_control(mut self, turn: TurnControl) -> Self {
        self.turn = turn;
        self
    }

    /// Overrides the closure rule.
    #[must_use]
    pub fn with_closure_rule(mut self, closure: ClosureRule) -> Self {
        self.closure = closure;
        self
    }

    /// Maximum number of steps the walk may take on this reference.
    ///
    /// The smaller of `max_points` and `floor(2 × perimeter / segment_length)`.
    #[must_use]
    pub fn step_cap(&self) -> usize {
        let laps = (2.0 * self.reference.perimeter() / self.params.segment_length).floor();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let dynamic = if laps.is_finite() && laps > 0.0 {
            laps as usize
        } else {
            0
        };
        self.params.max_points.min(dynamic)
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// - `GenerationFailure::InvalidParameters` if the parameters are
    ///   malformed or `max_separation` exceeds the reference diameter
    /// - `GenerationFailure::SeedNotFound` if no interior start point exists
    /// - `GenerationFailure::StepSearchExhausted` if the walk has no valid step
    /// - `GenerationFailure::PointLimitExceeded` if the step cap is reached
    /// - `GenerationFailure::DegenerateClosure` if the sealed walk is not a
    ///   valid polygon
    pub fn execute(&self) -> LevelResult<Polygon> {
        self.params.validate()?;
        let diameter = self.reference.diameter();
        if self.params.max_separation > diameter {
            return Err(GenerationFailure::InvalidParameters(format!(
                "max_separation = {} exceeds reference diameter {diameter}",
                self.params.max_separation
            )));
        }

        let cap = self.step_cap();
        debug!(
            reference_points = self.reference.len(),
            step_cap = cap,
            "generating nested polygon"
        );

        let mut state = LevelState::SeedingStart;
        loop {
            state = match state {
                LevelState::Closed(polygon) => {
                    debug!(points = polygon.len(), "level closed");
                    return Ok(polygon);
                }
                LevelState::Failed(failure) => {
                    debug!(%failure, "level failed");
                    return Err(failure);
                }
                other => self.advance(other, cap),
            };
        }
    }

    /// Moves a level one transition forward.
    ///
    /// Terminal states are returned unchanged.
    #[must_use]
    pub fn advance(&self, state: LevelState, cap: usize) -> LevelState {
        match state {
            LevelState::SeedingStart => self.seed(),
            LevelState::Walking(walk) => self.step(walk, cap),
            terminal => terminal,
        }
    }

    fn seed(&self) -> LevelState {
        match find_seed(self.reference, self.params.target_separation) {
            Some(seed) => {
                debug!(x = seed.x, y = seed.y, "seed found");
                LevelState::Walking(WalkState::new(seed, &self.turn))
            }
            None => LevelState::Failed(GenerationFailure::SeedNotFound {
                samples: sample_count(self.reference.len()),
            }),
        }
    }

    fn step(&self, mut walk: WalkState, cap: usize) -> LevelState {
        if walk.steps() >= cap {
            return LevelState::Failed(GenerationFailure::PointLimitExceeded { limit: cap });
        }

        let Some(candidate) = find_next_point(
            &walk.current_point(),
            walk.previous_direction().as_ref(),
            self.reference,
            &self.params,
            walk.current_max_turn_angle(),
        ) else {
            return LevelState::Failed(GenerationFailure::StepSearchExhausted {
                accepted: walk.accepted_points().len(),
            });
        };

        walk.accept(candidate.point);
        trace!(
            step = walk.steps(),
            phase = ?candidate.phase,
            max_turn = walk.current_max_turn_angle(),
            "step accepted"
        );

        let before = walk.stuck_level();
        if let TurnUpdate::Stuck {
            level,
            max_turn_angle,
        } = regulate(&mut walk, &self.turn)
        {
            trace!(level, max_turn_angle, "walk stuck");
        } else if before > 0 && walk.stuck_level() == 0 {
            trace!("walk progressing, turn angle reset");
        }

        if should_close(&walk, &self.closure, self.params.segment_length) {
            match seal(walk) {
                Ok(polygon) => LevelState::Closed(polygon),
                Err(failure) => LevelState::Failed(failure),
            }
        } else {
            LevelState::Walking(walk)
        }
    }
}

/// A level that failed while generating a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelFailure {
    /// Index the failed polygon would have had in the sequence.
    pub level: usize,
    pub failure: GenerationFailure,
}

/// Output of [`NestedPolygonSequence`].
#[derive(Debug, Clone)]
pub struct NestedPolygonSet {
    /// Index 0 is the input boundary; index `i` was offset from `i - 1`.
    pub polygons: Vec<Polygon>,
    /// Why generation stopped early, if it did.
    pub failure: Option<LevelFailure>,
}

impl NestedPolygonSet {
    #[must_use]
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }
}

/// Generates a sequence of nested polygons, each inside the previous one.
///
/// Level `k` (1-based) shifts all three separations by
/// `(k - 1) × inter_curve_distance`. Generation stops at the first failed
/// level and keeps everything produced before it.
pub struct NestedPolygonSequence {
    boundary: Polygon,
    level_count: usize,
    params: OffsetParameters,
    inter_curve_distance: f64,
    turn: TurnControl,
    closure: ClosureRule,
}

impl NestedPolygonSequence {
    /// Creates a new `NestedPolygonSequence` operation.
    #[must_use]
    pub fn new(
        boundary: Polygon,
        level_count: usize,
        params: OffsetParameters,
        inter_curve_distance: f64,
    ) -> Self {
        Self {
            boundary,
            level_count,
            params,
            inter_curve_distance,
            turn: TurnControl::default(),
            closure: ClosureRule::default(),
        }
    }

    #[must_use]
    pub fn with_turn_control(mut self, turn: TurnControl) -> Self {
        self.turn = turn;
        self
    }

    #[must_use]
    pub fn with_closure_rule(mut self, closure: ClosureRule) -> Self {
        self.closure = closure;
        self
    }

    /// Parameters used for generated level `level` (1-based).
    #[must_use]
    pub fn level_params(&self, level: usize) -> OffsetParameters {
        #[allow(clippy::cast_precision_loss)]
        let shift = level.saturating_sub(1) as f64 * self.inter_curve_distance;
        self.params.shifted(shift)
    }

    /// Executes the operation. Never fails; see [`NestedPolygonSet::failure`].
    #[must_use]
    pub fn execute(&self) -> NestedPolygonSet {
        let mut polygons = Vec::with_capacity(self.level_count + 1);
        polygons.push(self.boundary.clone());

        for level in 1..=self.level_count {
            let _span = tracing::debug_span!("nested_level", level).entered();
            let reference = &polygons[level - 1];
            let outcome = NestedPolygon::new(reference, self.level_params(level))
                .with_turn_control(self.turn)
                .with_closure_rule(self.closure)
                .execute();
            match outcome {
                Ok(polygon) => polygons.push(polygon),
                Err(failure) => {
                    return NestedPolygonSet {
                        polygons,
                        failure: Some(LevelFailure { level, failure }),
                    };
                }
            }
        }

        NestedPolygonSet {
            polygons,
            failure: None,
        }
    }
}
