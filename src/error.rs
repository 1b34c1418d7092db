use thiserror::Error;

/// Top-level error type for the fogline crate.
#[derive(Debug, Error)]
pub enum FoglineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Generation(#[from] GenerationFailure),
}

/// Errors raised while constructing or validating geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("non-finite coordinate at index {index}")]
    NonFinite { index: usize },

    #[error("consecutive points coincide at index {index}")]
    CoincidentPoints { index: usize },

    #[error("polygon has zero signed area")]
    ZeroArea,
}

/// Reasons a single nested-polygon level could not be generated.
///
/// Every variant is local to one level: a sequence stops at the first failed
/// level but keeps the levels produced before it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationFailure {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("no interior start point found after {samples} boundary samples")]
    SeedNotFound { samples: usize },

    #[error("no valid step candidate after {accepted} accepted points")]
    StepSearchExhausted { accepted: usize },

    #[error("walk did not close within {limit} steps")]
    PointLimitExceeded { limit: usize },

    #[error("sealed walk is not a valid polygon: {0}")]
    DegenerateClosure(GeometryError),
}

/// Convenience type alias for results using [`FoglineError`].
pub type Result<T> = std::result::Result<T, FoglineError>;

/// Result of generating a single nested level.
pub type LevelResult<T> = std::result::Result<T, GenerationFailure>;
