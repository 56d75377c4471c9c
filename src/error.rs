//! Recommendation error types

use thiserror::Error;

/// Recommendation errors
///
/// Grouped by kind: configuration (`ZeroBudget`, `EmptyDimensions`,
/// `MissingDtype`, `InvertedRange`, `PointWidthMismatch`), domain (`ZeroStrength`), and
/// insufficient data (`NoExistingPoints`). An empty Policy B result is a
/// normal `Ok`, never an error.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("max_points must be at least 1")]
    ZeroBudget,

    #[error("Empty dimension set")]
    EmptyDimensions,

    #[error("No dtype declared for dimension: {0}")]
    MissingDtype(String),

    #[error("Inverted range for dimension {0}: min_val exceeds max_val")]
    InvertedRange(String),

    #[error("Existing point has {got} coordinates, expected {expected}")]
    PointWidthMismatch { expected: usize, got: usize },

    #[error("Zero-strength dimension reached the allocator: {0}")]
    ZeroStrength(String),

    #[error("No existing points available for novelty scoring")]
    NoExistingPoints,
}

/// Result type for recommendation operations
pub type Result<T> = std::result::Result<T, RecommendError>;
