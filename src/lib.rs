//! # recomendar
//!
//! Experiment recommendation engine: allocates a finite sampling budget
//! across hyperparameter dimensions proportional to estimated causal-effect
//! strength, builds a discretized candidate grid over each dimension's valid
//! range, and selects or ranks candidates by their novelty relative to
//! experiments already run.
//!
//! Effect estimation, archive ingestion, report rendering, and delivery are
//! external collaborators; this crate is the pure, deterministic core between
//! them. Identical inputs, including the selection policy's RNG seed, always
//! reproduce identical output.
//!
//! # Toyota Way: Genchi Genbutsu
//!
//! Go and see where the data is thin: candidates are ranked by their minimum
//! standardized distance to experiments that actually ran, so the next batch
//! probes the least-explored regions of the strongest dimensions.
//!
//! # Example
//!
//! ```ignore
//! use recomendar::{recommend, DimensionSpec, SelectionPolicy, ValueType};
//! use std::collections::HashMap;
//!
//! let mut dimensions = HashMap::new();
//! dimensions.insert("HP.LearningRate".to_string(), DimensionSpec {
//!     strength: 2.0, min_val: 0.0, max_val: 10.0,
//! });
//! dimensions.insert("HP.Dropout".to_string(), DimensionSpec {
//!     strength: 1.0, min_val: 0.0, max_val: 1.0,
//! });
//!
//! let mut dtypes = HashMap::new();
//! dtypes.insert("HP.LearningRate".to_string(), ValueType::Decimal);
//! dtypes.insert("HP.Dropout".to_string(), ValueType::Decimal);
//!
//! let existing = vec![vec![0.0, 0.0]];
//! let result = recommend(&dimensions, &dtypes, &existing, 12, SelectionPolicy::Rank)?;
//! println!("{} candidates generated", result.realized_total);
//! ```

mod budget;
mod engine;
mod error;
mod grid;
mod novelty;
mod types;

pub use budget::distribute_points;
pub use engine::recommend;
pub use error::{RecommendError, Result};
pub use grid::generate_grid;
pub use novelty::{filter_and_sample, min_distances, rank_candidates};
pub use types::{
    Dimension, DimensionSet, DimensionSpec, Recommendation, ScoredCandidate, Selection,
    SelectionPolicy, ValueType, DEFAULT_SEED, DEFAULT_THRESHOLD,
};
