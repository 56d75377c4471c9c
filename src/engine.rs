//! Recommendation orchestrator

use std::collections::HashMap;

use crate::budget::distribute_points;
use crate::error::{RecommendError, Result};
use crate::grid::generate_grid;
use crate::novelty::{filter_and_sample, rank_candidates};
use crate::types::{
    DimensionSet, DimensionSpec, Recommendation, Selection, SelectionPolicy, ValueType,
};

/// Recommend additional experiment configurations
///
/// Sequences budget allocation, grid generation, and novelty selection over
/// dimensions iterated in lexicographic name order. `existing_points` must be
/// column-ordered to that same order, one coordinate per dimension. The call
/// is pure and deterministic: identical inputs, including the policy's seed,
/// reproduce identical output.
///
/// `realized_total` in the result is the candidate count before any
/// filtering; it can exceed `max_points` when the budget is smaller than the
/// dimension count or the allocation overshoots, which the caller observes
/// rather than treats as fatal.
pub fn recommend(
    dimensions: &HashMap<String, DimensionSpec>,
    dtypes: &HashMap<String, ValueType>,
    existing_points: &[Vec<f64>],
    max_points: usize,
    policy: SelectionPolicy,
) -> Result<Recommendation> {
    if max_points == 0 {
        return Err(RecommendError::ZeroBudget);
    }

    let mut dims = DimensionSet::from_specs(dimensions, dtypes)?;

    for point in existing_points {
        if point.len() != dims.len() {
            return Err(RecommendError::PointWidthMismatch {
                expected: dims.len(),
                got: point.len(),
            });
        }
    }

    distribute_points(&mut dims, max_points)?;
    let grid = generate_grid(&dims);
    let realized_total = grid.len();

    let selection = match policy {
        SelectionPolicy::Rank => {
            Selection::Ranked(rank_candidates(existing_points, grid, dims.len())?)
        }
        SelectionPolicy::FilterAndSample { threshold, seed } => Selection::Sampled(
            filter_and_sample(existing_points, grid, dims.len(), threshold, seed, max_points)?,
        ),
    };

    Ok(Recommendation { selection, realized_total })
}
