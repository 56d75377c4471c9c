//! Novelty scoring and candidate selection
//!
//! Candidates are scored by their minimum Euclidean distance to any
//! already-executed experiment, computed in standardized space so
//! differently-scaled hyperparameters are comparable. Standardization
//! statistics are always pooled over existing and candidate points together.

use ndarray::{s, Array1, Array2, Axis};
use rand::SeedableRng;
use std::cmp::Ordering;

use crate::error::{RecommendError, Result};
use crate::types::ScoredCandidate;

/// Total lexicographic order on points, coordinate by coordinate
pub(crate) fn cmp_points(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.total_cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

/// Attached distances carry 8 decimal places
fn round8(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}

/// Standardize existing and candidate points with statistics pooled over
/// their union (per-axis mean and population standard deviation).
///
/// A zero-variance axis contributes exactly 0 for every point on that axis.
fn standardize(
    existing: &[Vec<f64>],
    candidates: &[Vec<f64>],
    width: usize,
) -> (Array2<f64>, Array2<f64>) {
    let n_existing = existing.len();
    let mut pooled = Array2::zeros((n_existing + candidates.len(), width));
    for (i, point) in existing.iter().chain(candidates.iter()).enumerate() {
        for (j, &value) in point.iter().enumerate() {
            pooled[[i, j]] = value;
        }
    }

    let mean = pooled.mean_axis(Axis(0)).unwrap_or_else(|| Array1::zeros(width));
    let std = pooled.std_axis(Axis(0), 0.0);

    for j in 0..width {
        let mut column = pooled.column_mut(j);
        if std[j] == 0.0 {
            column.fill(0.0);
        } else {
            column.mapv_inplace(|v| (v - mean[j]) / std[j]);
        }
    }

    let existing_s = pooled.slice(s![..n_existing, ..]).to_owned();
    let candidates_s = pooled.slice(s![n_existing.., ..]).to_owned();
    (existing_s, candidates_s)
}

/// Minimum standardized distance from each candidate to the nearest
/// existing point, rounded to 8 decimal places
///
/// Fails with `NoExistingPoints` when there is nothing to measure against.
pub fn min_distances(
    existing: &[Vec<f64>],
    candidates: &[Vec<f64>],
    width: usize,
) -> Result<Vec<f64>> {
    if existing.is_empty() {
        return Err(RecommendError::NoExistingPoints);
    }

    let (existing_s, candidates_s) = standardize(existing, candidates, width);

    let distances = candidates_s
        .outer_iter()
        .map(|candidate| {
            let nearest = existing_s
                .outer_iter()
                .map(|sample| (&candidate - &sample).mapv(|d| d * d).sum().sqrt())
                .fold(f64::INFINITY, f64::min);
            round8(nearest)
        })
        .collect();

    Ok(distances)
}

/// Policy A: attach a novelty score to every candidate and rank the full set
///
/// Sorted by distance descending, ties broken by candidate value ascending.
/// The output is a permutation of the input; truncation to a presentation
/// size is the caller's responsibility.
pub fn rank_candidates(
    existing: &[Vec<f64>],
    candidates: Vec<Vec<f64>>,
    width: usize,
) -> Result<Vec<ScoredCandidate>> {
    let distances = min_distances(existing, &candidates, width)?;

    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .zip(distances)
        .map(|(point, novelty)| ScoredCandidate { point, novelty })
        .collect();

    scored.sort_by(|a, b| {
        b.novelty.total_cmp(&a.novelty).then_with(|| cmp_points(&a.point, &b.point))
    });

    Ok(scored)
}

/// Policy B: drop near-duplicate candidates, then subsample to the budget
///
/// Keeps candidates whose nearest-neighbor distance is at least `threshold`
/// standardized units. When more than `max_points` survive, draws a uniform
/// sample of exactly `max_points` from a `StdRng` seeded with `seed`. The
/// result is sorted lexicographically with no distance attached; an empty
/// result is a normal outcome.
pub fn filter_and_sample(
    existing: &[Vec<f64>],
    candidates: Vec<Vec<f64>>,
    width: usize,
    threshold: f64,
    seed: u64,
    max_points: usize,
) -> Result<Vec<Vec<f64>>> {
    let distances = min_distances(existing, &candidates, width)?;

    let mut survivors: Vec<Vec<f64>> = candidates
        .into_iter()
        .zip(distances)
        .filter(|&(_, distance)| distance >= threshold)
        .map(|(point, _)| point)
        .collect();

    if survivors.len() > max_points {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let chosen = rand::seq::index::sample(&mut rng, survivors.len(), max_points);
        let mut sampled: Vec<Vec<f64>> = Vec::with_capacity(max_points);
        for i in chosen.iter() {
            sampled.push(survivors[i].clone());
        }
        survivors = sampled;
    }

    survivors.sort_by(|a, b| cmp_points(a, b));
    Ok(survivors)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_candidates(side: usize) -> Vec<Vec<f64>> {
        (0..side)
            .flat_map(|i| (0..side).map(move |j| vec![i as f64, j as f64]))
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_rank_preserves_cardinality(side in 1usize..6) {
            let existing = vec![vec![0.5, 0.5]];
            let candidates = grid_candidates(side);
            let ranked = rank_candidates(&existing, candidates.clone(), 2).unwrap();
            prop_assert_eq!(ranked.len(), candidates.len());
        }

        #[test]
        fn prop_rank_distances_nonincreasing(side in 2usize..6) {
            let existing = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
            let ranked = rank_candidates(&existing, grid_candidates(side), 2).unwrap();
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].novelty >= pair[1].novelty);
            }
        }

        #[test]
        fn prop_sample_never_exceeds_budget(
            side in 2usize..7,
            max_points in 1usize..20,
            seed in 0u64..1000
        ) {
            let existing = vec![vec![-10.0, -10.0]];
            let kept = filter_and_sample(&existing, grid_candidates(side), 2, 0.2, seed, max_points)
                .unwrap();
            prop_assert!(kept.len() <= max_points);
        }

        #[test]
        fn prop_sample_deterministic_given_seed(seed in 0u64..1000) {
            let existing = vec![vec![-10.0, -10.0]];
            let first =
                filter_and_sample(&existing, grid_candidates(5), 2, 0.2, seed, 7).unwrap();
            let second =
                filter_and_sample(&existing, grid_candidates(5), 2, 0.2, seed, 7).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
