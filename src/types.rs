//! Core recommendation types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{RecommendError, Result};

/// Default minimum standardized distance for filter-and-sample selection
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Default RNG seed for filter-and-sample selection
pub const DEFAULT_SEED: u64 = 42;

/// Numeric type of a hyperparameter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Grid values rounded to the nearest integer (ties to even)
    Integer,
    /// Grid values emitted as-is
    Decimal,
}

/// Caller-supplied dimension parameters, prior to budget allocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionSpec {
    /// Signed causal-effect magnitude; only |strength| drives allocation
    pub strength: f64,
    pub min_val: f64,
    pub max_val: f64,
}

/// A resolved dimension record (ordered, with point budget attached)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub strength: f64,
    pub min_val: f64,
    pub max_val: f64,
    pub dtype: ValueType,
    /// Grid points allocated to this dimension (>= 1 after allocation)
    pub point_count: usize,
}

/// Ordered dimension arena with a name -> index lookup
///
/// Dimensions are held sorted lexicographically by name; every consumer
/// (grid generation, existing-sample alignment, distance computation) iterates
/// this one order. A point's i-th coordinate always belongs to `dims[i]`.
#[derive(Debug, Clone)]
pub struct DimensionSet {
    dims: Vec<Dimension>,
    index: HashMap<String, usize>,
}

impl DimensionSet {
    /// Build an ordered dimension set from name-keyed specs and dtypes
    ///
    /// Fails with `EmptyDimensions` for an empty spec map, `MissingDtype`
    /// when a dimension has no declared numeric type, and `InvertedRange`
    /// when a dimension's `min_val` exceeds its `max_val`.
    pub fn from_specs(
        specs: &HashMap<String, DimensionSpec>,
        dtypes: &HashMap<String, ValueType>,
    ) -> Result<Self> {
        if specs.is_empty() {
            return Err(RecommendError::EmptyDimensions);
        }

        let mut names: Vec<&String> = specs.keys().collect();
        names.sort();

        let mut dims = Vec::with_capacity(names.len());
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.into_iter().enumerate() {
            let spec = &specs[name];
            let dtype = *dtypes
                .get(name)
                .ok_or_else(|| RecommendError::MissingDtype(name.clone()))?;
            if spec.min_val > spec.max_val {
                return Err(RecommendError::InvertedRange(name.clone()));
            }
            dims.push(Dimension {
                name: name.clone(),
                strength: spec.strength,
                min_val: spec.min_val,
                max_val: spec.max_val,
                dtype,
                point_count: 1,
            });
            index.insert(name.clone(), i);
        }

        Ok(Self { dims, index })
    }

    /// Number of dimensions
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Iterate dimensions in canonical (lexicographic) order
    pub fn iter(&self) -> impl Iterator<Item = &Dimension> {
        self.dims.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Dimension> {
        self.dims.iter_mut()
    }

    /// Look up a dimension by name
    pub fn get(&self, name: &str) -> Option<&Dimension> {
        self.index.get(name).map(|&i| &self.dims[i])
    }

    /// Canonical axis index of a dimension
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Product of per-dimension point counts (the realized grid size)
    pub fn realized_total(&self) -> usize {
        self.dims.iter().map(|d| d.point_count).product()
    }
}

/// A candidate point with its minimum standardized distance to any
/// already-executed experiment, rounded to 8 decimal places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// One coordinate per dimension, in canonical order
    pub point: Vec<f64>,
    /// Higher means less redundant with existing experiments
    pub novelty: f64,
}

/// Candidate selection policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Rank every candidate by novelty; no filtering, no truncation
    Rank,
    /// Drop near-duplicates, then uniformly subsample down to the budget
    FilterAndSample {
        #[serde(default = "default_threshold")]
        threshold: f64,
        #[serde(default = "default_seed")]
        seed: u64,
    },
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl SelectionPolicy {
    /// Filter-and-sample with the default threshold and seed
    pub fn filter_and_sample() -> Self {
        SelectionPolicy::FilterAndSample { threshold: DEFAULT_THRESHOLD, seed: DEFAULT_SEED }
    }
}

/// Selected candidates, shaped by the policy that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Selection {
    /// Full candidate set sorted by novelty descending (Policy A)
    Ranked(Vec<ScoredCandidate>),
    /// Filtered subsample sorted lexicographically, no distances (Policy B)
    Sampled(Vec<Vec<f64>>),
}

impl Selection {
    /// Number of selected candidates
    pub fn len(&self) -> usize {
        match self {
            Selection::Ranked(c) => c.len(),
            Selection::Sampled(p) => p.len(),
        }
    }

    /// Check if the selection is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of one recommendation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Selected or ranked candidates
    pub selection: Selection,
    /// Candidate count before any filtering (product of point counts)
    pub realized_total: usize,
}
