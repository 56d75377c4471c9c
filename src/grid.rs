//! Candidate grid generation

use crate::types::{Dimension, DimensionSet, ValueType};

/// Generate grid values for a single dimension.
///
/// One point lands on the range midpoint; `k > 1` points are evenly spaced
/// over `[min_val, max_val]` inclusive of both endpoints. Integer dimensions
/// round every value half-to-even; rounding duplicates on narrow integer
/// ranges propagate unmodified.
fn dimension_grid_values(dim: &Dimension) -> Vec<f64> {
    let values = if dim.point_count == 1 {
        vec![(dim.min_val + dim.max_val) / 2.0]
    } else {
        let divisor = (dim.point_count - 1) as f64;
        (0..dim.point_count)
            .map(|i| {
                let t = i as f64 / divisor;
                dim.min_val + t * (dim.max_val - dim.min_val)
            })
            .collect()
    };

    match dim.dtype {
        ValueType::Integer => values.into_iter().map(f64::round_ties_even).collect(),
        ValueType::Decimal => values,
    }
}

/// Generate the full candidate set: the Cartesian product of per-dimension
/// grids, iterated in canonical dimension order (first dimension slowest)
///
/// The output has exactly `dims.realized_total()` points, each with one
/// coordinate per dimension in the same order used for existing-sample
/// alignment.
pub fn generate_grid(dims: &DimensionSet) -> Vec<Vec<f64>> {
    let axes: Vec<Vec<f64>> = dims.iter().map(dimension_grid_values).collect();
    cartesian_product(&axes)
}

fn cartesian_product(axes: &[Vec<f64>]) -> Vec<Vec<f64>> {
    if axes.is_empty() {
        return vec![Vec::new()];
    }

    let values = &axes[0];
    let rest = axes.get(1..).unwrap_or_default();
    let rest_points = cartesian_product(rest);

    values
        .iter()
        .flat_map(|&v| {
            rest_points.iter().map(move |point| {
                let mut row = Vec::with_capacity(point.len() + 1);
                row.push(v);
                row.extend_from_slice(point);
                row
            })
        })
        .collect()
}
