//! Point budget allocation across dimensions

use crate::error::{RecommendError, Result};
use crate::types::DimensionSet;

/// Distribute a total point budget across dimensions proportional to
/// causal-effect strength
///
/// With `s_i = |strength_i|` and `k = (max_points / prod(s_i))^(1/n)`, each
/// dimension receives `max(1, floor(k * s_i))` points. Stronger dimensions get
/// finer grids; every dimension keeps at least one point. The realized product
/// of point counts is typically at or below `max_points` but is not guaranteed
/// exact, and can exceed it when `max_points` is smaller than the dimension
/// count.
///
/// Fails with `ZeroStrength` if any dimension reaches the allocator with a
/// zero-magnitude strength; the caller must strip zero-effect dimensions
/// before invocation.
pub fn distribute_points(dims: &mut DimensionSet, max_points: usize) -> Result<()> {
    if max_points == 0 {
        return Err(RecommendError::ZeroBudget);
    }
    if dims.is_empty() {
        return Err(RecommendError::EmptyDimensions);
    }

    let mut product = 1.0_f64;
    for dim in dims.iter() {
        let magnitude = dim.strength.abs();
        if magnitude == 0.0 {
            return Err(RecommendError::ZeroStrength(dim.name.clone()));
        }
        product *= magnitude;
    }

    let n = dims.len() as f64;
    let k = (max_points as f64 / product).powf(1.0 / n);

    for dim in dims.iter_mut() {
        let allocated = (k * dim.strength.abs()).floor();
        dim.point_count = if allocated < 1.0 { 1 } else { allocated as usize };
    }

    Ok(())
}
