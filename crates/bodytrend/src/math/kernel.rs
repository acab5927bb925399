//! Tricube kernel for LOESS weighting.
//!
//! ## Purpose
//!
//! This module converts the distances of a neighbor set into regression
//! weights. Close points get weights near one, the farthest neighbor gets
//! zero.
//!
//! ## Design notes
//!
//! * **Normalization**: Distances are scaled by the distance of the farthest
//!   neighbor, `u = |d_i / d_max|`.
//! * **No guard on zero spread**: when every neighbor shares the query's `x`,
//!   `d_max` is zero and each ratio is `0/0`. The resulting NaN weights are
//!   returned as-is; the engine decides whether to report them.
//!
//! ## Invariants
//!
//! * Output length equals the neighbor set length, index for index.
//! * For `u` in `[0, 1]` the weight lies in `[0, 1]`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::NeighborSet;

/// Tricube kernel: `K(u) = (1 - |u|^3)^3`.
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    let t = T::one() - u.abs().powi(3);
    t.powi(3)
}

/// Weight every neighbor by its distance relative to the farthest one.
///
/// Assumes `neighbors` is sorted by ascending distance, as produced by the
/// selector, so the last entry holds the maximum distance.
pub fn tricube_weights<T: Float>(neighbors: &NeighborSet<T>) -> Vec<T> {
    let Some(max_distance) = neighbors.max_distance() else {
        return Vec::new();
    };

    neighbors
        .iter()
        .map(|n| tricube(n.distance / max_distance))
        .collect()
}
