//! Error types for trend operations.
//!
//! ## Purpose
//!
//! This module defines the structural failures that abort a smoothing or
//! metric call: bad indices, over-sized neighbor or window requests, and
//! sequences that must correspond index-for-index but do not.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (index and length, requested and available).
//! * **Deferred**: Builder misconfiguration is stored and reported by `build()`.
//! * **Numeric degeneracy is not an error** unless the caller opts into strict mode.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for trend smoothing and derived metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrendError {
    /// A requested center index lies outside the series.
    #[error("Index out of bounds: index {index} for series of length {len}")]
    Index {
        /// The requested index.
        index: usize,
        /// Length of the series.
        len: usize,
    },

    /// More neighbors were requested than the series holds.
    #[error("Capacity exceeded: requested {requested} neighbors from {available} points")]
    Capacity {
        /// Number of neighbors requested.
        requested: usize,
        /// Number of points available.
        available: usize,
    },

    /// Two sequences that must correspond index-for-index differ in length.
    #[error("Length mismatch: {left} values against {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// A sliding window does not fit the sequence.
    #[error("Invalid window: width {width} for {len} values (must be between 1 and {len})")]
    Range {
        /// The requested window width.
        width: usize,
        /// Number of values available.
        len: usize,
    },

    /// A neighbor query was made against an empty series.
    #[error("Series is empty")]
    EmptySeries,

    /// Not enough points to build the requested output.
    #[error("Too few points: got {got}, need at least {min}")]
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Bandwidth fraction must lie in (0, 1].
    #[error("Invalid fraction: {0} (must be > 0 and <= 1)")]
    InvalidFraction(f64),

    /// Neither a neighbor count nor a fraction was configured.
    #[error("No bandwidth configured: set a neighbor count or a fraction")]
    MissingBandwidth,

    /// Parameter was set multiple times in the builder.
    #[error("Parameter '{parameter}' was set multiple times. Each parameter can only be configured once.")]
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Strict mode rejected a NaN or infinite estimate.
    ///
    /// Raised for zero spread in `x` within a neighborhood and for non-finite
    /// input values that reach a local fit.
    #[error("Non-finite local estimate at index {index}")]
    Degenerate {
        /// Index of the offending estimate.
        index: usize,
    },
}
