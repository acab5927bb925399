//! Layer 3: Algorithms
//!
//! This layer implements the two steps of a single local fit: choosing the
//! neighbors of a query point and solving the weighted least-squares line
//! through them. It is orchestrated by the engine layer.

// Nearest-neighbor selection.
pub mod neighbors;

// Weighted least-squares line fitting.
pub mod regression;
