//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data model (points, series, neighbor sets), the
//! distance ordering used by neighbor selection, and the shared error type.
//! It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API / Report
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Points, series and neighbor sets.
pub mod point;

/// Distance ordering utilities.
pub mod sorting;

/// Shared error types.
pub mod errors;
