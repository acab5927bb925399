//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides the stateless calculators that turn smoothed (or raw)
//! sequences into rate-of-change metrics: sliding averages, consecutive and
//! lagged differences, and the energy-balance estimate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API / Report
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Derived rate-of-change metrics.
pub mod metrics;
