//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer applies the single-point LOESS fit across a whole series,
//! handles degenerate estimates, and shapes the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API / Report
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for LOESS smoothing.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for smoothing operations.
pub mod output;
