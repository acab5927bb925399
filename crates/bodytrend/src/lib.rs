//! # bodytrend: LOESS trends for daily body-mass and energy-intake logs
//!
//! Daily weigh-ins and intake logs are noisy and irregular. This crate turns
//! them into smoothed trend lines with locally weighted regression (LOESS)
//! and derives the rate-of-change metrics a tracker displays: sliding
//! averages, lagged differences and an energy-balance (TDEE) estimate.
//!
//! ## What is LOESS here?
//!
//! For every point of a series the `count + 1` closest points in `x` (the
//! point itself included) are weighted with the tricube kernel and a straight
//! line is fitted to them by weighted least squares. The line is evaluated at
//! the point's own `x` to give the smoothed value. Each estimate depends only
//! on the input series, so points can be evaluated in any order or in
//! parallel.
//!
//! ## Quick Start
//!
//! ```rust
//! use bodytrend::prelude::*;
//!
//! let series = Series::from_values(&[82.0, 82.4, 81.9, 82.6, 82.1, 81.8, 82.3, 81.7]);
//!
//! // Reference convention: a fixed neighbor count.
//! let smoothed = smooth(&series, 4)?;
//! assert_eq!(smoothed.len(), series.len());
//!
//! // Configurable model: bandwidth as a fraction of the series length.
//! let model = Loess::new().fraction(0.5).build()?;
//! let result = model.smooth(&series)?;
//! println!("{}", result);
//! # Result::<(), TrendError>::Ok(())
//! ```
//!
//! ### Derived metrics
//!
//! ```rust
//! use bodytrend::prelude::*;
//!
//! let weekly = sliding_average(&[82.0, 82.0, 82.0, 82.0, 82.0, 82.0, 82.0], 7)?;
//! assert_eq!(weekly, vec![82.0]);
//!
//! let change = lagged_difference(&[1.0, 1.2, 1.4], 1);
//! assert_eq!(change[0], 0.0);
//!
//! let tdee = energy_balance(2500.0, -0.05);
//! assert!(tdee > 2500.0);
//! # Result::<(), TrendError>::Ok(())
//! ```
//!
//! ## Degenerate inputs
//!
//! Repeated `x` values can leave a neighbor set with zero spread. The tricube
//! ratio then becomes `0/0` and the least-squares denominator zero; the
//! resulting NaN/Inf is propagated unchanged by default so that outputs stay
//! reproducible. [`DegeneracyPolicy`] can log or reject such estimates instead.
//!
//! ## Features
//!
//! * `parallel` (default): evaluate points with `rayon` when requested.
//! * `serde`: derive `Serialize`/`Deserialize` on points and report types.

// Layer 1: Primitives - data model, sorting and errors.
mod primitives;

// Layer 2: Math - kernel functions.
mod math;

// Layer 3: Algorithms - neighbor selection and local regression.
mod algorithms;

// Layer 4: Evaluation - derived metrics over smoothed sequences.
mod evaluation;

// Layer 5: Engine - per-point orchestration.
mod engine;

// High-level fluent API for LOESS smoothing.
mod api;

/// Report assembly over daily records.
pub mod report;

pub use crate::algorithms::neighbors::{select_neighbors, select_neighbors_around};
pub use crate::algorithms::regression::{weighted_mean, LinearFit};
pub use crate::api::{
    Bandwidth, DegeneracyPolicy, LoessBuilder, LoessModel, SmoothResult,
};
pub use crate::engine::executor::smooth;
pub use crate::evaluation::metrics;
pub use crate::math::kernel::{tricube, tricube_weights};
pub use crate::primitives::errors::TrendError;
pub use crate::primitives::point::{Neighbor, NeighborSet, Point, Series};

/// Standard bodytrend prelude.
pub mod prelude {
    pub use crate::api::{
        Bandwidth, DegeneracyPolicy, LoessBuilder as Loess, LoessModel, SmoothResult,
    };
    pub use crate::evaluation::metrics::{
        energy_balance, energy_balance_series, lagged_difference, ratio, simple_difference,
        sliding_average,
    };
    pub use crate::report::{DailyRecord, ReportConfig, ReportRow, SmoothedDay, TrendReport};
    pub use crate::{
        select_neighbors, select_neighbors_around, smooth, tricube_weights, LinearFit,
        NeighborSet, Point, Series, TrendError,
    };
}
