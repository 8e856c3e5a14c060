//! # fastPi
//!
//! Parallel estimation of π by midpoint-rule integration of
//! f(x) = 4 / (1 + x²) over [0, 1].
//!
//! The step range is split into one contiguous interval per worker, each
//! worker integrates its interval on its own thread, and the partial sums
//! are added once every worker has finished. A benchmark adapter sweeps
//! step counts and worker counts and writes the timings as CSV.
//!
//! ## Quick start
//!
//! ```no_run
//! use fastPi::prelude::*;
//!
//! let estimate = Pi::new()
//!     .steps(10_000_000)
//!     .workers(8)
//!     .build()?
//!     .estimate()?;
//!
//! println!("pi ≈ {} in {:?}", estimate.pi, estimate.elapsed);
//! # Ok::<(), PiError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: Adapters    (interactive, benchmark)
//!   ↓
//! Layer 5: API         (PiBuilder, PiIntegrator, RunConfiguration)
//!   ↓
//! Layer 4: Engine      (parallel / sequential passes, aggregation)
//!   ↓
//! Layer 3: Algorithms  (partitioning, midpoint rule)
//!   ↓
//! Layer 2: Math        (integrand)
//!   ↓
//! Layer 1: Primitives  (errors, float trait)
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): parallel pass on a `rayon` thread pool. Without it the
//!   parallel pass falls back to the sequential one.

#![allow(non_snake_case)]

/// Layer 1: Primitives.
pub mod primitives;

/// Layer 2: Math.
pub mod math;

/// Layer 3: Algorithms.
pub mod algorithms;

/// Layer 4: Engine.
pub mod engine;

/// Layer 5: High-level API.
pub mod api;

/// Input parsing for run parameters.
pub mod input;

/// Layer 6: Adapters.
pub mod adapters;

/// Command-line parsing.
pub mod cli;

/// Logging setup.
pub mod telemetry;

/// Commonly used items.
pub mod prelude {
    pub use crate::adapters::benchmark::{
        BenchmarkDriver, BenchmarkPlan, CsvRecordSink, RecordSink, RunRecord,
    };
    pub use crate::adapters::interactive::run_interactive;
    pub use crate::api::{
        Interval, PiBuilder, PiBuilder as Pi, PiEstimate, PiIntegrator, RemainderPolicy,
        RunConfiguration,
    };
    pub use crate::input::{ReaderInput, RunInput};
    pub use crate::primitives::errors::PiError;
    pub use crate::primitives::float::PiFloat;
}
