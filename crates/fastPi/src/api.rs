//! High-level API for pi estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring a run and produces an integrator that
//! executes the partition → execute → aggregate pipeline.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Step and worker counts are checked when `.build()` is called,
//!   before any thread is started.
//! * **Type-Safe**: Generic over `PiFloat` types; `f64` unless `.precision()` says otherwise.
//!
//! ## Key concepts
//!
//! * **Run Configuration**: A validated `(total_steps, workers)` pair.
//! * **Execution Pass**: Parallel (default) or sequential, chosen at build time.
//! * **Remainder Policy**: How steps left over by integer division are handled.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PiBuilder`](crate::api::PiBuilder) via `Pi::new()`.
//! 2. Chain configuration methods (`.steps()`, `.workers()`, etc.).
//! 3. Call `.build()` to get a [`PiIntegrator`](crate::api::PiIntegrator) and `.estimate()` it.

// External dependencies
use std::fmt;
use std::marker::PhantomData;
use std::thread;
use std::time::Instant;

// Internal dependencies
use crate::algorithms::partition::{covered_steps, partition, step_size};
use crate::engine::aggregate::aggregate;
use crate::engine::executor::{execute_parallel, execute_sequential, PartialPassFn};
use crate::primitives::errors::PiError;
use crate::primitives::float::PiFloat;

// Publicly re-exported types
pub use crate::algorithms::partition::{Interval, RemainderPolicy};
pub use crate::engine::output::PiEstimate;

/// Default number of integration steps.
pub const DEFAULT_STEPS: u64 = 1_000_000;

// ============================================================================
// Run Configuration
// ============================================================================

/// Validated input parameters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfiguration {
    total_steps: u64,
    workers: usize,
}

impl RunConfiguration {
    /// Validate and create a configuration.
    pub fn new(total_steps: u64, workers: usize) -> Result<Self, PiError> {
        if workers == 0 {
            return Err(PiError::invalid_configuration(
                "workers",
                "at least one worker is required",
            ));
        }
        if total_steps == 0 {
            return Err(PiError::invalid_configuration(
                "total_steps",
                "at least one step is required",
            ));
        }
        Ok(Self {
            total_steps,
            workers,
        })
    }

    /// Validate signed values, as read from user input.
    pub fn from_signed(total_steps: i64, workers: i64) -> Result<Self, PiError> {
        let workers = usize::try_from(workers).map_err(|_| {
            PiError::invalid_configuration("workers", format!("{workers} is not a positive count"))
        })?;
        let total_steps = u64::try_from(total_steps).map_err(|_| {
            PiError::invalid_configuration(
                "total_steps",
                format!("{total_steps} is not a positive count"),
            )
        })?;
        Self::new(total_steps, workers)
    }

    /// Number of rectangles covering [0, 1].
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Number of concurrent workers.
    pub fn workers(&self) -> usize {
        self.workers
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for a pi integrator.
#[derive(Debug, Clone)]
pub struct PiBuilder<T = f64> {
    /// Number of rectangles covering [0, 1].
    pub total_steps: u64,
    /// Number of concurrent workers.
    pub workers: usize,
    /// Run intervals on a worker pool (true) or on the caller thread (false).
    pub parallel: bool,
    /// Handling of steps left over by integer division.
    pub remainder_policy: RemainderPolicy,
    precision: PhantomData<T>,
}

impl Default for PiBuilder<f64> {
    fn default() -> Self {
        Self::new()
    }
}

impl PiBuilder<f64> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * total_steps: 1,000,000
    /// * workers: available hardware parallelism
    /// * parallel: true
    /// * remainder_policy: AssignToLast
    pub fn new() -> Self {
        Self {
            total_steps: DEFAULT_STEPS,
            workers: default_workers(),
            parallel: true,
            remainder_policy: RemainderPolicy::default(),
            precision: PhantomData,
        }
    }
}

impl<T: PiFloat> PiBuilder<T> {
    /// Set the number of integration steps.
    pub fn steps(mut self, total_steps: u64) -> Self {
        self.total_steps = total_steps;
        self
    }

    /// Set the number of concurrent workers.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set steps and workers from a validated configuration.
    pub fn configuration(mut self, config: RunConfiguration) -> Self {
        self.total_steps = config.total_steps;
        self.workers = config.workers;
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the remainder policy.
    pub fn remainder_policy(mut self, policy: RemainderPolicy) -> Self {
        self.remainder_policy = policy;
        self
    }

    /// Switch the floating-point type used by the kernel.
    pub fn precision<U: PiFloat>(self) -> PiBuilder<U> {
        PiBuilder {
            total_steps: self.total_steps,
            workers: self.workers,
            parallel: self.parallel,
            remainder_policy: self.remainder_policy,
            precision: PhantomData,
        }
    }

    /// Build the integrator.
    pub fn build(self) -> Result<PiIntegrator<T>, PiError> {
        let config = RunConfiguration::new(self.total_steps, self.workers)?;

        let pass: PartialPassFn<T> = if self.parallel {
            execute_parallel
        } else {
            execute_sequential
        };

        Ok(PiIntegrator {
            config,
            remainder_policy: self.remainder_policy,
            parallel: self.parallel,
            pass,
        })
    }
}

fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

// ============================================================================
// Integrator
// ============================================================================

/// A configured pi integrator.
#[derive(Clone, Copy)]
pub struct PiIntegrator<T> {
    config: RunConfiguration,
    remainder_policy: RemainderPolicy,
    parallel: bool,
    pass: PartialPassFn<T>,
}

impl<T> fmt::Debug for PiIntegrator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PiIntegrator")
            .field("config", &self.config)
            .field("remainder_policy", &self.remainder_policy)
            .field("parallel", &self.parallel)
            .finish_non_exhaustive()
    }
}

impl<T: PiFloat> PiIntegrator<T> {
    /// Run partition → execute → aggregate once.
    ///
    /// Only the execution pass is timed.
    pub fn estimate(&self) -> Result<PiEstimate<T>, PiError> {
        let total_steps = self.config.total_steps;
        let workers = self.config.workers;
        let h = step_size::<T>(total_steps);

        let intervals = partition(total_steps, workers, h, self.remainder_policy)?;

        tracing::debug!(
            total_steps,
            workers,
            parallel = self.parallel,
            policy = ?self.remainder_policy,
            "starting integration pass"
        );

        let started = Instant::now();
        let partials = (self.pass)(&intervals, h)?;
        let elapsed = started.elapsed();

        let pi = aggregate(&partials);

        tracing::debug!(%pi, elapsed_s = elapsed.as_secs_f64(), "integration pass finished");

        Ok(PiEstimate {
            pi,
            elapsed,
            total_steps,
            steps_integrated: covered_steps(&intervals),
            workers,
            partials,
        })
    }

    /// The validated configuration of this integrator.
    pub fn configuration(&self) -> RunConfiguration {
        self.config
    }

    /// Whether intervals run on a worker pool.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// The configured remainder policy.
    pub fn remainder_policy(&self) -> RemainderPolicy {
        self.remainder_policy
    }
}
