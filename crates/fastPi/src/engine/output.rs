//! Result of a single pi estimation run.

use std::time::Duration;

use crate::primitives::float::PiFloat;

/// Outcome of one partition → execute → aggregate run.
#[derive(Debug, Clone, PartialEq)]
pub struct PiEstimate<T> {
    /// The estimate of pi.
    pub pi: T,
    /// Wall-clock time spent in the execution pass.
    pub elapsed: Duration,
    /// Requested number of steps.
    pub total_steps: u64,
    /// Steps actually integrated (less than `total_steps` only under truncation).
    pub steps_integrated: u64,
    /// Number of workers the range was split across.
    pub workers: usize,
    /// Partial integral of each worker, in interval order.
    pub partials: Vec<T>,
}

impl<T: PiFloat> PiEstimate<T> {
    /// Elapsed time of the execution pass in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Absolute distance from `std::f64::consts::PI`.
    pub fn abs_error(&self) -> f64 {
        (self.pi.as_f64() - std::f64::consts::PI).abs()
    }
}
