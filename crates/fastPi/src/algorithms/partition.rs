//! Static division of the integration range across workers.
//!
//! ## Purpose
//!
//! This module splits the `total_steps` rectangles covering [0, 1] into one
//! contiguous interval per worker. The assignment is computed up front and
//! never depends on runtime scheduling, which keeps results reproducible.
//!
//! ## Design notes
//!
//! * **Equal shares**: Every worker gets `total_steps / workers` steps.
//! * **Remainder**: `RemainderPolicy` decides what happens to the
//!   `total_steps % workers` steps left over by integer division.
//! * **Step-exact coordinates**: Interval bounds are derived from integer step
//!   indices, so adjacent intervals share their boundary value exactly.
//! * **Fallible allocation**: A worker count whose interval table cannot be
//!   allocated fails with `ResourceExhaustion` instead of aborting.
//!
//! ## Invariants
//!
//! * Exactly `workers` intervals are produced, in ascending order.
//! * `intervals[i].end == intervals[i + 1].start` for every i.
//! * With `AssignToLast` the step counts sum to `total_steps` and the last
//!   interval ends at `total_steps · h` ≈ 1.
//!
//! ## Non-goals
//!
//! * This module does not balance load dynamically.

use crate::primitives::errors::PiError;
use crate::primitives::float::PiFloat;

// ============================================================================
// Interval
// ============================================================================

/// A contiguous sub-range of [0, 1] owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    /// Left edge of the first rectangle.
    pub start: T,
    /// Right edge of the last rectangle.
    pub end: T,
    /// Global index of the first rectangle.
    pub first_step: u64,
    /// Number of rectangles in this interval.
    pub step_count: u64,
}

impl<T: PiFloat> Interval<T> {
    /// Build the interval covering steps `[first_step, first_step + step_count)`.
    pub fn from_steps(first_step: u64, step_count: u64, step_size: T) -> Self {
        Self {
            start: T::from_steps(first_step) * step_size,
            end: T::from_steps(first_step + step_count) * step_size,
            first_step,
            step_count,
        }
    }

    /// Index one past the last rectangle.
    pub fn end_step(&self) -> u64 {
        self.first_step + self.step_count
    }

    /// Whether the interval holds no rectangles.
    pub fn is_empty(&self) -> bool {
        self.step_count == 0
    }
}

// ============================================================================
// Remainder Policy
// ============================================================================

/// What to do with the steps left over when `workers` does not divide
/// `total_steps`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemainderPolicy {
    /// The last worker also integrates the leftover steps.
    #[default]
    AssignToLast,
    /// Leftover steps are dropped; the tail of [0, 1] is not integrated.
    Truncate,
}

// ============================================================================
// Partitioning
// ============================================================================

/// Width of one rectangle for a run of `total_steps` steps.
pub fn step_size<T: PiFloat>(total_steps: u64) -> T {
    T::one() / T::from_steps(total_steps)
}

/// Split `total_steps` steps into `workers` contiguous intervals.
pub fn partition<T: PiFloat>(
    total_steps: u64,
    workers: usize,
    step_size: T,
    policy: RemainderPolicy,
) -> Result<Vec<Interval<T>>, PiError> {
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

    let worker_count = workers as u64;
    let steps_per_worker = total_steps / worker_count;
    let remainder = total_steps % worker_count;

    if remainder > 0 && policy == RemainderPolicy::Truncate {
        tracing::warn!(
            total_steps,
            workers,
            dropped = remainder,
            "remainder steps are not integrated"
        );
    }

    // Worker count is unbounded user input.
    let mut intervals = Vec::new();
    intervals
        .try_reserve_exact(workers)
        .map_err(|e| PiError::resource_exhaustion(workers, e))?;

    for i in 0..worker_count {
        let first_step = i * steps_per_worker;
        let is_last = i + 1 == worker_count;
        let step_count = match policy {
            RemainderPolicy::AssignToLast if is_last => steps_per_worker + remainder,
            _ => steps_per_worker,
        };
        intervals.push(Interval::from_steps(first_step, step_count, step_size));
    }

    Ok(intervals)
}

/// Total number of steps covered by `intervals`.
pub fn covered_steps<T>(intervals: &[Interval<T>]) -> u64 {
    intervals.iter().map(|interval| interval.step_count).sum()
}
