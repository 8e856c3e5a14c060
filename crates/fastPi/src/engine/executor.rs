//! Execution engine for the per-worker integration passes.
//!
//! ## Purpose
//!
//! This module runs the midpoint kernel once per interval and returns the
//! partial results in interval order. It provides a parallel pass that spawns
//! one task per interval on a pool sized to the interval count, and a
//! sequential pass that walks the intervals on the caller thread.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses a dedicated `rayon` pool sized to the interval count.
//! * **Allocation**: The output table is reserved fallibly; a worker count too
//!   large to allocate is `ResourceExhaustion`.
//! * **Ownership**: Each task receives a unique `&mut` slot of a pre-sized
//!   output vector; there is no shared mutable state and no lock.
//! * **Barrier**: `ThreadPool::scope` returns only after every task finished.
//! * **Pluggable**: Both passes share the `PartialPassFn` signature so the API
//!   layer can select one without branching at the call site.
//!
//! ## Key concepts
//!
//! * **Fan-out**: One spawned task per interval.
//! * **Fan-in**: Slots are read only after the scope returns.
//!
//! ## Invariants
//!
//! * Output length equals the number of intervals.
//! * `output[i]` is the partial integral over `intervals[i]`, regardless of
//!   which task finished first.
//!
//! ## Non-goals
//!
//! * This module does not partition or aggregate.
//! * This module does not support cancellation; a pass always runs to completion.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::ThreadPoolBuilder;

// Internal dependencies
use crate::algorithms::midpoint::integrate_interval;
use crate::algorithms::partition::Interval;
use crate::primitives::errors::PiError;
use crate::primitives::float::PiFloat;

/// Signature shared by the sequential and parallel passes.
pub type PartialPassFn<T> = fn(&[Interval<T>], T) -> Result<Vec<T>, PiError>;

// ============================================================================
// Parallel Pass
// ============================================================================

/// Integrate the intervals as concurrent tasks on a dedicated pool.
///
/// A fresh pool sized to `intervals.len()` threads is built for the pass
/// (rayon caps the size at its own thread limit), and one task is spawned per
/// interval. Tasks are scheduled by work stealing, so a thread may run more
/// than one of them.
#[cfg(feature = "cpu")]
pub fn execute_parallel<T: PiFloat>(
    intervals: &[Interval<T>],
    step_size: T,
) -> Result<Vec<T>, PiError> {
    let workers = intervals.len();
    if workers == 0 {
        return Ok(Vec::new());
    }

    let mut partials = Vec::new();
    partials
        .try_reserve_exact(workers)
        .map_err(|e| PiError::resource_exhaustion(workers, e))?;
    partials.resize(workers, T::zero());

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("fastpi-worker-{index}"))
        .build()
        .map_err(|e| PiError::resource_exhaustion(workers, e))?;

    pool.scope(|scope| {
        for (slot, interval) in partials.iter_mut().zip(intervals) {
            scope.spawn(move |_| {
                *slot = integrate_interval(interval, step_size);
            });
        }
    });

    Ok(partials)
}

// Sequential fallback (when cpu feature is not enabled)
#[cfg(not(feature = "cpu"))]
pub fn execute_parallel<T: PiFloat>(
    intervals: &[Interval<T>],
    step_size: T,
) -> Result<Vec<T>, PiError> {
    tracing::warn!("built without the `cpu` feature; running intervals sequentially");
    execute_sequential(intervals, step_size)
}

// ============================================================================
// Sequential Pass
// ============================================================================

/// Integrate every interval in order on the caller thread.
pub fn execute_sequential<T: PiFloat>(
    intervals: &[Interval<T>],
    step_size: T,
) -> Result<Vec<T>, PiError> {
    Ok(intervals
        .iter()
        .map(|interval| integrate_interval(interval, step_size))
        .collect())
}
