//! Fan-in of partial results.
//!
//! Partials are summed left to right in interval order, so the estimate for a
//! given partition does not depend on which worker finished first. Changing
//! the number of workers changes the summation grouping and may move the last
//! few bits; that is expected.

use crate::primitives::float::PiFloat;

/// Sum the per-worker partial integrals into the final estimate.
pub fn aggregate<T: PiFloat>(partials: &[T]) -> T {
    partials.iter().fold(T::zero(), |acc, &partial| acc + partial)
}
