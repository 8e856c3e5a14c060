//! Midpoint rectangle rule over a single interval.
//!
//! ## Purpose
//!
//! This module provides the computational kernel executed by every worker:
//! the partial integral of the integrand over one assigned interval.
//!
//! ## Design notes
//!
//! * **Deterministic**: Accumulates left to right in a single running sum, so
//!   a fixed interval always produces bitwise identical output.
//! * **No vectorization**: The loop is not reordered; round-off behaviour stays
//!   the one of a plain sequential sum.
//!
//! ## Invariants
//!
//! * An interval with zero steps integrates to exactly zero.
//! * Sample points are `start + i·h + h/2` for `i` in `[0, step_count)`.

use crate::algorithms::partition::Interval;
use crate::math::integrand::integrand;
use crate::primitives::float::PiFloat;

/// Integrate the integrand over `interval` with the midpoint rule.
pub fn integrate_interval<T: PiFloat>(interval: &Interval<T>, step_size: T) -> T {
    let half_step = step_size / (T::one() + T::one());
    let mut sum = T::zero();

    for i in 0..interval.step_count {
        let x = interval.start + T::from_steps(i) * step_size + half_step;
        sum = sum + integrand(x) * step_size;
    }

    sum
}
