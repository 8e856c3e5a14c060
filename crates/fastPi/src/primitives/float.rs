//! Floating-point abstraction for the integration kernel.
//!
//! ## Purpose
//!
//! The kernel, partitioner, executor and aggregator are generic over the
//! floating-point type. `PiFloat` bundles the bounds they need and provides
//! infallible conversion from step indices, which `num_traits::NumCast`
//! only offers as an `Option`.
//!
//! ## Invariants
//!
//! * `from_steps` is exact for indices below 2^53 (`f64`) or 2^24 (`f32`).

use num_traits::Float;
use std::fmt::{Debug, Display};

/// Floating-point types the integrator can run on.
pub trait PiFloat: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Convert a step index or step count to the float type.
    fn from_steps(steps: u64) -> Self;

    /// Widen to `f64` for reporting.
    fn as_f64(self) -> f64;
}

impl PiFloat for f64 {
    #[inline]
    fn from_steps(steps: u64) -> Self {
        steps as f64
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl PiFloat for f32 {
    #[inline]
    fn from_steps(steps: u64) -> Self {
        steps as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
