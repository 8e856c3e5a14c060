//! The integrand whose integral over [0, 1] equals pi.
//!
//! ∫₀¹ 4 / (1 + x²) dx = 4 · atan(1) = π.
//!
//! The denominator is at least 1 for every real x, so no special cases are
//! needed on [0, 1].

use crate::primitives::float::PiFloat;

/// Evaluate f(x) = 4 / (1 + x²).
#[inline]
pub fn integrand<T: PiFloat>(x: T) -> T {
    let one = T::one();
    let four = one + one + one + one;
    four / (one + x * x)
}
