//! Layer 2: Math
//!
//! ## Purpose
//!
//! This layer provides the function being integrated.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: Adapters
//!   ↓
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```
//!

/// The integrand f(x) = 4 / (1 + x²).
pub mod integrand;
