//! Layer 1: Primitives
//!
//! ## Purpose
//!
//! This layer provides the error type and the floating-point abstraction
//! shared by every other layer.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Crate error type.
pub mod errors;

/// Floating-point trait used by the kernel.
pub mod float;
