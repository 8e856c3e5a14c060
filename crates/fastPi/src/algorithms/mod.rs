//! Layer 3: Algorithms
//!
//! ## Purpose
//!
//! This layer provides the sequential building blocks of a run: splitting
//! the step range into per-worker intervals, and integrating one interval
//! with the midpoint rectangle rule.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Midpoint rectangle rule over one interval.
pub mod midpoint;

/// Division of the step range across workers.
pub mod partition;
