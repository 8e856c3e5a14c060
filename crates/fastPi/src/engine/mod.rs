//! Layer 4: Engine
//!
//! ## Purpose
//!
//! This layer runs the integration kernel across workers and combines the
//! partial results. It provides the rayon-based parallel pass, the
//! sequential pass, and the aggregator.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: Adapters
//!   ↓
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Summation of partial results.
pub mod aggregate;

/// Parallel and sequential execution passes.
pub mod executor;

/// Run output.
pub mod output;
