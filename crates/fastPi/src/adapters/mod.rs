//! Layer 6: Adapters
//!
//! ## Purpose
//!
//! This layer connects the API to the outside world: a single interactive
//! run driven by standard input, and the benchmark sweep writing CSV.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Benchmark sweep with CSV output.
pub mod benchmark;

/// Single run driven by user input.
pub mod interactive;
