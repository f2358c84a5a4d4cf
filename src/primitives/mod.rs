//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data types shared by every other layer:
//! - The crate error type
//! - Evenly spaced sample grids and sample sets
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Sample grids on the unit interval.
pub mod grid;
