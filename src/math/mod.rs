//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - The closed catalog of target functions
//! - The closed catalog of activation functions
//! - Dense linear algebra for the ridge normal equations
//!
//! These carry no knowledge of feature maps or the evaluation pipeline.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Target functions on [0, 1].
pub mod target;

/// Elementwise activation functions.
pub mod activation;

/// Normal-equation solver backed by nalgebra.
pub mod linalg;
