//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer validates parameters and orchestrates a full run:
//! training set -> feature map -> ridge fit -> grid prediction -> error.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Parameter validation.
pub mod validator;

/// Evaluation driver.
pub mod executor;
