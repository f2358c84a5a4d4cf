//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the random-features model itself:
//! - Random feature map construction (single and deep)
//! - Closed-form ridge fitting
//! - Prediction through the fitted linear readout
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Random feature maps.
pub mod features;

/// Ridge regression fitter.
pub mod ridge;

/// Linear readout prediction.
pub mod predict;
