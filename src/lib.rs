//! # RFA: Random-Features Approximation for Rust
//!
//! Approximate a scalar function on `[0, 1]` with a random-features
//! ("kitchen-sink") model: a fixed random nonlinear projection followed by a
//! linear readout fitted in closed form by ridge regression.
//!
//! ## How it works
//!
//! ```text
//!  x ∈ [0,1]  ──►  random layer(s)  ──►  Φ (N × W)  ──►  ridge readout  ──►  ŷ
//!                  σ(x w + b)             features        w = (A'A+λI)⁻¹A'y
//! ```
//!
//! 1. A training set of 512 evenly spaced points is labelled with the target
//!    function, optionally with Gaussian noise.
//! 2. The random feature map is sampled **once** from a seeded RNG.
//! 3. Ridge weights (with an intercept) are fitted on the training features.
//! 4. The same feature map is applied to a 500-point evaluation grid and the
//!    mean squared error against the noise-free target is reported.
//!
//! ## Quick start
//!
//! ```
//! use rfa_rs::prelude::*;
//!
//! let result = RandomFeatures::new()
//!     .target(Target::Abs)
//!     .activation(Activation::Relu)
//!     .width(50)
//!     .lambda(1e-3)
//!     .seed(0)
//!     .build()?
//!     .run()?;
//!
//! assert_eq!(result.x.len(), 500);
//! assert!(result.mse.is_finite() && result.mse >= 0.0);
//! # Ok::<(), RfaError>(())
//! ```
//!
//! ## Deep feature maps
//!
//! A stack of up to ten random layers can be used instead of a single one.
//! Deep layers scale their weights by fan-in (He scaling for ReLU):
//!
//! ```
//! use rfa_rs::prelude::*;
//!
//! let result = RandomFeatures::new()
//!     .target(Target::Sine)
//!     .layer_spec("64, 64")
//!     .build()?
//!     .run()?;
//!
//! assert_eq!(result.params.widths, vec![64, 64]);
//! # Ok::<(), RfaError>(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter    | Default | Notes                                        |
//! |--------------|---------|----------------------------------------------|
//! | `target`     | `sine`  | `sine`, `abs`, `bump`, `cubic`, `square`     |
//! | `activation` | `tanh`  | `tanh`, `relu`, `sigmoid`                    |
//! | `width`      | 50      | clamped to `[1, 2048]`                       |
//! | `layers`     |         | 1 to 10 widths, each clamped to `[1, 2048]`  |
//! | `lambda`     | 1e-3    | `>= 0`; `0` is plain least squares           |
//! | `seed`       | 0       | fully determines the run                     |
//! | `noise`      | 0       | std-dev of Gaussian noise on training labels |
//!
//! ## Errors
//!
//! Unknown identifiers, malformed layer specs, and out-of-range numbers are
//! reported by `build()` before any computation. A singular ridge system
//! (possible only with `lambda == 0`) is reported by `run()` as
//! [`RfaError::SingularSystem`](prelude::RfaError::SingularSystem).
//!
//! ## Logging
//!
//! The crate emits `log` records at `debug` and `trace` level. It never
//! installs a logger.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type and sample grids.
mod primitives;

// Layer 2: Math - target catalog, activation catalog, and the
// normal-equation solver.
mod math;

// Layer 3: Algorithms - random feature maps, ridge fitting, and prediction.
mod algorithms;

// Layer 4: Evaluation - error metrics.
mod evaluation;

// Layer 5: Engine - parameter validation and the evaluation driver.
mod engine;

// High-level fluent API.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use rfa_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Activation, ApproximationConfig, ApproximationOutput, ApproximationResult, Approximator,
        FeatureMap, FeatureShape, FittedApproximation, LayerParams, RfaBuilder as RandomFeatures,
        RfaError, ResolvedParams, RidgeModel, RidgeRegression, Target,
    };
    pub use crate::engine::executor::Executor;
    pub use crate::engine::validator::Validator;
    pub use crate::evaluation::metrics::{
        l2_norm, max_abs_error, mean_squared_error, root_mean_squared_error,
    };
    pub use crate::primitives::grid::{linspace, SampleSet};
}

// ============================================================================
// Internal Modules (dev)
// ============================================================================

/// Internal modules for development and testing.
///
/// This module is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation metrics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
