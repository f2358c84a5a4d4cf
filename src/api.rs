//! High-level API for random-features approximation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for choosing the target, activation, feature-map shape,
//! regularisation, seed, and training noise, and returns a structured result.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every parameter has a default; `RfaBuilder::new().build()`
//!   is a valid configuration.
//! * **Validated**: All parameters are checked in `build()`. Methods taking
//!   string identifiers defer their errors to `build()`.
//! * **Strict**: Setting a parameter twice is an error.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`RfaBuilder`] via `RfaBuilder::new()`.
//! 2. Chain configuration methods (`.target()`, `.width()`, `.lambda()`, etc.).
//! 3. Call `.build()` to validate, then `.run()` on the resulting [`Approximator`].

// External dependencies
use log::debug;

// Internal dependencies
use crate::engine::executor::Executor;
use crate::engine::validator::Validator;
use crate::evaluation::metrics::l2_norm;

// Publicly re-exported types
pub use crate::algorithms::features::{FeatureMap, FeatureShape, LayerParams};
pub use crate::algorithms::ridge::{RidgeModel, RidgeRegression};
pub use crate::engine::executor::{ApproximationConfig, ApproximationOutput, FittedApproximation};
pub use crate::math::activation::Activation;
pub use crate::math::target::Target;
pub use crate::primitives::errors::RfaError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an approximation.
#[derive(Debug, Clone, Default)]
pub struct RfaBuilder {
    /// Function to approximate (default: `Sine`).
    pub target: Option<Target>,

    /// Feature nonlinearity (default: `Tanh`).
    pub activation: Option<Activation>,

    /// Feature map layout (default: a single layer of width 50).
    pub shape: Option<FeatureShape>,

    /// Ridge regularisation strength (default: 1e-3).
    pub lambda: Option<f64>,

    /// Random seed (default: 0).
    pub seed: Option<u64>,

    /// Training noise standard deviation (default: 0).
    pub noise: Option<f64>,

    /// First error raised by a parsing setter, reported by `build()`.
    #[doc(hidden)]
    pub(crate) deferred_error: Option<RfaError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl RfaBuilder {
    /// Default single-layer width.
    pub const DEFAULT_WIDTH: usize = 50;

    /// Default regularisation strength.
    pub const DEFAULT_LAMBDA: f64 = 1e-3;

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target function.
    pub fn target(mut self, target: Target) -> Self {
        if self.target.is_some() {
            self.duplicate_param = Some("target");
        }
        self.target = Some(target);
        self
    }

    /// Set the target function by identifier (e.g. `"sine"`).
    pub fn target_key(self, key: &str) -> Self {
        match key.parse::<Target>() {
            Ok(target) => self.target(target),
            Err(e) => self.defer(e),
        }
    }

    /// Set the activation function.
    pub fn activation(mut self, activation: Activation) -> Self {
        if self.activation.is_some() {
            self.duplicate_param = Some("activation");
        }
        self.activation = Some(activation);
        self
    }

    /// Set the activation function by identifier (e.g. `"relu"`).
    pub fn activation_key(self, key: &str) -> Self {
        match key.parse::<Activation>() {
            Ok(activation) => self.activation(activation),
            Err(e) => self.defer(e),
        }
    }

    /// Use a single random layer; `width` is clamped to `[1, 2048]`.
    pub fn width(self, width: i64) -> Self {
        self.set_shape("width", FeatureShape::Single(Validator::clamp_width(width)))
    }

    /// Use a deep feature map with one width per layer.
    ///
    /// Each width is clamped to `[1, 2048]`; an empty list or more than ten
    /// layers is reported by `build()`.
    pub fn layers(self, widths: &[i64]) -> Self {
        match Validator::validate_layers(widths) {
            Ok(widths) => self.set_shape("layers", FeatureShape::Deep(widths)),
            Err(e) => self.defer(e),
        }
    }

    /// Use a deep feature map from a comma-separated spec such as `"64,64"`.
    pub fn layer_spec(self, spec: &str) -> Self {
        match Validator::parse_layer_spec(spec) {
            Ok(widths) => self.set_shape("layers", FeatureShape::Deep(widths)),
            Err(e) => self.defer(e),
        }
    }

    /// Set the ridge regularisation strength.
    pub fn lambda(mut self, lambda: f64) -> Self {
        if self.lambda.is_some() {
            self.duplicate_param = Some("lambda");
        }
        self.lambda = Some(lambda);
        self
    }

    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set the standard deviation of Gaussian noise added to training labels.
    ///
    /// Must be finite and non-negative. A level so large that the fit error
    /// overflows makes `run()` fail with `InvalidNumericValue`.
    pub fn noise(mut self, noise: f64) -> Self {
        if self.noise.is_some() {
            self.duplicate_param = Some("noise");
        }
        self.noise = Some(noise);
        self
    }

    /// Validate every parameter and resolve defaults.
    pub fn build(self) -> Result<Approximator, RfaError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        let lambda = self.lambda.unwrap_or(Self::DEFAULT_LAMBDA);
        Validator::validate_lambda(lambda)?;
        let noise = self.noise.unwrap_or(0.0);
        Validator::validate_noise(noise)?;

        let config = ApproximationConfig {
            target: self.target.unwrap_or_default(),
            activation: self.activation.unwrap_or_default(),
            shape: self
                .shape
                .unwrap_or(FeatureShape::Single(Self::DEFAULT_WIDTH)),
            lambda,
            seed: self.seed.unwrap_or(0),
            noise,
        };
        debug!("resolved configuration: {:?}", config);

        Ok(Approximator { config })
    }

    fn set_shape(mut self, name: &'static str, shape: FeatureShape) -> Self {
        if self.shape.is_some() {
            self.duplicate_param = Some(name);
        }
        self.shape = Some(shape);
        self
    }

    fn defer(mut self, err: RfaError) -> Self {
        if self.deferred_error.is_none() {
            self.deferred_error = Some(err);
        }
        self
    }
}

// ============================================================================
// Approximator
// ============================================================================

/// A validated approximation, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Approximator {
    config: ApproximationConfig,
}

impl Approximator {
    /// Resolved configuration.
    pub fn config(&self) -> &ApproximationConfig {
        &self.config
    }

    /// Fit the model without scoring it.
    pub fn fit(&self) -> Result<FittedApproximation, RfaError> {
        Executor::fit(&self.config)
    }

    /// Fit the model and score it on the evaluation grid.
    pub fn run(&self) -> Result<ApproximationResult, RfaError> {
        let output = Executor::run(&self.config)?;
        Ok(ApproximationResult::new(output, &self.config))
    }
}

// ============================================================================
// Result
// ============================================================================

/// Echo of the parameters a result was produced with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedParams {
    /// Target identifier.
    pub target: &'static str,

    /// Target display name.
    pub target_label: &'static str,

    /// Activation identifier.
    pub activation: &'static str,

    /// Activation display name.
    pub activation_label: &'static str,

    /// Layer widths after clamping.
    pub widths: Vec<usize>,

    /// Whether the deep feature map was used.
    pub deep: bool,

    /// Ridge regularisation strength.
    pub lambda: f64,

    /// Random seed.
    pub seed: u64,

    /// Training noise standard deviation.
    pub noise: f64,
}

impl ResolvedParams {
    fn from_config(config: &ApproximationConfig) -> Self {
        Self {
            target: config.target.key(),
            target_label: config.target.label(),
            activation: config.activation.key(),
            activation_label: config.activation.label(),
            widths: config.shape.widths().to_vec(),
            deep: config.shape.is_deep(),
            lambda: config.lambda,
            seed: config.seed,
            noise: config.noise,
        }
    }
}

/// Outcome of one approximation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ApproximationResult {
    /// Evaluation grid positions (500 points over `[0, 1]`).
    pub x: Vec<f64>,

    /// Noise-free target values on the grid.
    pub y_true: Vec<f64>,

    /// Model predictions on the grid.
    pub y_pred: Vec<f64>,

    /// Mean squared error between `y_true` and `y_pred`.
    pub mse: f64,

    /// Mean squared error on the training set.
    pub train_mse: f64,

    /// Fitted readout weights, bias first.
    pub weights: Vec<f64>,

    /// Parameters used.
    pub params: ResolvedParams,
}

impl ApproximationResult {
    fn new(output: ApproximationOutput, config: &ApproximationConfig) -> Self {
        Self {
            x: output.x,
            y_true: output.y_true,
            y_pred: output.y_pred,
            mse: output.mse,
            train_mse: output.train_mse,
            weights: output.weights,
            params: ResolvedParams::from_config(config),
        }
    }

    /// Euclidean norm of the fitted weight vector.
    pub fn weight_norm(&self) -> f64 {
        l2_norm(&self.weights)
    }
}
