//! Execution engine for random-features approximation.
//!
//! ## Purpose
//!
//! This module runs one complete approximation: it samples the training set,
//! draws the random feature map, fits the ridge readout, and scores the fit
//! on a dense evaluation grid.
//!
//! ## Design notes
//!
//! * One seeded `StdRng` per run, created here and passed explicitly.
//! * Randomness is consumed in a fixed order: training noise (only when
//!   `noise > 0`), then the feature map parameters.
//! * The feature map is sampled exactly once and reused for the training
//!   pass and the grid pass.
//! * No state survives between runs.
//!
//! ## Key concepts
//!
//! * **Training set**: `TRAIN_POINTS` evenly spaced points, optionally noisy.
//! * **Evaluation grid**: `GRID_POINTS` evenly spaced noise-free points.
//!
//! ## Invariants
//!
//! * Identical configurations produce bit-identical outputs.
//! * `x`, `y_true` and `y_pred` of an output all have `GRID_POINTS` entries.
//! * A returned output has finite `mse` and `train_mse`; overflow is an error.
//!
//! ## Non-goals
//!
//! * This module does not validate parameters (handled by `validator`).
//! * This module does not persist fitted models.

// External dependencies
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

// Internal dependencies
use crate::algorithms::features::{FeatureMap, FeatureShape};
use crate::algorithms::ridge::{RidgeModel, RidgeRegression};
use crate::evaluation::metrics::mean_squared_error;
use crate::math::activation::Activation;
use crate::math::target::Target;
use crate::primitives::errors::RfaError;
use crate::primitives::grid::SampleSet;

// ============================================================================
// Configuration
// ============================================================================

/// Fully resolved parameters for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproximationConfig {
    /// Function to approximate.
    pub target: Target,

    /// Feature nonlinearity.
    pub activation: Activation,

    /// Feature map layout.
    pub shape: FeatureShape,

    /// Ridge regularisation strength.
    pub lambda: f64,

    /// Seed for the random source.
    pub seed: u64,

    /// Standard deviation of Gaussian noise added to training labels.
    pub noise: f64,
}

// ============================================================================
// Fitted Model
// ============================================================================

/// A feature map together with the readout fitted on its features.
#[derive(Debug, Clone)]
pub struct FittedApproximation {
    /// The sampled feature map.
    pub feature_map: FeatureMap,

    /// The fitted linear readout.
    pub model: RidgeModel,

    /// The (possibly noisy) training set the readout was fitted on.
    pub train: SampleSet,
}

impl FittedApproximation {
    /// Predict at arbitrary inputs through the same feature map.
    pub fn predict(&self, x: &[f64]) -> Result<Vec<f64>, RfaError> {
        let phi = self.feature_map.transform(x);
        self.model.predict(&phi)
    }
}

/// Raw output of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproximationOutput {
    /// Evaluation grid positions.
    pub x: Vec<f64>,

    /// Noise-free target values on the grid.
    pub y_true: Vec<f64>,

    /// Model predictions on the grid.
    pub y_pred: Vec<f64>,

    /// Mean squared error on the grid.
    pub mse: f64,

    /// Mean squared error on the training set, against the training labels.
    pub train_mse: f64,

    /// Fitted weights, bias first.
    pub weights: Vec<f64>,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs approximations.
pub struct Executor;

impl Executor {
    /// Number of training points.
    pub const TRAIN_POINTS: usize = 512;

    /// Number of evaluation grid points.
    pub const GRID_POINTS: usize = 500;

    /// Sample the training set and fit the model.
    pub fn fit(config: &ApproximationConfig) -> Result<FittedApproximation, RfaError> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        Self::fit_with_rng(config, &mut rng)
    }

    /// Sample the training set and fit the model using a caller-provided RNG.
    pub fn fit_with_rng<R: Rng + ?Sized>(
        config: &ApproximationConfig,
        rng: &mut R,
    ) -> Result<FittedApproximation, RfaError> {
        let target = config.target;
        let clean = SampleSet::on_grid(Self::TRAIN_POINTS, |x| target.eval_slice(x));
        let train = if config.noise > 0.0 {
            let dist = Normal::new(0.0, config.noise).map_err(|e| {
                RfaError::InvalidNumericValue(format!("noise={}: {}", config.noise, e))
            })?;
            let offsets: Vec<f64> = (0..clean.len()).map(|_| dist.sample(rng)).collect();
            clean.perturbed(&offsets)
        } else {
            clean
        };
        debug!(
            "training set: {} points, target={}, noise={}",
            train.len(),
            target,
            config.noise
        );

        let feature_map = FeatureMap::sample(&config.shape, config.activation, rng)?;
        debug!(
            "feature map: widths={:?}, activation={}, {} parameters",
            config.shape.widths(),
            config.activation,
            feature_map.parameter_count()
        );

        let phi = feature_map.transform(train.x());
        let model = RidgeRegression::new(config.lambda)?.fit(&phi, train.y())?;

        Ok(FittedApproximation {
            feature_map,
            model,
            train,
        })
    }

    /// Run a full approximation and score it on the evaluation grid.
    pub fn run(config: &ApproximationConfig) -> Result<ApproximationOutput, RfaError> {
        let fitted = Self::fit(config)?;

        let train_pred = fitted.predict(fitted.train.x())?;
        let train_mse = mean_squared_error(fitted.train.y(), &train_pred);

        let target = config.target;
        let grid = SampleSet::on_grid(Self::GRID_POINTS, |x| target.eval_slice(x));
        let y_pred = fitted.predict(grid.x())?;
        let mse = mean_squared_error(grid.y(), &y_pred);
        debug!(
            "evaluation: {} grid points, mse={:e}, train_mse={:e}",
            grid.len(),
            mse,
            train_mse
        );

        if !(mse.is_finite() && train_mse.is_finite()) {
            return Err(RfaError::InvalidNumericValue(format!(
                "non-finite error: mse={}, train_mse={}, noise={}",
                mse, train_mse, config.noise
            )));
        }

        let (x, y_true) = grid.into_parts();
        Ok(ApproximationOutput {
            x,
            y_true,
            y_pred,
            mse,
            train_mse,
            weights: fitted.model.weights().to_vec(),
        })
    }
}
