//! Closed-form ridge regression with an implicit bias term.
//!
//! ## Purpose
//!
//! This module fits the linear readout of a random-features model by solving
//! the L2-regularised least-squares problem in closed form.
//!
//! ## Design notes
//!
//! * **Bias**: A column of ones is prepended to the feature matrix, so the
//!   fitted vector has `width + 1` entries and index 0 is the intercept.
//! * **Penalty**: `λ I` covers every coefficient, including the intercept.
//! * **Solver**: Delegates to the Cholesky-based normal-equation solver.
//!
//! ## Key concepts
//!
//! * **Ridge**: `w = (A'A + λI)^-1 A'y` where `A = [1 | Φ]`.
//! * **OLS limit**: `λ = 0` is ordinary least squares and fails with
//!   `SingularSystem` whenever `rank(A) < width + 1`.
//!
//! ## Invariants
//!
//! * A fitted model always has finite weights.
//! * `RidgeModel::predict` uses the same augmentation as fitting.
//!
//! ## Non-goals
//!
//! * This module does not select `λ`.
//! * This module does not perform iterative or gradient-based training.

// External dependencies
use log::debug;
use nalgebra::{DMatrix, DVector};

// Internal dependencies
use crate::algorithms::predict::predict;
use crate::math::linalg::{augment_bias, solve_ridge_normal};
use crate::primitives::errors::RfaError;

// ============================================================================
// Ridge Regression
// ============================================================================

/// Ridge regression fitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidgeRegression {
    lambda: f64,
}

impl RidgeRegression {
    /// Create a fitter with regularisation strength `lambda`.
    pub fn new(lambda: f64) -> Result<Self, RfaError> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(RfaError::InvalidLambda(lambda));
        }
        Ok(Self { lambda })
    }

    /// Regularisation strength.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Fit weights for feature matrix `phi` (N × W) and targets `y` (N).
    pub fn fit(&self, phi: &DMatrix<f64>, y: &[f64]) -> Result<RidgeModel, RfaError> {
        if phi.nrows() != y.len() {
            return Err(RfaError::MismatchedInputs {
                rows: phi.nrows(),
                targets: y.len(),
            });
        }

        let design = augment_bias(phi);
        let rhs = DVector::from_column_slice(y);
        debug!(
            "ridge solve: {} samples, {} coefficients, lambda={}",
            design.nrows(),
            design.ncols(),
            self.lambda
        );
        let weights = solve_ridge_normal(&design, &rhs, self.lambda)?;
        Ok(RidgeModel { weights })
    }
}

// ============================================================================
// Ridge Model
// ============================================================================

/// Fitted ridge weights; index 0 is the bias coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct RidgeModel {
    weights: DVector<f64>,
}

impl RidgeModel {
    /// Wrap an existing weight vector of length `width + 1`.
    pub fn from_weights(weights: Vec<f64>) -> Result<Self, RfaError> {
        if weights.is_empty() {
            return Err(RfaError::DimensionMismatch {
                expected: 1,
                got: 0,
            });
        }
        Ok(Self {
            weights: DVector::from_vec(weights),
        })
    }

    /// Full weight vector, bias first.
    pub fn weights(&self) -> &[f64] {
        self.weights.as_slice()
    }

    /// Intercept.
    pub fn bias(&self) -> f64 {
        self.weights[0]
    }

    /// Per-feature coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.weights.as_slice()[1..]
    }

    /// Number of features the model expects.
    pub fn width(&self) -> usize {
        self.weights.len() - 1
    }

    /// Euclidean norm of the full weight vector.
    pub fn norm(&self) -> f64 {
        self.weights.norm()
    }

    /// Predict targets for feature matrix `phi` (M × W).
    pub fn predict(&self, phi: &DMatrix<f64>) -> Result<Vec<f64>, RfaError> {
        predict(phi, &self.weights)
    }
}
