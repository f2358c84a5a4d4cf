//! Dense linear algebra for ridge regression.
//!
//! ## Purpose
//!
//! This module assembles and solves the ridge normal equations
//! `(A'A + λI) w = A'y` on top of the nalgebra backend, and provides the
//! bias-augmentation convention shared by fitting and prediction.
//!
//! ## Design notes
//!
//! * Uses a Cholesky factorisation: the coefficient matrix is symmetric and,
//!   for `λ > 0`, positive definite.
//! * No SVD or pseudo-inverse fallback. A matrix that fails to factor, or
//!   whose pivots are too small relative to the largest, is reported as
//!   `RfaError::SingularSystem` instead of returning unreliable weights.
//! * The bias coefficient is penalised like every other coefficient.
//!
//! ## Invariants
//!
//! * `augment_bias(phi)` has exactly one more column than `phi`, and column 0
//!   is all ones.
//! * A returned solution contains only finite values.

// External dependencies
use nalgebra::{DMatrix, DVector};

// Internal dependencies
use crate::primitives::errors::RfaError;

// ============================================================================
// Constants
// ============================================================================

/// Smallest accepted squared ratio between the smallest and largest
/// Cholesky pivot. This is a cheap reciprocal condition estimate.
pub const MIN_PIVOT_RATIO: f64 = f64::EPSILON;

// ============================================================================
// Bias Augmentation
// ============================================================================

/// Prepend a column of ones to `phi`.
pub fn augment_bias(phi: &DMatrix<f64>) -> DMatrix<f64> {
    phi.clone().insert_column(0, 1.0)
}

// ============================================================================
// Normal Equations
// ============================================================================

/// Solve `(A'A + λI) w = A'y` for `w`.
///
/// `design` is the already-augmented matrix `A`. `lambda` must be
/// non-negative; callers choosing `lambda == 0` accept that a rank-deficient
/// design fails with `SingularSystem`.
pub fn solve_ridge_normal(
    design: &DMatrix<f64>,
    y: &DVector<f64>,
    lambda: f64,
) -> Result<DVector<f64>, RfaError> {
    if design.nrows() != y.len() {
        return Err(RfaError::MismatchedInputs {
            rows: design.nrows(),
            targets: y.len(),
        });
    }

    let dim = design.ncols();
    let mut gram = design.tr_mul(design);
    for i in 0..dim {
        gram[(i, i)] += lambda;
    }
    let rhs = design.tr_mul(y);

    let chol = gram.cholesky().ok_or(RfaError::SingularSystem { dim })?;

    // Reject near-singular factors.
    let pivots = chol.l_dirty().diagonal();
    let max_pivot = pivots.max();
    let min_pivot = pivots.min();
    let ratio = min_pivot / max_pivot;
    if !(ratio.is_finite() && ratio * ratio >= MIN_PIVOT_RATIO) {
        return Err(RfaError::SingularSystem { dim });
    }

    let w = chol.solve(&rhs);
    if w.iter().any(|v| !v.is_finite()) {
        return Err(RfaError::SingularSystem { dim });
    }
    Ok(w)
}
