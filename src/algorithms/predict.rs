//! Linear readout prediction.
//!
//! Applies a fitted weight vector to a feature matrix using the same
//! bias-augmentation convention as the ridge fitter: `ŷ = [1 | Φ] w`.

// External dependencies
use nalgebra::{DMatrix, DVector};

// Internal dependencies
use crate::math::linalg::augment_bias;
use crate::primitives::errors::RfaError;

/// Predict targets for `phi` (M × W) with weights `w` (W + 1, bias first).
pub fn predict(phi: &DMatrix<f64>, w: &DVector<f64>) -> Result<Vec<f64>, RfaError> {
    let expected = phi.ncols() + 1;
    if w.len() != expected {
        return Err(RfaError::DimensionMismatch {
            expected,
            got: w.len(),
        });
    }

    let y = augment_bias(phi) * w;
    Ok(y.as_slice().to_vec())
}
