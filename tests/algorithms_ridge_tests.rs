//! Tests for the ridge fitter and predictor.
//!
//! ## Test Organization
//!
//! 1. **Exact Fits** - Known closed-form solutions
//! 2. **Shrinkage** - Effect of the penalty
//! 3. **Round Trip** - Fit then predict on the same features
//! 4. **Boundary Conditions** - Invalid inputs and singular systems

use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use rfa_rs::prelude::*;

fn random_features(n: usize, width: usize, activation: Activation, seed: u64) -> DMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    FeatureMap::sample(&FeatureShape::Single(width), activation, &mut rng)
        .unwrap()
        .transform(&linspace(n))
}

// ============================================================================
// Exact Fits
// ============================================================================

#[test]
fn test_recovers_line_with_intercept() {
    let x = linspace(10);
    let y: Vec<f64> = x.iter().map(|v| 3.0 + 2.0 * v).collect();
    let phi = DMatrix::from_column_slice(10, 1, &x);

    let model = RidgeRegression::new(0.0).unwrap().fit(&phi, &y).unwrap();

    assert_eq!(model.weights().len(), 2);
    assert_eq!(model.width(), 1);
    assert_relative_eq!(model.bias(), 3.0, epsilon = 1e-10);
    assert_relative_eq!(model.coefficients()[0], 2.0, epsilon = 1e-10);

    let pred = model.predict(&phi).unwrap();
    for (p, t) in pred.iter().zip(&y) {
        assert_relative_eq!(*p, *t, epsilon = 1e-10);
    }
}

#[test]
fn test_weight_length_is_width_plus_one() {
    let phi = random_features(64, 17, Activation::Tanh, 0);
    let y = Target::Bump.eval_slice(&linspace(64));

    let model = RidgeRegression::new(1e-3).unwrap().fit(&phi, &y).unwrap();
    assert_eq!(model.weights().len(), 18);
    assert!(model.weights().iter().all(|w| w.is_finite()));
}

// ============================================================================
// Shrinkage
// ============================================================================

#[test]
fn test_norm_does_not_grow_with_lambda() {
    let x = linspace(128);
    let y = Target::Sine.eval_slice(&x);
    let phi = random_features(128, 40, Activation::Tanh, 1);

    let lambdas = [1e-4, 1e-3, 1e-2, 1e-1, 1.0, 10.0, 100.0];
    let norms: Vec<f64> = lambdas
        .iter()
        .map(|&lam| RidgeRegression::new(lam).unwrap().fit(&phi, &y).unwrap().norm())
        .collect();

    for pair in norms.windows(2) {
        assert!(
            pair[1] <= pair[0] * (1.0 + 1e-9),
            "norms not monotone: {:?}",
            norms
        );
    }
    assert!(norms[norms.len() - 1] < norms[0]);
}

#[test]
fn test_huge_lambda_drives_weights_to_zero() {
    let x = linspace(32);
    let y = Target::Cubic.eval_slice(&x);
    let phi = random_features(32, 8, Activation::Sigmoid, 2);

    let model = RidgeRegression::new(1e12).unwrap().fit(&phi, &y).unwrap();
    assert!(model.norm() < 1e-9);
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_overparameterized_round_trip() {
    // Targets realisable by the features: y = [1 | Φ] w_true.
    let n = 30;
    let phi = random_features(n, 40, Activation::Relu, 3);
    let mut rng = StdRng::seed_from_u64(99);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let w_true = DVector::from_iterator(41, (0..41).map(|_| normal.sample(&mut rng)));
    let y = RidgeModel::from_weights(w_true.as_slice().to_vec())
        .unwrap()
        .predict(&phi)
        .unwrap();

    let model = RidgeRegression::new(1e-8).unwrap().fit(&phi, &y).unwrap();
    let pred = model.predict(&phi).unwrap();

    let scale = y.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let err = max_abs_error(&y, &pred);
    assert!(err < 1e-3 * scale.max(1.0), "max error {} (scale {})", err, scale);
}

#[test]
fn test_small_lambda_interpolates_training_labels() {
    let n = 64;
    let x = linspace(n);
    let y = Target::Sine.eval_slice(&x);
    let phi = random_features(n, 256, Activation::Tanh, 4);

    let model = RidgeRegression::new(1e-6).unwrap().fit(&phi, &y).unwrap();
    let pred = model.predict(&phi).unwrap();
    assert!(mean_squared_error(&y, &pred) < 1e-3);
}

// ============================================================================
// Boundary Conditions
// ============================================================================

#[test]
fn test_invalid_lambda() {
    assert_eq!(
        RidgeRegression::new(-1.0),
        Err(RfaError::InvalidLambda(-1.0))
    );
    assert!(RidgeRegression::new(f64::INFINITY).is_err());
    assert!(RidgeRegression::new(f64::NAN).is_err());
    assert_eq!(RidgeRegression::new(0.5).unwrap().lambda(), 0.5);
}

#[test]
fn test_mismatched_targets() {
    let phi = DMatrix::<f64>::zeros(4, 2);
    let err = RidgeRegression::new(1.0).unwrap().fit(&phi, &[1.0, 2.0, 3.0]);
    assert_eq!(
        err,
        Err(RfaError::MismatchedInputs {
            rows: 4,
            targets: 3
        })
    );
}

#[test]
fn test_singular_system_without_penalty() {
    let phi = DMatrix::<f64>::zeros(5, 3);
    let y = vec![1.0; 5];

    let err = RidgeRegression::new(0.0).unwrap().fit(&phi, &y);
    assert_eq!(err, Err(RfaError::SingularSystem { dim: 4 }));

    // The same system is well posed once penalised.
    assert!(RidgeRegression::new(1e-3).unwrap().fit(&phi, &y).is_ok());
}

#[test]
fn test_predict_dimension_mismatch() {
    let model = RidgeModel::from_weights(vec![0.0, 1.0, 2.0]).unwrap();
    let phi = DMatrix::<f64>::zeros(3, 5);
    assert_eq!(
        model.predict(&phi),
        Err(RfaError::DimensionMismatch {
            expected: 6,
            got: 3
        })
    );
}

#[test]
fn test_from_weights_rejects_empty() {
    assert!(RidgeModel::from_weights(vec![]).is_err());
}

#[test]
fn test_predict_uses_bias_column() {
    let model = RidgeModel::from_weights(vec![0.5, 2.0]).unwrap();
    let phi = DMatrix::from_column_slice(3, 1, &[0.0, 1.0, -1.0]);
    assert_eq!(model.predict(&phi).unwrap(), vec![0.5, 2.5, -1.5]);
}
