//! Error metrics between ground truth and predictions.
//!
//! ## Purpose
//!
//! This module provides the scalar error summaries reported for a fitted
//! model: mean squared error (the headline metric), its square root, the
//! worst-case absolute error, and the L2 norm of a weight vector.
//!
//! ## Design notes
//!
//! * **Generics**: Generic over `Float` types.
//! * **Pairing**: Slices are compared elementwise up to the shorter length;
//!   callers pass equal-length slices.
//!
//! ## Invariants
//!
//! * Every metric is `>= 0` for finite inputs.
//! * Every metric of an empty pair of slices is zero.

// External dependencies
use num_traits::Float;

// ============================================================================
// Metrics
// ============================================================================

/// Mean squared error, `mean((truth - pred)^2)`.
pub fn mean_squared_error<T: Float>(truth: &[T], pred: &[T]) -> T {
    let n = truth.len().min(pred.len());
    if n == 0 {
        return T::zero();
    }
    let sum = truth
        .iter()
        .zip(pred)
        .fold(T::zero(), |acc, (&t, &p)| acc + (t - p) * (t - p));
    sum / T::from(n).unwrap()
}

/// Root mean squared error.
pub fn root_mean_squared_error<T: Float>(truth: &[T], pred: &[T]) -> T {
    mean_squared_error(truth, pred).sqrt()
}

/// Largest absolute deviation, `max |truth - pred|`.
pub fn max_abs_error<T: Float>(truth: &[T], pred: &[T]) -> T {
    truth
        .iter()
        .zip(pred)
        .fold(T::zero(), |acc, (&t, &p)| acc.max((t - p).abs()))
}

/// Euclidean norm of a weight vector, `sqrt(sum(w^2))`.
pub fn l2_norm<T: Float>(weights: &[T]) -> T {
    weights
        .iter()
        .fold(T::zero(), |acc, &w| acc + w * w)
        .sqrt()
}
