//! Evenly spaced sample grids on the unit interval.
//!
//! ## Purpose
//!
//! This module builds the x-coordinates used for training and evaluation,
//! and the `SampleSet` pairing them with target values.
//!
//! ## Invariants
//!
//! * A grid of `n >= 2` points starts at exactly 0.0 and ends at exactly 1.0.
//! * Points are strictly increasing.
//! * A `SampleSet` always has `x.len() == y.len()`.

// ============================================================================
// Grid Construction
// ============================================================================

/// Build `n` evenly spaced points over `[0, 1]`, both ends inclusive.
///
/// `n == 1` yields `[0.0]` and `n == 0` yields an empty vector.
pub fn linspace(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = 1.0 / (n - 1) as f64;
            let mut x: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
            // Pin the right end so it is not off by rounding.
            x[n - 1] = 1.0;
            x
        }
    }
}

// ============================================================================
// Sample Set
// ============================================================================

/// An ordered set of `(x, y)` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SampleSet {
    /// Evaluate `f` on `n` evenly spaced points over `[0, 1]`.
    pub fn on_grid<F: Fn(&[f64]) -> Vec<f64>>(n: usize, f: F) -> Self {
        let x = linspace(n);
        let y = f(&x);
        debug_assert_eq!(x.len(), y.len());
        Self { x, y }
    }

    /// Return a copy whose labels are shifted by `offsets`.
    ///
    /// Used to add training noise; `offsets` must have one entry per sample.
    pub fn perturbed(&self, offsets: &[f64]) -> Self {
        debug_assert_eq!(self.y.len(), offsets.len());
        let y = self.y.iter().zip(offsets).map(|(&y, &e)| y + e).collect();
        Self {
            x: self.x.clone(),
            y,
        }
    }

    /// Sample positions.
    #[inline]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Sample values.
    #[inline]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the set holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Split into owned `(x, y)` vectors.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}
