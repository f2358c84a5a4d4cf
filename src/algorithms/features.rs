//! Random feature maps.
//!
//! ## Purpose
//!
//! This module builds the fixed, non-learned nonlinear projection that turns
//! scalar inputs into a feature matrix for the linear readout. Two shapes
//! are supported:
//!
//! * **Single**: one random projection layer, `φ(x) = σ(x w + b)`.
//! * **Deep**: a stack of 1 to 10 random layers, `H' = σ(H W_l + b_l)`.
//!
//! ## Design notes
//!
//! * **Sample once**: All layer parameters are drawn into a `FeatureMap`
//!   value by `FeatureMap::sample`. `FeatureMap::transform` is pure, so the
//!   same map can be applied to the training grid and to the evaluation grid.
//! * **Explicit RNG**: The random source is passed in by the caller.
//! * **Draw order**: Layer by layer, weights in row-major order, then biases.
//!
//! ## Key concepts
//!
//! * **Single-layer scales**: weights `N(0, 2.0)`, biases `U(-π, π)`. These
//!   keep all three activations away from saturation and collapse without
//!   per-activation tuning.
//! * **Deep scales**: weights `N(0, s)` with `s = sqrt(2 / fan_in)` for ReLU
//!   and `s = 1 / sqrt(fan_in)` otherwise; biases `U(-1, 1)`.
//! * **Fan-in**: the previous layer's width, or 1 for the first layer.
//!
//! ## Invariants
//!
//! * Every layer has width >= 1; the output matrix is never zero-column.
//! * `transform(x)` has shape `x.len() × output_width()`.
//! * `transform` is deterministic and consumes no randomness.
//!
//! ## Non-goals
//!
//! * This module does not learn or update parameters.
//! * This module does not clamp widths (handled by the validator).

// External dependencies
use core::f64::consts::PI;
use log::trace;
use nalgebra::{DMatrix, DVector};
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

// Internal dependencies
use crate::math::activation::Activation;
use crate::primitives::errors::RfaError;

// ============================================================================
// Feature Shape
// ============================================================================

/// Layer layout of a feature map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FeatureShape {
    /// One random projection layer of the given width.
    Single(usize),

    /// A stack of random layers, one width per layer.
    Deep(Vec<usize>),
}

impl Default for FeatureShape {
    fn default() -> Self {
        FeatureShape::Single(50)
    }
}

impl FeatureShape {
    /// Layer widths in order.
    pub fn widths(&self) -> &[usize] {
        match self {
            FeatureShape::Single(width) => core::slice::from_ref(width),
            FeatureShape::Deep(widths) => widths,
        }
    }

    /// Number of features produced by the final layer.
    pub fn output_width(&self) -> usize {
        self.widths().last().copied().unwrap_or(0)
    }

    /// Number of layers.
    pub fn depth(&self) -> usize {
        self.widths().len()
    }

    /// Whether this is the stacked variant.
    pub fn is_deep(&self) -> bool {
        matches!(self, FeatureShape::Deep(_))
    }
}

// ============================================================================
// Layer Parameters
// ============================================================================

/// Random parameters of one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerParams {
    /// Projection weights, `fan_in × width`.
    pub weights: DMatrix<f64>,

    /// Bias added to every projected row, length `width`.
    pub bias: DVector<f64>,
}

impl LayerParams {
    /// Draw a layer from the given weight and bias distributions.
    fn sample<R, W, B>(
        fan_in: usize,
        width: usize,
        weight_dist: &W,
        bias_dist: &B,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
        W: Distribution<f64>,
        B: Distribution<f64>,
    {
        let raw: Vec<f64> = (0..fan_in * width).map(|_| weight_dist.sample(rng)).collect();
        let weights = DMatrix::from_row_slice(fan_in, width, &raw);
        let bias = DVector::from_iterator(width, (0..width).map(|_| bias_dist.sample(rng)));
        Self { weights, bias }
    }

    /// Input dimension.
    #[inline]
    pub fn fan_in(&self) -> usize {
        self.weights.nrows()
    }

    /// Output dimension.
    #[inline]
    pub fn width(&self) -> usize {
        self.weights.ncols()
    }

    /// Compute `σ(H W + b)` for a batch of row inputs `h`.
    fn forward(&self, h: &DMatrix<f64>, activation: Activation) -> DMatrix<f64> {
        let mut z = h * &self.weights;
        for (mut col, &b) in z.column_iter_mut().zip(self.bias.iter()) {
            for v in col.iter_mut() {
                *v = activation.apply(*v + b);
            }
        }
        z
    }
}

// ============================================================================
// Feature Map
// ============================================================================

/// A sampled random feature map.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMap {
    shape: FeatureShape,
    activation: Activation,
    layers: Vec<LayerParams>,
}

impl FeatureMap {
    /// Weight standard deviation for the single-layer map.
    pub const SINGLE_WEIGHT_SCALE: f64 = 2.0;

    /// Bias half-range for the single-layer map.
    pub const SINGLE_BIAS_RANGE: f64 = PI;

    /// Bias half-range for every layer of the deep map.
    pub const DEEP_BIAS_RANGE: f64 = 1.0;

    /// Draw every layer's parameters from `rng`.
    ///
    /// This is the only place randomness enters a feature map. Callers that
    /// need features for several input sets sample once and call
    /// [`FeatureMap::transform`] on each set.
    pub fn sample<R: Rng + ?Sized>(
        shape: &FeatureShape,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, RfaError> {
        if shape.depth() == 0 {
            return Err(RfaError::EmptyLayerSpec);
        }
        if let Some(&w) = shape.widths().iter().find(|&&w| w == 0) {
            return Err(RfaError::InvalidNumericValue(format!("layer width={}", w)));
        }

        let layers = match shape {
            FeatureShape::Single(width) => {
                let weight_dist = normal(Self::SINGLE_WEIGHT_SCALE)?;
                let bias_dist = uniform(Self::SINGLE_BIAS_RANGE)?;
                vec![LayerParams::sample(1, *width, &weight_dist, &bias_dist, rng)]
            }
            FeatureShape::Deep(widths) => {
                let bias_dist = uniform(Self::DEEP_BIAS_RANGE)?;
                let mut layers = Vec::with_capacity(widths.len());
                let mut fan_in = 1;
                for &width in widths {
                    let weight_dist = normal(Self::deep_weight_scale(activation, fan_in))?;
                    layers.push(LayerParams::sample(fan_in, width, &weight_dist, &bias_dist, rng));
                    fan_in = width;
                }
                layers
            }
        };

        Ok(Self {
            shape: shape.clone(),
            activation,
            layers,
        })
    }

    /// Weight standard deviation for a deep layer with the given fan-in.
    ///
    /// He scaling for ReLU, `1 / sqrt(fan_in)` for everything else.
    pub fn deep_weight_scale(activation: Activation, fan_in: usize) -> f64 {
        let fan_in = fan_in.max(1) as f64;
        match activation {
            Activation::Relu => (2.0 / fan_in).sqrt(),
            Activation::Tanh | Activation::Sigmoid => 1.0 / fan_in.sqrt(),
        }
    }

    /// Map scalar inputs to an `x.len() × output_width()` feature matrix.
    pub fn transform(&self, x: &[f64]) -> DMatrix<f64> {
        let mut h = DMatrix::from_column_slice(x.len(), 1, x);
        for (depth, layer) in self.layers.iter().enumerate() {
            h = layer.forward(&h, self.activation);
            trace!(
                "feature layer {}: {}x{} -> {}x{}",
                depth,
                layer.fan_in(),
                layer.width(),
                h.nrows(),
                h.ncols()
            );
        }
        h
    }

    /// Layer layout this map was sampled for.
    pub fn shape(&self) -> &FeatureShape {
        &self.shape
    }

    /// Activation applied after every layer.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Sampled layer parameters, input layer first.
    pub fn layers(&self) -> &[LayerParams] {
        &self.layers
    }

    /// Number of output features.
    pub fn output_width(&self) -> usize {
        self.shape.output_width()
    }

    /// Total number of random parameters across all layers.
    pub fn parameter_count(&self) -> usize {
        self.layers
            .iter()
            .map(|l| l.weights.len() + l.bias.len())
            .sum()
    }
}

// ============================================================================
// Distribution Helpers
// ============================================================================

fn normal(std_dev: f64) -> Result<Normal<f64>, RfaError> {
    Normal::new(0.0, std_dev)
        .map_err(|e| RfaError::InvalidNumericValue(format!("normal std_dev={}: {}", std_dev, e)))
}

fn uniform(half_range: f64) -> Result<Uniform<f64>, RfaError> {
    Uniform::new(-half_range, half_range)
        .map_err(|e| RfaError::InvalidNumericValue(format!("uniform range={}: {}", half_range, e)))
}
