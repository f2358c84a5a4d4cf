//! Elementwise activation functions for random feature maps.
//!
//! ## Purpose
//!
//! This module defines the closed catalog of nonlinearities applied to the
//! random affine projections inside a feature map.
//!
//! ## Design notes
//!
//! * **Closed set**: Activations are an enum dispatched with `match`.
//! * **Stability**: Sigmoid clamps its argument to `[-60, 60]` before `exp`,
//!   so it saturates instead of overflowing.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `Relu` output is always `>= 0`.
//! * `Sigmoid` output is always in `[0, 1]` and finite for finite input.
//! * `Tanh` output is always in `[-1, 1]`.

// External dependencies
use core::fmt;
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RfaError;

// ============================================================================
// Activation
// ============================================================================

/// Elementwise nonlinearity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Activation {
    /// Hyperbolic tangent.
    #[default]
    Tanh,

    /// Rectified linear unit, `max(0, z)`.
    Relu,

    /// Logistic sigmoid, `1 / (1 + exp(-z))`.
    Sigmoid,
}

impl Activation {
    /// Every catalog entry, in display order.
    pub const ALL: [Activation; 3] = [Activation::Tanh, Activation::Relu, Activation::Sigmoid];

    /// Sigmoid input clamp bound.
    pub const SIGMOID_CLAMP: f64 = 60.0;

    /// Stable identifier.
    pub const fn key(&self) -> &'static str {
        match self {
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
        }
    }

    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Activation::Tanh => "tanh",
            Activation::Relu => "ReLU",
            Activation::Sigmoid => "sigmoid",
        }
    }

    /// Apply the activation to a single value.
    #[inline]
    pub fn apply<T: Float>(&self, z: T) -> T {
        match self {
            Activation::Tanh => z.tanh(),
            Activation::Relu => z.max(T::zero()),
            Activation::Sigmoid => {
                let bound = T::from(Self::SIGMOID_CLAMP).unwrap();
                let z = z.max(-bound).min(bound);
                T::one() / (T::one() + (-z).exp())
            }
        }
    }

    /// Apply the activation in place to every element of `values`.
    #[inline]
    pub fn apply_in_place<T: Float>(&self, values: &mut [T]) {
        for v in values.iter_mut() {
            *v = self.apply(*v);
        }
    }
}

impl FromStr for Activation {
    type Err = RfaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activation::ALL
            .iter()
            .copied()
            .find(|a| a.key() == s)
            .ok_or_else(|| RfaError::InvalidActivation(s.to_string()))
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
