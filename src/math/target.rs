//! Target functions to approximate.
//!
//! ## Purpose
//!
//! This module defines the closed catalog of scalar target functions the
//! model is asked to approximate on `[0, 1]`.
//!
//! ## Design notes
//!
//! * **Closed set**: Targets are an enum, not a runtime registry.
//! * **Generics**: Scalar evaluation is generic over `Float` types.
//! * **Identifiers**: Each target has a stable key (`"sine"`) and a display label.
//!
//! ## Key concepts
//!
//! * **Continuous targets**: `Sine`, `Abs`, `Bump`, `Cubic`.
//! * **Discontinuous target**: `Square` jumps wherever `sin(2πx)` changes sign.
//!
//! ## Invariants
//!
//! * `Target::from_str(t.key()) == Ok(t)` for every catalog entry.
//! * `sign(0) == 0`, so `Square` evaluates to exactly 0 where `sin(2πx)` is exactly 0.
//!
//! ## Non-goals
//!
//! * This module does not sample grids or add noise.

// External dependencies
use core::f64::consts::PI;
use core::fmt;
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RfaError;

// ============================================================================
// Target
// ============================================================================

/// Scalar target function on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Target {
    /// `sin(2πx)`
    #[default]
    Sine,

    /// `|x - 0.5|`
    Abs,

    /// `exp(-60 (x - 0.5)^2)`
    Bump,

    /// `(2x - 1)^3`
    Cubic,

    /// `0.8 sign(sin(2πx))`
    Square,
}

impl Target {
    /// Every catalog entry, in display order.
    pub const ALL: [Target; 5] = [
        Target::Sine,
        Target::Abs,
        Target::Bump,
        Target::Cubic,
        Target::Square,
    ];

    /// Width of the Gaussian bump.
    const BUMP_SHARPNESS: f64 = 60.0;

    /// Amplitude of the square wave.
    const SQUARE_AMPLITUDE: f64 = 0.8;

    /// Stable identifier.
    pub const fn key(&self) -> &'static str {
        match self {
            Target::Sine => "sine",
            Target::Abs => "abs",
            Target::Bump => "bump",
            Target::Cubic => "cubic",
            Target::Square => "square",
        }
    }

    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Target::Sine => "sin(2πx)",
            Target::Abs => "|x - 0.5|",
            Target::Bump => "Gaussian bump",
            Target::Cubic => "(2x-1)^3",
            Target::Square => "square wave (discontinuous)",
        }
    }

    /// Whether the target is continuous on `[0, 1]`.
    pub const fn is_continuous(&self) -> bool {
        !matches!(self, Target::Square)
    }

    /// Evaluate the target at a single point.
    #[inline]
    pub fn eval<T: Float>(&self, x: T) -> T {
        let half = constant::<T>(0.5);
        let two = constant::<T>(2.0);
        match self {
            Target::Sine => (constant::<T>(2.0 * PI) * x).sin(),
            Target::Abs => (x - half).abs(),
            Target::Bump => {
                let d = x - half;
                (-constant::<T>(Self::BUMP_SHARPNESS) * d * d).exp()
            }
            Target::Cubic => (two * x - T::one()).powi(3),
            Target::Square => {
                constant::<T>(Self::SQUARE_AMPLITUDE) * sign((constant::<T>(2.0 * PI) * x).sin())
            }
        }
    }

    /// Evaluate the target over a slice of points.
    pub fn eval_slice<T: Float>(&self, x: &[T]) -> Vec<T> {
        x.iter().map(|&xi| self.eval(xi)).collect()
    }
}

impl FromStr for Target {
    type Err = RfaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .iter()
            .copied()
            .find(|t| t.key() == s)
            .ok_or_else(|| RfaError::InvalidTarget(s.to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Sign function with `sign(0) == 0`.
///
/// Unlike `Float::signum`, which maps `+0.0` to `1.0`, this returns zero for
/// either signed zero. NaN propagates.
#[inline]
pub fn sign<T: Float>(v: T) -> T {
    if v > T::zero() {
        T::one()
    } else if v < T::zero() {
        -T::one()
    } else if v.is_nan() {
        v
    } else {
        T::zero()
    }
}

#[inline]
fn constant<T: Float>(v: f64) -> T {
    T::from(v).unwrap()
}
