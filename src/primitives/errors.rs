//! Error types for random-features approximation.
//!
//! ## Purpose
//!
//! This module defines the single error type shared by every layer of the
//! crate. Errors fall into two families:
//!
//! * **Validation errors**: unknown catalog identifiers, malformed layer
//!   specifications, out-of-range numeric parameters. These are raised by
//!   the builder and validator before any numeric work begins.
//! * **Numerical errors**: a singular or near-singular normal-equation
//!   system in the ridge solve.
//!
//! ## Invariants
//!
//! * Every variant renders a human-readable message via `Display`.
//! * Errors are plain data (`Clone + PartialEq`) so callers can match on them.

// External dependencies
use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced while configuring or running an approximation.
#[derive(Debug, Clone, PartialEq)]
pub enum RfaError {
    /// The target identifier is not in the target catalog.
    InvalidTarget(String),

    /// The activation identifier is not in the activation catalog.
    InvalidActivation(String),

    /// A layer specification contained no widths.
    EmptyLayerSpec,

    /// A layer specification contained a token that is not an integer.
    InvalidLayerToken(String),

    /// A layer specification listed more layers than allowed.
    TooManyLayers {
        /// Number of layers requested.
        got: usize,
        /// Maximum number of layers.
        max: usize,
    },

    /// Regularization strength is negative or not finite.
    InvalidLambda(f64),

    /// Training noise standard deviation is negative or not finite.
    InvalidNoise(f64),

    /// A numeric value is NaN or infinite.
    InvalidNumericValue(String),

    /// Feature matrix rows and target vector length disagree.
    MismatchedInputs {
        /// Rows in the feature matrix.
        rows: usize,
        /// Length of the target vector.
        targets: usize,
    },

    /// A weight vector does not match the feature matrix width.
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// The ridge normal equations could not be solved reliably.
    SingularSystem {
        /// Size of the (square) coefficient matrix.
        dim: usize,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for RfaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RfaError::InvalidTarget(key) => write!(f, "Invalid target: '{}'", key),
            RfaError::InvalidActivation(key) => write!(f, "Invalid activation: '{}'", key),
            RfaError::EmptyLayerSpec => write!(f, "Invalid layer spec: no layer widths given"),
            RfaError::InvalidLayerToken(token) => {
                write!(f, "Invalid layer spec: '{}' is not an integer", token)
            }
            RfaError::TooManyLayers { got, max } => {
                write!(f, "Invalid layer spec: {} layers (at most {})", got, max)
            }
            RfaError::InvalidLambda(lam) => {
                write!(f, "Invalid lambda: {} (must be >= 0 and finite)", lam)
            }
            RfaError::InvalidNoise(std) => {
                write!(f, "Invalid noise: {} (must be >= 0 and finite)", std)
            }
            RfaError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            RfaError::MismatchedInputs { rows, targets } => write!(
                f,
                "Length mismatch: feature matrix has {} rows, targets have {}",
                rows, targets
            ),
            RfaError::DimensionMismatch { expected, got } => write!(
                f,
                "Dimension mismatch: expected {} weights, got {}",
                expected, got
            ),
            RfaError::SingularSystem { dim } => write!(
                f,
                "Singular system: {}x{} ridge normal equations are not positive definite \
                 (use lambda > 0)",
                dim, dim
            ),
            RfaError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

impl std::error::Error for RfaError {}

impl RfaError {
    /// Whether this error was raised before any numeric work.
    pub fn is_validation(&self) -> bool {
        !matches!(self, RfaError::SingularSystem { .. })
    }
}
