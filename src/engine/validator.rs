//! Input validation for approximation parameters.
//!
//! ## Purpose
//!
//! This module checks and normalises every caller-supplied parameter before
//! any numeric work begins: feature widths, layer specifications,
//! regularisation strength, and training noise.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Clamping**: Widths are clamped into `[MIN_WIDTH, MAX_WIDTH]`; a width of
//!   zero or below resolves to one, never to an empty feature matrix.
//! * **Rejection**: Structural problems (empty layer list, too many layers,
//!   non-integer tokens) are errors, never defaulted.
//!
//! ## Invariants
//!
//! * Every width returned by this module is in `[MIN_WIDTH, MAX_WIDTH]`.
//! * Every layer list returned by this module has `1..=MAX_LAYERS` entries.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not resolve catalog identifiers (see `Target`/`Activation`).
//! * This module does not run the fit.

// External dependencies
use core::num::IntErrorKind;

// Internal dependencies
use crate::primitives::errors::RfaError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for approximation parameters.
pub struct Validator;

impl Validator {
    /// Smallest allowed layer width.
    pub const MIN_WIDTH: usize = 1;

    /// Largest allowed layer width.
    pub const MAX_WIDTH: usize = 2048;

    /// Largest allowed number of layers in a deep feature map.
    pub const MAX_LAYERS: usize = 10;

    // ========================================================================
    // Widths and Layers
    // ========================================================================

    /// Clamp a requested width into `[MIN_WIDTH, MAX_WIDTH]`.
    pub fn clamp_width(width: i64) -> usize {
        width.clamp(Self::MIN_WIDTH as i64, Self::MAX_WIDTH as i64) as usize
    }

    /// Validate a list of layer widths, clamping each.
    pub fn validate_layers(widths: &[i64]) -> Result<Vec<usize>, RfaError> {
        if widths.is_empty() {
            return Err(RfaError::EmptyLayerSpec);
        }
        if widths.len() > Self::MAX_LAYERS {
            return Err(RfaError::TooManyLayers {
                got: widths.len(),
                max: Self::MAX_LAYERS,
            });
        }
        Ok(widths.iter().map(|&w| Self::clamp_width(w)).collect())
    }

    /// Parse one integer width token.
    ///
    /// Integers outside the `i64` range saturate to `i64::MAX` / `i64::MIN`,
    /// so they still clamp to `MAX_WIDTH` / `MIN_WIDTH`. Returns `None` for
    /// anything that is not an integer.
    pub fn parse_width(token: &str) -> Option<i64> {
        match token.parse::<i64>() {
            Ok(width) => Some(width),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Some(i64::MAX),
                IntErrorKind::NegOverflow => Some(i64::MIN),
                _ => None,
            },
        }
    }

    /// Parse a comma-separated layer specification such as `"64, 64, 32"`.
    ///
    /// Surrounding whitespace on each token is ignored. Empty tokens and
    /// tokens that are not integers are rejected.
    pub fn parse_layer_spec(spec: &str) -> Result<Vec<usize>, RfaError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(RfaError::EmptyLayerSpec);
        }

        let widths = spec
            .split(',')
            .map(|token| {
                let token = token.trim();
                Self::parse_width(token)
                    .ok_or_else(|| RfaError::InvalidLayerToken(token.to_string()))
            })
            .collect::<Result<Vec<i64>, RfaError>>()?;

        Self::validate_layers(&widths)
    }

    // ========================================================================
    // Numeric Parameters
    // ========================================================================

    /// Validate the ridge regularisation strength.
    pub fn validate_lambda(lambda: f64) -> Result<(), RfaError> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(RfaError::InvalidLambda(lambda));
        }
        Ok(())
    }

    /// Validate the training noise standard deviation.
    pub fn validate_noise(noise: f64) -> Result<(), RfaError> {
        if !noise.is_finite() || noise < 0.0 {
            return Err(RfaError::InvalidNoise(noise));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), RfaError> {
        if let Some(param) = duplicate_param {
            return Err(RfaError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
