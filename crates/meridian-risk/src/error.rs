//! Error types for risk calculations.

use meridian_math::MathError;
use thiserror::Error;

/// A specialized Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskError {
    /// Invalid input parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for calculation
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Vector or matrix dimensions disagree
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Length received.
        actual: usize,
    },

    /// Calculation failed
    #[error("calculation failed: {0}")]
    CalculationFailed(String),

    /// Configuration could not be read or is invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Error from the statistics layer
    #[error("math error: {0}")]
    Math(#[from] MathError),
}

impl RiskError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(message: impl Into<String>) -> Self {
        Self::InsufficientData(message.into())
    }

    /// Creates a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

/// Rejects a confidence level outside the open interval (0, 1).
pub(crate) fn validate_confidence(confidence: f64) -> RiskResult<()> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(RiskError::invalid_input(format!(
            "confidence level must be between 0 and 1, got {confidence}"
        )))
    }
}
