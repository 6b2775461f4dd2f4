//! Error types for curve operations.

use meridian_core::Date;
use meridian_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The curve's nodes are unusable.
    #[error("Invalid curve '{curve_id}': {reason}")]
    InvalidCurve {
        /// Curve identifier.
        curve_id: String,
        /// Description of the problem.
        reason: String,
    },

    /// No curve is available for the identifier and date.
    #[error("Curve not found: {curve_id} as of {date}")]
    CurveNotFound {
        /// Curve identifier.
        curve_id: String,
        /// Requested as-of date.
        date: Date,
    },

    /// Mathematical error from the interpolation layer.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates an invalid curve error.
    #[must_use]
    pub fn invalid_curve(curve_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCurve {
            curve_id: curve_id.into(),
            reason: reason.into(),
        }
    }

    /// Creates a curve not found error.
    #[must_use]
    pub fn curve_not_found(curve_id: impl Into<String>, date: Date) -> Self {
        Self::CurveNotFound {
            curve_id: curve_id.into(),
            date,
        }
    }
}
