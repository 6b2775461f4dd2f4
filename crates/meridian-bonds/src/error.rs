//! Error types for bond operations.

use meridian_core::CoreError;
use meridian_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Invalid bond terms.
    #[error("Invalid bond terms: {reason}")]
    InvalidTerms {
        /// Description of what's invalid.
        reason: String,
    },

    /// Unknown discounting convention name.
    #[error("Unknown discounting convention: {name}")]
    UnknownConvention {
        /// The name that failed to parse.
        name: String,
    },

    /// Curve lookup failed.
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    /// Core error (dates, calendars).
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl BondError {
    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(reason: impl Into<String>) -> Self {
        Self::InvalidTerms {
            reason: reason.into(),
        }
    }
}
