//! Error types for return decomposition.

use meridian_core::{CoreError, Date};
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during return decomposition.
///
/// Missing prices, payouts and FX rates are not errors; they read as zero.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// No composition is known for the portfolio on or before the date.
    #[error("Portfolio '{name}' not found as of {date}")]
    PortfolioNotFound {
        /// Portfolio name.
        name: String,
        /// Date of the lookup.
        date: Date,
    },

    /// A holding is absent from every date of a period.
    #[error("Holding '{holding_id}' not held in portfolio '{portfolio}' between {start} and {end}")]
    HoldingNotFound {
        /// Holding identifier.
        holding_id: String,
        /// Portfolio name.
        portfolio: String,
        /// First date of the period.
        start: Date,
        /// Last date of the period.
        end: Date,
    },

    /// Period bounds are reversed.
    #[error("Invalid period: start {start} is after end {end}")]
    InvalidPeriod {
        /// First date of the period.
        start: Date,
        /// Last date of the period.
        end: Date,
    },

    /// Configuration could not be read or is invalid.
    #[error("Configuration error: {reason}")]
    Config {
        /// What went wrong.
        reason: String,
    },

    /// Error from the core layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PortfolioError {
    /// Creates a portfolio-not-found error.
    #[must_use]
    pub fn portfolio_not_found(name: impl Into<String>, date: Date) -> Self {
        Self::PortfolioNotFound {
            name: name.into(),
            date,
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
