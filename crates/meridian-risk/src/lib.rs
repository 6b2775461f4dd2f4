//! # Meridian Risk
//!
//! Covariance estimation and Value at Risk for the Meridian analytics engine.
//!
//! - [`CovarianceMatrix`]: equal-weight or exponentially weighted (EWMA)
//!   covariance of a return panel, with correlation and volatility views
//! - [`var`]: parametric, historical and conditional VaR as free functions
//! - [`RiskMetrics`]: all of the above driven by a [`RiskConfig`], producing a
//!   serializable [`RiskReport`]
//!
//! Returns are plain fractions (0.01 is one percent) and losses are negative.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

pub mod config;
pub mod covariance;
pub mod error;
pub mod metrics;
pub mod var;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::RiskConfig;
    pub use crate::covariance::CovarianceMatrix;
    pub use crate::error::{RiskError, RiskResult};
    pub use crate::metrics::{RiskMetrics, RiskReport};
    pub use crate::var::{conditional_var, historical_var, parametric_var, VaRMethod};
}

pub use config::RiskConfig;
pub use covariance::CovarianceMatrix;
pub use error::{RiskError, RiskResult};
pub use metrics::{RiskMetrics, RiskReport};
pub use var::VaRMethod;
