//! # Meridian Math
//!
//! Numerical building blocks for the Meridian analytics engine.
//!
//! This crate provides:
//!
//! - **Interpolation**: piecewise-linear interpolation over sorted nodes
//! - **Extrapolation**: slope continuation beyond the node range
//! - **Statistics**: batch (two-pass) and streaming (single-pass) estimators,
//!   order statistics and entropy
//!
//! ## Conventions
//!
//! - Empty input yields `NaN` for single-sample statistics, fewer than two
//!   samples yields `NaN` for sample variance/covariance. `NaN` is never
//!   replaced by zero.
//! - Paired statistics reject inputs of different lengths with
//!   [`MathError::LengthMismatch`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod extrapolation;
pub mod interpolation;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::{Extrapolator, LinearExtrapolator};
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
    pub use crate::statistics::{
        OrderStatistics, QuantileDefinition, RunningCovariance, RunningStatistics,
    };
}

pub use error::{MathError, MathResult};
