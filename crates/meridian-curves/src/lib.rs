//! # Meridian Curves
//!
//! Discount curves keyed by term in days, and the providers that hand them
//! to valuation code.
//!
//! - [`DiscountCurve`]: nodes `(term, value)` with exact lookup at nodes,
//!   linear interpolation between them and slope continuation beyond them
//! - [`DiscountCurveProvider`]: the lookup seam used by valuators
//! - [`InMemoryCurveProvider`] and [`CachedCurveProvider`]: a static store and
//!   a memoising wrapper around any provider
//!
//! Curve values are used as-is; no compounding conversion happens here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod curve;
pub mod error;
pub mod providers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::DiscountCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::providers::{CachedCurveProvider, DiscountCurveProvider, InMemoryCurveProvider};
}

pub use curve::DiscountCurve;
pub use error::{CurveError, CurveResult};
pub use providers::{CachedCurveProvider, DiscountCurveProvider, InMemoryCurveProvider};
