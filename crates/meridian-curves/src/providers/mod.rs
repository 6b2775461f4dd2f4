//! Curve lookup by identifier and as-of date.

mod cached;
mod memory;

pub use cached::CachedCurveProvider;
pub use memory::InMemoryCurveProvider;

use meridian_core::Date;

use crate::curve::DiscountCurve;
use crate::error::CurveResult;

/// Source of discount curves.
///
/// Implementations are shared across threads by valuation code.
pub trait DiscountCurveProvider: Send + Sync {
    /// The curve `curve_id` as of `date`.
    ///
    /// # Errors
    ///
    /// `CurveError::CurveNotFound` when no such curve exists.
    fn term_structure(&self, date: Date, curve_id: &str) -> CurveResult<DiscountCurve>;
}

impl<P: DiscountCurveProvider + ?Sized> DiscountCurveProvider for std::sync::Arc<P> {
    fn term_structure(&self, date: Date, curve_id: &str) -> CurveResult<DiscountCurve> {
        (**self).term_structure(date, curve_id)
    }
}

impl<P: DiscountCurveProvider + ?Sized> DiscountCurveProvider for &P {
    fn term_structure(&self, date: Date, curve_id: &str) -> CurveResult<DiscountCurve> {
        (**self).term_structure(date, curve_id)
    }
}
