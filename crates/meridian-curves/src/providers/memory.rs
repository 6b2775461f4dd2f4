//! Static in-memory curve store.

use std::collections::HashMap;

use meridian_core::Date;

use super::DiscountCurveProvider;
use crate::curve::DiscountCurve;
use crate::error::{CurveError, CurveResult};

/// Curves held in a map keyed by `(curve_id, as_of_date)`.
///
/// Lookups are exact on the date; there is no roll-back to an earlier
/// snapshot.
///
/// ```rust
/// use meridian_core::Date;
/// use meridian_curves::{DiscountCurve, DiscountCurveProvider, InMemoryCurveProvider};
///
/// let date = Date::from_ymd(2025, 6, 30).unwrap();
/// let provider = InMemoryCurveProvider::new()
///     .with_curve(DiscountCurve::flat(date, "EUR.OIS", 0.025));
///
/// assert!(provider.term_structure(date, "EUR.OIS").is_ok());
/// assert!(provider.term_structure(date, "USD.OIS").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCurveProvider {
    curves: HashMap<(String, Date), DiscountCurve>,
}

impl InMemoryCurveProvider {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a curve, returning the store (builder style).
    #[must_use]
    pub fn with_curve(mut self, curve: DiscountCurve) -> Self {
        self.insert(curve);
        self
    }

    /// Adds or replaces the curve for its id and as-of date.
    pub fn insert(&mut self, curve: DiscountCurve) {
        let key = (curve.curve_id().to_string(), curve.as_of_date());
        self.curves.insert(key, curve);
    }

    /// Number of stored curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// True when no curve has been added.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl DiscountCurveProvider for InMemoryCurveProvider {
    fn term_structure(&self, date: Date, curve_id: &str) -> CurveResult<DiscountCurve> {
        self.curves
            .get(&(curve_id.to_string(), date))
            .cloned()
            .ok_or_else(|| CurveError::curve_not_found(curve_id, date))
    }
}
