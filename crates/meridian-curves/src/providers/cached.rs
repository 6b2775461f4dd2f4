//! Memoising provider wrapper.

use meridian_core::{Date, MemoCache};

use super::DiscountCurveProvider;
use crate::curve::DiscountCurve;
use crate::error::CurveResult;

/// Wraps a provider so each `(date, curve_id)` is fetched at most once.
///
/// Failed lookups are not cached.
#[derive(Debug)]
pub struct CachedCurveProvider<P> {
    inner: P,
    cache: MemoCache<(Date, String), DiscountCurve>,
}

impl<P: DiscountCurveProvider> CachedCurveProvider<P> {
    /// Wraps `inner` with an empty cache.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: MemoCache::new(),
        }
    }

    /// Number of curves fetched so far.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Forgets every cached curve.
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: DiscountCurveProvider> DiscountCurveProvider for CachedCurveProvider<P> {
    fn term_structure(&self, date: Date, curve_id: &str) -> CurveResult<DiscountCurve> {
        self.cache
            .get_or_try_insert_with((date, curve_id.to_string()), || {
                log::debug!("loading curve {curve_id} as of {date}");
                self.inner.term_structure(date, curve_id)
            })
    }
}
