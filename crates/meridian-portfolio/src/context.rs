//! Per-run memo tables.

use meridian_core::{Date, MemoCache};

use crate::returns::HoldingDateReturn;

/// Key of a cached holding return: holding id, price source, date.
pub type HoldingReturnKey = (String, String, Date);

/// Caches owned by one calculation run.
///
/// Each holding return is computed at most once per key, even when dates
/// are processed in parallel. Dropping the context drops the cache.
#[derive(Debug, Default)]
pub struct CalculationContext {
    holding_returns: MemoCache<HoldingReturnKey, HoldingDateReturn>,
}

impl CalculationContext {
    /// Creates a context with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached holding return or computes and stores it.
    pub fn holding_return<F>(&self, key: HoldingReturnKey, compute: F) -> HoldingDateReturn
    where
        F: FnOnce() -> HoldingDateReturn,
    {
        self.holding_returns.get_or_insert_with(key, compute)
    }

    /// Number of cached holding returns.
    pub fn cached_returns(&self) -> usize {
        self.holding_returns.len()
    }

    /// Drops every cached value.
    pub fn clear(&self) {
        self.holding_returns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::Payouts;

    #[test]
    fn test_computes_once_per_key() {
        let context = CalculationContext::new();
        let date = Date::from_ymd(2025, 3, 4).unwrap();
        let key = || ("A".to_string(), "CLOSE".to_string(), date);
        let initial = date.add_days(-1);
        let payouts = Payouts::default();
        let make = || HoldingDateReturn::new("A", "CLOSE", date, initial, 100.0, 101.0, payouts);

        let first = context.holding_return(key(), make);
        let second = context.holding_return(key(), || unreachable!("cached"));
        assert_eq!(first, second);
        assert_eq!(context.cached_returns(), 1);

        context.clear();
        assert_eq!(context.cached_returns(), 0);
    }
}
