//! Market data seams consumed by the return decomposer.
//!
//! Prices, payouts and FX rates are infallible by contract: a value that is
//! not available reads as zero and the return formulas guard against it.
//! Only a missing portfolio composition is an error.

mod memory;

pub use memory::{InMemoryMarketData, Payouts};

use std::sync::Arc;

use meridian_core::{Currency, Date};

use crate::error::PortfolioResult;
use crate::types::PortfolioSnapshot;

/// Clean prices by holding, date and price source.
pub trait PriceProvider: Send + Sync {
    /// Clean price of one unit, or 0 when unavailable.
    fn clean_price(&self, holding_id: &str, date: Date, source_id: &str) -> f64;
}

/// Income and capital paid on a holding.
///
/// Each amount is per unit and is added to the clean price to form the
/// final price. `price` is the clean price on `date`.
pub trait PayoutProvider: Send + Sync {
    /// Principal repaid on `date`.
    fn payout_by_amortization(&self, holding_id: &str, date: Date, price: f64) -> f64;

    /// Coupon paid on `date`.
    fn payout_by_coupon(&self, holding_id: &str, date: Date, price: f64) -> f64;

    /// Dividends and other corporate-event payments on `date`.
    fn payout_by_events(&self, holding_id: &str, date: Date, price: f64) -> f64;
}

/// Currency conversion.
pub trait FxProvider: Send + Sync {
    /// `amount` of `from` expressed in `to` on `date`, or 0 when no rate exists.
    fn convert(&self, from: Currency, to: Currency, date: Date, amount: f64) -> f64;

    /// Units of `to` per unit of `from`; exactly 1 for the same currency.
    fn rate(&self, from: Currency, to: Currency, date: Date) -> f64 {
        if from == to {
            1.0
        } else {
            self.convert(from, to, date, 1.0)
        }
    }
}

/// Dated portfolio compositions.
pub trait PortfolioProvider: Send + Sync {
    /// Composition of `name` effective on `date`.
    fn portfolio(&self, date: Date, name: &str) -> PortfolioResult<PortfolioSnapshot>;
}

impl<P: PriceProvider + ?Sized> PriceProvider for Arc<P> {
    fn clean_price(&self, holding_id: &str, date: Date, source_id: &str) -> f64 {
        (**self).clean_price(holding_id, date, source_id)
    }
}

impl<P: PayoutProvider + ?Sized> PayoutProvider for Arc<P> {
    fn payout_by_amortization(&self, holding_id: &str, date: Date, price: f64) -> f64 {
        (**self).payout_by_amortization(holding_id, date, price)
    }

    fn payout_by_coupon(&self, holding_id: &str, date: Date, price: f64) -> f64 {
        (**self).payout_by_coupon(holding_id, date, price)
    }

    fn payout_by_events(&self, holding_id: &str, date: Date, price: f64) -> f64 {
        (**self).payout_by_events(holding_id, date, price)
    }
}

impl<P: FxProvider + ?Sized> FxProvider for Arc<P> {
    fn convert(&self, from: Currency, to: Currency, date: Date, amount: f64) -> f64 {
        (**self).convert(from, to, date, amount)
    }
}

impl<P: PortfolioProvider + ?Sized> PortfolioProvider for Arc<P> {
    fn portfolio(&self, date: Date, name: &str) -> PortfolioResult<PortfolioSnapshot> {
        (**self).portfolio(date, name)
    }
}

/// The four providers a decomposer reads from.
#[derive(Clone)]
pub struct MarketData {
    /// Clean prices.
    pub prices: Arc<dyn PriceProvider>,
    /// Payouts.
    pub payouts: Arc<dyn PayoutProvider>,
    /// FX rates.
    pub fx: Arc<dyn FxProvider>,
    /// Portfolio compositions.
    pub portfolios: Arc<dyn PortfolioProvider>,
}

impl MarketData {
    /// Bundles separate providers.
    pub fn new(
        prices: Arc<dyn PriceProvider>,
        payouts: Arc<dyn PayoutProvider>,
        fx: Arc<dyn FxProvider>,
        portfolios: Arc<dyn PortfolioProvider>,
    ) -> Self {
        Self {
            prices,
            payouts,
            fx,
            portfolios,
        }
    }

    /// Uses one store for all four roles.
    pub fn from_shared<M>(market: Arc<M>) -> Self
    where
        M: PriceProvider + PayoutProvider + FxProvider + PortfolioProvider + 'static,
    {
        Self {
            prices: market.clone(),
            payouts: market.clone(),
            fx: market.clone(),
            portfolios: market,
        }
    }
}

impl std::fmt::Debug for MarketData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketData").finish_non_exhaustive()
    }
}
