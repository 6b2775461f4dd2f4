//! Static in-memory market data.

use std::collections::{BTreeMap, HashMap};

use meridian_core::{Currency, Date};
use serde::{Deserialize, Serialize};

use super::{FxProvider, PayoutProvider, PortfolioProvider, PriceProvider};
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::PortfolioSnapshot;

/// Per-unit payouts of one holding on one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Payouts {
    /// Principal repaid.
    pub amortization: f64,
    /// Coupon paid.
    pub coupon: f64,
    /// Dividends and corporate-event payments.
    pub events: f64,
}

/// Prices, payouts, FX rates and compositions held in maps.
///
/// Prices, payouts and rates are looked up on the exact date. Compositions
/// are effective from their date until the next snapshot. FX rates are
/// stored per direction; a missing direction falls back to the inverse of
/// the opposite one.
///
/// ```rust
/// use meridian_core::{Currency, Date};
/// use meridian_portfolio::providers::{FxProvider, InMemoryMarketData, PriceProvider};
///
/// let date = Date::from_ymd(2025, 3, 3).unwrap();
/// let market = InMemoryMarketData::new()
///     .with_price("CLOSE", "BOND-A", date, 101.5)
///     .with_fx_rate(Currency::EUR, Currency::USD, date, 1.08);
///
/// assert_eq!(market.clean_price("BOND-A", date, "CLOSE"), 101.5);
/// assert_eq!(market.clean_price("BOND-A", date, "BID"), 0.0);
/// assert_eq!(market.convert(Currency::EUR, Currency::USD, date, 100.0), 108.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketData {
    prices: HashMap<(String, String, Date), f64>,
    payouts: HashMap<(String, Date), Payouts>,
    fx_rates: HashMap<(Currency, Currency, Date), f64>,
    portfolios: HashMap<String, BTreeMap<Date, PortfolioSnapshot>>,
}

impl InMemoryMarketData {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clean price (builder style).
    #[must_use]
    pub fn with_price(
        mut self,
        source_id: impl Into<String>,
        holding_id: impl Into<String>,
        date: Date,
        price: f64,
    ) -> Self {
        self.insert_price(source_id, holding_id, date, price);
        self
    }

    /// Adds the payouts of a holding on a date (builder style).
    #[must_use]
    pub fn with_payouts(
        mut self,
        holding_id: impl Into<String>,
        date: Date,
        payouts: Payouts,
    ) -> Self {
        self.payouts.insert((holding_id.into(), date), payouts);
        self
    }

    /// Adds a rate quoted as units of `to` per unit of `from` (builder style).
    #[must_use]
    pub fn with_fx_rate(mut self, from: Currency, to: Currency, date: Date, rate: f64) -> Self {
        self.fx_rates.insert((from, to, date), rate);
        self
    }

    /// Adds a composition (builder style).
    #[must_use]
    pub fn with_portfolio(mut self, snapshot: PortfolioSnapshot) -> Self {
        self.insert_portfolio(snapshot);
        self
    }

    /// Adds or replaces a clean price.
    pub fn insert_price(
        &mut self,
        source_id: impl Into<String>,
        holding_id: impl Into<String>,
        date: Date,
        price: f64,
    ) {
        self.prices
            .insert((source_id.into(), holding_id.into(), date), price);
    }

    /// Adds or replaces the composition of a portfolio on its date.
    pub fn insert_portfolio(&mut self, snapshot: PortfolioSnapshot) {
        self.portfolios
            .entry(snapshot.name.clone())
            .or_default()
            .insert(snapshot.date, snapshot);
    }

    fn payouts_on(&self, holding_id: &str, date: Date) -> Payouts {
        self.payouts
            .get(&(holding_id.to_string(), date))
            .copied()
            .unwrap_or_default()
    }
}

impl PriceProvider for InMemoryMarketData {
    fn clean_price(&self, holding_id: &str, date: Date, source_id: &str) -> f64 {
        let key = (source_id.to_string(), holding_id.to_string(), date);
        match self.prices.get(&key) {
            Some(&price) => price,
            None => {
                log::debug!("no {source_id} price for {holding_id} on {date}");
                0.0
            }
        }
    }
}

impl PayoutProvider for InMemoryMarketData {
    fn payout_by_amortization(&self, holding_id: &str, date: Date, _price: f64) -> f64 {
        self.payouts_on(holding_id, date).amortization
    }

    fn payout_by_coupon(&self, holding_id: &str, date: Date, _price: f64) -> f64 {
        self.payouts_on(holding_id, date).coupon
    }

    fn payout_by_events(&self, holding_id: &str, date: Date, _price: f64) -> f64 {
        self.payouts_on(holding_id, date).events
    }
}

impl FxProvider for InMemoryMarketData {
    fn convert(&self, from: Currency, to: Currency, date: Date, amount: f64) -> f64 {
        if from == to {
            return amount;
        }
        if let Some(rate) = self.fx_rates.get(&(from, to, date)) {
            return amount * rate;
        }
        match self.fx_rates.get(&(to, from, date)) {
            Some(&inverse) if inverse != 0.0 => amount / inverse,
            _ => {
                log::warn!("no {from}/{to} rate on {date}");
                0.0
            }
        }
    }
}

impl PortfolioProvider for InMemoryMarketData {
    fn portfolio(&self, date: Date, name: &str) -> PortfolioResult<PortfolioSnapshot> {
        self.portfolios
            .get(name)
            .and_then(|history| history.range(..=date).next_back())
            .map(|(_, snapshot)| snapshot.clone())
            .ok_or_else(|| PortfolioError::portfolio_not_found(name, date))
    }
}
