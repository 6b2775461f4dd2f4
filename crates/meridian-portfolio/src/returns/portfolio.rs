//! Portfolio-level return for one date.

use meridian_core::{Currency, Date};
use serde::Serialize;

use super::holding::HoldingDateResult;

/// The holdings of a portfolio on one date and their aggregate return.
///
/// Values and cash legs are sums over holdings. Each holding is weighted by
/// its share of the start-of-day value, and the bps legs are the
/// weight-weighted sums of the holding bps legs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioDateResult {
    portfolio: String,
    date: Date,
    date_initial: Date,
    reporting_currency: Currency,
    holdings: Vec<HoldingDateResult>,
    value: f64,
    value_final: f64,
    value_close: f64,
    cash_price_return: f64,
    cash_fx_return: f64,
    cash_total_return: f64,
    bps_price_return: f64,
    bps_fx_return: f64,
    bps_total_return: f64,
}

impl PortfolioDateResult {
    /// Aggregates fully computed holding results.
    ///
    /// Weights are assigned only after every holding has been summed. When
    /// the total value is zero every weight stays zero.
    pub fn from_holdings(
        portfolio: impl Into<String>,
        date: Date,
        date_initial: Date,
        reporting_currency: Currency,
        mut holdings: Vec<HoldingDateResult>,
    ) -> Self {
        let portfolio = portfolio.into();

        let mut value = 0.0;
        let mut value_final = 0.0;
        let mut value_close = 0.0;
        let mut cash_price_return = 0.0;
        let mut cash_fx_return = 0.0;
        let mut cash_total_return = 0.0;
        for holding in &holdings {
            value += holding.value();
            value_final += holding.value_final();
            value_close += holding.value_close();
            cash_price_return += holding.cash_price_return();
            cash_fx_return += holding.cash_fx_return();
            cash_total_return += holding.cash_total_return();
        }

        if value == 0.0 && !holdings.is_empty() {
            log::warn!("portfolio {portfolio} has zero value on {date_initial}, weights left at 0");
        }

        let mut bps_price_return = 0.0;
        let mut bps_fx_return = 0.0;
        let mut bps_total_return = 0.0;
        for holding in &mut holdings {
            let weight = if value == 0.0 {
                0.0
            } else {
                holding.value() / value
            };
            holding.set_weight(weight);
            bps_price_return += weight * holding.bps_price_return();
            bps_fx_return += weight * holding.bps_fx_return();
            bps_total_return += weight * holding.bps_total_return();
        }

        Self {
            portfolio,
            date,
            date_initial,
            reporting_currency,
            holdings,
            value,
            value_final,
            value_close,
            cash_price_return,
            cash_fx_return,
            cash_total_return,
            bps_price_return,
            bps_fx_return,
            bps_total_return,
        }
    }

    /// Portfolio name.
    pub fn portfolio(&self) -> &str {
        &self.portfolio
    }

    /// Date the return ends on.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Date the composition and initial prices are taken from.
    pub fn date_initial(&self) -> Date {
        self.date_initial
    }

    /// Currency of every value.
    pub fn reporting_currency(&self) -> Currency {
        self.reporting_currency
    }

    /// Per-holding results with weights assigned.
    pub fn holdings(&self) -> &[HoldingDateResult] {
        &self.holdings
    }

    /// Result for one holding.
    pub fn holding(&self, holding_id: &str) -> Option<&HoldingDateResult> {
        self.holdings.iter().find(|h| h.holding_id() == holding_id)
    }

    /// Sum of holding weights: 1 for a portfolio with value, else 0.
    pub fn weight_sum(&self) -> f64 {
        self.holdings.iter().map(HoldingDateResult::weight).sum()
    }

    /// Start-of-day value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// End-of-day value including payouts.
    pub fn value_final(&self) -> f64 {
        self.value_final
    }

    /// End-of-day value at clean prices.
    pub fn value_close(&self) -> f64 {
        self.value_close
    }

    /// Summed price leg.
    pub fn cash_price_return(&self) -> f64 {
        self.cash_price_return
    }

    /// Summed FX leg.
    pub fn cash_fx_return(&self) -> f64 {
        self.cash_fx_return
    }

    /// Summed total.
    pub fn cash_total_return(&self) -> f64 {
        self.cash_total_return
    }

    /// Weighted price return in basis points.
    pub fn bps_price_return(&self) -> f64 {
        self.bps_price_return
    }

    /// Weighted FX return in basis points.
    pub fn bps_fx_return(&self) -> f64 {
        self.bps_fx_return
    }

    /// Weighted total return in basis points.
    pub fn bps_total_return(&self) -> f64 {
        self.bps_total_return
    }
}
