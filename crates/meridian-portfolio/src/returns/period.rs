//! Period aggregation of date-level results.

use std::collections::BTreeMap;

use meridian_core::Date;
use serde::Serialize;

use super::holding::HoldingDateResult;
use super::portfolio::PortfolioDateResult;

/// One holding's daily results over a period and their totals.
///
/// Cash legs are plain sums. Bps legs are weight-weighted sums of the daily
/// figures, the holding's contribution to the portfolio, and are not
/// compounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingPeriodResult {
    holding_id: String,
    start: Date,
    end: Date,
    business_days: usize,
    dates: Vec<HoldingDateResult>,
    cash_price_return: f64,
    cash_fx_return: f64,
    cash_total_return: f64,
    bps_price_return: f64,
    bps_fx_return: f64,
    bps_total_return: f64,
    av_weight: f64,
}

impl HoldingPeriodResult {
    /// Aggregates the dates a holding was held, ascending.
    ///
    /// `business_days` is the length of the whole period, so days the holding
    /// was absent count as zero weight in the average.
    pub fn from_dates(
        holding_id: impl Into<String>,
        start: Date,
        end: Date,
        business_days: usize,
        dates: Vec<HoldingDateResult>,
    ) -> Self {
        let mut cash_price_return = 0.0;
        let mut cash_fx_return = 0.0;
        let mut cash_total_return = 0.0;
        let mut bps_price_return = 0.0;
        let mut bps_fx_return = 0.0;
        let mut bps_total_return = 0.0;
        let mut weight_sum = 0.0;
        for day in &dates {
            cash_price_return += day.cash_price_return();
            cash_fx_return += day.cash_fx_return();
            cash_total_return += day.cash_total_return();
            bps_price_return += day.weight() * day.bps_price_return();
            bps_fx_return += day.weight() * day.bps_fx_return();
            bps_total_return += day.weight() * day.bps_total_return();
            weight_sum += day.weight();
        }
        let av_weight = if business_days == 0 {
            0.0
        } else {
            weight_sum / business_days as f64
        };

        Self {
            holding_id: holding_id.into(),
            start,
            end,
            business_days,
            dates,
            cash_price_return,
            cash_fx_return,
            cash_total_return,
            bps_price_return,
            bps_fx_return,
            bps_total_return,
            av_weight,
        }
    }

    /// Holding identifier.
    pub fn holding_id(&self) -> &str {
        &self.holding_id
    }

    /// First date of the period.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last date of the period.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Business days in the period.
    pub fn business_days(&self) -> usize {
        self.business_days
    }

    /// Daily results, ascending.
    pub fn dates(&self) -> &[HoldingDateResult] {
        &self.dates
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

    /// Weighted price contribution in basis points.
    pub fn bps_price_return(&self) -> f64 {
        self.bps_price_return
    }

    /// Weighted FX contribution in basis points.
    pub fn bps_fx_return(&self) -> f64 {
        self.bps_fx_return
    }

    /// Weighted total contribution in basis points.
    pub fn bps_total_return(&self) -> f64 {
        self.bps_total_return
    }

    /// Mean daily weight over every business day in the period.
    pub fn av_weight(&self) -> f64 {
        self.av_weight
    }
}

/// A portfolio's daily results over a period, with per-holding breakdowns.
///
/// Cash legs are plain sums; bps legs are plain sums of the daily portfolio
/// figures (each day weighs 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioPeriodResult {
    portfolio: String,
    start: Date,
    end: Date,
    dates: Vec<PortfolioDateResult>,
    holdings: Vec<HoldingPeriodResult>,
    cash_price_return: f64,
    cash_fx_return: f64,
    cash_total_return: f64,
    bps_price_return: f64,
    bps_fx_return: f64,
    bps_total_return: f64,
}

impl PortfolioPeriodResult {
    /// Aggregates one result per business day and regroups by holding.
    ///
    /// Dates are sorted ascending; holdings come out sorted by id.
    pub fn from_dates(
        portfolio: impl Into<String>,
        start: Date,
        end: Date,
        mut dates: Vec<PortfolioDateResult>,
    ) -> Self {
        dates.sort_by_key(PortfolioDateResult::date);
        let business_days = dates.len();

        let mut by_holding: BTreeMap<String, Vec<HoldingDateResult>> = BTreeMap::new();
        for day in &dates {
            for holding in day.holdings() {
                by_holding
                    .entry(holding.holding_id().to_string())
                    .or_default()
                    .push(holding.clone());
            }
        }
        let holdings = by_holding
            .into_iter()
            .map(|(id, series)| {
                HoldingPeriodResult::from_dates(id, start, end, business_days, series)
            })
            .collect();

        Self {
            portfolio: portfolio.into(),
            start,
            end,
            cash_price_return: dates.iter().map(PortfolioDateResult::cash_price_return).sum(),
            cash_fx_return: dates.iter().map(PortfolioDateResult::cash_fx_return).sum(),
            cash_total_return: dates.iter().map(PortfolioDateResult::cash_total_return).sum(),
            bps_price_return: dates.iter().map(PortfolioDateResult::bps_price_return).sum(),
            bps_fx_return: dates.iter().map(PortfolioDateResult::bps_fx_return).sum(),
            bps_total_return: dates.iter().map(PortfolioDateResult::bps_total_return).sum(),
            dates,
            holdings,
        }
    }

    /// Portfolio name.
    pub fn portfolio(&self) -> &str {
        &self.portfolio
    }

    /// First date of the period.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last date of the period.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Business days in the period.
    pub fn business_days(&self) -> usize {
        self.dates.len()
    }

    /// Daily portfolio results, ascending.
    pub fn dates(&self) -> &[PortfolioDateResult] {
        &self.dates
    }

    /// Per-holding period results, sorted by id.
    pub fn holdings(&self) -> &[HoldingPeriodResult] {
        &self.holdings
    }

    /// Period result for one holding.
    pub fn holding(&self, holding_id: &str) -> Option<&HoldingPeriodResult> {
        self.holdings.iter().find(|h| h.holding_id() == holding_id)
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

    /// Summed daily price return in basis points.
    pub fn bps_price_return(&self) -> f64 {
        self.bps_price_return
    }

    /// Summed daily FX return in basis points.
    pub fn bps_fx_return(&self) -> f64 {
        self.bps_fx_return
    }

    /// Summed daily total return in basis points.
    pub fn bps_total_return(&self) -> f64 {
        self.bps_total_return
    }
}
