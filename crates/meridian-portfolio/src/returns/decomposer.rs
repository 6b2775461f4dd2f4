//! Return decomposition driven by market data providers.

use std::sync::Arc;

use meridian_core::calendars::Calendar;
use meridian_core::Date;

use super::holding::{HoldingDateResult, HoldingDateReturn};
use super::period::{HoldingPeriodResult, PortfolioPeriodResult};
use super::portfolio::PortfolioDateResult;
use crate::config::ReturnConfig;
use crate::context::CalculationContext;
use crate::error::{PortfolioError, PortfolioResult};
use crate::parallel::maybe_parallel_map;
use crate::providers::{
    FxProvider, MarketData, PayoutProvider, Payouts, PortfolioProvider, PriceProvider,
};
use crate::types::PortfolioPosition;

/// Builds holding, portfolio and period returns from market data.
///
/// Each day runs from the last business day before it (`date_initial`) to
/// the day itself. Holding returns are cached in the decomposer's
/// [`CalculationContext`] by holding, price source and date.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use meridian_core::prelude::*;
/// use meridian_portfolio::prelude::*;
/// use rust_decimal::Decimal;
///
/// let mon = Date::from_ymd(2025, 3, 3).unwrap();
/// let tue = Date::from_ymd(2025, 3, 4).unwrap();
/// let market = InMemoryMarketData::new()
///     .with_price("CLOSE", "BOND-A", mon, 100.0)
///     .with_price("CLOSE", "BOND-A", tue, 101.0)
///     .with_portfolio(
///         PortfolioSnapshot::new("CORE", mon)
///             .with_position(PortfolioPosition::new("BOND-A", Decimal::from(10), Currency::USD)),
///     );
///
/// let decomposer = ReturnDecomposer::new(
///     MarketData::from_shared(Arc::new(market)),
///     Arc::new(WeekendCalendar),
///     ReturnConfig::sequential(),
/// )
/// .unwrap();
///
/// let day = decomposer.portfolio_date_result("CORE", tue).unwrap();
/// assert_eq!(day.value(), 1_000.0);
/// assert_eq!(day.cash_total_return(), 10.0);
/// ```
pub struct ReturnDecomposer {
    market: MarketData,
    calendar: Arc<dyn Calendar>,
    config: ReturnConfig,
    context: CalculationContext,
}

impl ReturnDecomposer {
    /// Creates a decomposer with a fresh calculation context.
    pub fn new(
        market: MarketData,
        calendar: Arc<dyn Calendar>,
        config: ReturnConfig,
    ) -> PortfolioResult<Self> {
        config.validate()?;
        Ok(Self {
            market,
            calendar,
            config,
            context: CalculationContext::new(),
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &ReturnConfig {
        &self.config
    }

    /// The business-day calendar.
    pub fn calendar(&self) -> &dyn Calendar {
        self.calendar.as_ref()
    }

    /// The memo tables of this run.
    pub fn context(&self) -> &CalculationContext {
        &self.context
    }

    /// Local price return of `holding_id` ending on `date`.
    ///
    /// Missing prices and payouts read as zero, which zeroes the return legs.
    pub fn holding_date_return(&self, holding_id: &str, date: Date) -> HoldingDateReturn {
        let source = &self.config.price_source_id;
        let key = (holding_id.to_string(), source.clone(), date);
        self.context.holding_return(key, || {
            let prices = &self.market.prices;
            let payouts = &self.market.payouts;

            let date_initial = self.calendar.prior_business_day(date);
            let price_initial = prices.clean_price(holding_id, date_initial, source);
            let price_clean = prices.clean_price(holding_id, date, source);
            let paid = Payouts {
                amortization: payouts.payout_by_amortization(holding_id, date, price_clean),
                coupon: payouts.payout_by_coupon(holding_id, date, price_clean),
                events: payouts.payout_by_events(holding_id, date, price_clean),
            };
            if price_initial == 0.0 || price_clean == 0.0 {
                log::debug!(
                    "{holding_id} on {date}: price {price_initial} -> {price_clean}, legs zeroed"
                );
            }
            HoldingDateReturn::new(
                holding_id,
                source.as_str(),
                date,
                date_initial,
                price_initial,
                price_clean,
                paid,
            )
        })
    }

    /// Reporting-currency result for one position on `date`, unweighted.
    pub fn holding_date_result(
        &self,
        position: &PortfolioPosition,
        date: Date,
    ) -> HoldingDateResult {
        let local = self.holding_date_return(&position.holding_id, date);
        let reporting = self.config.reporting_currency;
        let fx_initial = self
            .market
            .fx
            .rate(position.currency, reporting, local.date_initial());
        let fx_final = self.market.fx.rate(position.currency, reporting, date);
        HoldingDateResult::new(
            local,
            position.amount_f64(),
            position.currency,
            fx_initial,
            fx_final,
        )
    }

    /// Every holding of portfolio `name` on `date`, weighted.
    ///
    /// The composition is the one effective at the prior business day.
    ///
    /// # Errors
    ///
    /// Propagates the portfolio provider's lookup failure.
    pub fn portfolio_date_result(
        &self,
        name: &str,
        date: Date,
    ) -> PortfolioResult<PortfolioDateResult> {
        let date_initial = self.calendar.prior_business_day(date);
        let snapshot = self.market.portfolios.portfolio(date_initial, name)?;

        let holdings = snapshot
            .positions
            .iter()
            .map(|position| self.holding_date_result(position, date))
            .collect();

        Ok(PortfolioDateResult::from_holdings(
            name,
            date,
            date_initial,
            self.config.reporting_currency,
            holdings,
        ))
    }

    /// One portfolio result per business day in `[start, end]`.
    ///
    /// Dates run in parallel when the config allows it; the output is
    /// ascending either way.
    ///
    /// # Errors
    ///
    /// `InvalidPeriod` when `start > end`, or the first lookup failure.
    pub fn portfolio_period_result(
        &self,
        name: &str,
        start: Date,
        end: Date,
    ) -> PortfolioResult<PortfolioPeriodResult> {
        if start > end {
            return Err(PortfolioError::InvalidPeriod { start, end });
        }
        let days = self.calendar.business_days(start, end);
        log::debug!(
            "decomposing {name} over {} business days from {start} to {end}",
            days.len()
        );

        let dates = maybe_parallel_map(&days, &self.config, |&date| {
            self.portfolio_date_result(name, date)
        })
        .into_iter()
        .collect::<PortfolioResult<Vec<_>>>()?;

        Ok(PortfolioPeriodResult::from_dates(name, start, end, dates))
    }

    /// Period result of one holding within portfolio `name`.
    ///
    /// # Errors
    ///
    /// As for [`portfolio_period_result`](Self::portfolio_period_result),
    /// plus `HoldingNotFound` when the holding is never held in the period.
    pub fn holding_period_result(
        &self,
        name: &str,
        holding_id: &str,
        start: Date,
        end: Date,
    ) -> PortfolioResult<HoldingPeriodResult> {
        let period = self.portfolio_period_result(name, start, end)?;
        period
            .holding(holding_id)
            .cloned()
            .ok_or_else(|| PortfolioError::HoldingNotFound {
                holding_id: holding_id.to_string(),
                portfolio: name.to_string(),
                start,
                end,
            })
    }
}

impl std::fmt::Debug for ReturnDecomposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReturnDecomposer")
            .field("calendar", &self.calendar.name())
            .field("config", &self.config)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::InMemoryMarketData;
    use crate::types::PortfolioSnapshot;
    use approx::assert_relative_eq;
    use meridian_core::calendars::WeekendCalendar;
    use meridian_core::Currency;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn market() -> InMemoryMarketData {
        // Friday, Monday, Tuesday
        let (fri, mon, tue) = (d(2025, 2, 28), d(2025, 3, 3), d(2025, 3, 4));
        InMemoryMarketData::new()
            .with_price("CLOSE", "UST", fri, 100.0)
            .with_price("CLOSE", "UST", mon, 100.5)
            .with_price("CLOSE", "UST", tue, 100.0)
            .with_price("CLOSE", "BUND", fri, 98.0)
            .with_price("CLOSE", "BUND", mon, 98.0)
            .with_price("CLOSE", "BUND", tue, 97.0)
            .with_payouts(
                "BUND",
                tue,
                Payouts {
                    coupon: 1.5,
                    ..Payouts::default()
                },
            )
            .with_fx_rate(Currency::EUR, Currency::USD, fri, 1.05)
            .with_fx_rate(Currency::EUR, Currency::USD, mon, 1.06)
            .with_fx_rate(Currency::EUR, Currency::USD, tue, 1.04)
            .with_portfolio(
                PortfolioSnapshot::new("GLOBAL", fri)
                    .with_position(PortfolioPosition::new("UST", dec!(100), Currency::USD))
                    .with_position(PortfolioPosition::new("BUND", dec!(50), Currency::EUR)),
            )
    }

    fn decomposer(market: InMemoryMarketData) -> ReturnDecomposer {
        ReturnDecomposer::new(
            MarketData::from_shared(Arc::new(market)),
            Arc::new(WeekendCalendar),
            ReturnConfig::sequential(),
        )
        .unwrap()
    }

    #[test]
    fn test_holding_return_spans_weekend() {
        let r = decomposer(market()).holding_date_return("UST", d(2025, 3, 3));
        assert_eq!(r.date_initial(), d(2025, 2, 28));
        assert_eq!(r.price_initial(), 100.0);
        assert_relative_eq!(r.bps_price_return(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_coupon_enters_price_return() {
        let r = decomposer(market()).holding_date_return("BUND", d(2025, 3, 4));
        assert_eq!(r.price_final(), 98.5);
        assert_eq!(r.payout_coupon(), 1.5);
        assert_relative_eq!(r.cash_price_return(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_price_zeroes_returns() {
        let r = decomposer(market()).holding_date_return("UST", d(2025, 3, 5));
        assert_eq!(r.price_clean(), 0.0);
        assert_eq!(r.bps_price_return(), 0.0);
        assert_eq!(r.cash_price_return(), 0.0);
    }

    #[test]
    fn test_fx_converts_to_reporting_currency() {
        let engine = decomposer(market());
        let position = PortfolioPosition::new("BUND", dec!(50), Currency::EUR);
        let r = engine.holding_date_result(&position, d(2025, 3, 4));

        assert_eq!(r.fx_initial(), 1.06);
        assert_eq!(r.fx_final(), 1.04);
        assert_relative_eq!(r.value(), 50.0 * 98.0 * 1.06, epsilon = 1e-9);
        assert_relative_eq!(r.cash_fx_return(), 50.0 * (1.04 - 1.06) * 98.0, epsilon = 1e-9);
        assert_relative_eq!(r.cash_price_return(), 50.0 * 1.04 * 0.5, epsilon = 1e-9);
        assert_relative_eq!(
            r.cash_fx_return() + r.cash_price_return(),
            r.cash_total_return(),
            epsilon = 1e-9
        );

        let usd = PortfolioPosition::new("UST", dec!(1), Currency::USD);
        let r = engine.holding_date_result(&usd, d(2025, 3, 4));
        assert_eq!(r.fx_initial(), 1.0);
        assert_eq!(r.bps_fx_return(), 0.0);
    }

    #[test]
    fn test_portfolio_date_result() {
        let day = decomposer(market())
            .portfolio_date_result("GLOBAL", d(2025, 3, 4))
            .unwrap();

        assert_eq!(day.date_initial(), d(2025, 3, 3));
        assert_eq!(day.holdings().len(), 2);
        let value: f64 = day.holdings().iter().map(HoldingDateResult::value).sum();
        assert_eq!(day.value(), value);
        assert_relative_eq!(day.weight_sum(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(day.value(), 100.0 * 100.5 + 50.0 * 98.0 * 1.06, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_portfolio_is_an_error() {
        let err = decomposer(market())
            .portfolio_date_result("NONE", d(2025, 3, 4))
            .unwrap_err();
        assert_eq!(err, PortfolioError::portfolio_not_found("NONE", d(2025, 3, 3)));
    }

    #[test]
    fn test_period_over_business_days() {
        let engine = decomposer(market());
        // Saturday to Tuesday: Monday and Tuesday
        let period = engine
            .portfolio_period_result("GLOBAL", d(2025, 3, 1), d(2025, 3, 4))
            .unwrap();
        assert_eq!(period.business_days(), 2);
        assert_eq!(period.dates()[0].date(), d(2025, 3, 3));

        let daily: f64 = period
            .dates()
            .iter()
            .map(PortfolioDateResult::cash_total_return)
            .sum();
        assert_relative_eq!(period.cash_total_return(), daily, epsilon = 1e-9);

        let bund = engine
            .holding_period_result("GLOBAL", "BUND", d(2025, 3, 1), d(2025, 3, 4))
            .unwrap();
        assert_eq!(bund.dates().len(), 2);
        assert!(bund.av_weight() > 0.0 && bund.av_weight() < 1.0);

        assert!(matches!(
            engine.holding_period_result("GLOBAL", "GILT", d(2025, 3, 1), d(2025, 3, 4)),
            Err(PortfolioError::HoldingNotFound { .. })
        ));
        assert!(matches!(
            engine.portfolio_period_result("GLOBAL", d(2025, 3, 4), d(2025, 3, 1)),
            Err(PortfolioError::InvalidPeriod { .. })
        ));
    }

    struct CountingPrices {
        inner: InMemoryMarketData,
        calls: AtomicUsize,
    }

    impl PriceProvider for CountingPrices {
        fn clean_price(&self, holding_id: &str, date: Date, source_id: &str) -> f64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.clean_price(holding_id, date, source_id)
        }
    }

    #[test]
    fn test_holding_returns_are_cached() {
        let shared = Arc::new(market());
        let prices = Arc::new(CountingPrices {
            inner: market(),
            calls: AtomicUsize::new(0),
        });
        let data = MarketData::new(
            prices.clone(),
            shared.clone(),
            shared.clone(),
            shared,
        );
        let engine =
            ReturnDecomposer::new(data, Arc::new(WeekendCalendar), ReturnConfig::sequential())
                .unwrap();

        engine.portfolio_date_result("GLOBAL", d(2025, 3, 4)).unwrap();
        engine.portfolio_date_result("GLOBAL", d(2025, 3, 4)).unwrap();
        // two prices per holding, fetched once
        assert_eq!(prices.calls.load(Ordering::SeqCst), 4);
        assert_eq!(engine.context().cached_returns(), 2);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = ReturnDecomposer::new(
            MarketData::from_shared(Arc::new(market())),
            Arc::new(WeekendCalendar),
            ReturnConfig::new().with_price_source(""),
        );
        assert!(result.is_err());
    }
}
