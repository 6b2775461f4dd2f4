//! Holding-level return legs for one date.

use meridian_core::{Currency, Date};
use serde::Serialize;

use crate::providers::Payouts;

/// Basis points in one unit of return.
pub const BPS: f64 = 10_000.0;

/// `(final / initial - 1)` in basis points, or 0 when either side is zero or
/// the ratio is not finite.
pub fn bps_change(final_value: f64, initial_value: f64) -> f64 {
    if initial_value == 0.0 || final_value == 0.0 {
        return 0.0;
    }
    let bps = (final_value / initial_value - 1.0) * BPS;
    if bps.is_finite() {
        bps
    } else {
        0.0
    }
}

/// Local-currency price return of one holding over one business day.
///
/// The final price is the clean price on `date` plus every payout made on
/// `date`, so income shows up as price return. Both return legs are zero
/// when either price is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingDateReturn {
    holding_id: String,
    price_source_id: String,
    date: Date,
    date_initial: Date,
    price_initial: f64,
    price_clean: f64,
    price_final: f64,
    payout_amortization: f64,
    payout_coupon: f64,
    payout_dividend: f64,
    bps_price_return: f64,
    cash_price_return: f64,
}

impl HoldingDateReturn {
    /// Computes the return from the prices at `date_initial` and `date`.
    pub fn new(
        holding_id: impl Into<String>,
        price_source_id: impl Into<String>,
        date: Date,
        date_initial: Date,
        price_initial: f64,
        price_clean: f64,
        payouts: Payouts,
    ) -> Self {
        let price_final = price_clean + payouts.amortization + payouts.events + payouts.coupon;
        let guarded = price_initial == 0.0 || price_final == 0.0;
        let cash_price_return = if guarded {
            0.0
        } else {
            price_final - price_initial
        };

        Self {
            holding_id: holding_id.into(),
            price_source_id: price_source_id.into(),
            date,
            date_initial,
            price_initial,
            price_clean,
            price_final,
            payout_amortization: payouts.amortization,
            payout_coupon: payouts.coupon,
            payout_dividend: payouts.events,
            bps_price_return: bps_change(price_final, price_initial),
            cash_price_return,
        }
    }

    /// Holding identifier.
    pub fn holding_id(&self) -> &str {
        &self.holding_id
    }

    /// Price source the prices came from.
    pub fn price_source_id(&self) -> &str {
        &self.price_source_id
    }

    /// Date the return ends on.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Last business day before `date`.
    pub fn date_initial(&self) -> Date {
        self.date_initial
    }

    /// Clean price on `date_initial`.
    pub fn price_initial(&self) -> f64 {
        self.price_initial
    }

    /// Clean price on `date`.
    pub fn price_clean(&self) -> f64 {
        self.price_clean
    }

    /// Clean price plus payouts on `date`.
    pub fn price_final(&self) -> f64 {
        self.price_final
    }

    /// Principal repaid per unit.
    pub fn payout_amortization(&self) -> f64 {
        self.payout_amortization
    }

    /// Coupon paid per unit.
    pub fn payout_coupon(&self) -> f64 {
        self.payout_coupon
    }

    /// Dividend and event payments per unit.
    pub fn payout_dividend(&self) -> f64 {
        self.payout_dividend
    }

    /// Price return in basis points.
    pub fn bps_price_return(&self) -> f64 {
        self.bps_price_return
    }

    /// Price change per unit.
    pub fn cash_price_return(&self) -> f64 {
        self.cash_price_return
    }
}

/// A position's return in the reporting currency, split into price and FX.
///
/// Embeds the local [`HoldingDateReturn`] and converts it with the FX rate at
/// the start and end of the day. The cash legs add up to the total; the bps
/// legs do not, since the total also carries the price-times-FX cross term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingDateResult {
    #[serde(flatten)]
    local: HoldingDateReturn,
    amount: f64,
    currency: Currency,
    fx_initial: f64,
    fx_final: f64,
    price_initial_fx: f64,
    price_clean_fx: f64,
    price_final_fx: f64,
    value: f64,
    value_final: f64,
    value_close: f64,
    cash_price_return_fx: f64,
    cash_fx_return: f64,
    cash_total_return: f64,
    bps_fx_return: f64,
    bps_total_return: f64,
    weight: f64,
}

impl HoldingDateResult {
    /// Converts `local` for `amount` units held in `currency`.
    ///
    /// The weight starts at zero; it is assigned once the whole portfolio is
    /// known.
    pub fn new(
        local: HoldingDateReturn,
        amount: f64,
        currency: Currency,
        fx_initial: f64,
        fx_final: f64,
    ) -> Self {
        let value = amount * local.price_initial * fx_initial;
        let value_final = amount * local.price_final * fx_final;
        let value_close = amount * local.price_clean * fx_final;

        Self {
            amount,
            currency,
            fx_initial,
            fx_final,
            price_initial_fx: local.price_initial * fx_initial,
            price_clean_fx: local.price_clean * fx_final,
            price_final_fx: local.price_final * fx_final,
            value,
            value_final,
            value_close,
            cash_price_return_fx: amount * fx_final * local.cash_price_return,
            cash_fx_return: amount * (fx_final - fx_initial) * local.price_initial,
            cash_total_return: value_final - value,
            bps_fx_return: bps_change(fx_final, fx_initial),
            bps_total_return: bps_change(value_final, value),
            weight: 0.0,
            local,
        }
    }

    /// The local-currency return this result converts.
    pub fn local(&self) -> &HoldingDateReturn {
        &self.local
    }

    /// Holding identifier.
    pub fn holding_id(&self) -> &str {
        self.local.holding_id()
    }

    /// Date the return ends on.
    pub fn date(&self) -> Date {
        self.local.date()
    }

    /// Units held.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Currency the holding is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Reporting units per holding unit on `date_initial`.
    pub fn fx_initial(&self) -> f64 {
        self.fx_initial
    }

    /// Reporting units per holding unit on `date`.
    pub fn fx_final(&self) -> f64 {
        self.fx_final
    }

    /// Initial price in the reporting currency.
    pub fn price_initial_fx(&self) -> f64 {
        self.price_initial_fx
    }

    /// Clean price in the reporting currency.
    pub fn price_clean_fx(&self) -> f64 {
        self.price_clean_fx
    }

    /// Final price in the reporting currency.
    pub fn price_final_fx(&self) -> f64 {
        self.price_final_fx
    }

    /// Value at the start of the day.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value at the end of the day including payouts.
    pub fn value_final(&self) -> f64 {
        self.value_final
    }

    /// Value at the end of the day at the clean price.
    pub fn value_close(&self) -> f64 {
        self.value_close
    }

    /// Price change converted at the closing rate.
    pub fn cash_price_return(&self) -> f64 {
        self.cash_price_return_fx
    }

    /// Rate change applied to the initial local price.
    pub fn cash_fx_return(&self) -> f64 {
        self.cash_fx_return
    }

    /// `value_final - value`.
    pub fn cash_total_return(&self) -> f64 {
        self.cash_total_return
    }

    /// Local price return in basis points.
    pub fn bps_price_return(&self) -> f64 {
        self.local.bps_price_return()
    }

    /// Rate change in basis points.
    pub fn bps_fx_return(&self) -> f64 {
        self.bps_fx_return
    }

    /// Value change in basis points.
    pub fn bps_total_return(&self) -> f64 {
        self.bps_total_return
    }

    /// Share of the portfolio value; zero until assigned.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn local(price_initial: f64, price_clean: f64, payouts: Payouts) -> HoldingDateReturn {
        HoldingDateReturn::new(
            "BOND-A",
            "CLOSE",
            d(2025, 3, 4),
            d(2025, 3, 3),
            price_initial,
            price_clean,
            payouts,
        )
    }

    #[test]
    fn test_payouts_enter_final_price() {
        let payouts = Payouts {
            amortization: 1.0,
            coupon: 2.5,
            events: 0.5,
        };
        let r = local(100.0, 98.0, payouts);
        assert_eq!(r.price_final(), 102.0);
        assert_relative_eq!(r.bps_price_return(), 200.0, epsilon = 1e-9);
        assert_eq!(r.cash_price_return(), 2.0);
        assert_eq!(r.payout_dividend(), 0.5);
    }

    #[test]
    fn test_zero_prices_give_zero_returns() {
        let missing_initial = local(0.0, 101.0, Payouts::default());
        assert_eq!(missing_initial.bps_price_return(), 0.0);
        assert_eq!(missing_initial.cash_price_return(), 0.0);

        let missing_final = local(101.0, 0.0, Payouts::default());
        assert_eq!(missing_final.bps_price_return(), 0.0);
        assert_eq!(missing_final.cash_price_return(), 0.0);
    }

    #[test]
    fn test_bps_change_guards() {
        assert_eq!(bps_change(1.1, 0.0), 0.0);
        assert_eq!(bps_change(0.0, 1.1), 0.0);
        assert_eq!(bps_change(1.0, 1e-320), 0.0);
        assert_relative_eq!(bps_change(1.05, 1.0), 500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fx_legs_and_cross_term() {
        // price +10%, rate +10%
        let base = local(100.0, 110.0, Payouts::default());
        let result = HoldingDateResult::new(base, 10.0, Currency::EUR, 1.0, 1.1);

        assert_relative_eq!(result.value(), 1_000.0, epsilon = 1e-9);
        assert_relative_eq!(result.value_final(), 1_210.0, epsilon = 1e-9);
        assert_relative_eq!(result.cash_fx_return(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(result.cash_price_return(), 110.0, epsilon = 1e-9);
        assert_relative_eq!(
            result.cash_price_return() + result.cash_fx_return(),
            result.cash_total_return(),
            epsilon = 1e-9
        );

        assert_relative_eq!(result.bps_price_return(), 1_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.bps_fx_return(), 1_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.bps_total_return(), 2_100.0, epsilon = 1e-6);
        let legs = result.bps_price_return() + result.bps_fx_return();
        assert!((legs - result.bps_total_return()).abs() > 99.0);
        assert_eq!(result.weight(), 0.0);
    }

    #[test]
    fn test_value_close_excludes_payouts() {
        let payouts = Payouts {
            coupon: 3.0,
            ..Payouts::default()
        };
        let result =
            HoldingDateResult::new(local(100.0, 99.0, payouts), 2.0, Currency::USD, 1.0, 1.0);
        assert_eq!(result.value_close(), 198.0);
        assert_eq!(result.value_final(), 204.0);
        assert_eq!(result.price_final_fx(), 102.0);
    }

    #[test]
    fn test_serializes_flat() {
        let base = local(100.0, 101.0, Payouts::default());
        let result = HoldingDateResult::new(base, 1.0, Currency::USD, 1.0, 1.0);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["holding_id"], "BOND-A");
        assert_eq!(json["date_initial"], "2025-03-03");
        assert_eq!(json["currency"], "USD");
        assert!(json.get("local").is_none());
        assert!(json.get("bps_total_return").is_some());
    }
}
