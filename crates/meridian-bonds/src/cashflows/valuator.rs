//! Cash-flow valuation against a discount curve.

use meridian_core::calendars::Calendar;
use meridian_core::Date;
use meridian_curves::{DiscountCurve, DiscountCurveProvider};

use super::flow::CashFlowDate;
use super::terms::BondTerms;
use crate::error::BondResult;
use crate::schedule::PaymentCalendarGenerator;

/// Values the flows of one instrument.
///
/// For each payment date the flow is `nominal * coupon_rate(date) * period`
/// plus the nominal on maturity, where `period` is the 30/360 year fraction
/// of one schedule step. The curve rate is read at the term in days from the
/// curve's as-of date.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowValuator {
    terms: BondTerms,
}

impl CashFlowValuator {
    /// Creates a valuator for `terms`.
    pub fn new(terms: BondTerms) -> Self {
        Self { terms }
    }

    /// Creates a valuator after checking the terms.
    pub fn try_new(terms: BondTerms) -> BondResult<Self> {
        terms.validate()?;
        Ok(Self::new(terms))
    }

    /// The instrument's terms.
    pub fn terms(&self) -> &BondTerms {
        &self.terms
    }

    /// Payment dates from `as_of` to maturity.
    pub fn schedule<C: Calendar + ?Sized>(&self, as_of: Date, calendar: &C) -> Vec<Date> {
        PaymentCalendarGenerator::new(calendar).generate(&self.terms.schedule_spec(as_of))
    }

    /// Undiscounted amount paid on `date`.
    pub fn flow_on(&self, date: Date) -> f64 {
        let coupon =
            self.terms.nominal * self.terms.coupon.rate_on(date) * self.terms.period_year_fraction();
        if date == self.terms.maturity {
            coupon + self.terms.nominal
        } else {
            coupon
        }
    }

    /// One valued row per input date, in input order.
    pub fn cash_flows_for_dates(&self, dates: &[Date], curve: &DiscountCurve) -> Vec<CashFlowDate> {
        dates
            .iter()
            .map(|&date| {
                let days = date - curve.as_of_date();
                let rate = curve.term_value(days as f64);
                let flow = self.flow_on(date);
                let pv = self.terms.discounting.present_value(flow, rate, days);
                CashFlowDate::new(date, days, rate, flow, pv)
            })
            .collect()
    }

    /// Valued rows for the schedule generated from `as_of`.
    pub fn cash_flows<C: Calendar + ?Sized>(
        &self,
        as_of: Date,
        curve: &DiscountCurve,
        calendar: &C,
    ) -> Vec<CashFlowDate> {
        self.cash_flows_for_dates(&self.schedule(as_of, calendar), curve)
    }

    /// Sum of discounted flows from `as_of`; zero once past maturity.
    pub fn present_value<C: Calendar + ?Sized>(
        &self,
        as_of: Date,
        curve: &DiscountCurve,
        calendar: &C,
    ) -> f64 {
        if as_of > self.terms.maturity {
            return 0.0;
        }
        if curve.as_of_date() != as_of {
            log::debug!(
                "valuing as of {as_of} on curve {} dated {}",
                curve.curve_id(),
                curve.as_of_date()
            );
        }
        self.cash_flows(as_of, curve, calendar)
            .iter()
            .map(CashFlowDate::present_value)
            .sum()
    }

    /// Present value using the curve `curve_id` as of `as_of` from `provider`.
    ///
    /// # Errors
    ///
    /// Propagates the provider's lookup failure. A valuation date past
    /// maturity returns zero without a lookup.
    pub fn present_value_from_provider<P, C>(
        &self,
        as_of: Date,
        curve_id: &str,
        provider: &P,
        calendar: &C,
    ) -> BondResult<f64>
    where
        P: DiscountCurveProvider + ?Sized,
        C: Calendar + ?Sized,
    {
        if as_of > self.terms.maturity {
            return Ok(0.0);
        }
        let curve = provider.term_structure(as_of, curve_id)?;
        Ok(self.present_value(as_of, &curve, calendar))
    }
}
