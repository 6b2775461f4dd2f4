//! Contractual terms of a coupon-paying instrument.

use serde::{Deserialize, Serialize};

use meridian_core::calendars::WeekendAdjust;
use meridian_core::types::{Date, Frequency, IntervalUnit};

use super::coupon::{CouponRule, DiscountingConvention};
use crate::error::{BondError, BondResult};
use crate::schedule::ScheduleSpec;

/// Nominal, maturity, payment rhythm and coupon of an instrument.
///
/// ```rust
/// use meridian_bonds::cashflows::{BondTerms, DiscountingConvention};
/// use meridian_core::prelude::*;
///
/// let maturity = Date::from_ymd(2030, 6, 15).unwrap();
/// let terms = BondTerms::fixed(1_000.0, 0.045, maturity, Frequency::Quarterly)
///     .with_discounting(DiscountingConvention::Continuous);
/// assert_eq!(terms.period_year_fraction(), 0.25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Face amount redeemed at maturity.
    pub nominal: f64,
    /// Redemption date.
    pub maturity: Date,
    /// Interval units per coupon period.
    pub frequency: u32,
    /// Unit of one step.
    pub unit: IntervalUnit,
    /// Fixed day of month for coupon dates.
    pub pay_day: Option<u32>,
    /// Roll direction for non-business coupon dates.
    pub weekend_adjust: WeekendAdjust,
    /// Coupon rate source.
    pub coupon: CouponRule,
    /// Discounting applied to every flow.
    pub discounting: DiscountingConvention,
}

impl BondTerms {
    /// Terms stepping by `frequency` `unit`s, discounted per the coupon rule's default.
    pub fn new(
        nominal: f64,
        maturity: Date,
        frequency: u32,
        unit: IntervalUnit,
        coupon: CouponRule,
    ) -> Self {
        let discounting = coupon.default_discounting();
        Self {
            nominal,
            maturity,
            frequency,
            unit,
            pay_day: None,
            weekend_adjust: WeekendAdjust::default(),
            coupon,
            discounting,
        }
    }

    /// A constant-coupon bullet on a standard frequency.
    pub fn fixed(nominal: f64, coupon_rate: f64, maturity: Date, frequency: Frequency) -> Self {
        let (count, unit) = frequency.as_step();
        Self::new(nominal, maturity, count, unit, CouponRule::Constant(coupon_rate))
    }

    /// Overrides the discounting convention.
    #[must_use]
    pub fn with_discounting(mut self, discounting: DiscountingConvention) -> Self {
        self.discounting = discounting;
        self
    }

    /// Pins coupon dates to a day of month.
    #[must_use]
    pub fn with_pay_day(mut self, day: u32) -> Self {
        self.pay_day = Some(day);
        self
    }

    /// Sets the roll direction for coupon dates.
    #[must_use]
    pub fn with_weekend_adjust(mut self, adjust: WeekendAdjust) -> Self {
        self.weekend_adjust = adjust;
        self
    }

    /// Checks the nominal is finite.
    pub fn validate(&self) -> BondResult<()> {
        if !self.nominal.is_finite() {
            return Err(BondError::invalid_terms(format!(
                "nominal must be finite, got {}",
                self.nominal
            )));
        }
        if let CouponRule::Constant(rate) = self.coupon {
            if !rate.is_finite() {
                return Err(BondError::invalid_terms("coupon rate must be finite"));
            }
        }
        Ok(())
    }

    /// Year fraction of one coupon period on a 30/360 basis.
    pub fn period_year_fraction(&self) -> f64 {
        self.schedule_spec(self.maturity).period_year_fraction()
    }

    /// Schedule inputs for payments from `valuation_date` to maturity.
    pub fn schedule_spec(&self, valuation_date: Date) -> ScheduleSpec {
        let mut spec = ScheduleSpec::new(valuation_date, self.maturity, self.frequency, self.unit)
            .with_weekend_adjust(self.weekend_adjust);
        spec.pay_day = self.pay_day;
        spec
    }
}
