//! Coupon rules and discounting conventions.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use meridian_core::Date;

use crate::error::BondError;

/// Source of the coupon rate paid on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CouponRule {
    /// The same annual rate on every payment date.
    Constant(f64),
    /// Annual rate looked up per payment date; missing dates pay nothing.
    Calendar(BTreeMap<Date, f64>),
}

impl CouponRule {
    /// Annual coupon rate for a payment on `date`.
    pub fn rate_on(&self, date: Date) -> f64 {
        match self {
            CouponRule::Constant(rate) => *rate,
            CouponRule::Calendar(rates) => rates.get(&date).copied().unwrap_or(0.0),
        }
    }

    /// Discounting used with this rule unless overridden.
    pub fn default_discounting(&self) -> DiscountingConvention {
        match self {
            CouponRule::Constant(_) => DiscountingConvention::Compound,
            CouponRule::Calendar(_) => DiscountingConvention::Continuous,
        }
    }
}

/// How a curve rate turns a future flow into a present value.
///
/// Both use an actual/360 time in years, `t = days / 360`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DiscountingConvention {
    /// `flow / (1 + r)^t`
    #[default]
    Compound,
    /// `flow * exp(-r t)`
    Continuous,
}

impl DiscountingConvention {
    /// Present value of `flow` paid `days` from the curve date at `rate`.
    pub fn present_value(&self, flow: f64, rate: f64, days: i64) -> f64 {
        let t = days as f64 / 360.0;
        match self {
            DiscountingConvention::Compound => flow / (1.0 + rate).powf(t),
            DiscountingConvention::Continuous => flow * (-rate * t).exp(),
        }
    }
}

impl fmt::Display for DiscountingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiscountingConvention::Compound => "Compound",
            DiscountingConvention::Continuous => "Continuous",
        };
        write!(f, "{name}")
    }
}

impl FromStr for DiscountingConvention {
    type Err = BondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compound" | "annual" => Ok(DiscountingConvention::Compound),
            "continuous" => Ok(DiscountingConvention::Continuous),
            _ => Err(BondError::UnknownConvention { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coupon_lookup() {
        let d1 = Date::from_ymd(2025, 6, 30).unwrap();
        let d2 = Date::from_ymd(2025, 12, 31).unwrap();
        let rule = CouponRule::Calendar(BTreeMap::from([(d1, 0.045)]));
        assert_eq!(rule.rate_on(d1), 0.045);
        assert_eq!(rule.rate_on(d2), 0.0);
        assert_eq!(CouponRule::Constant(0.05).rate_on(d2), 0.05);
    }

    #[test]
    fn test_default_discounting_follows_rule() {
        assert_eq!(
            CouponRule::Constant(0.05).default_discounting(),
            DiscountingConvention::Compound
        );
        assert_eq!(
            CouponRule::Calendar(BTreeMap::new()).default_discounting(),
            DiscountingConvention::Continuous
        );
    }

    #[test]
    fn test_conventions() {
        assert_relative_eq!(
            DiscountingConvention::Compound.present_value(104.0, 0.05, 180),
            104.0 / 1.05_f64.sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            DiscountingConvention::Continuous.present_value(104.0, 0.05, 180),
            104.0 * (-0.025_f64).exp(),
            epsilon = 1e-12
        );
        // no time, no discounting
        assert_eq!(DiscountingConvention::Compound.present_value(5.0, 0.07, 0), 5.0);
    }

    #[test]
    fn test_parse_by_name() {
        assert_eq!(
            "Continuous".parse::<DiscountingConvention>().unwrap(),
            DiscountingConvention::Continuous
        );
        assert_eq!(
            " compound ".parse::<DiscountingConvention>().unwrap(),
            DiscountingConvention::Compound
        );
        assert!("simple".parse::<DiscountingConvention>().is_err());
        assert_eq!(DiscountingConvention::Continuous.to_string(), "Continuous");
    }
}
