//! Cash-flow generation and curve-based present value.
//!
//! A [`CashFlowValuator`] turns [`BondTerms`] plus a payment calendar into
//! [`CashFlowDate`] rows: coupon (and redemption at maturity) for each date,
//! the curve rate at the flow's term and its present value under the chosen
//! [`DiscountingConvention`].

mod coupon;
mod flow;
mod terms;
mod valuator;

pub use coupon::{CouponRule, DiscountingConvention};
pub use flow::CashFlowDate;
pub use terms::BondTerms;
pub use valuator::CashFlowValuator;
