//! # Meridian Bonds
//!
//! Payment calendars and curve-based cash-flow valuation for fixed-income
//! instruments.
//!
//! - [`schedule`]: backward payment-date generation from maturity
//! - [`cashflows`]: coupon rules, discounting conventions and the
//!   [`CashFlowValuator`](cashflows::CashFlowValuator)
//!
//! ## Example
//!
//! ```rust
//! use meridian_bonds::prelude::*;
//! use meridian_core::prelude::*;
//! use meridian_curves::DiscountCurve;
//!
//! let as_of = Date::from_ymd(2025, 1, 2).unwrap();
//! let terms = BondTerms::fixed(100.0, 0.08, as_of.add_days(180), Frequency::SemiAnnual);
//! let curve = DiscountCurve::flat(as_of, "FLAT", 0.05);
//!
//! let pv = CashFlowValuator::new(terms).present_value(as_of, &curve, &WeekendCalendar);
//! assert!((pv - 104.0 / 1.05_f64.sqrt()).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod cashflows;
pub mod error;
pub mod schedule;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{
        BondTerms, CashFlowDate, CashFlowValuator, CouponRule, DiscountingConvention,
    };
    pub use crate::error::{BondError, BondResult};
    pub use crate::schedule::{PaymentCalendarGenerator, ScheduleSpec};
}

pub use error::{BondError, BondResult};
