//! Payment calendar generation.
//!
//! Payment dates are generated backward from maturity in whole steps of an
//! interval unit, optionally pinned to a fixed day of month, rolled to a
//! business day and truncated at the valuation date.
//!
//! # Example
//!
//! ```rust
//! use meridian_bonds::schedule::{PaymentCalendarGenerator, ScheduleSpec};
//! use meridian_core::prelude::*;
//!
//! let spec = ScheduleSpec::new(
//!     Date::from_ymd(2025, 1, 15).unwrap(),
//!     Date::from_ymd(2026, 1, 15).unwrap(),
//!     3,
//!     IntervalUnit::Month,
//! );
//!
//! let dates = PaymentCalendarGenerator::new(&WeekendCalendar).generate(&spec);
//! // the step landing on the valuation date is kept
//! assert_eq!(dates.len(), 5);
//! assert_eq!(dates.last(), Some(&spec.maturity));
//! ```

mod generator;

pub use generator::{PaymentCalendarGenerator, ScheduleSpec};
