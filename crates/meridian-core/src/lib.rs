//! # Meridian Core
//!
//! Core types and primitives shared by every Meridian crate.
//!
//! - **Types**: `Date`, `Currency`, `IntervalUnit`, `Frequency`
//! - **Business Day Calendars**: weekend and holiday calendars with
//!   adjustment conventions and ordered business-day sequences
//! - **Caching**: [`MemoCache`], a get-or-compute map that computes each key
//!   at most once, even when shared between threads
//!
//! ## Example
//!
//! ```rust
//! use meridian_core::prelude::*;
//!
//! let cal = WeekendCalendar;
//! let saturday = Date::from_ymd(2025, 1, 4).unwrap();
//! let monday = cal.adjust(saturday, BusinessDayConvention::Following);
//! assert_eq!(monday, Date::from_ymd(2025, 1, 6).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]

pub mod cache;
pub mod calendars;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cache::MemoCache;
    pub use crate::calendars::{
        BusinessDayConvention, Calendar, HolidayCalendar, WeekendAdjust, WeekendCalendar,
    };
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Currency, Date, Frequency, IntervalUnit};
}

// Re-export commonly used types at crate root
pub use cache::MemoCache;
pub use error::{CoreError, CoreResult};
pub use types::{Currency, Date, Frequency, IntervalUnit};
