//! Business day calendars and conventions.
//!
//! This module provides:
//! - The [`Calendar`] trait with adjustment and stepping helpers
//! - Ordered business-day sequences for period iteration
//! - Weekend-only and explicit-holiday calendars

mod conventions;
mod holiday;

pub use conventions::{adjust, BusinessDayConvention, WeekendAdjust};
pub use holiday::HolidayCalendar;

use crate::types::Date;

/// Trait for business day calendars.
///
/// Implementations only decide which days are business days; every
/// stepping helper is derived from that.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday or weekend.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        conventions::following(date, self)
    }

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        conventions::preceding(date, self)
    }

    /// Returns the last business day strictly before the given date.
    fn prior_business_day(&self, date: Date) -> Date {
        conventions::preceding(date.add_days(-1), self)
    }

    /// Advances a date by a number of business days.
    fn add_business_days(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let mut remaining = days.unsigned_abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Business days in `[start, end]`, ascending. Empty when `start > end`.
    fn business_days(&self, start: Date, end: Date) -> Vec<Date> {
        let mut days = Vec::new();
        let mut current = start;
        while current <= end {
            if self.is_business_day(current) {
                days.push(current);
            }
            current = current.add_days(1);
        }
        days
    }
}

/// A weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}
