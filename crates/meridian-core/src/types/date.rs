//! Date type for financial calculations.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

use crate::error::{CoreError, CoreResult};

/// A calendar date.
///
/// Newtype over `chrono::NaiveDate` with the month arithmetic and day
/// pinning used by schedule generation.
///
/// # Example
///
/// ```rust
/// use meridian_core::types::Date;
///
/// let date = Date::from_ymd(2025, 8, 31).unwrap();
/// let earlier = date.add_months(-6).unwrap();
/// assert_eq!(earlier, Date::from_ymd(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date (YYYY-MM-DD).
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the number of days in the date's month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a (possibly negative) number of days.
    ///
    /// # Panics
    ///
    /// When the result leaves chrono's date range; see [`Date::checked_add_days`].
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a (possibly negative) number of days, `None` on overflow.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        let moved = if days >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        moved.map(Date)
    }

    /// Adds a (possibly negative) number of weeks.
    #[must_use]
    pub fn add_weeks(&self, weeks: i64) -> Self {
        self.add_days(weeks * 7)
    }

    /// Adds a (possibly negative) number of weeks, `None` on overflow.
    pub fn checked_add_weeks(&self, weeks: i64) -> Option<Self> {
        self.checked_add_days(weeks.checked_mul(7)?)
    }

    /// Adds a (possibly negative) number of months.
    ///
    /// The day is clamped to the last day of the target month, so
    /// Aug 31 - 6 months is Feb 28 (or 29).
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = self
            .year()
            .checked_mul(12)
            .and_then(|m| m.checked_add(self.month() as i32 - 1))
            .and_then(|m| m.checked_add(months))
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {months} months")))?;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let new_day = self.day().min(days_in_month(new_year, new_month));
        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a (possibly negative) number of years, clamping Feb 29.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        let new_year = self
            .year()
            .checked_add(years)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {years} years")))?;
        let new_day = self.day().min(days_in_month(new_year, self.month()));
        Self::from_ymd(new_year, self.month(), new_day)
    }

    /// Returns the same year and month with the day-of-month replaced.
    ///
    /// Days beyond the end of the month are clamped to the last day.
    #[must_use]
    pub fn with_day_clamped(&self, day: u32) -> Self {
        let day = day.clamp(1, self.days_in_month());
        Date(
            NaiveDate::from_ymd_opt(self.year(), self.month(), day)
                .unwrap_or(self.0),
        )
    }

    /// Calendar days from `self` to `other` (positive if `other` is later).
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day of week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// True on Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        _ => 28,
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

/// `a - b` is the number of calendar days from `b` to `a`.
impl Sub for Date {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        (self.0 - rhs.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
