//! Calendar built from an explicit holiday list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::types::Date;

/// Weekends plus an explicit set of holiday dates.
///
/// Holiday data comes from outside the engine (a reference data table or a
/// config file), so the calendar is plain data and deserialises directly.
///
/// ```rust
/// use meridian_core::calendars::{Calendar, HolidayCalendar};
/// use meridian_core::types::Date;
///
/// let xmas = Date::from_ymd(2025, 12, 25).unwrap();
/// let cal = HolidayCalendar::new("Desk", [xmas]);
/// assert!(!cal.is_business_day(xmas));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl HolidayCalendar {
    /// Creates a calendar from a name and holiday dates.
    pub fn new(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Adds a holiday.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Number of explicit holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.holidays.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::BusinessDayConvention;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_holiday_rolls() {
        // Thursday 25 Dec and Friday 26 Dec 2025 both closed
        let cal = HolidayCalendar::new("UK-ish", [d(2025, 12, 25), d(2025, 12, 26)]);

        assert_eq!(cal.name(), "UK-ish");
        assert_eq!(
            cal.adjust(d(2025, 12, 25), BusinessDayConvention::Following),
            d(2025, 12, 29)
        );
        assert_eq!(
            cal.adjust(d(2025, 12, 26), BusinessDayConvention::Preceding),
            d(2025, 12, 24)
        );
        assert_eq!(cal.prior_business_day(d(2025, 12, 29)), d(2025, 12, 24));
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{"name":"Desk","holidays":["2025-01-01","2025-12-25"]}"#;
        let cal: HolidayCalendar = serde_json::from_str(json).unwrap();
        assert_eq!(cal.holiday_count(), 2);
        assert!(!cal.is_business_day(d(2025, 1, 1)));
        assert!(cal.is_business_day(d(2025, 1, 2)));
    }
}
