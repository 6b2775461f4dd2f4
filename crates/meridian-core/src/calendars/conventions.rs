//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::types::Date;

/// How a date falling on a non-business day is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,

    /// Move to the following business day.
    #[default]
    Following,

    /// Following, unless that crosses a month boundary, then preceding.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Preceding, unless that crosses a month boundary, then following.
    ModifiedPreceding,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{name}")
    }
}

/// Direction used when a scheduled payment lands on a holiday.
///
/// Payment calendars only ever roll one way; this is the two-valued
/// counterpart of [`BusinessDayConvention`] used by schedule generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeekendAdjust {
    /// Roll forward to the next business day.
    Forward,
    /// Keep business days, otherwise roll back to the previous one.
    #[default]
    Backward,
}

impl WeekendAdjust {
    /// Maps a signed direction flag: positive is forward, anything else backward.
    pub fn from_sign(direction: i32) -> Self {
        if direction > 0 {
            WeekendAdjust::Forward
        } else {
            WeekendAdjust::Backward
        }
    }

    /// The equivalent business day convention.
    pub fn convention(&self) -> BusinessDayConvention {
        match self {
            WeekendAdjust::Forward => BusinessDayConvention::Following,
            WeekendAdjust::Backward => BusinessDayConvention::Preceding,
        }
    }
}

/// Adjusts a date according to the given business day convention.
pub fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> Date {
    if calendar.is_business_day(date) {
        return date;
    }

    match convention {
        BusinessDayConvention::Unadjusted => date,

        BusinessDayConvention::Following => following(date, calendar),

        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = following(date, calendar);
            if adjusted.month() != date.month() {
                preceding(date, calendar)
            } else {
                adjusted
            }
        }

        BusinessDayConvention::Preceding => preceding(date, calendar),

        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = preceding(date, calendar);
            if adjusted.month() != date.month() {
                following(date, calendar)
            } else {
                adjusted
            }
        }
    }
}

/// Returns the next business day on or after the given date.
pub(crate) fn following<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(1);
    }
    date
}

/// Returns the previous business day on or before the given date.
pub(crate) fn preceding<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(-1);
    }
    date
}
