//! Schedule step units and coupon frequencies.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Unit used to step a payment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IntervalUnit {
    /// Calendar days
    Day,
    /// Seven-day weeks
    Week,
    /// Calendar months (day clamped to month end)
    #[default]
    Month,
    /// Calendar years
    Year,
    /// Unknown unit; schedules using it degenerate to maturity only
    Invalid,
}

impl IntervalUnit {
    /// Day count of one unit on the 30/360 basis used for period year fractions.
    ///
    /// `Invalid` counts as zero days.
    pub fn days(&self) -> u32 {
        match self {
            IntervalUnit::Day => 1,
            IntervalUnit::Week => 7,
            IntervalUnit::Month => 30,
            IntervalUnit::Year => 360,
            IntervalUnit::Invalid => 0,
        }
    }

    /// Moves `date` by `count` units (negative moves backward).
    ///
    /// Returns `None` for `Invalid` or when the result leaves chrono's range.
    pub fn step(&self, date: Date, count: i32) -> Option<Date> {
        match self {
            IntervalUnit::Day => date.checked_add_days(i64::from(count)),
            IntervalUnit::Week => date.checked_add_weeks(i64::from(count)),
            IntervalUnit::Month => date.add_months(count).ok(),
            IntervalUnit::Year => date.add_years(count).ok(),
            IntervalUnit::Invalid => None,
        }
    }

    /// True for every unit except `Invalid`.
    pub fn is_valid(&self) -> bool {
        !matches!(self, IntervalUnit::Invalid)
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntervalUnit::Day => "Day",
            IntervalUnit::Week => "Week",
            IntervalUnit::Month => "Month",
            IntervalUnit::Year => "Year",
            IntervalUnit::Invalid => "Invalid",
        };
        write!(f, "{name}")
    }
}

/// Common coupon frequencies, expressed as month steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// Returns the number of periods per year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period.
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// The `(count, unit)` schedule step equivalent to this frequency.
    pub fn as_step(&self) -> (u32, IntervalUnit) {
        (self.months_per_period(), IntervalUnit::Month)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}
