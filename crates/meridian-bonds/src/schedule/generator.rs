//! Backward payment-date generator.

use serde::{Deserialize, Serialize};

use meridian_core::calendars::{Calendar, WeekendAdjust};
use meridian_core::types::{Date, Frequency, IntervalUnit};

/// Inputs to payment calendar generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    /// Earliest date a payment may fall on.
    pub valuation_date: Date,
    /// Final (redemption) date; always part of the schedule.
    pub maturity: Date,
    /// Interval units per step. Zero yields a maturity-only schedule.
    pub frequency: u32,
    /// Unit of one step.
    pub unit: IntervalUnit,
    /// Fixed day of month applied to every stepped date before adjustment.
    pub pay_day: Option<u32>,
    /// Roll direction for non-business days.
    pub weekend_adjust: WeekendAdjust,
}

impl ScheduleSpec {
    /// Creates a spec with no pay-day pinning and backward rolling.
    pub fn new(valuation_date: Date, maturity: Date, frequency: u32, unit: IntervalUnit) -> Self {
        Self {
            valuation_date,
            maturity,
            frequency,
            unit,
            pay_day: None,
            weekend_adjust: WeekendAdjust::default(),
        }
    }

    /// Creates a spec stepping by a standard coupon frequency.
    pub fn with_frequency(valuation_date: Date, maturity: Date, frequency: Frequency) -> Self {
        let (count, unit) = frequency.as_step();
        Self::new(valuation_date, maturity, count, unit)
    }

    /// Pins every stepped date to `day` (clamped to the month length).
    #[must_use]
    pub fn with_pay_day(mut self, day: u32) -> Self {
        self.pay_day = Some(day);
        self
    }

    /// Sets the roll direction.
    #[must_use]
    pub fn with_weekend_adjust(mut self, adjust: WeekendAdjust) -> Self {
        self.weekend_adjust = adjust;
        self
    }

    /// Year fraction of one step on a 30/360 basis.
    pub fn period_year_fraction(&self) -> f64 {
        f64::from(self.frequency) * f64::from(self.unit.days()) / 360.0
    }
}

/// Generates payment dates against a business-day calendar.
///
/// Output is strictly ascending. Degenerate inputs never fail: a maturity
/// before the valuation date gives an empty schedule, and a zero frequency
/// or an `Invalid` unit gives `[maturity]`.
#[derive(Debug, Clone, Copy)]
pub struct PaymentCalendarGenerator<'a, C: Calendar + ?Sized> {
    calendar: &'a C,
}

impl<'a, C: Calendar + ?Sized> PaymentCalendarGenerator<'a, C> {
    /// Creates a generator rolling dates on `calendar`.
    pub fn new(calendar: &'a C) -> Self {
        Self { calendar }
    }

    /// Payment dates in `[valuation_date, maturity]`, ascending.
    ///
    /// Maturity is included unadjusted. The k-th step is taken from
    /// maturity directly (`maturity - k * frequency` units), so month-end
    /// clamping in one step never carries into the next.
    pub fn generate(&self, spec: &ScheduleSpec) -> Vec<Date> {
        if spec.maturity < spec.valuation_date {
            log::debug!(
                "maturity {} precedes valuation date {}, empty schedule",
                spec.maturity,
                spec.valuation_date
            );
            return Vec::new();
        }

        let mut dates = vec![spec.maturity];
        let Ok(step) = i32::try_from(spec.frequency) else {
            return dates;
        };
        if step == 0 || !spec.unit.is_valid() {
            return dates;
        }

        let convention = spec.weekend_adjust.convention();
        let mut k: i32 = 1;
        loop {
            let Some(offset) = step.checked_mul(k) else {
                break;
            };
            let Some(stepped) = spec.unit.step(spec.maturity, -offset) else {
                break;
            };
            let pinned = match spec.pay_day {
                Some(day) if day > 0 => stepped.with_day_clamped(day),
                _ => stepped,
            };
            let adjusted = self.calendar.adjust(pinned, convention);

            if adjusted >= spec.valuation_date {
                dates.push(adjusted);
            }
            if adjusted <= spec.valuation_date {
                break;
            }
            k += 1;
        }

        dates.sort_unstable();
        dates.dedup();
        log::debug!(
            "generated {} payment dates to {} on {}",
            dates.len(),
            spec.maturity,
            self.calendar.name()
        );
        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::calendars::{HolidayCalendar, WeekendCalendar};

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn generate(spec: &ScheduleSpec) -> Vec<Date> {
        PaymentCalendarGenerator::new(&WeekendCalendar).generate(spec)
    }

    #[test]
    fn test_semi_annual_backward_from_maturity() {
        // 2027-06-15 is a Tuesday
        let spec = ScheduleSpec::with_frequency(d(2025, 3, 1), d(2027, 6, 15), Frequency::SemiAnnual);
        let dates = generate(&spec);
        assert_eq!(
            dates,
            vec![
                d(2025, 6, 13), // Sunday the 15th rolled back
                d(2025, 12, 15),
                d(2026, 6, 15),
                d(2026, 12, 15),
                d(2027, 6, 15),
            ]
        );
    }

    #[test]
    fn test_month_end_does_not_drift() {
        // Stepping from Aug 31 returns to the 31st after passing February
        let maturity = d(2024, 8, 31); // Saturday, kept unadjusted
        let spec = ScheduleSpec::new(d(2023, 12, 1), maturity, 2, IntervalUnit::Month)
            .with_weekend_adjust(WeekendAdjust::Forward);
        assert_eq!(
            generate(&spec),
            vec![
                d(2024, 1, 1), // Sunday Dec 31 rolled forward
                d(2024, 2, 29),
                d(2024, 4, 30),
                d(2024, 7, 1), // Sunday Jun 30 rolled forward
                maturity,
            ]
        );
    }

    #[test]
    fn test_pay_day_pins_before_adjustment() {
        let spec = ScheduleSpec::new(d(2025, 1, 1), d(2025, 6, 30), 1, IntervalUnit::Month)
            .with_pay_day(31);
        let dates = generate(&spec);
        // Every stepped month is pinned to its last day, weekends roll back
        assert_eq!(
            dates,
            vec![
                d(2025, 1, 31),
                d(2025, 2, 28),
                d(2025, 3, 31),
                d(2025, 4, 30),
                d(2025, 5, 30), // Saturday May 31 rolled back
                d(2025, 6, 30),
            ]
        );
    }

    #[test]
    fn test_keeps_date_equal_to_valuation_and_stops() {
        let spec = ScheduleSpec::new(d(2025, 1, 15), d(2026, 1, 15), 3, IntervalUnit::Month);
        let dates = generate(&spec);
        assert_eq!(dates.first(), Some(&d(2025, 1, 15)));
        assert_eq!(dates.len(), 5);
    }

    #[test]
    fn test_degenerate_inputs() {
        let maturity = d(2025, 6, 16);

        let spec = ScheduleSpec::new(d(2025, 7, 1), maturity, 1, IntervalUnit::Month);
        assert!(generate(&spec).is_empty());

        let spec = ScheduleSpec::new(d(2020, 1, 1), maturity, 1, IntervalUnit::Invalid);
        assert_eq!(generate(&spec), vec![maturity]);

        let spec = ScheduleSpec::new(d(2020, 1, 1), maturity, 0, IntervalUnit::Month);
        assert_eq!(generate(&spec), vec![maturity]);

        let spec = ScheduleSpec::new(maturity, maturity, 1, IntervalUnit::Week);
        assert_eq!(generate(&spec), vec![maturity]);
    }

    #[test]
    fn test_oversized_step_leaves_maturity_only() {
        let maturity = d(2026, 1, 1);
        for unit in [
            IntervalUnit::Day,
            IntervalUnit::Week,
            IntervalUnit::Month,
            IntervalUnit::Year,
        ] {
            let spec = ScheduleSpec::new(d(2025, 1, 1), maturity, 200_000_000, unit);
            assert_eq!(generate(&spec), vec![maturity], "{unit}");
        }
        let spec = ScheduleSpec::new(d(2025, 1, 1), maturity, u32::MAX, IntervalUnit::Day);
        assert_eq!(generate(&spec), vec![maturity]);
    }

    #[test]
    fn test_weekly_and_yearly_units() {
        let spec = ScheduleSpec::new(d(2025, 5, 20), d(2025, 6, 10), 1, IntervalUnit::Week);
        assert_eq!(
            generate(&spec),
            vec![d(2025, 5, 20), d(2025, 5, 27), d(2025, 6, 3), d(2025, 6, 10)]
        );

        let spec = ScheduleSpec::new(d(2022, 1, 1), d(2025, 3, 14), 1, IntervalUnit::Year);
        assert_eq!(
            generate(&spec),
            vec![d(2022, 3, 14), d(2023, 3, 14), d(2024, 3, 14), d(2025, 3, 14)]
        );
    }

    #[test]
    fn test_rolled_dates_collapse() {
        // Daily steps over a weekend roll Sat and Sun back onto Friday
        let spec = ScheduleSpec::new(d(2025, 6, 12), d(2025, 6, 16), 1, IntervalUnit::Day);
        assert_eq!(
            generate(&spec),
            vec![d(2025, 6, 12), d(2025, 6, 13), d(2025, 6, 16)]
        );
    }

    #[test]
    fn test_holiday_calendar_rolls() {
        let calendar = HolidayCalendar::new("Desk", [d(2025, 12, 15)]);
        let spec = ScheduleSpec::with_frequency(d(2025, 7, 1), d(2026, 6, 15), Frequency::SemiAnnual)
            .with_weekend_adjust(WeekendAdjust::Forward);
        let dates = PaymentCalendarGenerator::new(&calendar).generate(&spec);
        assert_eq!(dates, vec![d(2025, 12, 16), d(2026, 6, 15)]);
    }

    #[test]
    fn test_period_year_fraction() {
        let semi = ScheduleSpec::with_frequency(d(2025, 1, 1), d(2026, 1, 1), Frequency::SemiAnnual);
        assert_eq!(semi.period_year_fraction(), 0.5);
        let weekly = ScheduleSpec::new(d(2025, 1, 1), d(2026, 1, 1), 2, IntervalUnit::Week);
        assert_eq!(weekly.period_year_fraction(), 14.0 / 360.0);
        let invalid = ScheduleSpec::new(d(2025, 1, 1), d(2026, 1, 1), 2, IntervalUnit::Invalid);
        assert_eq!(invalid.period_year_fraction(), 0.0);
    }
}
