//! Day sequences within a month.

use crate::date::CivilDate;
use crate::error::CalendarError;
use crate::month::{LeapRule, days_in_month_with};

/// Iterator over every date of one month, in ascending order.
#[derive(Debug, Clone)]
pub struct MonthDays {
    year: i32,
    month: u8,
    next_day: u8,
    last_day: u8,
}

impl Iterator for MonthDays {
    type Item = CivilDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_day > self.last_day {
            return None;
        }
        let date = CivilDate {
            year: self.year,
            month: self.month,
            day: self.next_day,
        };
        self.next_day += 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.last_day + 1 - self.next_day);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthDays {}

/// Returns an iterator over every day of `month` in `year` under `rule`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
///
/// # Example
///
/// ```
/// use suntable_calendar::{LeapRule, month_days};
///
/// let feb = month_days(2024, 2, LeapRule::Gregorian).unwrap();
/// assert_eq!(feb.len(), 29);
/// ```
pub fn month_days(year: i32, month: u8, rule: LeapRule) -> Result<MonthDays, CalendarError> {
    let last_day = days_in_month_with(year, month, rule)?;
    Ok(MonthDays {
        year,
        month,
        next_day: 1,
        last_day,
    })
}
