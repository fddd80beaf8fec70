//! Leap-year rules and month lengths.

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Rule deciding whether February has 29 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LeapRule {
    /// Standard Gregorian rule: divisible by 4, except centuries not divisible by 400.
    #[default]
    Gregorian,
    /// Reproduces the legacy predicate `y % 4 == 0 && y % 100 != 0 && y % 400 == 0`.
    ///
    /// No year satisfies it, so February always has 28 days and every year
    /// has 365 days.
    SourceCompatible,
}

/// Returns `true` if `year` has a February 29 under `rule`.
///
/// ```
/// use suntable_calendar::{LeapRule, is_leap_year};
///
/// assert!(is_leap_year(2024, LeapRule::Gregorian));
/// assert!(is_leap_year(2000, LeapRule::Gregorian));
/// assert!(!is_leap_year(1900, LeapRule::Gregorian));
/// assert!(!is_leap_year(2024, LeapRule::SourceCompatible));
/// ```
pub fn is_leap_year(year: i32, rule: LeapRule) -> bool {
    match rule {
        LeapRule::Gregorian => year % 4 == 0 && (year % 100 != 0 || year % 400 == 0),
        LeapRule::SourceCompatible => year % 4 == 0 && year % 100 != 0 && year % 400 == 0,
    }
}

/// Returns the number of days in `month` of `year` under the Gregorian rule.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    days_in_month_with(year, month, LeapRule::Gregorian)
}

/// Returns the number of days in `month` of `year` under an explicit leap rule.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month_with(year: i32, month: u8, rule: LeapRule) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year, rule) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

/// Returns the number of days in `year` under `rule`.
pub fn days_in_year(year: i32, rule: LeapRule) -> u16 {
    if is_leap_year(year, rule) { 366 } else { 365 }
}
