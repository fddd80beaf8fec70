//! Validated civil date.

use std::fmt;

use crate::error::CalendarError;
use crate::month::{LeapRule, days_in_month_with};
use crate::weekday::{day_of_week, julian_day_number};

/// A calendar date whose day is valid for its month under a [`LeapRule`].
///
/// Ordering is chronological: by year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
}

impl CivilDate {
    /// Creates a new `CivilDate` validated under the Gregorian rule.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`].
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::with_rule(year, month, day, LeapRule::Gregorian)
    }

    /// Creates a new `CivilDate` validated under an explicit leap rule.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::InvalidDay`] if `day` is outside the month.
    pub fn with_rule(year: i32, month: u8, day: u8, rule: LeapRule) -> Result<Self, CalendarError> {
        let max_day = days_in_month_with(year, month, rule)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the Julian day number of this date.
    pub fn julian_day_number(self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }

    /// Returns the day of the week, 0 = Sunday.
    pub fn day_of_week(self) -> u8 {
        day_of_week(self.year, self.month, self.day)
    }
}

impl fmt::Display for CivilDate {
    /// Formats as `YYYY-MM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = CivilDate::new(2023, 1, 1).unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CivilDate::new(2023, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            CivilDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                year: 2023,
                max_day: 28,
            }
        );
        assert!(CivilDate::new(2023, 4, 0).is_err());
    }

    #[test]
    fn leap_day_depends_on_rule() {
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::with_rule(2024, 2, 29, LeapRule::SourceCompatible).is_err());
    }

    #[test]
    fn display_pads_fields() {
        let date = CivilDate::new(1987, 3, 9).unwrap();
        assert_eq!(date.to_string(), "1987-03-09");
    }

    #[test]
    fn ord_chronological() {
        let a = CivilDate::new(2023, 12, 31).unwrap();
        let b = CivilDate::new(2024, 1, 1).unwrap();
        let c = CivilDate::new(2024, 1, 2).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn weekday_accessor() {
        assert_eq!(CivilDate::new(2000, 1, 1).unwrap().day_of_week(), 6);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<CivilDate>();
    }
}
