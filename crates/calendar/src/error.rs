//! Calendar validation errors.

/// A month or day that does not exist under the active [`LeapRule`].
///
/// [`LeapRule`]: crate::LeapRule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month number outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u8 },

    /// Day number outside the month, e.g. 2023-02-29 or 2024-04-31.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        day: u8,
        month: u8,
        year: i32,
        /// Length of the month under the rule that rejected the day.
        max_day: u8,
    },
}
