//! Central-European daylight-saving window.

use crate::weekday::day_of_week;

/// Earliest date the last Sunday of a 31-day month can fall on.
const LAST_SUNDAY_EARLIEST: i16 = 25;

/// Returns `true` if the date falls within Central-European summer time.
///
/// Summer time runs from the last Sunday of March up to (excluding) the last
/// Sunday of October. Transition hours are not modelled: the whole switch day
/// counts as summer time in March and as standard time in October.
///
/// `day - day_of_week` is the date of the most recent Sunday, which is at
/// least 25 exactly when the month's last Sunday has been reached.
///
/// ```
/// use suntable_calendar::is_central_europe_dst;
///
/// assert!(!is_central_europe_dst(2023, 3, 25));
/// assert!(is_central_europe_dst(2023, 3, 26));
/// assert!(is_central_europe_dst(2023, 10, 28));
/// assert!(!is_central_europe_dst(2023, 10, 29));
/// ```
pub fn is_central_europe_dst(year: i32, month: u8, day: u8) -> bool {
    match month {
        3 => last_sunday_reached(year, month, day),
        4..=9 => true,
        10 => !last_sunday_reached(year, month, day),
        _ => false,
    }
}

fn last_sunday_reached(year: i32, month: u8, day: u8) -> bool {
    let previous_sunday = i16::from(day) - i16::from(day_of_week(year, month, day));
    previous_sunday >= LAST_SUNDAY_EARLIEST
}
