//! Julian day numbers and day-of-week.

/// Returns the Julian day number of a Gregorian calendar date.
///
/// Uses the integer congruence valid for all dates after 4801 BC; the
/// inputs are not validated, so out-of-range days simply roll over.
///
/// ```
/// use suntable_calendar::julian_day_number;
///
/// assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
/// ```
pub fn julian_day_number(year: i32, month: u8, day: u8) -> i64 {
    let a = (14 - i64::from(month)) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Returns the day of the week, 0 = Sunday through 6 = Saturday.
///
/// JDN 0 fell on a Monday, so the Sunday-based index is `(JDN + 1) mod 7`.
///
/// ```
/// use suntable_calendar::day_of_week;
///
/// assert_eq!(day_of_week(2000, 1, 1), 6); // Saturday
/// ```
pub fn day_of_week(year: i32, month: u8, day: u8) -> u8 {
    (julian_day_number(year, month, day) + 1).rem_euclid(7) as u8
}
