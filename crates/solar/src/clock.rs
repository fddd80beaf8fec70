//! Wall-clock time of day at minute precision.

use std::fmt;

/// Hour and minute of a day; `hour` in 0..=23, `minute` in 0..=59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a clock time, or `None` if a field is out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Converts a fractional hour into a clock time.
    ///
    /// The value is first reduced into `[0, 24)`; the integer part becomes the
    /// hour and the fractional part times 60, truncated, becomes the minute.
    /// A non-finite input maps to midnight.
    ///
    /// ```
    /// use suntable_solar::ClockTime;
    ///
    /// assert_eq!(ClockTime::from_fractional_hours(5.5).to_string(), "05:30");
    /// assert_eq!(ClockTime::from_fractional_hours(25.25).to_string(), "01:15");
    /// assert_eq!(ClockTime::from_fractional_hours(-1.0).to_string(), "23:00");
    /// ```
    pub fn from_fractional_hours(hours: f64) -> Self {
        if !hours.is_finite() {
            return Self { hour: 0, minute: 0 };
        }
        // rem_euclid can round up to exactly 24.0 for tiny negative inputs.
        let normalised = hours.rem_euclid(24.0);
        let normalised = if normalised >= 24.0 { 0.0 } else { normalised };
        let hour = normalised.trunc();
        let minute = ((normalised - hour) * 60.0).trunc();
        Self {
            hour: (hour as u8).min(23),
            minute: (minute as u8).min(59),
        }
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    /// Formats as `HH:MM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
