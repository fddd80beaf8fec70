//! Error types for the suntable-dataset crate.

use suntable_calendar::CivilDate;
use suntable_solar::{SolarError, SunEvent};

/// Error type for record assembly and generator configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    /// A required part of a [`DayRecord`](crate::DayRecord) was never set.
    #[error("day record is missing its {field}")]
    MissingField {
        /// Name of the missing part.
        field: &'static str,
    },

    /// A year is outside the supported range.
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// The UTC offset is not a real-world zone offset.
    #[error("UTC offset {offset} is outside -12..=14 hours")]
    InvalidUtcOffset {
        /// The rejected offset in hours.
        offset: i32,
    },

    /// The solar configuration is invalid.
    #[error("invalid solar configuration")]
    Solar(#[from] SolarError),
}

/// A single day that could not be turned into a record.
///
/// Generation continues with the next day after one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DayError {
    /// The sun does not rise or set on this date.
    #[error("no {event} on {date}")]
    NoSunEvent {
        /// The affected date.
        date: CivilDate,
        /// The event that has no solution.
        event: SunEvent,
        /// Underlying calculation error.
        #[source]
        source: SolarError,
    },

    /// The record could not be assembled.
    #[error("incomplete record for {date}")]
    Record {
        /// The affected date.
        date: CivilDate,
        /// Underlying assembly error.
        #[source]
        source: DatasetError,
    },
}

impl DayError {
    /// Returns the date this error belongs to.
    pub fn date(&self) -> CivilDate {
        match self {
            Self::NoSunEvent { date, .. } | Self::Record { date, .. } => *date,
        }
    }
}
