//! Immutable per-day record and its builder.

use suntable_calendar::CivilDate;
use suntable_solar::{ClockTime, GeoLocation};

use crate::error::DatasetError;

/// Sunrise and sunset of one calendar day at one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRecord {
    date: CivilDate,
    sunrise: ClockTime,
    sunset: ClockTime,
    location: GeoLocation,
    utc_offset: i32,
    is_dst: bool,
}

impl DayRecord {
    /// Starts building a record for `date`.
    pub fn builder(date: CivilDate) -> DayRecordBuilder {
        DayRecordBuilder::new(date)
    }

    /// Returns the date.
    pub fn date(&self) -> CivilDate {
        self.date
    }

    /// Returns the local sunrise time.
    pub fn sunrise(&self) -> ClockTime {
        self.sunrise
    }

    /// Returns the local sunset time.
    pub fn sunset(&self) -> ClockTime {
        self.sunset
    }

    /// Returns the observer location.
    pub fn location(&self) -> GeoLocation {
        self.location
    }

    /// Returns the standard-time UTC offset in hours.
    pub fn utc_offset(&self) -> i32 {
        self.utc_offset
    }

    /// Returns `true` if summer time applied on this date.
    pub fn is_dst(&self) -> bool {
        self.is_dst
    }
}

/// Builder for [`DayRecord`].
///
/// Sunrise, sunset and location are required; the UTC offset defaults to 0
/// and the summer time flag to `false`.
///
/// # Example
///
/// ```
/// use suntable_calendar::CivilDate;
/// use suntable_dataset::DayRecord;
/// use suntable_solar::{ClockTime, GeoLocation};
///
/// let record = DayRecord::builder(CivilDate::new(2023, 6, 21).unwrap())
///     .sunrise(ClockTime::new(5, 6).unwrap())
///     .sunset(ClockTime::new(21, 28).unwrap())
///     .location(GeoLocation::new(50.0, 11.0).unwrap())
///     .utc_offset(1)
///     .dst(true)
///     .build()
///     .unwrap();
/// assert_eq!(record.sunset().to_string(), "21:28");
/// ```
#[derive(Debug, Clone)]
pub struct DayRecordBuilder {
    date: CivilDate,
    sunrise: Option<ClockTime>,
    sunset: Option<ClockTime>,
    location: Option<GeoLocation>,
    utc_offset: i32,
    is_dst: bool,
}

impl DayRecordBuilder {
    /// Creates a builder for `date` with nothing else set.
    pub fn new(date: CivilDate) -> Self {
        Self {
            date,
            sunrise: None,
            sunset: None,
            location: None,
            utc_offset: 0,
            is_dst: false,
        }
    }

    /// Sets the sunrise time.
    pub fn sunrise(mut self, time: ClockTime) -> Self {
        self.sunrise = Some(time);
        self
    }

    /// Sets the sunset time.
    pub fn sunset(mut self, time: ClockTime) -> Self {
        self.sunset = Some(time);
        self
    }

    /// Sets the observer location.
    pub fn location(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the standard-time UTC offset in hours.
    pub fn utc_offset(mut self, hours: i32) -> Self {
        self.utc_offset = hours;
        self
    }

    /// Sets whether summer time applies.
    pub fn dst(mut self, is_dst: bool) -> Self {
        self.is_dst = is_dst;
        self
    }

    /// Finishes the record.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::MissingField`] naming the first required part
    /// that was not set.
    pub fn build(self) -> Result<DayRecord, DatasetError> {
        let sunrise = self
            .sunrise
            .ok_or(DatasetError::MissingField { field: "sunrise" })?;
        let sunset = self
            .sunset
            .ok_or(DatasetError::MissingField { field: "sunset" })?;
        let location = self
            .location
            .ok_or(DatasetError::MissingField { field: "location" })?;
        Ok(DayRecord {
            date: self.date,
            sunrise,
            sunset,
            location,
            utc_offset: self.utc_offset,
            is_dst: self.is_dst,
        })
    }
}
