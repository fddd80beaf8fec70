//! Positional row layout of a persisted day.

use suntable_dataset::DayRecord;

/// Number of positional placeholders an insert template must have.
pub const ROW_FIELDS: usize = 7;

/// The seven bound values of one persisted day, in placeholder order:
/// date, sunrise, sunset, latitude, longitude, utc_offset, dst.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`.
    pub sunrise: String,
    /// `HH:MM`.
    pub sunset: String,
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset: i32,
    /// 0 or 1.
    pub dst: i32,
}

impl From<&DayRecord> for DayRow {
    fn from(record: &DayRecord) -> Self {
        let location = record.location();
        Self {
            date: record.date().to_string(),
            sunrise: record.sunrise().to_string(),
            sunset: record.sunset().to_string(),
            latitude: location.latitude(),
            longitude: location.longitude(),
            utc_offset: record.utc_offset(),
            dst: i32::from(record.is_dst()),
        }
    }
}
