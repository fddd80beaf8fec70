//! Day-by-day record generation over a range of years.

use std::ops::RangeInclusive;

use tracing::{debug, warn};

use suntable_calendar::{CivilDate, MonthDays, days_in_year, is_central_europe_dst, month_days};
use suntable_solar::{SunEvent, sun_clock_time};

use crate::config::GeneratorConfig;
use crate::error::{DatasetError, DayError};
use crate::record::DayRecord;

/// Produces one [`DayRecord`] per calendar day of the configured years.
///
/// The generator holds only configuration; every call to
/// [`records`](Self::records) starts a fresh pass.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    config: GeneratorConfig,
}

impl DatasetGenerator {
    /// Creates a generator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`DatasetError`] from [`GeneratorConfig::validate`].
    pub fn new(config: GeneratorConfig) -> Result<Self, DatasetError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the inclusive year range; empty if `from > until`.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.config.from_year()..=self.config.until_year()
    }

    /// Returns the number of days a full pass covers.
    pub fn day_count(&self) -> usize {
        self.years()
            .map(|y| usize::from(days_in_year(y, self.config.leap_rule())))
            .sum()
    }

    /// Returns a lazy iterator over every day, ordered by (year, month, day).
    ///
    /// Days without a sunrise or sunset come out as [`DayError`] and the
    /// iteration carries on with the next day.
    pub fn records(&self) -> DayRecords<'_> {
        DayRecords {
            generator: self,
            year: self.config.from_year(),
            month: 1,
            days: None,
        }
    }

    /// Computes the record for a single date.
    ///
    /// # Errors
    ///
    /// Returns [`DayError::NoSunEvent`] if the sun does not rise or set.
    pub fn day(&self, date: CivilDate) -> Result<DayRecord, DayError> {
        let config = &self.config;
        let location = config.location();
        let is_dst = is_central_europe_dst(date.year(), date.month(), date.day());

        let event_time = |event| {
            sun_clock_time(
                date,
                &location,
                config.utc_offset(),
                is_dst,
                event,
                config.solar(),
            )
            .map_err(|source| DayError::NoSunEvent {
                date,
                event,
                source,
            })
        };
        let sunrise = event_time(SunEvent::Sunrise)?;
        let sunset = event_time(SunEvent::Sunset)?;

        DayRecord::builder(date)
            .sunrise(sunrise)
            .sunset(sunset)
            .location(location)
            .utc_offset(config.utc_offset())
            .dst(is_dst)
            .build()
            .map_err(|source| DayError::Record { date, source })
    }
}

impl<'a> IntoIterator for &'a DatasetGenerator {
    type Item = Result<DayRecord, DayError>;
    type IntoIter = DayRecords<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}

/// Iterator returned by [`DatasetGenerator::records`].
#[derive(Debug, Clone)]
pub struct DayRecords<'a> {
    generator: &'a DatasetGenerator,
    /// Year of the next month to open.
    year: i32,
    /// Next month to open (1..=12).
    month: u8,
    days: Option<MonthDays>,
}

impl DayRecords<'_> {
    /// Moves on to the next month that has days, skipping invalid ones.
    ///
    /// Returns `false` once the last year is exhausted.
    fn open_next_month(&mut self) -> bool {
        let config = &self.generator.config;
        while self.year <= config.until_year() {
            let (year, month) = (self.year, self.month);
            if month >= 12 {
                self.year += 1;
                self.month = 1;
            } else {
                self.month += 1;
            }

            if month == 1 {
                debug!(year, "generating year");
            }
            match month_days(year, month, config.leap_rule()) {
                Ok(days) => {
                    self.days = Some(days);
                    return true;
                }
                Err(e) => warn!(year, month, error = %e, "skipping month"),
            }
        }
        self.days = None;
        false
    }
}

impl Iterator for DayRecords<'_> {
    type Item = Result<DayRecord, DayError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(date) = self.days.as_mut().and_then(Iterator::next) {
                return Some(self.generator.day(date));
            }
            if !self.open_next_month() {
                return None;
            }
        }
    }
}

impl std::iter::FusedIterator for DayRecords<'_> {}

#[cfg(test)]
mod tests {
    use suntable_calendar::LeapRule;
    use suntable_solar::GeoLocation;

    use super::*;

    fn generator(from: i32, until: i32) -> DatasetGenerator {
        let here = GeoLocation::new(50.0, 11.0).unwrap();
        DatasetGenerator::new(GeneratorConfig::new(from, until, here)).unwrap()
    }

    #[test]
    fn one_year_has_365_records() {
        let records: Vec<_> = generator(2023, 2023).records().collect();
        assert_eq!(records.len(), 365);
        assert!(records.iter().all(Result::is_ok));
    }

    #[test]
    fn empty_range() {
        let generator = generator(2024, 2023);
        assert_eq!(generator.records().count(), 0);
        assert_eq!(generator.day_count(), 0);
    }

    #[test]
    fn restartable() {
        let generator = generator(2023, 2023);
        let first: Vec<_> = generator.records().take(3).collect();
        let second: Vec<_> = generator.records().take(3).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn fused_after_end() {
        let generator = generator(2023, 2023);
        let mut records = generator.records();
        for _ in 0..365 {
            assert!(records.next().is_some());
        }
        assert!(records.next().is_none());
        assert!(records.next().is_none());
    }

    #[test]
    fn day_count_follows_leap_rule() {
        let here = GeoLocation::new(50.0, 11.0).unwrap();
        let gregorian = DatasetGenerator::new(GeneratorConfig::new(2023, 2024, here)).unwrap();
        assert_eq!(gregorian.day_count(), 731);
        let compat = DatasetGenerator::new(
            GeneratorConfig::new(2023, 2024, here).with_leap_rule(LeapRule::SourceCompatible),
        )
        .unwrap();
        assert_eq!(compat.day_count(), 730);
    }

    #[test]
    fn day_sets_dst_flag() {
        let generator = generator(2023, 2023);
        let winter = generator.day(CivilDate::new(2023, 1, 15).unwrap()).unwrap();
        let summer = generator.day(CivilDate::new(2023, 6, 21).unwrap()).unwrap();
        assert!(!winter.is_dst());
        assert!(summer.is_dst());
        assert_eq!(summer.sunrise().to_string(), "05:06");
        assert_eq!(summer.sunset().to_string(), "21:28");
    }

    #[test]
    fn invalid_config_rejected() {
        let here = GeoLocation::new(50.0, 11.0).unwrap();
        assert!(DatasetGenerator::new(GeneratorConfig::new(1800, 2023, here)).is_err());
    }
}
