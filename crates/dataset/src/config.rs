//! Configuration for a generation run.

use suntable_calendar::LeapRule;
use suntable_solar::{GeoLocation, SolarConfig};

use crate::error::DatasetError;

/// Earliest year the calculation supports.
pub const MIN_YEAR: i32 = 1900;

/// Latest year that still formats as a four-digit date.
pub const MAX_YEAR: i32 = 9999;

/// Settings for one generation run over `from_year..=until_year`.
///
/// # Example
///
/// ```
/// use suntable_calendar::LeapRule;
/// use suntable_dataset::GeneratorConfig;
/// use suntable_solar::GeoLocation;
///
/// let config = GeneratorConfig::new(2023, 2024, GeoLocation::new(50.0, 11.0).unwrap())
///     .with_utc_offset(1)
///     .with_leap_rule(LeapRule::Gregorian);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    from_year: i32,
    until_year: i32,
    location: GeoLocation,
    /// Standard-time offset from UTC in hours.
    utc_offset: i32,
    solar: SolarConfig,
    leap_rule: LeapRule,
}

impl GeneratorConfig {
    /// Creates a configuration for the inclusive year range at `location`.
    ///
    /// Defaults: `utc_offset = 1`, default [`SolarConfig`], Gregorian leap rule.
    pub fn new(from_year: i32, until_year: i32, location: GeoLocation) -> Self {
        Self {
            from_year,
            until_year,
            location,
            utc_offset: 1,
            solar: SolarConfig::default(),
            leap_rule: LeapRule::default(),
        }
    }

    /// Sets the standard-time UTC offset in hours.
    pub fn with_utc_offset(mut self, hours: i32) -> Self {
        self.utc_offset = hours;
        self
    }

    /// Sets the solar calculation parameters.
    pub fn with_solar(mut self, solar: SolarConfig) -> Self {
        self.solar = solar;
        self
    }

    /// Sets the leap-year rule.
    pub fn with_leap_rule(mut self, rule: LeapRule) -> Self {
        self.leap_rule = rule;
        self
    }

    /// Returns the first year.
    pub fn from_year(&self) -> i32 {
        self.from_year
    }

    /// Returns the last year (inclusive).
    pub fn until_year(&self) -> i32 {
        self.until_year
    }

    /// Returns the observer location.
    pub fn location(&self) -> GeoLocation {
        self.location
    }

    /// Returns the UTC offset in hours.
    pub fn utc_offset(&self) -> i32 {
        self.utc_offset
    }

    /// Returns the solar calculation parameters.
    pub fn solar(&self) -> &SolarConfig {
        &self.solar
    }

    /// Returns the leap-year rule.
    pub fn leap_rule(&self) -> LeapRule {
        self.leap_rule
    }

    /// Validates this configuration.
    ///
    /// An empty range (`from_year > until_year`) is valid.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::YearOutOfRange`] for a year outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`], [`DatasetError::InvalidUtcOffset`] for an
    /// offset outside -12..=14, or [`DatasetError::Solar`] for an invalid zenith.
    pub fn validate(&self) -> Result<(), DatasetError> {
        for year in [self.from_year, self.until_year] {
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                return Err(DatasetError::YearOutOfRange {
                    year,
                    min: MIN_YEAR,
                    max: MAX_YEAR,
                });
            }
        }
        if !(-12..=14).contains(&self.utc_offset) {
            return Err(DatasetError::InvalidUtcOffset {
                offset: self.utc_offset,
            });
        }
        self.solar.validate()?;
        Ok(())
    }
}
