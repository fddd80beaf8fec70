//! Sunrise and sunset from the almanac approximation.
//!
//! The calculation works on a single date at a time and needs no ephemeris:
//! the sun's mean anomaly is estimated from an approximate day-of-year, the
//! true longitude and right ascension follow from a two-term equation of
//! centre, and the local hour angle at the configured zenith gives the event
//! time. Accuracy is a minute or two at mid latitudes.

use std::fmt;

use suntable_calendar::CivilDate;

use crate::clock::ClockTime;
use crate::config::SolarConfig;
use crate::error::{Polar, SolarError};
use crate::location::GeoLocation;

/// Degrees of hour angle per hour.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Horizon crossing to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunEvent {
    /// Morning crossing.
    Sunrise,
    /// Evening crossing.
    Sunset,
}

impl fmt::Display for SunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sunrise => f.write_str("sunrise"),
            Self::Sunset => f.write_str("sunset"),
        }
    }
}

impl SunEvent {
    /// Local mean hour used as the first approximation of the event.
    fn approximate_hour(self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }
}

/// Approximate ordinal day of the year from a closed-form expression.
///
/// `floor(275m/9) - floor((m+9)/12) * (1 + floor((y - 4 floor(y/4) + 2)/3)) + d - 30`
/// in integer arithmetic. The leap correction only looks at `y mod 4`.
pub fn approximate_day_of_year(year: i32, month: u8, day: u8) -> i32 {
    let (month, day) = (i32::from(month), i32::from(day));
    let n1 = 275 * month / 9;
    let n2 = (month + 9) / 12;
    let n3 = 1 + (year - 4 * year.div_euclid(4) + 2) / 3;
    n1 - n2 * n3 + day - 30
}

/// Computes the fractional local clock hour of a sunrise or sunset.
///
/// The result is `UT + utc_offset + (1 if is_dst)`, where `UT` is reduced into
/// `[0, 24)`; the sum may therefore lie outside that range and callers
/// normalise it, e.g. with [`ClockTime::from_fractional_hours`].
///
/// # Errors
///
/// Returns [`SolarError::PolarDayOrNight`] when the sun never reaches the
/// configured zenith on this date.
///
/// # Example
///
/// ```
/// use suntable_calendar::CivilDate;
/// use suntable_solar::{GeoLocation, SolarConfig, SunEvent, calc_sun_time};
///
/// let date = CivilDate::new(2023, 6, 21).unwrap();
/// let here = GeoLocation::new(50.0, 11.0).unwrap();
/// let config = SolarConfig::default();
/// let rise = calc_sun_time(date, &here, 1, true, SunEvent::Sunrise, &config).unwrap();
/// assert!((5.0..5.2).contains(&rise));
/// ```
pub fn calc_sun_time(
    date: CivilDate,
    location: &GeoLocation,
    utc_offset: i32,
    is_dst: bool,
    event: SunEvent,
    config: &SolarConfig,
) -> Result<f64, SolarError> {
    let n = f64::from(approximate_day_of_year(
        date.year(),
        date.month(),
        date.day(),
    ));

    let lng_hour = location.longitude() / DEGREES_PER_HOUR;
    let t = n + (event.approximate_hour() - lng_hour) / 24.0;

    // Mean anomaly and true longitude.
    let m = 0.9856 * t - 3.289;
    let l = (m + 1.916 * sin_deg(m) + 0.020 * sin_deg(2.0 * m) + 282.634).rem_euclid(360.0);

    // Right ascension, moved into the same quadrant as L.
    let ra = (0.91764 * tan_deg(l)).atan().to_degrees().rem_euclid(360.0);
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    let ra_hours = (ra + (l_quadrant - ra_quadrant)) / DEGREES_PER_HOUR;

    // Declination.
    let sin_dec = 0.39782 * sin_deg(l);
    let cos_dec = sin_dec.asin().cos();

    // Local hour angle.
    let latitude = location.latitude();
    let cos_h = (sin_deg(config.zenith()) - sin_dec * sin_deg(latitude))
        / (cos_dec * cos_deg(latitude));
    if !(-1.0..=1.0).contains(&cos_h) {
        let polar = if cos_h < -1.0 {
            Polar::Day
        } else {
            Polar::Night
        };
        return Err(SolarError::PolarDayOrNight {
            polar,
            cos_hour_angle: cos_h,
        });
    }

    let h_degrees = cos_h.acos().to_degrees();
    let h = match event {
        SunEvent::Sunrise => 360.0 - h_degrees,
        SunEvent::Sunset => h_degrees,
    } / DEGREES_PER_HOUR;

    // Local mean time, then back to UTC.
    let local_mean = h + ra_hours - 0.06571 * t - 6.622;
    let ut = (local_mean - lng_hour).rem_euclid(24.0);

    Ok(ut + f64::from(utc_offset) + if is_dst { 1.0 } else { 0.0 })
}

/// Computes a sunrise or sunset and converts it to a wall-clock time.
///
/// # Errors
///
/// Returns [`SolarError::PolarDayOrNight`] when there is no such event.
pub fn sun_clock_time(
    date: CivilDate,
    location: &GeoLocation,
    utc_offset: i32,
    is_dst: bool,
    event: SunEvent,
    config: &SolarConfig,
) -> Result<ClockTime, SolarError> {
    calc_sun_time(date, location, utc_offset, is_dst, event, config)
        .map(ClockTime::from_fractional_hours)
}

fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

fn tan_deg(deg: f64) -> f64 {
    deg.to_radians().tan()
}
