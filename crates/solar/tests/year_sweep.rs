//! Sweeps whole years of dates through the calculation.

use suntable_calendar::{LeapRule, is_central_europe_dst, month_days};
use suntable_solar::{
    ClockTime, GeoLocation, Polar, SolarConfig, SolarError, SunEvent, sun_clock_time,
};

type DayEvents = (Result<ClockTime, SolarError>, Result<ClockTime, SolarError>);

fn sweep(year: i32, location: GeoLocation) -> Vec<DayEvents> {
    let config = SolarConfig::default();
    (1..=12)
        .flat_map(|m| month_days(year, m, LeapRule::Gregorian).unwrap())
        .map(|date| {
            let dst = is_central_europe_dst(date.year(), date.month(), date.day());
            (
                sun_clock_time(date, &location, 1, dst, SunEvent::Sunrise, &config),
                sun_clock_time(date, &location, 1, dst, SunEvent::Sunset, &config),
            )
        })
        .collect()
}

#[test]
fn mid_latitude_always_has_both_events() {
    let days = sweep(2023, GeoLocation::new(50.0, 11.0).unwrap());
    assert_eq!(days.len(), 365);
    for (i, (rise, set)) in days.iter().enumerate() {
        let rise = rise.as_ref().unwrap_or_else(|e| panic!("day {i}: {e}"));
        let set = set.as_ref().unwrap_or_else(|e| panic!("day {i}: {e}"));
        assert!(rise < set, "day {i}: sunrise {rise} not before sunset {set}");
        assert!(rise.hour() <= 23 && rise.minute() <= 59);
        assert!(set.hour() <= 23 && set.minute() <= 59);
    }
}

#[test]
fn sunrise_range_over_the_year() {
    let days = sweep(2023, GeoLocation::new(50.0, 11.0).unwrap());
    let rises: Vec<_> = days.iter().map(|(r, _)| *r.as_ref().unwrap()).collect();
    let earliest = rises.iter().min().unwrap();
    let latest = rises.iter().max().unwrap();
    // Summer time earliest just after 5 o'clock, winter latest just after 8.
    assert_eq!(earliest.hour(), 5);
    assert_eq!(latest.hour(), 8);
}

#[test]
fn arctic_year_has_polar_days_and_nights() {
    let days = sweep(2023, GeoLocation::new(78.2, 15.6).unwrap());
    let polar: Vec<Polar> = days
        .iter()
        .filter_map(|(rise, _)| match rise {
            Err(SolarError::PolarDayOrNight { polar, .. }) => Some(*polar),
            _ => None,
        })
        .collect();
    assert!(polar.contains(&Polar::Day));
    assert!(polar.contains(&Polar::Night));
    assert!(days.iter().any(|(rise, set)| rise.is_ok() && set.is_ok()));
}
