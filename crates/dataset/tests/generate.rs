use suntable_calendar::LeapRule;
use suntable_dataset::{DatasetGenerator, DayError, DayRecord, GeneratorConfig};
use suntable_solar::{GeoLocation, SolarError};

fn bamberg() -> GeoLocation {
    GeoLocation::new(50.0, 11.0).unwrap()
}

fn records(config: GeneratorConfig) -> Vec<DayRecord> {
    DatasetGenerator::new(config)
        .unwrap()
        .records()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn year_2023_is_complete_and_ordered() {
    let days = records(GeneratorConfig::new(2023, 2023, bamberg()).with_utc_offset(1));
    assert_eq!(days.len(), 365);
    assert!(days.windows(2).all(|w| w[0].date() < w[1].date()));

    for day in &days {
        let rise = day.sunrise().to_string();
        let set = day.sunset().to_string();
        assert_eq!(rise.len(), 5, "{}", day.date());
        assert_eq!(set.len(), 5, "{}", day.date());
        assert_eq!(&rise[2..3], ":");
        assert!(day.sunrise().hour() <= 23 && day.sunrise().minute() <= 59);
        assert!(day.sunset().hour() <= 23 && day.sunset().minute() <= 59);
        assert_eq!(day.utc_offset(), 1);
        assert_eq!(day.location(), bamberg());
    }

    assert_eq!(days[0].date().to_string(), "2023-01-01");
    assert_eq!(days[364].date().to_string(), "2023-12-31");
}

#[test]
fn dst_flags_follow_the_2023_switch_days() {
    let days = records(GeneratorConfig::new(2023, 2023, bamberg()));
    let dst_days: Vec<_> = days.iter().filter(|d| d.is_dst()).collect();
    assert_eq!(dst_days.first().unwrap().date().to_string(), "2023-03-26");
    assert_eq!(dst_days.last().unwrap().date().to_string(), "2023-10-28");
    // 2023-03-26 ..= 2023-10-28
    assert_eq!(dst_days.len(), 217);
}

#[test]
fn leap_rule_controls_february_29() {
    let gregorian = records(GeneratorConfig::new(2024, 2024, bamberg()));
    assert_eq!(gregorian.len(), 366);
    assert_eq!(gregorian[59].date().to_string(), "2024-02-29");

    let compat = records(
        GeneratorConfig::new(2024, 2024, bamberg()).with_leap_rule(LeapRule::SourceCompatible),
    );
    assert_eq!(compat.len(), 365);
    assert_eq!(compat[59].date().to_string(), "2024-03-01");
}

#[test]
fn multi_year_stays_ordered() {
    let days = records(GeneratorConfig::new(1999, 2001, bamberg()));
    assert_eq!(days.len(), 365 + 366 + 365);
    assert!(days.windows(2).all(|w| w[0].date() < w[1].date()));
    assert_eq!(days[365].date().to_string(), "2000-01-01");
}

#[test]
fn from_after_until_is_empty() {
    let generator = DatasetGenerator::new(GeneratorConfig::new(2025, 2020, bamberg())).unwrap();
    assert_eq!(generator.records().count(), 0);
}

#[test]
fn polar_days_are_reported_and_skipped_over() {
    let svalbard = GeoLocation::new(78.2, 15.6).unwrap();
    let generator = DatasetGenerator::new(GeneratorConfig::new(2023, 2023, svalbard)).unwrap();
    let all: Vec<_> = generator.records().collect();

    // Every day is still visited, in order.
    assert_eq!(all.len(), generator.day_count());
    let dates: Vec<_> = all
        .iter()
        .map(|r| match r {
            Ok(record) => record.date(),
            Err(e) => e.date(),
        })
        .collect();
    assert!(dates.windows(2).all(|w| w[0] < w[1]));

    let failures: Vec<&DayError> = all.iter().filter_map(|r| r.as_ref().err()).collect();
    assert!(!failures.is_empty());
    assert!(failures.iter().all(|e| matches!(
        e,
        DayError::NoSunEvent {
            source: SolarError::PolarDayOrNight { .. },
            ..
        }
    )));
    assert!(all.iter().any(Result::is_ok));
}
