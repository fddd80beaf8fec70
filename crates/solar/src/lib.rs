//! # suntable-solar
//!
//! Local clock times of sunrise and sunset for a date and an observer
//! position, using the almanac approximation with a configurable zenith.
//!
//! ## Quick Start
//!
//! ```
//! use suntable_calendar::CivilDate;
//! use suntable_solar::{GeoLocation, SolarConfig, SunEvent, sun_clock_time};
//!
//! let date = CivilDate::new(2023, 1, 15).unwrap();
//! let here = GeoLocation::new(50.0, 11.0).unwrap();
//! let config = SolarConfig::default();
//!
//! let sunset = sun_clock_time(date, &here, 1, false, SunEvent::Sunset, &config).unwrap();
//! assert_eq!(sunset.to_string(), "16:42");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `sun_time` | Sunrise/sunset calculation |
//! | `clock` | Fractional hours to `HH:MM` |
//! | `location` | Validated observer position |
//! | `config` | Zenith angle |
//! | `error` | Error types, including the polar day/night condition |

mod clock;
mod config;
mod error;
mod location;
mod sun_time;

pub use clock::ClockTime;
pub use config::{DEFAULT_ZENITH, SolarConfig};
pub use error::{Polar, SolarError};
pub use location::GeoLocation;
pub use sun_time::{SunEvent, approximate_day_of_year, calc_sun_time, sun_clock_time};
