//! # suntable-calendar
//!
//! Gregorian calendar arithmetic used by the sunrise/sunset generator.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month)"] -->|"days_in_month_with()"| B["28..=31"]
//!     A -->|"month_days()"| C["MonthDays"]
//!     C -->|"Iterator"| D["CivilDate"]
//!     D -->|".julian_day_number()"| E["JDN"]
//!     E -->|"day_of_week()"| F["0 = Sunday .. 6"]
//!     F -->|"is_central_europe_dst()"| G["bool"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use suntable_calendar::{CivilDate, LeapRule, days_in_month, is_central_europe_dst, month_days};
//!
//! assert_eq!(days_in_month(2024, 2).unwrap(), 29);
//! assert!(is_central_europe_dst(2023, 6, 15));
//!
//! let date = CivilDate::new(2023, 3, 26).unwrap();
//! assert_eq!(date.to_string(), "2023-03-26");
//! assert_eq!(date.day_of_week(), 0);
//!
//! let march = month_days(2023, 3, LeapRule::Gregorian).unwrap();
//! assert_eq!(march.len(), 31);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Leap rules and month lengths |
//! | `weekday` | Julian day number and day-of-week |
//! | `dst` | Central-European summer time window |
//! | `date` | Validated civil date |
//! | `sequence` | Iteration over the days of a month |
//! | `error` | Error types |

mod date;
mod dst;
mod error;
mod month;
mod sequence;
mod weekday;

pub use date::CivilDate;
pub use dst::is_central_europe_dst;
pub use error::CalendarError;
pub use month::{LeapRule, days_in_month, days_in_month_with, days_in_year, is_leap_year};
pub use sequence::{MonthDays, month_days};
pub use weekday::{day_of_week, julian_day_number};
