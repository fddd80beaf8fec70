//! # suntable-dataset
//!
//! Turns a year range and a location into an ordered stream of per-day
//! sunrise/sunset records.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["GeneratorConfig"] -->|"DatasetGenerator::new()"| B["DatasetGenerator"]
//!     B -->|".records()"| C["DayRecords"]
//!     C -->|"per day"| D["is_central_europe_dst()"]
//!     C -->|"per day"| E["sun_clock_time() x2"]
//!     D --> F["DayRecordBuilder"]
//!     E --> F
//!     F -->|".build()"| G["Result of DayRecord, DayError"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use suntable_dataset::{DatasetGenerator, GeneratorConfig};
//! use suntable_solar::GeoLocation;
//!
//! let here = GeoLocation::new(50.0, 11.0).unwrap();
//! let generator = DatasetGenerator::new(GeneratorConfig::new(2023, 2023, here)).unwrap();
//!
//! let first = generator.records().next().unwrap().unwrap();
//! assert_eq!(first.date().to_string(), "2023-01-01");
//! assert_eq!(generator.records().count(), 365);
//! ```

mod config;
mod error;
mod generator;
mod record;

pub use config::{GeneratorConfig, MAX_YEAR, MIN_YEAR};
pub use error::{DatasetError, DayError};
pub use generator::{DatasetGenerator, DayRecords};
pub use record::{DayRecord, DayRecordBuilder};
