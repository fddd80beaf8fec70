//! # suntable-store
//!
//! Writes generated day records into an existing SQLite database through a
//! caller-supplied insert statement, one transaction per year.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["open_store()"] --> B["Connection"]
//!     C["InsertTemplate::from_file()"] --> D["SqliteSink::new()"]
//!     B --> D
//!     E["DayRecords"] -->|"persist()"| D
//!     D -->|"BEGIN / INSERT x days / COMMIT per year"| F["SQLite"]
//!     D --> G["WriteReport"]
//! ```
//!
//! The insert statement binds seven positional values per row:
//! date `YYYY-MM-DD`, sunrise `HH:MM`, sunset `HH:MM`, latitude, longitude,
//! UTC offset and the summer time flag as 0/1.

mod error;
mod row;
mod sink;
mod sqlite;
mod template;

pub use error::StoreError;
pub use row::{DayRow, ROW_FIELDS};
pub use sink::{FailedDay, FailureCause, RowFailure, RowSink, WriteReport, persist};
pub use sqlite::{SqliteSink, open_store};
pub use template::InsertTemplate;
