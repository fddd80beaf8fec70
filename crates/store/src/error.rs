//! Error types for suntable-store.

use std::path::PathBuf;

use suntable_calendar::CivilDate;

/// Error type for all fallible operations in the suntable-store crate.
///
/// `StoreUnopenable`, `TemplateUnreadable` and `StatementPrepare` happen
/// before any row is written. `TransactionBegin`, `TransactionCommit` and
/// `YearReplay` abort a run; `RowWrite` is only ever recorded in a
/// [`WriteReport`](crate::WriteReport).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database file is missing or is not a database.
    #[error("unable to open or locate store {}: {reason}", path.display())]
    StoreUnopenable {
        /// Path that was opened.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// The insert template file could not be read or is empty.
    #[error("unable to load insert template from {}: {reason}", path.display())]
    TemplateUnreadable {
        /// Path to the template file.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// The insert template did not compile.
    #[error("unable to prepare insert statement: {reason}")]
    StatementPrepare {
        /// Description of the underlying failure.
        reason: String,
    },

    /// The insert template has the wrong number of placeholders.
    #[error("insert statement has {got} placeholder(s), expected {expected}")]
    PlaceholderCount {
        /// Number of placeholders a row binds.
        expected: usize,
        /// Number of placeholders found in the template.
        got: usize,
    },

    /// A year's transaction could not be started.
    #[error("unable to start transaction for {year}: {reason}")]
    TransactionBegin {
        /// Year whose transaction failed.
        year: i32,
        /// Description of the underlying failure.
        reason: String,
    },

    /// A year's transaction could not be committed.
    #[error("unable to commit transaction for {year}: {reason}")]
    TransactionCommit {
        /// Year whose transaction failed.
        year: i32,
        /// Description of the underlying failure.
        reason: String,
    },

    /// A year whose transaction was rolled back could not be rewritten.
    #[error("unable to rewrite {year} after rollback: {reason}")]
    YearReplay {
        /// Year being rewritten.
        year: i32,
        /// Row that failed and the underlying failure.
        reason: String,
    },

    /// A single row could not be written.
    #[error("failed to insert row for {date}: {reason}")]
    RowWrite {
        /// Date of the row.
        date: CivilDate,
        /// Description of the underlying failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_store_unopenable() {
        let err = StoreError::StoreUnopenable {
            path: PathBuf::from("/tmp/missing.db"),
            reason: "unable to open database file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to open or locate store /tmp/missing.db: unable to open database file"
        );
    }

    #[test]
    fn display_template_unreadable() {
        let err = StoreError::TemplateUnreadable {
            path: PathBuf::from("insert.sql"),
            reason: "file is empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to load insert template from insert.sql: file is empty"
        );
    }

    #[test]
    fn display_placeholder_count() {
        let err = StoreError::PlaceholderCount {
            expected: 7,
            got: 6,
        };
        assert_eq!(
            err.to_string(),
            "insert statement has 6 placeholder(s), expected 7"
        );
    }

    #[test]
    fn display_transaction_errors() {
        let begin = StoreError::TransactionBegin {
            year: 2023,
            reason: "database is locked".to_string(),
        };
        assert_eq!(
            begin.to_string(),
            "unable to start transaction for 2023: database is locked"
        );
        let commit = StoreError::TransactionCommit {
            year: 2024,
            reason: "disk I/O error".to_string(),
        };
        assert_eq!(
            commit.to_string(),
            "unable to commit transaction for 2024: disk I/O error"
        );
    }

    #[test]
    fn display_year_replay() {
        let err = StoreError::YearReplay {
            year: 2023,
            reason: "2023-01-01: disk I/O error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to rewrite 2023 after rollback: 2023-01-01: disk I/O error"
        );
    }

    #[test]
    fn display_row_write() {
        let err = StoreError::RowWrite {
            date: CivilDate::new(2023, 5, 4).unwrap(),
            reason: "UNIQUE constraint failed: sun.date".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to insert row for 2023-05-04: UNIQUE constraint failed: sun.date"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<StoreError>();
    }
}
