//! SQLite-backed row sink.

use std::path::Path;

use rusqlite::{Connection, OpenFlags, Statement, params};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::row::{DayRow, ROW_FIELDS};
use crate::sink::{RowFailure, RowSink};
use crate::template::InsertTemplate;

/// Opens an existing SQLite database for writing.
///
/// The file is never created, and its header is read once so that a file
/// that is not a database is rejected here rather than on the first insert.
///
/// # Errors
///
/// Returns [`StoreError::StoreUnopenable`] if the file is missing, cannot be
/// opened read-write, or is not a SQLite database.
pub fn open_store(path: &Path) -> Result<Connection, StoreError> {
    let unopenable = |e: rusqlite::Error| StoreError::StoreUnopenable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags).map_err(unopenable)?;
    conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
        .map_err(unopenable)?;
    debug!(path = %path.display(), "store opened");
    Ok(conn)
}

/// Writes rows through one prepared insert statement, one transaction per year.
pub struct SqliteSink<'conn> {
    conn: &'conn Connection,
    insert: Statement<'conn>,
}

impl<'conn> SqliteSink<'conn> {
    /// Prepares `template` on `conn`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StatementPrepare`] if the statement does not
    /// compile, or [`StoreError::PlaceholderCount`] if it does not take
    /// exactly seven parameters.
    pub fn new(conn: &'conn Connection, template: &InsertTemplate) -> Result<Self, StoreError> {
        let insert = conn
            .prepare(template.sql())
            .map_err(|e| StoreError::StatementPrepare {
                reason: e.to_string(),
            })?;
        let got = insert.parameter_count();
        if got != ROW_FIELDS {
            return Err(StoreError::PlaceholderCount {
                expected: ROW_FIELDS,
                got,
            });
        }
        Ok(Self { conn, insert })
    }
}

impl RowSink for SqliteSink<'_> {
    fn begin_year(&mut self, year: i32) -> Result<(), StoreError> {
        self.conn
            .execute_batch("BEGIN TRANSACTION;")
            .map_err(|e| StoreError::TransactionBegin {
                year,
                reason: e.to_string(),
            })
    }

    fn write_row(&mut self, row: &DayRow) -> Result<(), RowFailure> {
        let result = self.insert.execute(params![
            row.date,
            row.sunrise,
            row.sunset,
            row.latitude,
            row.longitude,
            row.utc_offset,
            row.dst,
        ]);
        match result {
            Ok(_) => Ok(()),
            // OR ROLLBACK conflicts, SQLITE_FULL and I/O errors end the transaction.
            Err(e) if self.conn.is_autocommit() => Err(RowFailure::RolledBack(e.to_string())),
            Err(e) => Err(RowFailure::Rejected(e.to_string())),
        }
    }

    fn commit_year(&mut self, year: i32) -> Result<(), StoreError> {
        let result = self.conn.execute_batch("COMMIT TRANSACTION;");
        if let Err(e) = result {
            if !self.conn.is_autocommit() {
                if let Err(rollback) = self.conn.execute_batch("ROLLBACK TRANSACTION;") {
                    warn!(year, error = %rollback, "rollback after failed commit also failed");
                }
            }
            return Err(StoreError::TransactionCommit {
                year,
                reason: e.to_string(),
            });
        }
        Ok(())
    }
}
