//! Year-batched persistence of generated records.

use tracing::{debug, info, warn};

use suntable_calendar::CivilDate;
use suntable_dataset::{DayError, DayRecord};

use crate::error::StoreError;
use crate::row::DayRow;

/// Destination for persisted rows, driven one year at a time.
///
/// [`persist`] calls `begin_year`, then `write_row` for each day of that
/// year, then `commit_year`, and never has two years open at once.
/// After a [`RowFailure::RolledBack`] it calls `begin_year` again for the
/// same year and rewrites the rows that were lost.
pub trait RowSink {
    /// Opens the transaction for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TransactionBegin`]; the run is aborted.
    fn begin_year(&mut self, year: i32) -> Result<(), StoreError>;

    /// Writes one row inside the open transaction.
    ///
    /// # Errors
    ///
    /// Returns [`RowFailure::RolledBack`] if the failure also ended the
    /// year's transaction, otherwise [`RowFailure::Rejected`].
    fn write_row(&mut self, row: &DayRow) -> Result<(), RowFailure>;

    /// Commits the transaction for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TransactionCommit`]; the run is aborted.
    fn commit_year(&mut self, year: i32) -> Result<(), StoreError>;
}

/// Why a single insert failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowFailure {
    /// Only this row was refused; the transaction is still open.
    Rejected(String),
    /// The store rolled back the whole transaction along with this row.
    RolledBack(String),
}

impl RowFailure {
    /// Returns the store's description of the failure.
    pub fn reason(&self) -> &str {
        match self {
            Self::Rejected(reason) | Self::RolledBack(reason) => reason,
        }
    }
}

/// A day that produced no row.
#[derive(Debug)]
pub struct FailedDay {
    /// Zero-based position of the day in the run.
    pub index: usize,
    /// The day's date.
    pub date: CivilDate,
    /// Why no row was written.
    pub cause: FailureCause,
}

/// Why a day produced no row.
#[derive(Debug)]
pub enum FailureCause {
    /// The record could not be generated.
    Generate(DayError),
    /// The insert failed; carries [`StoreError::RowWrite`].
    Write(StoreError),
}

impl std::fmt::Display for FailureCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generate(e) => write!(f, "{e}"),
            Self::Write(e) => write!(f, "{e}"),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct WriteReport {
    written: usize,
    years_committed: usize,
    failed: Vec<FailedDay>,
}

impl WriteReport {
    /// Returns the number of rows written.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Returns the number of committed year transactions.
    pub fn years_committed(&self) -> usize {
        self.years_committed
    }

    /// Returns the days that produced no row, in run order.
    pub fn failed(&self) -> &[FailedDay] {
        &self.failed
    }

    /// Returns the run positions of the days that produced no row.
    pub fn failed_indices(&self) -> Vec<usize> {
        self.failed.iter().map(|f| f.index).collect()
    }

    /// Returns `true` if every day was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Persists an ordered record stream, one transaction per year.
///
/// The stream must be ordered by date; a transaction is opened on the first
/// item of each year and committed when the next year begins or the stream
/// ends. Days that failed to generate and rows that failed to insert are
/// recorded in the report and logged, and do not stop the run.
///
/// A row failure that rolls back the open transaction reopens the year and
/// rewrites the rows already written for it, so every row of a year is
/// still committed together.
///
/// # Errors
///
/// Returns [`StoreError::TransactionBegin`] or
/// [`StoreError::TransactionCommit`] from the sink, or
/// [`StoreError::YearReplay`] if rewriting a rolled-back year fails; years
/// committed before the failure stay in the store.
pub fn persist<S, I>(sink: &mut S, records: I) -> Result<WriteReport, StoreError>
where
    S: RowSink + ?Sized,
    I: IntoIterator<Item = Result<DayRecord, DayError>>,
{
    let mut report = WriteReport::default();
    let mut open_year: Option<i32> = None;
    let mut year_rows: Vec<DayRow> = Vec::new();

    for (index, item) in records.into_iter().enumerate() {
        let date = match &item {
            Ok(record) => record.date(),
            Err(e) => e.date(),
        };

        if open_year != Some(date.year()) {
            if let Some(year) = open_year.take() {
                sink.commit_year(year)?;
                report.years_committed += 1;
                debug!(year, "year committed");
            }
            sink.begin_year(date.year())?;
            open_year = Some(date.year());
            year_rows.clear();
        }

        let cause = match item {
            Ok(record) => {
                let row = DayRow::from(&record);
                match sink.write_row(&row) {
                    Ok(()) => {
                        report.written += 1;
                        year_rows.push(row);
                        continue;
                    }
                    Err(failure) => {
                        if matches!(failure, RowFailure::RolledBack(_)) {
                            replay_year(sink, date.year(), &year_rows)?;
                        }
                        FailureCause::Write(StoreError::RowWrite {
                            date,
                            reason: failure.reason().to_string(),
                        })
                    }
                }
            }
            Err(e) => FailureCause::Generate(e),
        };
        warn!(index, %date, error = %cause, "day not written");
        report.failed.push(FailedDay { index, date, cause });
    }

    if let Some(year) = open_year {
        sink.commit_year(year)?;
        report.years_committed += 1;
        debug!(year, "year committed");
    }

    info!(
        written = report.written,
        failed = report.failed.len(),
        years = report.years_committed,
        "persistence finished"
    );
    Ok(report)
}

/// Reopens `year` after a rollback and rewrites the rows it had received.
fn replay_year<S>(sink: &mut S, year: i32, rows: &[DayRow]) -> Result<(), StoreError>
where
    S: RowSink + ?Sized,
{
    warn!(year, rows = rows.len(), "transaction rolled back, rewriting year");
    sink.begin_year(year)?;
    for row in rows {
        sink.write_row(row)
            .map_err(|failure| StoreError::YearReplay {
                year,
                reason: format!("{}: {}", row.date, failure.reason()),
            })?;
    }
    Ok(())
}
