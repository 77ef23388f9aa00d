//! Per-row scanning of raw query results.
//!
//! Repositories fetch rows with `query_all_raw` and turn each one into a fixed-shape
//! record. Scanning happens lazily, one row at a time, and its outcome is explicit: a
//! row either yields a record or is skipped with the error that prevented it.

use sea_orm::{DbErr, QueryResult};

/// Maps a single result row into a record.
pub trait ScanRow: Sized {
    fn scan_row(row: &QueryResult) -> Result<Self, DbErr>;
}

/// Outcome of scanning one row.
#[derive(Debug)]
pub enum RowScan<T> {
    /// The row mapped cleanly.
    Record(T),
    /// The row could not be mapped and is dropped from the result.
    Skipped(DbErr),
}

/// Lazily scans every row into `T`.
pub fn scan_rows<T: ScanRow>(rows: Vec<QueryResult>) -> impl Iterator<Item = RowScan<T>> {
    rows.into_iter().map(|row| match T::scan_row(&row) {
        Ok(record) => RowScan::Record(record),
        Err(err) => RowScan::Skipped(err),
    })
}

/// Scans every row into `T`, logging and dropping rows that fail to scan.
///
/// # Arguments
/// - `table` - Table name used in the log message
/// - `rows` - Rows returned by the query
pub fn collect_records<T: ScanRow>(table: &str, rows: Vec<QueryResult>) -> Vec<T> {
    scan_rows(rows)
        .filter_map(|outcome| match outcome {
            RowScan::Record(record) => Some(record),
            RowScan::Skipped(err) => {
                tracing::warn!("Skipping {} row that failed to scan: {}", table, err);
                None
            }
        })
        .collect()
}
