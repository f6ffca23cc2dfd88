use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Every condition that ends a dashboard run early.
///
/// Load errors stop the run before anything is drawn; range errors skip the
/// charts for that run only.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Data file not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    #[error("Could not read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("Row {row}: cannot parse date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { row: usize, value: String },

    #[error("Please select a valid date range: pick both a start and an end date ({picked} picked).")]
    IncompleteRange { picked: usize },

    #[error("Please select a valid date range: start {start} is after end {end}.")]
    ReversedRange { start: NaiveDate, end: NaiveDate },
}
