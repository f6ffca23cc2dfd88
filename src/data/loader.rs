use std::path::Path;

use crate::error::{DashboardError, Result};

use super::model::RawTable;

/// Read the source CSV into a [`RawTable`].
///
/// A missing file is reported as [`DashboardError::SourceMissing`] carrying
/// the attempted path. No other locations are tried.
pub fn load_csv(path: &Path) -> Result<RawTable> {
    if !path.is_file() {
        return Err(DashboardError::SourceMissing {
            path: path.to_path_buf(),
        });
    }

    let csv_err = |source: csv::Error| DashboardError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(csv_err)?;

    log::info!("Read {} rows from {}", records.len(), path.display());

    Ok(RawTable {
        path: path.to_path_buf(),
        headers,
        records,
    })
}
