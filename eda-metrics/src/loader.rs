//! metrics.csv loader
//!
//! A flow `metrics.csv` has one header row and one data row. Only the first
//! data row is ever read; anything after it is ignored.

use crate::types::{MetricsError, MetricsRow, Result};
use std::io::{self, Write};
use std::path::Path;

/// Read the first data row of a metrics CSV
///
/// Rows shorter than the header only yield the columns they have; surplus
/// cells past the header are dropped. A file with a header but no data rows
/// yields an empty row.
///
/// # Errors
/// * [`MetricsError::FileNotFound`] if `path` does not exist
/// * [`MetricsError::Csv`] if the file cannot be read or parsed
pub fn read_metrics(path: &Path) -> Result<MetricsRow> {
    log::info!("Reading metrics file: {:?}", path);

    if !path.exists() {
        return Err(MetricsError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut record = csv::StringRecord::new();

    if !reader.read_record(&mut record)? {
        log::info!("Metrics file has no data rows: {:?}", path);
        return Ok(MetricsRow::new());
    }

    let row: MetricsRow = headers.iter().zip(record.iter()).collect();

    log::debug!(
        "Loaded {} metrics ({} header columns) from {:?}",
        row.len(),
        headers.len(),
        path
    );

    Ok(row)
}

/// Load the first data row of a metrics CSV, never failing
///
/// A missing file prints `Error: <path> not found` on stdout and yields an
/// empty row. See [`load_metrics_to`].
pub fn load_metrics(path: &Path) -> MetricsRow {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    load_metrics_to(path, &mut handle)
}

/// Load the first data row of a metrics CSV, writing diagnostics to `out`
///
/// Every failure degrades to an empty row. A missing file writes exactly one
/// diagnostic line to `out`; other read errors are only logged.
pub fn load_metrics_to(path: &Path, out: &mut dyn Write) -> MetricsRow {
    match read_metrics(path) {
        Ok(row) => row,
        Err(MetricsError::FileNotFound(missing)) => {
            log::debug!("Metrics file not found: {:?}", missing);
            if let Err(e) = writeln!(out, "Error: {} not found", missing.display()) {
                log::warn!("Failed to write diagnostic: {}", e);
            }
            MetricsRow::new()
        }
        Err(e) => {
            log::warn!("Failed to read metrics from {:?}: {}", path, e);
            MetricsRow::new()
        }
    }
}
