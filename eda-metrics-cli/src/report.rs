//! Report emission
//!
//! Loads the metrics row once and writes every requested report to the
//! output in order.

use eda_metrics::{load_metrics_to, render_report, ReportConfig};
use std::io::{self, Write};

/// Printed instead of any report when the metrics row is empty
pub const NO_METRICS: &str = "No metrics found. Please run OpenLane flow first.";

/// Write the configured reports to `out`
///
/// Returns `false` when no metrics were found, in which case `out` holds the
/// loader diagnostic (if any) followed by [`NO_METRICS`].
pub fn write_reports(config: &ReportConfig, out: &mut dyn Write) -> io::Result<bool> {
    let row = load_metrics_to(&config.metrics_path, out);

    if row.is_empty() {
        log::info!("No metrics available in {:?}", config.metrics_path);
        writeln!(out, "{}", NO_METRICS)?;
        return Ok(false);
    }

    for kind in &config.reports {
        log::info!("Printing {} report", kind);
        out.write_all(render_report(*kind, &row, &config.design_name).as_bytes())?;
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eda_metrics::ReportKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");
        let config = ReportConfig::new().with_metrics_path(&path);

        let mut out = Vec::new();
        let found = write_reports(&config, &mut out).unwrap();

        assert!(!found);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Error: {} not found\n{}\n", path.display(), NO_METRICS)
        );
    }

    #[test]
    fn test_header_only_file_output() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"design_name,wns\n").unwrap();
        temp_file.flush().unwrap();
        let config = ReportConfig::new().with_metrics_path(temp_file.path());

        let mut out = Vec::new();
        let found = write_reports(&config, &mut out).unwrap();

        assert!(!found);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", NO_METRICS));
    }

    #[test]
    fn test_reports_in_requested_order() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"design_name\nstepper_ctrl\n").unwrap();
        temp_file.flush().unwrap();
        let config = ReportConfig::new()
            .with_metrics_path(temp_file.path())
            .with_reports([ReportKind::Timing, ReportKind::Area]);

        let mut out = Vec::new();
        assert!(write_reports(&config, &mut out).unwrap());

        let text = String::from_utf8(out).unwrap();
        let timing = text.find("TIMING REPORT - STEPPER_CTRL DESIGN").unwrap();
        let area = text.find("AREA REPORT - STEPPER_CTRL DESIGN").unwrap();
        assert!(timing < area);
        assert!(!text.contains("POWER REPORT"));
    }
}
