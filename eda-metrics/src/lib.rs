//! EDA Metrics Reporter Library
//!
//! Reads the single-row `metrics.csv` written by an OpenLane-style ASIC flow
//! and renders fixed-layout area, power and timing reports from it.
//!
//! # Architecture
//!
//! Each report is a two-stage pipeline:
//! - The loader reads the header and first data row into a [`MetricsRow`]
//! - A formatter turns that row into report text through the shared
//!   [`report::ReportWriter`], using declarative field tables for the lines
//!   that print a column unchanged
//!
//! Missing files and malformed values never fail a run: a missing file
//! yields an empty row, a missing or non-numeric value prints `N/A` (display
//! fields) or counts as `0.0` (derived figures).
//!
//! # Example Usage
//!
//! ```no_run
//! use eda_metrics::{load_metrics, render_report, ReportConfig, ReportKind};
//!
//! let config = ReportConfig::new()
//!     .with_metrics_path("reports/stepper_ctrl/metrics.csv")
//!     .with_reports([ReportKind::Area, ReportKind::Timing]);
//!
//! let row = load_metrics(&config.metrics_path);
//! if !row.is_empty() {
//!     for kind in &config.reports {
//!         print!("{}", render_report(*kind, &row, &config.design_name));
//!     }
//! }
//! ```

// Public modules
pub mod config;
pub mod loader;
pub mod report;
pub mod types;
pub mod value;

// Re-export main types for convenience
pub use config::{ReportConfig, DEFAULT_DESIGN_NAME, DEFAULT_METRICS_PATH};
pub use loader::{load_metrics, load_metrics_to, read_metrics};
pub use report::render as render_report;
pub use types::{MetricsError, MetricsRow, ReportKind, Result, NOT_AVAILABLE};
pub use value::coerce;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
