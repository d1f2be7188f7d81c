//! Report configuration types
//!
//! This module defines where the metrics come from, which design name goes
//! in the banners, and which reports are rendered. Defaults reproduce the
//! stepper controller flow layout.

use crate::types::ReportKind;
use std::path::PathBuf;

/// Default location of the flow metrics file
pub const DEFAULT_METRICS_PATH: &str = "/workspaces/stepper_motor/reports/stepper_ctrl/metrics.csv";

/// Default design name shown in report banners
pub const DEFAULT_DESIGN_NAME: &str = "stepper_ctrl";

/// Configuration for a reporting run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Path to the flow `metrics.csv`
    pub metrics_path: PathBuf,

    /// Design name, printed upper-cased in each banner
    pub design_name: String,

    /// Reports to render, in order
    pub reports: Vec<ReportKind>,
}

fn default_metrics_path() -> PathBuf {
    PathBuf::from(DEFAULT_METRICS_PATH)
}

fn default_design_name() -> String {
    DEFAULT_DESIGN_NAME.to_string()
}

fn default_reports() -> Vec<ReportKind> {
    ReportKind::ALL.to_vec()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            metrics_path: default_metrics_path(),
            design_name: default_design_name(),
            reports: default_reports(),
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the metrics file path
    pub fn with_metrics_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.metrics_path = path.into();
        self
    }

    /// Builder method: set the design name
    pub fn with_design_name(mut self, name: impl Into<String>) -> Self {
        self.design_name = name.into();
        self
    }

    /// Builder method: replace the report list
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn with_reports(mut self, reports: impl IntoIterator<Item = ReportKind>) -> Self {
        self.reports.clear();
        for kind in reports {
            if !self.reports.contains(&kind) {
                self.reports.push(kind);
            }
        }
        self
    }

    /// Banner title for a report, e.g. `AREA REPORT - STEPPER_CTRL DESIGN`
    pub fn banner_title(&self, kind: ReportKind) -> String {
        crate::report::banner_title(kind, &self.design_name)
    }
}
