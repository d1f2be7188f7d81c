//! Core types for the EDA metrics reporter
//!
//! This module defines the row type produced by the loader, the set of
//! reports the library knows how to render, and the error type returned by
//! the strict loading primitives.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Result type for metrics operations
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Placeholder printed for display-only fields that are missing from the row
pub const NOT_AVAILABLE: &str = "N/A";

/// One data row of a flow `metrics.csv`, keyed by column name
///
/// Values are kept exactly as they appear in the file. Numeric fields are
/// coerced by the report that reads them, see [`MetricsRow::number`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsRow {
    values: HashMap<String, String>,
}

impl MetricsRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a column value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw value of a column, `None` if the column is absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Raw value of a column, or `N/A` if the column is absent
    ///
    /// A column that is present but empty is returned as the empty string.
    pub fn display(&self, key: &str) -> &str {
        self.get(key).unwrap_or(NOT_AVAILABLE)
    }

    /// Numeric value of a column, `0.0` when absent or not a number
    pub fn number(&self, key: &str) -> f64 {
        crate::value::coerce(self.get(key))
    }

    /// Number of columns in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the row holds no columns (missing file or no data rows)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MetricsRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The reports that can be rendered from a metrics row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Die/core area, utilization, cell and gate counts
    Area,
    /// Per-corner power with breakdown and density
    Power,
    /// Clock, slack and path analysis
    Timing,
}

impl ReportKind {
    /// Every report, in the order they are printed by default
    pub const ALL: [ReportKind; 3] = [ReportKind::Area, ReportKind::Power, ReportKind::Timing];

    /// Upper-case name used in the report banner
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Area => "AREA",
            ReportKind::Power => "POWER",
            ReportKind::Timing => "TIMING",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Area => write!(f, "area"),
            ReportKind::Power => write!(f, "power"),
            ReportKind::Timing => write!(f, "timing"),
        }
    }
}

impl FromStr for ReportKind {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "area" => Ok(ReportKind::Area),
            "power" => Ok(ReportKind::Power),
            "timing" => Ok(ReportKind::Timing),
            other => Err(MetricsError::UnknownReport(other.to_string())),
        }
    }
}

/// Errors that can occur while reading a metrics file
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("{}: not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to parse metrics CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown report: {0}")]
    UnknownReport(String),
}
