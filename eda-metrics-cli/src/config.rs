//! Configuration loading and parsing
//!
//! Every table and key in the file is optional; whatever is set overrides
//! the library defaults, and command-line options override the file.

use anyhow::{Context, Result};
use eda_metrics::{ReportConfig, ReportKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub design: DesignConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    /// Path to the flow metrics.csv
    pub metrics: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DesignConfig {
    /// Design name used in report banners
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Reports to print, in order
    pub reports: Option<Vec<ReportKind>>,
}

impl AppConfig {
    /// Overlay the values set in this file onto `base`
    pub fn apply(&self, mut base: ReportConfig) -> ReportConfig {
        if let Some(path) = &self.input.metrics {
            base = base.with_metrics_path(path.clone());
        }
        if let Some(name) = &self.design.name {
            base = base.with_design_name(name.clone());
        }
        if let Some(reports) = &self.output.reports {
            base = base.with_reports(reports.iter().copied());
        }
        base
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
