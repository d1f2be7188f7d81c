//! EDA Metrics Reporter CLI Application
//!
//! This is the command-line interface for the metrics reporter.
//! It uses the eda-metrics library and adds:
//! - Report selection (area, power, timing)
//! - TOML configuration with command-line overrides
//! - Logging setup

use anyhow::Result;
use clap::{Parser, ValueEnum};
use eda_metrics::{ReportConfig, ReportKind};
use std::io;
use std::path::PathBuf;

mod config;
mod report;

/// EDA Metrics Reporter - Print area, power and timing reports
#[derive(Parser, Debug)]
#[command(name = "eda-metrics-cli")]
#[command(about = "Print area, power and timing reports from a flow metrics.csv", long_about = None)]
#[command(version)]
struct Args {
    /// Reports to print (default: area, power and timing)
    #[arg(value_enum, value_name = "REPORT")]
    reports: Vec<ReportArg>,

    /// Path to the flow metrics.csv
    #[arg(short, long, value_name = "FILE")]
    metrics: Option<PathBuf>,

    /// Design name shown in report banners
    #[arg(short, long, value_name = "NAME")]
    design: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Exit with an error when no metrics were found
    #[arg(long)]
    strict: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Report names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportArg {
    Area,
    Power,
    Timing,
    All,
}

impl ReportArg {
    fn kinds(self) -> &'static [ReportKind] {
        match self {
            ReportArg::Area => &[ReportKind::Area],
            ReportArg::Power => &[ReportKind::Power],
            ReportArg::Timing => &[ReportKind::Timing],
            ReportArg::All => &ReportKind::ALL,
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("EDA Metrics Reporter v{}", eda_metrics::VERSION);

    let config = resolve_config(&args)?;
    log::debug!("Resolved configuration: {:?}", config);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let found = report::write_reports(&config, &mut handle)?;

    if !found && args.strict {
        anyhow::bail!("no metrics found in {:?}", config.metrics_path);
    }

    Ok(())
}

/// Merge defaults, the optional config file and command-line overrides
fn resolve_config(args: &Args) -> Result<ReportConfig> {
    let mut resolved = ReportConfig::new();

    if let Some(config_path) = &args.config {
        log::info!("Loading configuration from: {:?}", config_path);
        resolved = config::load_config(config_path)?.apply(resolved);
    }

    if let Some(metrics) = &args.metrics {
        resolved = resolved.with_metrics_path(metrics.clone());
    }
    if let Some(design) = &args.design {
        resolved = resolved.with_design_name(design.clone());
    }
    if !args.reports.is_empty() {
        let kinds: Vec<ReportKind> = args
            .reports
            .iter()
            .flat_map(|arg| arg.kinds().iter().copied())
            .collect();
        resolved = resolved.with_reports(kinds);
    }

    Ok(resolved)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("eda-metrics-cli").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_without_arguments() {
        let config = resolve_config(&parse(&[])).unwrap();
        assert_eq!(config, ReportConfig::new());
    }

    #[test]
    fn test_report_selection() {
        let config = resolve_config(&parse(&["power", "all", "area"])).unwrap();
        assert_eq!(
            config.reports,
            vec![ReportKind::Power, ReportKind::Area, ReportKind::Timing]
        );

        assert!(Args::try_parse_from(["eda-metrics-cli", "drc"]).is_err());
    }

    #[test]
    fn test_command_line_overrides_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[input]\nmetrics = \"from_config.csv\"\n\n[design]\nname = \"pwm_gen\"\n\n[output]\nreports = [\"timing\"]\n",
            )
            .unwrap();
        temp_file.flush().unwrap();
        let config_path = temp_file.path().to_str().unwrap();

        let from_file = resolve_config(&parse(&["-c", config_path])).unwrap();
        assert_eq!(from_file.metrics_path, PathBuf::from("from_config.csv"));
        assert_eq!(from_file.design_name, "pwm_gen");
        assert_eq!(from_file.reports, vec![ReportKind::Timing]);

        let overridden = resolve_config(&parse(&[
            "-c",
            config_path,
            "--metrics",
            "cli.csv",
            "--design",
            "stepper_ctrl",
            "area",
        ]))
        .unwrap();
        assert_eq!(overridden.metrics_path, PathBuf::from("cli.csv"));
        assert_eq!(overridden.design_name, "stepper_ctrl");
        assert_eq!(overridden.reports, vec![ReportKind::Area]);
    }

    #[test]
    fn test_invalid_config_file_is_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[output\n").unwrap();
        temp_file.flush().unwrap();

        let args = parse(&["-c", temp_file.path().to_str().unwrap()]);
        assert!(resolve_config(&args).is_err());
    }
}
