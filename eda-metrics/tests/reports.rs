// End-to-end checks: metrics.csv on disk -> rendered report text
use eda_metrics::{load_metrics_to, read_metrics, render_report, MetricsRow, ReportConfig, ReportKind};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "design_name,config,flow_status,total_runtime,DIEAREA_mm^2,CoreArea_um^2,\
OpenDP_Util,TotalCells,CLOCK_PERIOD,critical_path_ns,suggested_clock_frequency,wns,tns,\
power_slowest_internal_uW,power_slowest_switching_uW,power_slowest_leakage_uW,\
power_typical_internal_uW,power_typical_switching_uW,power_typical_leakage_uW,\
power_fastest_internal_uW,power_fastest_switching_uW,power_fastest_leakage_uW,\
STD_CELL_LIBRARY,SYNTH_STRATEGY,Peak_Memory_Usage_MB";

const ROW: &str = "stepper_ctrl,RUN_2024.05.01,flow completed,0h2m13s0ms,0.0225,12345.678,\
41.2,2345,20.0,6.5,153.84,0.0,0.0,\
120.0,60.0,0.02,\
100.0,50.0,0.01,\
80.0,40.0,0.005,\
sky130_fd_sc_hd,AREA 0,612.4";

fn metrics_file(rows: &[&str]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(temp_file, "{}", row).unwrap();
    }
    temp_file.flush().unwrap();
    temp_file
}

fn render_all(row: &MetricsRow, config: &ReportConfig) -> String {
    config
        .reports
        .iter()
        .map(|kind| render_report(*kind, row, &config.design_name))
        .collect()
}

#[test]
fn test_second_row_is_ignored() {
    let file = metrics_file(&[ROW, "other,cfg,failed,,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,lib,s,1"]);
    let row = read_metrics(file.path()).unwrap();

    assert_eq!(row.display("design_name"), "stepper_ctrl");
    assert_eq!(row.display("flow_status"), "flow completed");
    assert_eq!(row.len(), HEADER.split(',').count());
}

#[test]
fn test_area_report_from_file() {
    let file = metrics_file(&[ROW]);
    let row = read_metrics(file.path()).unwrap();
    let text = render_report(ReportKind::Area, &row, "stepper_ctrl");

    let expected_head = "\
======================================================================
AREA REPORT - STEPPER_CTRL DESIGN
======================================================================

DESIGN INFORMATION:
----------------------------------------------------------------------
Design Name:          stepper_ctrl
Config:               RUN_2024.05.01
Flow Status:          flow completed
Total Runtime:        0h2m13s0ms

AREA METRICS:
----------------------------------------------------------------------
Die Area:             0.022500 mm²
Core Area:            12,346 µm² (0.012346 mm²)
Die Area (µm²):       22,500 µm²

UTILIZATION:
----------------------------------------------------------------------
OpenDP Utilization:   41.2%
Final Utilization:    N/A%
";
    assert_eq!(&text[..expected_head.len()], expected_head);

    let expected_tail = "\
FLOORPLAN:
----------------------------------------------------------------------
Aspect Ratio:         N/A
PDN H-Pitch:          N/A
PDN V-Pitch:          N/A

======================================================================
Standard Cell Library: sky130_fd_sc_hd
Peak Memory Usage:     612.4 MB
======================================================================
";
    assert!(text.ends_with(expected_tail), "unexpected tail:\n{}", text);
}

#[test]
fn test_power_report_from_file() {
    let file = metrics_file(&[ROW]);
    let row = read_metrics(file.path()).unwrap();
    let text = render_report(ReportKind::Power, &row, "stepper_ctrl");

    let expected_breakdown = "\
POWER BREAKDOWN (Typical Corner):
----------------------------------------------------------------------
Internal:              66.66% (1.000000e+02 µW)
Switching:             33.33% (5.000000e+01 µW)
Leakage:                0.01% (1.000000e-02 µW)

CORNER COMPARISON:
----------------------------------------------------------------------
Slowest Total:        1.800200e+02 µW (Reference: 100%)
Typical Total:        1.500100e+02 µW (83.3% of slowest)
Fastest Total:        1.200050e+02 µW (66.7% of slowest)
";
    assert!(text.contains(expected_breakdown), "unexpected report:\n{}", text);
    assert!(text.contains("\nLeakage % (Slowest):  0.0111% of total power\n"));
    assert!(text.contains("\nPower Density:        1.2151e+04 µW/mm²\n"));
}

#[test]
fn test_timing_report_from_file() {
    let file = metrics_file(&[ROW]);
    let row = read_metrics(file.path()).unwrap();
    let text = render_report(ReportKind::Timing, &row, "stepper_ctrl");

    let expected = "\
CLOCK CONSTRAINTS:
----------------------------------------------------------------------
Clock Period (ns):    20.0
Max Frequency (MHz):  153.84
Suggested Period:     N/A ns

CRITICAL PATH TIMING:
----------------------------------------------------------------------
Critical Path (ns):   6.5
Slack (ns):           13.500
Path Utilization:     32.5%

SLACK ANALYSIS:
----------------------------------------------------------------------
Post-Synthesis:
  WNS (Worst Neg Slack):  0.0 ns
  TNS (Total Neg Slack):  0.0 ns
";
    assert!(text.contains(expected), "unexpected report:\n{}", text);
}

#[test]
fn test_rendering_is_idempotent() {
    let file = metrics_file(&[ROW]);
    let row = read_metrics(file.path()).unwrap();
    let config = ReportConfig::new();

    let first = render_all(&row, &config);
    let second = render_all(&row, &config);
    assert_eq!(first, second);
}

#[test]
fn test_missing_file_yields_no_report_data() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig::new().with_metrics_path(dir.path().join("metrics.csv"));

    let mut diagnostics = Vec::new();
    let row = load_metrics_to(&config.metrics_path, &mut diagnostics);

    assert!(row.is_empty());
    assert_eq!(String::from_utf8(diagnostics).unwrap().lines().count(), 1);
}
