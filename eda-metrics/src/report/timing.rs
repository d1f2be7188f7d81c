//! Timing report
//!
//! Clock constraints, critical path, per-stage slack and circuit
//! complexity. Slack and path utilization are only printed when both the
//! critical path and the clock period are positive numbers; otherwise those
//! lines are left out rather than shown as `N/A`.

use super::{Column, Field, ReportWriter, DESIGN_INFO};
use crate::types::MetricsRow;
use crate::value::fixed;

const CLOCK_CONSTRAINTS: &[Field] = &[
    Field::new("Clock Period (ns):", "CLOCK_PERIOD"),
    Field::new("Max Frequency (MHz):", "suggested_clock_frequency"),
    Field::with_unit("Suggested Period:", "suggested_clock_period", " ns"),
];

/// Sub-blocks of SLACK ANALYSIS: stage name and its (WNS, TNS) fields
const SLACK_STAGES: &[(&str, [Field; 2])] = &[
    (
        "Post-Synthesis:",
        [
            Field::with_unit("WNS (Worst Neg Slack):", "wns", " ns"),
            Field::with_unit("TNS (Total Neg Slack):", "tns", " ns"),
        ],
    ),
    (
        "Post-Placement:",
        [
            Field::with_unit("WNS:", "pl_wns", " ns"),
            Field::with_unit("TNS:", "pl_tns", " ns"),
        ],
    ),
    (
        "Post-Optimization:",
        [
            Field::with_unit("WNS:", "optimized_wns", " ns"),
            Field::with_unit("TNS:", "optimized_tns", " ns"),
        ],
    ),
];

const ROUTING_STAGE: &[Field] = &[
    Field::with_unit("FastRoute WNS:", "fastroute_wns", " ns"),
    Field::with_unit("FastRoute TNS:", "fastroute_tns", " ns"),
    Field::with_unit("SPEF WNS:", "spef_wns", " ns"),
    Field::with_unit("SPEF TNS:", "spef_tns", " ns"),
];

const LOGIC_DEPTH: &[Field] = &[Field::new("Max Logic Levels:", "level")];

const CIRCUIT_COMPLEXITY: &[Field] = &[
    Field::new("Primary Inputs:", "inputs"),
    Field::new("Primary Outputs:", "outputs"),
    Field::new("Pre-ABC Cells:", "cells_pre_abc"),
    Field::new("Synthesized Cells:", "synth_cell_count"),
];

const SEQUENTIAL: &[Field] = &[Field::new("Flip-Flops (DFF):", "DFF")];

const MEMORY: &[Field] = &[
    Field::new("Memory Count:", "memories_count"),
    Field::new("Memory Bits:", "memory_bits"),
];

const FOOTER: &[Field] = &[
    Field::new("Standard Cell Library:", "STD_CELL_LIBRARY"),
    Field::new("Synthesis Strategy:", "SYNTH_STRATEGY"),
];

/// Slack and utilization of the critical path against the clock period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathTiming {
    /// Clock period minus critical path, in ns
    pub slack_ns: f64,
    /// Critical path as a percentage of the clock period
    pub utilization: f64,
}

impl PathTiming {
    /// `None` unless both `critical_path_ns` and `CLOCK_PERIOD` are positive
    pub fn from_row(row: &MetricsRow) -> Option<Self> {
        let critical_path = row.number("critical_path_ns");
        let clock_period = row.number("CLOCK_PERIOD");

        if critical_path > 0.0 && clock_period > 0.0 {
            Some(Self {
                slack_ns: clock_period - critical_path,
                utilization: critical_path / clock_period * 100.0,
            })
        } else {
            None
        }
    }
}

pub fn render(row: &MetricsRow, title: &str) -> String {
    let mut w = ReportWriter::new();
    w.banner(title);

    w.section("DESIGN INFORMATION:");
    w.fields(row, DESIGN_INFO);
    w.blank();

    w.section("CLOCK CONSTRAINTS:");
    w.fields(row, CLOCK_CONSTRAINTS);
    w.blank();

    w.section("CRITICAL PATH TIMING:");
    w.line("Critical Path (ns):", row.display("critical_path_ns"));
    if let Some(path) = PathTiming::from_row(row) {
        w.line("Slack (ns):", fixed(path.slack_ns, 3));
        w.line("Path Utilization:", format!("{}%", fixed(path.utilization, 1)));
    }
    w.blank();

    w.section("SLACK ANALYSIS:");
    for (stage, fields) in SLACK_STAGES {
        w.text(stage);
        w.fields_in(Column::Nested, row, fields);
        w.blank();
    }

    for (heading, table) in [
        ("ROUTING STAGE TIMING:", ROUTING_STAGE),
        ("LOGIC DEPTH:", LOGIC_DEPTH),
        ("CIRCUIT COMPLEXITY:", CIRCUIT_COMPLEXITY),
        ("SEQUENTIAL ELEMENTS:", SEQUENTIAL),
        ("MEMORY ELEMENTS:", MEMORY),
    ] {
        w.section(heading);
        w.fields(row, table);
        w.blank();
    }

    w.footer(row, FOOTER);
    w.finish()
}
