//! Area report
//!
//! Die/core area, utilization, cell statistics and the other physical
//! metrics of a hardened design. The only derived values are the µm² ↔ mm²
//! conversions in the AREA METRICS section.

use super::{Field, ReportWriter, DESIGN_INFO};
use crate::types::MetricsRow;
use crate::value::{fixed, grouped};

/// µm² per mm²
pub const UM2_PER_MM2: f64 = 1_000_000.0;

const UTILIZATION: &[Field] = &[
    Field::with_unit("OpenDP Utilization:", "OpenDP_Util", "%"),
    Field::with_unit("Final Utilization:", "Final_Util", "%"),
    Field::with_unit("Core Utilization:", "FP_CORE_UTIL", "%"),
    Field::new("Target Density:", "PL_TARGET_DENSITY"),
    Field::new("Cell Per mm²:", "CellPer_mm^2"),
];

const CELL_STATISTICS: &[Field] = &[
    Field::new("Total Cells:", "TotalCells"),
    Field::new("Synth Cell Count:", "synth_cell_count"),
    Field::new("Decap Cells:", "DecapCells"),
    Field::new("Welltap Cells:", "WelltapCells"),
    Field::new("Diode Cells:", "DiodeCells"),
    Field::new("Fill Cells:", "FillCells"),
];

const GATE_COUNT: &[Field] = &[
    Field::new("AND gates:", "AND"),
    Field::new("NAND gates:", "NAND"),
    Field::new("OR gates:", "OR"),
    Field::new("NOR gates:", "NOR"),
    Field::new("XOR gates:", "XOR"),
    Field::new("MUX:", "MUX"),
    Field::new("DFF (Flip-Flops):", "DFF"),
];

const ROUTING: &[Field] = &[
    Field::with_unit("Wire Length:", "wire_length", " µm"),
    Field::new("Via Count:", "vias"),
    Field::with_unit("HPWL:", "HPWL", " µm"),
];

const TIMING: &[Field] = &[
    Field::new("Critical Path (ns):", "critical_path_ns"),
    Field::new("Clock Period (ns):", "CLOCK_PERIOD"),
    Field::new("Max Frequency (MHz):", "suggested_clock_frequency"),
];

const VIOLATIONS: &[Field] = &[
    Field::new("tritonRoute Violations:", "tritonRoute_violations"),
    Field::new("Short Violations:", "Short_violations"),
    Field::new("Metal Spacing Viol.:", "MetSpc_violations"),
    Field::new("LVS Errors:", "lvs_total_errors"),
    Field::new("Magic Violations:", "Magic_violations"),
];

const POWER: &[Field] = &[
    Field::with_unit("Internal Power:", "power_typical_internal_uW", " µW"),
    Field::with_unit("Switching Power:", "power_typical_switching_uW", " µW"),
    Field::with_unit("Leakage Power:", "power_typical_leakage_uW", " µW"),
];

const FLOORPLAN: &[Field] = &[
    Field::new("Aspect Ratio:", "FP_ASPECT_RATIO"),
    Field::new("PDN H-Pitch:", "FP_PDN_HPITCH"),
    Field::new("PDN V-Pitch:", "FP_PDN_VPITCH"),
];

const CHIP_SUMMARY: &[Field] = &[
    Field::new("Standard Cell Library:", "STD_CELL_LIBRARY"),
    Field::with_unit("Peak Memory Usage:", "Peak_Memory_Usage_MB", " MB"),
];

/// Die and core area in both units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaSummary {
    pub die_mm2: f64,
    pub core_um2: f64,
}

impl AreaSummary {
    pub fn from_row(row: &MetricsRow) -> Self {
        Self {
            die_mm2: row.number("DIEAREA_mm^2"),
            core_um2: row.number("CoreArea_um^2"),
        }
    }

    pub fn die_um2(&self) -> f64 {
        self.die_mm2 * UM2_PER_MM2
    }

    pub fn core_mm2(&self) -> f64 {
        self.core_um2 / UM2_PER_MM2
    }
}

pub fn render(row: &MetricsRow, title: &str) -> String {
    let mut w = ReportWriter::new();
    w.banner(title);

    w.section("DESIGN INFORMATION:");
    w.fields(row, DESIGN_INFO);
    w.blank();

    let area = AreaSummary::from_row(row);
    w.section("AREA METRICS:");
    w.line("Die Area:", format!("{} mm²", fixed(area.die_mm2, 6)));
    w.line(
        "Core Area:",
        format!(
            "{} µm² ({} mm²)",
            grouped(area.core_um2),
            fixed(area.core_mm2(), 6)
        ),
    );
    w.line("Die Area (µm²):", format!("{} µm²", grouped(area.die_um2())));
    w.blank();

    for (heading, table) in [
        ("UTILIZATION:", UTILIZATION),
        ("CELL STATISTICS:", CELL_STATISTICS),
        ("GATE COUNT:", GATE_COUNT),
        ("ROUTING METRICS:", ROUTING),
        ("TIMING METRICS:", TIMING),
        ("VIOLATIONS:", VIOLATIONS),
        ("POWER ANALYSIS (Typical):", POWER),
        ("FLOORPLAN:", FLOORPLAN),
    ] {
        w.section(heading);
        w.fields(row, table);
        w.blank();
    }

    w.footer(row, CHIP_SUMMARY);
    w.finish()
}
