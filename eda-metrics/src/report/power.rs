//! Power report
//!
//! Internal, switching and leakage power for the slowest, typical and
//! fastest corners, with totals, a typical-corner breakdown, corner ratios,
//! leakage share and power density. Every derived percentage is guarded so
//! that no division by zero is ever attempted; a guarded line is simply not
//! printed.

use super::area::UM2_PER_MM2;
use super::{Field, ReportWriter, DESIGN_INFO};
use crate::types::MetricsRow;
use crate::value::{fixed, grouped, scientific, truncated};

const FOOTER: &[Field] = &[
    Field::new("Standard Cell Library:", "STD_CELL_LIBRARY"),
    Field::with_unit("Peak Memory Usage:", "Peak_Memory_Usage_MB", " MB"),
];

/// Process corner a power estimate was taken at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Slowest,
    Typical,
    Fastest,
}

impl Corner {
    fn name(self) -> &'static str {
        match self {
            Corner::Slowest => "slowest",
            Corner::Typical => "typical",
            Corner::Fastest => "fastest",
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Corner::Slowest => "SLOWEST CORNER (Maximum Power):",
            Corner::Typical => "TYPICAL CORNER (Nominal Conditions):",
            Corner::Fastest => "FASTEST CORNER (Minimum Power):",
        }
    }
}

/// Power components of one corner, in µW
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerPower {
    pub internal: f64,
    pub switching: f64,
    pub leakage: f64,
}

impl CornerPower {
    /// Read `power_<corner>_{internal,switching,leakage}_uW`
    pub fn from_row(row: &MetricsRow, corner: Corner) -> Self {
        let component = |name: &str| row.number(&format!("power_{}_{}_uW", corner.name(), name));
        Self {
            internal: component("internal"),
            switching: component("switching"),
            leakage: component("leakage"),
        }
    }

    pub fn total(&self) -> f64 {
        self.internal + self.switching + self.leakage
    }

    /// Percentage of the total for (internal, switching, leakage)
    ///
    /// `None` unless the total is positive.
    pub fn breakdown(&self) -> Option<[f64; 3]> {
        let total = self.total();
        if total > 0.0 {
            Some([
                self.internal / total * 100.0,
                self.switching / total * 100.0,
                self.leakage / total * 100.0,
            ])
        } else {
            None
        }
    }

    /// Leakage as a percentage of the total, `None` unless leakage is positive
    ///
    /// A negative total (negative components) still yields a share; only a
    /// zero total is skipped.
    pub fn leakage_share(&self) -> Option<f64> {
        let total = self.total();
        if self.leakage > 0.0 && total != 0.0 {
            Some(self.leakage / total * 100.0)
        } else {
            None
        }
    }
}

/// Power figures for all three corners plus the core area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerSummary {
    pub slowest: CornerPower,
    pub typical: CornerPower,
    pub fastest: CornerPower,
    pub core_area_um2: f64,
}

impl PowerSummary {
    pub fn from_row(row: &MetricsRow) -> Self {
        Self {
            slowest: CornerPower::from_row(row, Corner::Slowest),
            typical: CornerPower::from_row(row, Corner::Typical),
            fastest: CornerPower::from_row(row, Corner::Fastest),
            core_area_um2: row.number("CoreArea_um^2"),
        }
    }

    pub fn corner(&self, corner: Corner) -> &CornerPower {
        match corner {
            Corner::Slowest => &self.slowest,
            Corner::Typical => &self.typical,
            Corner::Fastest => &self.fastest,
        }
    }

    /// A total as a percentage of the slowest-corner total
    pub fn percent_of_slowest(&self, total: f64) -> Option<f64> {
        let reference = self.slowest.total();
        if reference > 0.0 {
            Some(total / reference * 100.0)
        } else {
            None
        }
    }

    /// Typical-corner power per core area, in µW/mm²
    pub fn density(&self) -> Option<f64> {
        let total = self.typical.total();
        if self.core_area_um2 > 0.0 && total > 0.0 {
            Some(total / (self.core_area_um2 / UM2_PER_MM2))
        } else {
            None
        }
    }
}

fn uw(value: f64) -> String {
    format!("{} µW", scientific(value, 6))
}

pub fn render(row: &MetricsRow, title: &str) -> String {
    let power = PowerSummary::from_row(row);
    let mut w = ReportWriter::new();
    w.banner(title);

    w.section("DESIGN INFORMATION:");
    w.fields(row, DESIGN_INFO);
    w.blank();

    for corner in [Corner::Slowest, Corner::Typical, Corner::Fastest] {
        let p = power.corner(corner);
        w.section(corner.heading());
        w.line("Internal Power:", uw(p.internal));
        w.line("Switching Power:", uw(p.switching));
        w.line("Leakage Power:", uw(p.leakage));
        w.line("Total Power:", uw(p.total()));
        w.blank();
    }

    let typical = &power.typical;
    w.section("POWER BREAKDOWN (Typical Corner):");
    match typical.breakdown() {
        Some(pct) => {
            let parts = [
                ("Internal:", typical.internal),
                ("Switching:", typical.switching),
                ("Leakage:", typical.leakage),
            ];
            for ((label, value), share) in parts.into_iter().zip(pct) {
                w.line(
                    label,
                    format!("{:>6}% ({} µW)", fixed(share, 2), scientific(value, 6)),
                );
            }
        }
        None => w.text("No power data available"),
    }
    w.blank();

    let slowest_total = power.slowest.total();
    w.section("CORNER COMPARISON:");
    w.line("Slowest Total:", format!("{} (Reference: 100%)", uw(slowest_total)));
    for (label, total) in [
        ("Typical Total:", power.typical.total()),
        ("Fastest Total:", power.fastest.total()),
    ] {
        if let Some(pct) = power.percent_of_slowest(total) {
            w.line(label, format!("{} ({}% of slowest)", uw(total), fixed(pct, 1)));
        }
    }
    w.blank();

    w.section("LEAKAGE ANALYSIS:");
    w.line("Slowest (Max):", uw(power.slowest.leakage));
    w.line("Typical:", uw(power.typical.leakage));
    w.line("Fastest (Min):", uw(power.fastest.leakage));
    if let Some(share) = power.slowest.leakage_share() {
        w.line("Leakage % (Slowest):", format!("{}% of total power", fixed(share, 4)));
    }
    w.blank();

    w.section("DESIGN METRICS (for context):");
    w.line("Total Cells:", truncated(row.number("TotalCells")));
    w.line("Core Area:", format!("{} µm²", grouped(power.core_area_um2)));
    w.line("Clock Period:", format!("{} ns", row.display("CLOCK_PERIOD")));
    if let Some(density) = power.density() {
        w.line("Power Density:", format!("{} µW/mm²", scientific(density, 4)));
    }
    w.blank();

    w.footer(row, FOOTER);
    w.finish()
}
