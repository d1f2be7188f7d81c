//! Report rendering
//!
//! All three reports share one layout: a banner, a run of sections with a
//! dashed rule under each heading, and a footer framed by `=` rules. Lines
//! that print a column unchanged are declared as [`Field`] tables; derived
//! lines are built by each report and pushed through the same
//! [`ReportWriter`].

use crate::types::{MetricsRow, ReportKind};
use std::fmt;

pub mod area;
pub mod power;
pub mod timing;

/// Width of the `=` and `-` rules
pub const REPORT_WIDTH: usize = 70;

/// Label column used for a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Regular section line, value starts at column 22
    Body,
    /// Indented line inside a sub-block, value starts at column 26
    Nested,
    /// Footer line, value starts at column 23
    Footer,
}

impl Column {
    fn indent(self) -> usize {
        match self {
            Column::Nested => 2,
            Column::Body | Column::Footer => 0,
        }
    }

    fn width(self) -> usize {
        match self {
            Column::Body => 21,
            Column::Nested => 23,
            Column::Footer => 22,
        }
    }
}

/// A line that prints one metrics column with an optional unit suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Label including the trailing colon
    pub label: &'static str,
    /// CSV column name
    pub key: &'static str,
    /// Appended verbatim after the value (`"%"`, `" µm"`, ...)
    pub unit: &'static str,
}

impl Field {
    /// A field without a unit
    pub const fn new(label: &'static str, key: &'static str) -> Self {
        Self { label, key, unit: "" }
    }

    /// A field with a unit suffix
    pub const fn with_unit(label: &'static str, key: &'static str, unit: &'static str) -> Self {
        Self { label, key, unit }
    }

    /// Rendered value: the raw column (or `N/A`) followed by the unit
    pub fn value(&self, row: &MetricsRow) -> String {
        format!("{}{}", row.display(self.key), self.unit)
    }
}

/// Fields of the DESIGN INFORMATION section, shared by every report
pub const DESIGN_INFO: &[Field] = &[
    Field::new("Design Name:", "design_name"),
    Field::new("Config:", "config"),
    Field::new("Flow Status:", "flow_status"),
    Field::new("Total Runtime:", "total_runtime"),
];

/// Accumulates report text line by line
#[derive(Debug, Default)]
pub struct ReportWriter {
    out: String,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `=` rule, title, `=` rule, blank line
    pub fn banner(&mut self, title: &str) {
        self.rule('=');
        self.text(title);
        self.rule('=');
        self.blank();
    }

    /// Section heading followed by a `-` rule
    pub fn section(&mut self, heading: &str) {
        self.text(heading);
        self.rule('-');
    }

    /// Labeled line in the body column
    pub fn line(&mut self, label: &str, value: impl fmt::Display) {
        self.line_in(Column::Body, label, value);
    }

    /// Labeled line in the given column
    pub fn line_in(&mut self, column: Column, label: &str, value: impl fmt::Display) {
        let line = format!(
            "{:indent$}{:<width$} {}",
            "",
            label,
            value,
            indent = column.indent(),
            width = column.width()
        );
        self.text(&line);
    }

    /// One line per field, in the body column
    pub fn fields(&mut self, row: &MetricsRow, table: &[Field]) {
        self.fields_in(Column::Body, row, table);
    }

    /// One line per field, in the given column
    pub fn fields_in(&mut self, column: Column, row: &MetricsRow, table: &[Field]) {
        for field in table {
            self.line_in(column, field.label, field.value(row));
        }
    }

    /// Footer block framed by `=` rules
    pub fn footer(&mut self, row: &MetricsRow, table: &[Field]) {
        self.rule('=');
        self.fields_in(Column::Footer, row, table);
        self.rule('=');
    }

    /// Unlabeled line
    pub fn text(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    fn rule(&mut self, ch: char) {
        let rule: String = std::iter::repeat(ch).take(REPORT_WIDTH).collect();
        self.text(&rule);
    }

    /// Finished report text
    pub fn finish(self) -> String {
        self.out
    }
}

/// Banner title for a report, e.g. `TIMING REPORT - STEPPER_CTRL DESIGN`
pub fn banner_title(kind: ReportKind, design_name: &str) -> String {
    format!("{} REPORT - {} DESIGN", kind.title(), design_name.to_uppercase())
}

/// Render one report for a metrics row
///
/// Rendering is a pure function of its inputs; the same row always yields
/// the same text.
pub fn render(kind: ReportKind, row: &MetricsRow, design_name: &str) -> String {
    let title = banner_title(kind, design_name);
    log::debug!("Rendering {} report ({} metrics)", kind, row.len());

    match kind {
        ReportKind::Area => area::render(row, &title),
        ReportKind::Power => power::render(row, &title),
        ReportKind::Timing => timing::render(row, &title),
    }
}
