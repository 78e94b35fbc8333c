//! Output formatting module

use anyhow::Result;
use legibilidade_core::{BatchReport, ReportRow, SkippedDocument, Summary};

/// Trait for report formatters
pub trait ReportFormatter: Send {
    /// Format and output one analyzed document
    fn format_row(&mut self, row: &ReportRow) -> Result<()>;

    /// Format and output one refused document
    fn format_skipped(&mut self, skipped: &SkippedDocument) -> Result<()>;

    /// Finalize output with the batch summary
    fn finish(&mut self, summary: &Summary) -> Result<()>;
}

/// Drive a formatter over a whole report
pub fn write_report(
    formatter: &mut dyn ReportFormatter,
    report: &BatchReport,
    include_skipped: bool,
) -> Result<()> {
    for row in &report.rows {
        formatter.format_row(row)?;
    }
    if include_skipped {
        for skipped in &report.skipped {
            formatter.format_skipped(skipped)?;
        }
    }
    formatter.finish(&report.summary)
}

/// Render a score with one decimal, or a dash when missing
fn score(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

pub mod csv;
pub mod json;
pub mod markdown;
pub mod text;

pub use self::csv::CsvFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
