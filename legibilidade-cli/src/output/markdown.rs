//! Markdown output formatter

use super::{score, ReportFormatter};
use anyhow::Result;
use legibilidade_core::{ReportRow, SkippedDocument, Summary};
use std::io::Write;

const HEADER: &str = "| Document | Words | Sentences | Flesch | Flesch-Kincaid | Gunning fog | ARI | Coleman-Liau | Gulpease | Composite |";

/// Markdown formatter - outputs a table of scores
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    header_written: bool,
    skipped: Vec<SkippedDocument>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
            skipped: Vec::new(),
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            writeln!(self.writer, "{HEADER}")?;
            writeln!(self.writer, "|---|---:|---:|---:|---:|---:|---:|---:|---:|---:|")?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write + Send> ReportFormatter for MarkdownFormatter<W> {
    fn format_row(&mut self, row: &ReportRow) -> Result<()> {
        self.write_header()?;
        writeln!(
            self.writer,
            "| {} | {} | {} | {:.1} | {:.1} | {:.1} | {:.1} | {:.1} | {:.1} | {:.0} |",
            row.document.replace('|', "\\|"),
            row.words,
            row.sentences,
            row.flesch,
            row.flesch_kincaid,
            row.gunning_fog,
            row.ari,
            row.cli,
            row.gulpease,
            row.composite
        )?;
        Ok(())
    }

    fn format_skipped(&mut self, skipped: &SkippedDocument) -> Result<()> {
        self.skipped.push(skipped.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        self.write_header()?;

        if !self.skipped.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "**Skipped**")?;
            writeln!(self.writer)?;
            for skipped in &self.skipped {
                writeln!(self.writer, "- `{}`: {}", skipped.document, skipped.reason)?;
            }
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Documents: {} analyzed, {} skipped. Words: {}.*",
            summary.analyzed, summary.skipped, summary.total_words
        )?;
        writeln!(
            self.writer,
            "*Mean Flesch: {}. Complexity: {}.*",
            score(summary.mean_flesch),
            summary.complexity.map_or("-", |c| c.as_str())
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
