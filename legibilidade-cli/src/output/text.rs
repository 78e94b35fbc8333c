//! Plain text output formatter

use super::{score, ReportFormatter};
use anyhow::Result;
use legibilidade_core::{ReportRow, SkippedDocument, Summary};
use std::io::Write;

/// Plain text formatter - one block per document, then the summary
pub struct TextFormatter<W: Write> {
    writer: W,
    skipped_header_written: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            skipped_header_written: false,
        }
    }
}

impl<W: Write + Send> ReportFormatter for TextFormatter<W> {
    fn format_row(&mut self, row: &ReportRow) -> Result<()> {
        let w = &mut self.writer;
        writeln!(w, "{}", row.document)?;
        writeln!(
            w,
            "  letters: {}  syllables: {}  words: {}  sentences: {}  complex words: {}",
            row.letters, row.syllables, row.words, row.sentences, row.complex_words
        )?;
        writeln!(w, "  Flesch:          {:>6.1}", row.flesch)?;
        writeln!(w, "  Flesch-Kincaid:  {:>6.1}", row.flesch_kincaid)?;
        writeln!(w, "  Gunning fog:     {:>6.1}", row.gunning_fog)?;
        writeln!(w, "  ARI:             {:>6.1}", row.ari)?;
        writeln!(w, "  Coleman-Liau:    {:>6.1}", row.cli)?;
        writeln!(w, "  Gulpease:        {:>6.1}", row.gulpease)?;
        writeln!(w, "  Composite:       {:>6.0}", row.composite)?;
        writeln!(w)?;
        Ok(())
    }

    fn format_skipped(&mut self, skipped: &SkippedDocument) -> Result<()> {
        if !self.skipped_header_written {
            writeln!(self.writer, "Skipped:")?;
            self.skipped_header_written = true;
        }
        writeln!(self.writer, "  {}: {}", skipped.document, skipped.reason)?;
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        let w = &mut self.writer;
        if self.skipped_header_written {
            writeln!(w)?;
        }
        writeln!(w, "Documents analyzed: {}", summary.analyzed)?;
        writeln!(w, "Documents skipped:  {}", summary.skipped)?;
        writeln!(w, "Total words:        {}", summary.total_words)?;
        writeln!(w, "Mean Flesch:        {}", score(summary.mean_flesch))?;
        writeln!(
            w,
            "Mean composite:     {}",
            summary
                .mean_composite
                .map_or_else(|| "-".to_string(), |v| format!("{v:.0}"))
        )?;
        writeln!(
            w,
            "Complexity:         {}",
            summary.complexity.map_or("-", |c| c.as_str())
        )?;
        w.flush()?;
        Ok(())
    }
}
