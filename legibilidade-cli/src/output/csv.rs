//! CSV output formatter

use super::ReportFormatter;
use anyhow::Result;
use legibilidade_core::{ReportRow, SkippedDocument, Summary};
use std::io::{self, Write};

/// CSV formatter - one record per analyzed document
///
/// Refused documents have no place in the table. They go to a separate
/// stream (stderr by default) so the CSV on stdout stays machine-readable.
pub struct CsvFormatter<W: Write> {
    writer: csv::Writer<W>,
    skipped_writer: Box<dyn Write + Send>,
    header_written: bool,
}

impl<W: Write> CsvFormatter<W> {
    /// Create a new CSV formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer),
            skipped_writer: Box::new(io::stderr()),
            header_written: false,
        }
    }

    /// Send refused documents to `writer` instead of stderr
    pub fn with_skipped_writer(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.skipped_writer = writer;
        self
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            self.writer.write_record(ReportRow::COLUMNS)?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write + Send> ReportFormatter for CsvFormatter<W> {
    fn format_row(&mut self, row: &ReportRow) -> Result<()> {
        self.write_header()?;
        self.writer.serialize(row)?;
        Ok(())
    }

    fn format_skipped(&mut self, skipped: &SkippedDocument) -> Result<()> {
        writeln!(
            self.skipped_writer,
            "skipped {}: {}",
            skipped.document, skipped.reason
        )?;
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        self.write_header()?;
        self.writer.flush()?;
        self.skipped_writer.flush()?;
        log::info!(
            "{} documents analyzed, {} skipped",
            summary.analyzed,
            summary.skipped
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::write_sample;
    use std::sync::{Arc, Mutex};

    fn render(include_skipped: bool) -> String {
        let mut buffer = Vec::new();
        write_sample(&mut CsvFormatter::new(&mut buffer), include_skipped);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_and_record() {
        let output = render(true);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], ReportRow::COLUMNS.join(","));
        assert!(lines[1].starts_with("simples.txt,"));
        assert_eq!(lines[1].split(',').count(), ReportRow::COLUMNS.len());
    }

    /// Shared buffer standing in for stderr
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn render_with_skipped(include_skipped: bool) -> (String, String) {
        let skipped = SharedBuffer::default();
        let mut buffer = Vec::new();
        write_sample(
            &mut CsvFormatter::new(&mut buffer).with_skipped_writer(Box::new(skipped.clone())),
            include_skipped,
        );
        (String::from_utf8(buffer).unwrap(), skipped.contents())
    }

    #[test]
    fn test_skipped_documents_go_to_separate_stream() {
        let (table, skipped) = render_with_skipped(true);

        assert!(!table.contains("vazio.txt"));
        assert_eq!(skipped, "skipped vazio.txt: document is empty\n");
    }

    #[test]
    fn test_skipped_documents_can_be_left_out() {
        let (_, skipped) = render_with_skipped(false);
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_empty_report_still_has_header() {
        let mut buffer = Vec::new();
        {
            let mut formatter = CsvFormatter::new(&mut buffer);
            let summary = Summary {
                analyzed: 0,
                skipped: 0,
                total_words: 0,
                mean_flesch: None,
                mean_composite: None,
                complexity: None,
            };
            formatter.finish(&summary).unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.trim_end(), ReportRow::COLUMNS.join(","));
    }
}
