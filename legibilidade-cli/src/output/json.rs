//! JSON output formatter

use super::ReportFormatter;
use anyhow::Result;
use legibilidade_core::{ReportRow, SkippedDocument, Summary};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs the report as a single object
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<ReportRow>,
    skipped: Vec<SkippedDocument>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
struct ReportData<'a> {
    documents: &'a [ReportRow],
    skipped: &'a [SkippedDocument],
    summary: &'a Summary,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<W: Write + Send> ReportFormatter for JsonFormatter<W> {
    fn format_row(&mut self, row: &ReportRow) -> Result<()> {
        self.documents.push(row.clone());
        Ok(())
    }

    fn format_skipped(&mut self, skipped: &SkippedDocument) -> Result<()> {
        self.skipped.push(skipped.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        let data = ReportData {
            documents: &self.documents,
            skipped: &self.skipped,
            summary,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &data)?;
        } else {
            serde_json::to_writer(&mut self.writer, &data)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::write_sample;
    use serde_json::Value;

    fn render(pretty: bool, include_skipped: bool) -> String {
        let mut buffer = Vec::new();
        write_sample(&mut JsonFormatter::new(&mut buffer, pretty), include_skipped);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_object() {
        let output = render(true, true);
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["documents"].as_array().unwrap().len(), 1);
        assert_eq!(value["documents"][0]["document"], "simples.txt");
        assert_eq!(value["documents"][0]["syllables"], 11);
        assert_eq!(value["skipped"][0]["reason"], "document is empty");
        assert_eq!(value["summary"]["analyzed"], 1);
        assert_eq!(value["summary"]["complexity"], "easy");
    }

    #[test]
    fn test_compact_output_is_one_line() {
        let output = render(false, false);

        assert_eq!(output.lines().count(), 1);
        let value: Value = serde_json::from_str(&output).unwrap();
        assert!(value["skipped"].as_array().unwrap().is_empty());
    }
}
