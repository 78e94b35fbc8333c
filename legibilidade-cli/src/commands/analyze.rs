//! Analyze command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use legibilidade_core::{BatchAnalyzer, BatchReport, Document};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, InputSource};
use crate::lexicon_source::LexiconSource;
use crate::output::{
    write_report, CsvFormatter, JsonFormatter, MarkdownFormatter, ReportFormatter, TextFormatter,
};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Complex-word list, one word per line
    #[arg(short, long, value_name = "FILE", env = "LEGIBILIDADE_WORD_LIST")]
    pub word_list: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (0 = auto)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one block of scores per document
    Text,
    /// JSON object with documents, skipped documents and summary
    Json,
    /// CSV table, one record per document
    Csv,
    /// Markdown table of scores
    Markdown,
}

impl OutputFormat {
    /// Build the formatter for this format
    pub fn formatter<'a>(
        self,
        writer: Box<dyn Write + Send + 'a>,
        pretty_json: bool,
    ) -> Box<dyn ReportFormatter + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Csv => Box::new(CsvFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting readability analysis");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = self.resolve_format(&config)?;

        let lexicon_source = LexiconSource::resolve(
            self.word_list.as_deref(),
            config.analysis.word_list.as_deref(),
        );
        log::info!("Complex words: {}", lexicon_source.display_name());
        let lexicon = lexicon_source.load();

        let sources = resolve_inputs(&self.input)?;
        let (documents, unreadable) = read_documents(&sources);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(documents.len() as u64);

        let threads = self.threads.or(Some(config.analysis.worker_threads));
        let mut report = BatchAnalyzer::new()
            .threads(threads)
            .analyze_with_progress(&documents, &lexicon, |outcome| {
                progress.document_completed(&outcome.id)
            })
            .context("Failed to start the analysis workers")?;
        progress.finish();

        for (id, reason) in unreadable {
            report.record_skipped(id, reason);
        }

        self.write_output(&report, format, &config)?;

        if report.is_empty() {
            return Err(CliError::NothingAnalyzed(report.summary.skipped).into());
        }

        log::info!(
            "Analyzed {} documents ({} skipped)",
            report.summary.analyzed,
            report.summary.skipped
        );
        Ok(())
    }

    /// Pick the command-line format over the configured default
    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    fn write_output(
        &self,
        report: &BatchReport,
        format: OutputFormat,
        config: &CliConfig,
    ) -> Result<()> {
        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let mut formatter = format.formatter(writer, config.output.pretty_json);
        write_report(formatter.as_mut(), report, config.output.include_skipped)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second command in the same process keeps the first logger
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Read every source, splitting readable documents from failures
fn read_documents(sources: &[InputSource]) -> (Vec<Document>, Vec<(String, String)>) {
    let mut documents = Vec::with_capacity(sources.len());
    let mut unreadable = Vec::new();

    for source in sources {
        match source.read() {
            Ok(text) => documents.push(Document::new(source.id(), text)),
            Err(e) => {
                log::warn!("Skipping {}: {:#}", source.id(), e);
                unreadable.push((source.id(), format!("{e:#}")));
            }
        }
    }

    (documents, unreadable)
}
