//! Batch analysis over many documents
//!
//! Each document is analyzed independently, so the batch fans out across a
//! rayon pool when the `parallel` feature is enabled. Results are collected
//! by document index: the report always lists documents in input order.
//! Documents that cannot be analyzed are reported separately and never
//! contribute to the summary averages.

use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, Analysis};
use crate::error::{AnalysisError, BatchError};
use crate::lexicon::ComplexWordLexicon;
use crate::metrics::Complexity;

/// A named text to analyze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier shown in the report (file name, row number, ...)
    pub id: String,
    /// Extracted plain text
    pub text: String,
}

impl Document {
    /// Create a document
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Outcome of analyzing one document of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOutcome {
    /// Identifier of the document
    pub id: String,
    /// Analysis, or the reason it was refused
    pub result: Result<Analysis, AnalysisError>,
}

/// One line of the tabular report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Identifier of the document
    pub document: String,
    /// Alphabetic characters
    pub letters: usize,
    /// Estimated syllables
    pub syllables: usize,
    /// Word tokens
    pub words: usize,
    /// Sentences
    pub sentences: usize,
    /// Words the lexicon flags as complex
    pub complex_words: usize,
    /// Flesch reading ease
    pub flesch: f64,
    /// Flesch-Kincaid grade level
    pub flesch_kincaid: f64,
    /// Gunning fog index
    pub gunning_fog: f64,
    /// Automated readability index
    pub ari: f64,
    /// Coleman-Liau index
    pub cli: f64,
    /// Gulpease index
    pub gulpease: f64,
    /// Mean grade level, whole number
    pub composite: f64,
}

impl ReportRow {
    /// Column names in report order
    pub const COLUMNS: [&'static str; 13] = [
        "document",
        "letters",
        "syllables",
        "words",
        "sentences",
        "complex_words",
        "flesch",
        "flesch_kincaid",
        "gunning_fog",
        "ari",
        "cli",
        "gulpease",
        "composite",
    ];

    /// Build a row from an analyzed document
    pub fn new(document: impl Into<String>, analysis: &Analysis) -> Self {
        let inputs = &analysis.inputs;
        let metrics = &analysis.metrics;
        Self {
            document: document.into(),
            letters: inputs.letters,
            syllables: inputs.syllables,
            words: inputs.words,
            sentences: inputs.sentences,
            complex_words: inputs.complex_words,
            flesch: metrics.flesch,
            flesch_kincaid: metrics.flesch_kincaid,
            gunning_fog: metrics.gunning_fog,
            ari: metrics.ari,
            cli: metrics.cli,
            gulpease: metrics.gulpease,
            composite: metrics.composite,
        }
    }
}

/// A document left out of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedDocument {
    /// Identifier of the document
    pub document: String,
    /// Why it was left out
    pub reason: String,
}

/// Aggregates over the successfully analyzed documents
///
/// Both means average the rounded per-document scores, the same values the
/// report rows show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Documents in the report
    pub analyzed: usize,
    /// Documents left out
    pub skipped: usize,
    /// Total word count of analyzed documents
    pub total_words: usize,
    /// Mean of the rows' flesch scores, one decimal
    pub mean_flesch: Option<f64>,
    /// Mean of the rows' composite scores, whole number
    pub mean_composite: Option<f64>,
    /// Label of the mean flesch score before its final rounding
    pub complexity: Option<Complexity>,
}

/// Report assembled from a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Analyzed documents, in input order
    pub rows: Vec<ReportRow>,
    /// Refused documents, in input order
    pub skipped: Vec<SkippedDocument>,
    /// Aggregates over `rows`
    pub summary: Summary,
}

impl BatchReport {
    /// Assemble a report from per-document outcomes
    pub fn from_outcomes(outcomes: Vec<DocumentOutcome>) -> Self {
        let mut rows = Vec::new();
        let mut skipped = Vec::new();
        let mut flesch_sum = 0.0;
        let mut composite_sum = 0.0;

        for outcome in outcomes {
            match outcome.result {
                Ok(analysis) => {
                    flesch_sum += analysis.metrics.flesch;
                    composite_sum += analysis.metrics.composite;
                    rows.push(ReportRow::new(outcome.id, &analysis));
                }
                Err(e) => skipped.push(SkippedDocument {
                    document: outcome.id,
                    reason: e.to_string(),
                }),
            }
        }

        let analyzed = rows.len();
        let mean = |sum: f64| (analyzed > 0).then(|| sum / analyzed as f64);
        let mean_flesch = mean(flesch_sum);

        let summary = Summary {
            analyzed,
            skipped: skipped.len(),
            total_words: rows.iter().map(|r| r.words).sum(),
            mean_flesch: mean_flesch.map(|f| (f * 10.0).round() / 10.0),
            mean_composite: mean(composite_sum).map(f64::round),
            complexity: mean_flesch.map(Complexity::from_flesch),
        };

        Self {
            rows,
            skipped,
            summary,
        }
    }

    /// Record a document that never reached analysis (unreadable input)
    pub fn record_skipped(&mut self, document: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedDocument {
            document: document.into(),
            reason: reason.into(),
        });
        self.summary.skipped = self.skipped.len();
    }

    /// Check if no document could be analyzed
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Analyzer for a batch of documents
#[derive(Debug, Clone, Default)]
pub struct BatchAnalyzer {
    threads: Option<usize>,
}

impl BatchAnalyzer {
    /// Create an analyzer using the default worker count
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker count; `None` or `Some(0)` picks the default
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads.filter(|&n| n > 0);
        self
    }

    /// Analyze every document and assemble the report
    pub fn analyze(
        &self,
        documents: &[Document],
        lexicon: &dyn ComplexWordLexicon,
    ) -> Result<BatchReport, BatchError> {
        self.analyze_with_progress(documents, lexicon, |_| {})
    }

    /// Analyze every document, calling `on_done` as each one finishes
    ///
    /// `on_done` may run on any worker thread and in any order.
    pub fn analyze_with_progress<F>(
        &self,
        documents: &[Document],
        lexicon: &dyn ComplexWordLexicon,
        on_done: F,
    ) -> Result<BatchReport, BatchError>
    where
        F: Fn(&DocumentOutcome) + Sync,
    {
        log::info!("Analyzing {} documents", documents.len());

        let analyze_one = |doc: &Document| {
            let outcome = DocumentOutcome {
                id: doc.id.clone(),
                result: analyze(&doc.text, lexicon),
            };
            if let Err(e) = &outcome.result {
                log::warn!("Skipping {}: {}", doc.id, e);
            } else {
                log::debug!("Analyzed {}", doc.id);
            }
            on_done(&outcome);
            outcome
        };

        let outcomes = self.run(documents, analyze_one)?;
        Ok(BatchReport::from_outcomes(outcomes))
    }

    #[cfg(feature = "parallel")]
    fn run<F>(
        &self,
        documents: &[Document],
        analyze_one: F,
    ) -> Result<Vec<DocumentOutcome>, BatchError>
    where
        F: Fn(&Document) -> DocumentOutcome + Send + Sync,
    {
        use rayon::prelude::*;

        let mut builder = rayon::ThreadPoolBuilder::new()
            .thread_name(|i| format!("legibilidade-worker-{i}"));
        if let Some(threads) = self.threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .map_err(|e| BatchError::ThreadPool(e.to_string()))?;

        Ok(pool.install(|| documents.par_iter().map(analyze_one).collect()))
    }

    #[cfg(not(feature = "parallel"))]
    fn run<F>(
        &self,
        documents: &[Document],
        analyze_one: F,
    ) -> Result<Vec<DocumentOutcome>, BatchError>
    where
        F: Fn(&Document) -> DocumentOutcome + Send + Sync,
    {
        Ok(documents.iter().map(analyze_one).collect())
    }
}
