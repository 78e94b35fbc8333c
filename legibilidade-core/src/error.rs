//! Error types
//!
//! Syllable counting is total and has no error type. Everything that can
//! refuse an input is listed here.

use std::path::PathBuf;
use thiserror::Error;

/// Metric computation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    /// A denominator of the formulas is zero
    #[error("readability metrics are undefined for {words} words in {sentences} sentences")]
    Undefined {
        /// Word count of the rejected input
        words: usize,
        /// Sentence count of the rejected input
        sentences: usize,
    },
}

/// Document analysis errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The document has no content
    #[error("document is empty")]
    EmptyInput,

    /// The document has content but its metrics cannot be computed
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// Word list loading errors
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The word list could not be read
    #[error("failed to read word list {path}: {source}")]
    Io {
        /// Path of the word list
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A reader passed to the loader failed
    #[error("failed to read word list: {0}")]
    Read(#[from] std::io::Error),
}

/// Batch analysis errors
#[derive(Error, Debug)]
pub enum BatchError {
    /// The worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Result type for metric computation
pub type Result<T> = std::result::Result<T, MetricsError>;
