//! Readability analysis for Portuguese text
//!
//! This crate estimates syllable counts for Portuguese by classifying vowel
//! clusters (diphthongs, triphthongs and hiatuses) and combines the counts
//! into six classic readability formulas: Flesch, Flesch-Kincaid, Gunning
//! fog, ARI, Coleman-Liau and Gulpease.
//!
//! # Architecture
//!
//! - **Syllables**: a single-pass cluster scanner over lower-cased text
//! - **Text**: letter, word and sentence counters
//! - **Lexicon**: the complex-word oracle behind a trait
//! - **Metrics**: the formulas, from five integers to one result
//! - **Analysis/Batch**: one document, or many in parallel
//!
//! Every function is pure and the crate holds no global mutable state.
//!
//! # Example
//!
//! ```rust
//! use legibilidade_core::{analyze, WordBank};
//!
//! let lexicon = WordBank::from_words(["paralelepípedo"]);
//! let analysis = analyze("O gato comeu o rato. O cão latiu.", &lexicon).unwrap();
//!
//! assert_eq!(analysis.inputs.sentences, 2);
//! assert!(analysis.metrics.flesch > 70.0);
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod batch;
pub mod error;
pub mod lexicon;
pub mod metrics;
pub mod syllables;
pub mod text;

pub use analysis::{analyze, Analysis};
pub use batch::{
    BatchAnalyzer, BatchReport, Document, DocumentOutcome, ReportRow, SkippedDocument, Summary,
};
pub use error::{AnalysisError, BatchError, LexiconError, MetricsError};
pub use lexicon::{ComplexWordLexicon, WordBank};
pub use metrics::{compute, Complexity, MetricInputs, MetricResult, RawScores};
pub use syllables::{count_syllables, Cluster, ClusterKind, SyllableCounter};
pub use text::{
    compose, count_complex_words, count_letters, count_sentences, count_words, words,
};
