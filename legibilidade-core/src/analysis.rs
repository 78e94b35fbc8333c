//! Single-document analysis
//!
//! Glues the counters, the syllable engine and the formulas together:
//! raw text in, counts and scores out.

use serde::Serialize;

use crate::error::AnalysisError;
use crate::lexicon::ComplexWordLexicon;
use crate::metrics::{self, MetricInputs, MetricResult};
use crate::syllables::count_syllables;
use crate::text::{compose, count_complex_words, count_letters, count_sentences, count_words};

/// Counts and scores of one document
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Analysis {
    /// Raw counts fed to the formulas
    pub inputs: MetricInputs,
    /// Readability scores
    pub metrics: MetricResult,
}

impl MetricInputs {
    /// Gather the five raw counts of `text`
    pub fn from_text<L>(text: &str, lexicon: &L) -> Self
    where
        L: ComplexWordLexicon + ?Sized,
    {
        let composed = compose(text);
        let text: &str = &composed;
        Self {
            letters: count_letters(text),
            syllables: count_syllables(text),
            words: count_words(text),
            sentences: count_sentences(text),
            complex_words: count_complex_words(text, lexicon),
        }
    }
}

/// Analyze one document
///
/// Text without any alphabetic character (blank, digits or punctuation only)
/// is [`AnalysisError::EmptyInput`]. Text with letters always has a word and
/// a sentence, so [`AnalysisError::Metrics`] only surfaces from counts that
/// bypass this check.
pub fn analyze<L>(text: &str, lexicon: &L) -> Result<Analysis, AnalysisError>
where
    L: ComplexWordLexicon + ?Sized,
{
    if !text.chars().any(char::is_alphabetic) {
        return Err(AnalysisError::EmptyInput);
    }

    let inputs = MetricInputs::from_text(text, lexicon);
    log::trace!("Counts: {:?}", inputs);

    let metrics = metrics::compute(inputs)?;
    Ok(Analysis { inputs, metrics })
}
