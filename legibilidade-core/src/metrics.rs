//! Readability formulas
//!
//! Six classic formulas adapted to Portuguese, computed from five raw
//! counts. Formulas run on unrounded values; rounding happens once, when the
//! [`MetricResult`] is assembled, and never feeds back into another formula.

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};

/// Raw counts a document contributes to the formulas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricInputs {
    /// Alphabetic characters
    pub letters: usize,
    /// Syllables as estimated by [`crate::count_syllables`]
    pub syllables: usize,
    /// Word tokens
    pub words: usize,
    /// Sentences
    pub sentences: usize,
    /// Words the complex-word lexicon flags
    pub complex_words: usize,
}

impl MetricInputs {
    /// Create a set of inputs
    pub fn new(
        letters: usize,
        syllables: usize,
        words: usize,
        sentences: usize,
        complex_words: usize,
    ) -> Self {
        Self {
            letters,
            syllables,
            words,
            sentences,
            complex_words,
        }
    }

    /// Check that no formula divides by zero
    pub fn is_computable(&self) -> bool {
        self.words > 0 && self.sentences > 0
    }
}

/// Unrounded formula outputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawScores {
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
}

impl RawScores {
    /// Mean of the four grade-level formulas
    pub fn composite(&self) -> f64 {
        (self.flesch_kincaid + self.gunning_fog + self.ari + self.cli) / 4.0
    }
}

/// Readability scores of one document, rounded for presentation
///
/// The six formulas carry one decimal place and the composite none. The
/// unrounded values stay available through [`MetricResult::raw`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricResult {
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
    /// Mean of flesch_kincaid, gunning_fog, ari and cli, whole number
    pub composite: f64,
    #[serde(skip)]
    raw: RawScores,
}

impl MetricResult {
    fn from_raw(raw: RawScores) -> Self {
        Self {
            flesch: round_to(raw.flesch, 1),
            flesch_kincaid: round_to(raw.flesch_kincaid, 1),
            gunning_fog: round_to(raw.gunning_fog, 1),
            ari: round_to(raw.ari, 1),
            cli: round_to(raw.cli, 1),
            gulpease: round_to(raw.gulpease, 1),
            composite: raw.composite().round(),
            raw,
        }
    }

    /// Unrounded formula outputs
    pub fn raw(&self) -> &RawScores {
        &self.raw
    }

    /// Qualitative label derived from the unrounded flesch score
    pub fn complexity(&self) -> Complexity {
        Complexity::from_flesch(self.raw.flesch)
    }
}

/// Qualitative reading difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Flesch above 70
    Easy,
    /// Flesch above 50, up to 70
    Medium,
    /// Flesch of 50 or less
    Hard,
}

impl Complexity {
    /// Classify an unrounded flesch score
    ///
    /// Pass the unrounded value: 70.04 rounds to 70.0 for display but is
    /// still easy.
    pub fn from_flesch(flesch: f64) -> Self {
        if flesch > 70.0 {
            Complexity::Easy
        } else if flesch > 50.0 {
            Complexity::Medium
        } else {
            Complexity::Hard
        }
    }

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Easy => "easy",
            Complexity::Medium => "medium",
            Complexity::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the readability scores for a set of counts
///
/// Fails with [`MetricsError::Undefined`] when there are no words or no
/// sentences. No partial result is produced in that case.
pub fn compute(inputs: MetricInputs) -> Result<MetricResult> {
    if !inputs.is_computable() {
        return Err(MetricsError::Undefined {
            words: inputs.words,
            sentences: inputs.sentences,
        });
    }

    let letters = inputs.letters as f64;
    let syllables = inputs.syllables as f64;
    let words = inputs.words as f64;
    let sentences = inputs.sentences as f64;
    let complex = inputs.complex_words as f64;

    let raw = RawScores {
        flesch: 226.0 - 1.04 * words / sentences - 72.0 * syllables / words,
        flesch_kincaid: 0.36 * words / sentences + 10.4 * syllables / words - 18.0,
        gunning_fog: 0.49 * words / sentences + 19.0 * complex / words,
        ari: 4.6 * letters / words + 0.44 * words / sentences - 20.0,
        cli: 5.4 * letters / words - 21.0 * sentences / words - 14.0,
        gulpease: 89.0 + (300.0 * sentences - 10.0 * letters) / words,
    };

    Ok(MetricResult::from_raw(raw))
}

/// Round half away from zero to `decimals` places
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_inputs() -> MetricInputs {
        MetricInputs::new(480, 210, 100, 8, 15)
    }

    #[test]
    fn test_reference_scores() {
        let result = compute(reference_inputs()).unwrap();

        assert_eq!(result.flesch, 61.8);
        assert_eq!(result.flesch_kincaid, 8.3);
        assert_eq!(result.gunning_fog, 9.0);
        assert_eq!(result.ari, 7.6);
        assert_eq!(result.cli, 10.2);
        assert_eq!(result.gulpease, 65.0);
        assert_eq!(result.composite, 9.0);
    }

    #[test]
    fn test_raw_scores_are_unrounded() {
        let result = compute(reference_inputs()).unwrap();
        let raw = result.raw();

        assert!((raw.flesch_kincaid - 8.34).abs() < 1e-9);
        assert!((raw.gunning_fog - 8.975).abs() < 1e-9);
        assert!((raw.ari - 7.58).abs() < 1e-9);
        assert!((raw.cli - 10.24).abs() < 1e-9);
    }

    #[test]
    fn test_composite_uses_unrounded_components() {
        let result = compute(reference_inputs()).unwrap();
        let raw = result.raw();
        let mean = (raw.flesch_kincaid + raw.gunning_fog + raw.ari + raw.cli) / 4.0;
        assert_eq!(result.composite, mean.round());
    }

    #[test]
    fn test_zero_words_is_undefined() {
        let result = compute(MetricInputs::new(50, 20, 0, 2, 0));
        assert_eq!(
            result,
            Err(MetricsError::Undefined {
                words: 0,
                sentences: 2
            })
        );
    }

    #[test]
    fn test_zero_sentences_is_undefined() {
        let result = compute(MetricInputs::new(50, 20, 10, 0, 0));
        assert!(matches!(result, Err(MetricsError::Undefined { .. })));
    }

    #[test]
    fn test_all_scores_are_finite() {
        let result = compute(MetricInputs::new(0, 0, 1, 1, 0)).unwrap();
        for value in [
            result.flesch,
            result.flesch_kincaid,
            result.gunning_fog,
            result.ari,
            result.cli,
            result.gulpease,
            result.composite,
        ] {
            assert!(value.is_finite());
        }
    }

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(Complexity::from_flesch(70.01), Complexity::Easy);
        assert_eq!(Complexity::from_flesch(70.0), Complexity::Medium);
        assert_eq!(Complexity::from_flesch(50.01), Complexity::Medium);
        assert_eq!(Complexity::from_flesch(50.0), Complexity::Hard);
        assert_eq!(Complexity::from_flesch(-12.0), Complexity::Hard);
    }

    #[test]
    fn test_complexity_reads_unrounded_flesch() {
        let result = compute(reference_inputs()).unwrap();
        assert_eq!(result.complexity(), Complexity::Medium);
        assert_eq!(result.complexity().to_string(), "medium");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(8.34, 1), 8.3);
        assert_eq!(round_to(-1.25, 1), -1.3);
        assert_eq!(round_to(8.78375, 0), 9.0);
    }

    #[test]
    fn test_result_serialization_skips_raw() {
        let result = compute(reference_inputs()).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["flesch"], 61.8);
        assert_eq!(json["composite"], 9.0);
        assert!(json.get("raw").is_none());
    }
}
