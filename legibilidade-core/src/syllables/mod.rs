//! Syllable counting for Portuguese text
//!
//! The counter approximates phonetic syllabification by classifying vowel
//! clusters rather than by splitting words. Text is composed to NFC and
//! lower-cased once, then a single left-to-right scan looks at most three
//! characters ahead of the cursor and never backtracks:
//!
//! 1. a cataloged triphthong counts as one syllable;
//! 2. a cataloged hiatus counts as two, even when it also looks like a
//!    diphthong;
//! 3. a cataloged diphthong counts as one;
//! 4. any other vowel pair counts as two when it holds a tonic í/ú and as one
//!    otherwise;
//! 5. an isolated vowel counts as one.
//!
//! # Example
//!
//! ```rust
//! use legibilidade_core::count_syllables;
//!
//! assert_eq!(count_syllables("pai"), 1);
//! assert_eq!(count_syllables("saúde"), 3);
//! assert_eq!(count_syllables("123"), 0);
//! ```

pub mod tables;

use serde::Serialize;

use crate::text::compose;
use tables::{is_diphthong, is_hiatus, is_tonic, is_triphthong, is_vowel};

/// How a vowel cluster was classified during the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterKind {
    /// Cataloged three-vowel nucleus
    Triphthong,
    /// Cataloged pair split into two nuclei
    Hiatus,
    /// Cataloged pair merged into one nucleus
    Diphthong,
    /// Uncataloged pair split because it holds a tonic í/ú
    TonicHiatus,
    /// Uncataloged pair merged by default
    UncatalogedPair,
    /// Single vowel followed by a non-vowel or the end of text
    Vowel,
}

impl ClusterKind {
    /// Number of syllables this kind of cluster contributes
    pub fn syllables(self) -> usize {
        match self {
            ClusterKind::Hiatus | ClusterKind::TonicHiatus => 2,
            _ => 1,
        }
    }

    /// Number of characters consumed by this kind of cluster
    pub fn width(self) -> usize {
        match self {
            ClusterKind::Triphthong => 3,
            ClusterKind::Vowel => 1,
            _ => 2,
        }
    }
}

/// A vowel cluster found by [`ClusterScanner`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    /// Classification of the cluster
    pub kind: ClusterKind,
    /// Character offset in the composed, lower-cased text
    pub char_offset: usize,
    /// The lower-cased graphemes of the cluster
    pub text: String,
}

impl Cluster {
    /// Number of syllables the cluster contributes
    pub fn syllables(&self) -> usize {
        self.kind.syllables()
    }
}

/// Cursor-based scanner yielding the vowel clusters of a text in order
#[derive(Debug, Clone)]
pub struct ClusterScanner {
    chars: Vec<char>,
    pos: usize,
}

impl ClusterScanner {
    /// Create a scanner over the composed, lower-cased form of `text`
    pub fn new(text: &str) -> Self {
        Self {
            chars: compose(text).chars().flat_map(char::to_lowercase).collect(),
            pos: 0,
        }
    }

    /// Classify the cluster starting at `pos`, which must hold a vowel
    fn classify_at(&self, pos: usize) -> ClusterKind {
        let chars = &self.chars;

        if let Some(&[a, b, c]) = chars.get(pos..pos + 3) {
            if is_triphthong([a, b, c]) {
                return ClusterKind::Triphthong;
            }
        }

        match chars.get(pos..pos + 2) {
            Some(&[a, b]) if is_hiatus([a, b]) => ClusterKind::Hiatus,
            Some(&[a, b]) if is_diphthong([a, b]) => ClusterKind::Diphthong,
            Some(&[a, b]) if is_vowel(b) => {
                if is_tonic(a) || is_tonic(b) {
                    ClusterKind::TonicHiatus
                } else {
                    ClusterKind::UncatalogedPair
                }
            }
            _ => ClusterKind::Vowel,
        }
    }
}

impl Iterator for ClusterScanner {
    type Item = Cluster;

    fn next(&mut self) -> Option<Cluster> {
        while self.pos < self.chars.len() {
            if !is_vowel(self.chars[self.pos]) {
                self.pos += 1;
                continue;
            }

            let kind = self.classify_at(self.pos);
            let start = self.pos;
            self.pos += kind.width();

            return Some(Cluster {
                kind,
                char_offset: start,
                text: self.chars[start..self.pos].iter().collect(),
            });
        }
        None
    }
}

/// Stateless syllable counter
///
/// Holds no data of its own; the type exists so callers can pass a counter
/// around where a strategy object is expected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyllableCounter;

impl SyllableCounter {
    /// Create a new counter
    pub fn new() -> Self {
        Self
    }

    /// Count the syllables in `text`
    ///
    /// Returns 0 for empty text and for text without alphabetic characters.
    /// Any text holding a letter counts at least one syllable, even when it
    /// has no vowel at all (`"bd"` counts 1).
    pub fn count(&self, text: &str) -> usize {
        if text.trim().is_empty() {
            return 0;
        }

        let total: usize = ClusterScanner::new(text).map(|c| c.syllables()).sum();

        if total > 0 || text.chars().any(char::is_alphabetic) {
            total.max(1)
        } else {
            0
        }
    }

    /// List the vowel clusters of `text` with their classification
    pub fn clusters(&self, text: &str) -> Vec<Cluster> {
        ClusterScanner::new(text).collect()
    }
}

/// Count the syllables in `text` with the default counter
pub fn count_syllables(text: &str) -> usize {
    SyllableCounter.count(text)
}
