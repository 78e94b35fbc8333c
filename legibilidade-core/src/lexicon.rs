//! Complex-word lookup
//!
//! The Gunning fog formula needs to know which words are complex. That
//! judgement comes from an external word list, so the analysis only depends
//! on the [`ComplexWordLexicon`] trait. Load the list once and hand the same
//! reference to every analysis call.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::LexiconError;

/// Read-only set-membership oracle for complex words
pub trait ComplexWordLexicon: Send + Sync {
    /// Check if `word` is complex
    fn is_complex(&self, word: &str) -> bool;
}

/// Word list where membership means complex
///
/// Lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    words: HashSet<String>,
}

impl WordBank {
    /// Create an empty bank; no word is complex
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bank from an iterator of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .filter_map(|w| normalize_entry(w.as_ref()))
                .collect(),
        }
    }

    /// Load a word list with one word per line
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let mut words = HashSet::new();
        for line in BufReader::new(reader).lines() {
            if let Some(word) = normalize_entry(&line?) {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    /// Load a word list from a UTF-8 file
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let file = File::open(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let bank = Self::from_reader(file).map_err(|e| match e {
            LexiconError::Read(source) => LexiconError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        log::debug!("Loaded {} words from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// Number of words in the bank
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the bank holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if the bank holds `word`, ignoring case
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

impl ComplexWordLexicon for WordBank {
    fn is_complex(&self, word: &str) -> bool {
        self.contains(word)
    }
}

fn normalize_entry(line: &str) -> Option<String> {
    let entry = line.trim();
    if entry.is_empty() || entry.starts_with('#') {
        None
    } else {
        Some(entry.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_empty_bank_flags_nothing() {
        let bank = WordBank::new();
        assert!(bank.is_empty());
        assert!(!bank.is_complex("paralelepípedo"));
    }

    #[test]
    fn test_lookup_ignores_case() {
        let bank = WordBank::from_words(["Ornitorrinco"]);
        assert!(bank.is_complex("ornitorrinco"));
        assert!(bank.is_complex("ORNITORRINCO"));
        assert!(!bank.is_complex("gato"));
    }

    #[test]
    fn test_from_reader_skips_comments_and_blanks() {
        let list = "# palavras complexas\n\nquintessência\n  efemeridade  \n#comentário\n";
        let bank = WordBank::from_reader(Cursor::new(list)).unwrap();

        assert_eq!(bank.len(), 2);
        assert!(bank.contains("quintessência"));
        assert!(bank.contains("efemeridade"));
        assert!(!bank.contains("#comentário"));
    }

    #[test]
    fn test_from_file_missing() {
        let result = WordBank::from_file(Path::new("/nonexistent/palavras.txt"));
        match result {
            Err(LexiconError::Io { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/palavras.txt"));
            }
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_usable_as_trait_object() {
        let bank = WordBank::from_words(["idiossincrasia"]);
        let lexicon: &dyn ComplexWordLexicon = &bank;
        assert!(lexicon.is_complex("Idiossincrasia"));
    }
}
