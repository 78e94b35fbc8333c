//! Complex-word list source management for CLI

use legibilidade_core::WordBank;
use std::path::{Path, PathBuf};

/// Source of the complex-word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// No list: every word counts as simple
    Empty,
    /// Word list file
    File(PathBuf),
}

impl LexiconSource {
    /// Pick the command-line path over the configured one
    pub fn resolve(cli_path: Option<&Path>, config_path: Option<&Path>) -> Self {
        match cli_path.or(config_path) {
            Some(path) => LexiconSource::File(path.to_path_buf()),
            None => LexiconSource::Empty,
        }
    }

    /// Get the display name for the lexicon source
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::Empty => "None (no complex words)".to_string(),
            LexiconSource::File(path) => format!("Word list: {}", path.display()),
        }
    }

    /// Load the word bank
    ///
    /// A list that cannot be read is reported and replaced by an empty bank
    /// so the analysis can go on.
    pub fn load(&self) -> WordBank {
        match self {
            LexiconSource::Empty => WordBank::new(),
            LexiconSource::File(path) => match WordBank::from_file(path) {
                Ok(bank) => {
                    log::info!("Loaded {} complex words from {}", bank.len(), path.display());
                    bank
                }
                Err(e) => {
                    log::warn!("{e}; continuing without complex words");
                    WordBank::new()
                }
            },
        }
    }
}
