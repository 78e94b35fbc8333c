//! Legibilidade CLI library
//!
//! This library provides the command-line interface for the legibilidade
//! Portuguese readability analyzer.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod lexicon_source;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
