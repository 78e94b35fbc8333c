//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

pub mod analyze;
pub mod generate_config;
pub mod syllables;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze text files and report readability scores
    Analyze(analyze::AnalyzeArgs),

    /// Count the syllables of individual words
    Syllables(syllables::SyllablesArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Syllables(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in analyze::OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        println!(
                            "  {:<10} {}",
                            value.get_name(),
                            value.get_help().map(|h| h.to_string()).unwrap_or_default()
                        );
                    }
                }
            }
        }
    }
}
