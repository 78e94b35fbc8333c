//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

const TEMPLATE: &str = r#"# legibilidade configuration
#
# Command-line flags take precedence over the values below.

[analysis]
# Complex-word list, one word per line; lines starting with '#' are ignored.
# Without a list every word counts as simple.
# word_list = "palavras-complexas.txt"

# Worker threads for batch analysis (0 = one per CPU)
worker_threads = 0

[output]
# One of: text, json, csv, markdown
default_format = "text"

# Indent JSON output
pretty_json = true

# List documents that could not be analyzed, with the reason
include_skipped = true
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to point word_list at your complex-word list");
        println!("2. Use it for analysis:");
        println!(
            "   legibilidade analyze -i texto.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: CliConfig = toml::from_str(TEMPLATE).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("legibilidade.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };

        assert!(args.execute().is_ok());
        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[analysis]"));
        assert!(content.contains("[output]"));
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("legibilidade.toml");
        fs::write(&output_path, "# mine").unwrap();

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "# mine");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: true,
        };
        assert!(args.execute().is_ok());
        assert!(fs::read_to_string(&output_path)
            .unwrap()
            .contains("[analysis]"));
    }
}
