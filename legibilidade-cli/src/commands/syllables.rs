//! Syllables command implementation

use anyhow::Result;
use clap::Args;
use legibilidade_core::SyllableCounter;
use std::io::{self, Write};

/// Arguments for the syllables command
#[derive(Debug, Args)]
pub struct SyllablesArgs {
    /// Words (or phrases) to count
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Show the vowel clusters behind each count
    #[arg(long)]
    pub clusters: bool,
}

impl SyllablesArgs {
    /// Execute the syllables command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_counts(&mut stdout.lock())
    }

    fn write_counts<W: Write>(&self, out: &mut W) -> Result<()> {
        let counter = SyllableCounter::new();
        let mut total = 0;

        for word in &self.words {
            let count = counter.count(word);
            total += count;
            writeln!(out, "{word}\t{count}")?;

            if self.clusters {
                for cluster in counter.clusters(word) {
                    writeln!(
                        out,
                        "  {:>3}  {:<6} {:?} (+{})",
                        cluster.char_offset,
                        cluster.text,
                        cluster.kind,
                        cluster.kind.syllables()
                    )?;
                }
            }
        }

        if self.words.len() > 1 {
            writeln!(out, "total\t{total}")?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(words: &[&str], clusters: bool) -> String {
        let args = SyllablesArgs {
            words: words.iter().map(|w| w.to_string()).collect(),
            clusters,
        };
        let mut buffer = Vec::new();
        args.write_counts(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_counts_and_total() {
        let output = run(&["Paraguai", "saúde", "leem"], false);
        assert_eq!(output, "Paraguai\t3\nsaúde\t3\nleem\t2\ntotal\t8\n");
    }

    #[test]
    fn test_single_word_has_no_total() {
        assert_eq!(run(&["coração"], false), "coração\t3\n");
    }

    #[test]
    fn test_cluster_breakdown() {
        let output = run(&["uai"], true);
        assert!(output.starts_with("uai\t1\n"));
        assert!(output.contains("Triphthong (+1)"));
    }
}
