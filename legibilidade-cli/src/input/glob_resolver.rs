//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use super::FileReader;

/// Where a document's text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Identifier used for the document in reports
    pub fn id(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole text of the source
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

/// Resolve command-line inputs, where `-` stands for standard input
///
/// Standard input, when requested, comes first; files follow in sorted order.
pub fn resolve_inputs(inputs: &[String]) -> Result<Vec<InputSource>> {
    let (stdin, patterns): (Vec<&String>, Vec<&String>) =
        inputs.iter().partition(|input| input.as_str() == "-");

    let mut sources = Vec::new();
    if !stdin.is_empty() {
        sources.push(InputSource::Stdin);
    }
    if !patterns.is_empty() || sources.is_empty() {
        let patterns: Vec<String> = patterns.into_iter().cloned().collect();
        sources.extend(resolve_patterns(&patterns)?.into_iter().map(InputSource::File));
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_files() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "Segundo texto.").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "Primeiro texto.").unwrap();
        fs::write(temp_dir.path().join("notas.md"), "# Notas").unwrap();
        fs::create_dir(temp_dir.path().join("sub.txt")).unwrap();
        temp_dir
    }

    #[test]
    fn test_glob_matches_files_only_sorted() {
        let temp_dir = setup_files();
        let pattern = temp_dir.path().join("*.txt").display().to_string();

        let files = resolve_patterns(&[pattern]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_overlapping_patterns_deduplicated() {
        let temp_dir = setup_files();
        let all = temp_dir.path().join("*").display().to_string();
        let one = temp_dir.path().join("a.txt").display().to_string();

        let files = resolve_patterns(&[all, one]).unwrap();
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_no_match_is_an_error() {
        let temp_dir = setup_files();
        let pattern = temp_dir.path().join("*.pdf").display().to_string();

        let error = resolve_patterns(&[pattern]).unwrap_err();
        assert!(error.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let error = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(error.to_string().contains("Invalid glob pattern"));
    }

    #[test]
    fn test_dash_means_stdin() {
        let sources = resolve_inputs(&["-".to_string()]).unwrap();
        assert_eq!(sources, vec![InputSource::Stdin]);
        assert_eq!(sources[0].id(), "stdin");
    }

    #[test]
    fn test_stdin_precedes_files() {
        let temp_dir = setup_files();
        let file = temp_dir.path().join("a.txt");

        let sources = resolve_inputs(&[file.display().to_string(), "-".to_string()]).unwrap();
        assert_eq!(sources, vec![InputSource::Stdin, InputSource::File(file)]);
    }
}
