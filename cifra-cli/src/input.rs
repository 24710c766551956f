//! Input source handling

use crate::error::{CliError, CliResult};
use anyhow::Context;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where the text to translate comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Text given directly on the command line
    Arg(String),
    /// Text read from a file
    File(PathBuf),
    /// Text read from standard input
    Stdin,
}

impl TextSource {
    /// Selects the source from the parsed command-line arguments.
    ///
    /// A positional argument wins over `--input`; when neither is given the
    /// text is read from standard input.
    pub fn from_args(text: Option<String>, input: Option<PathBuf>) -> Self {
        match (text, input) {
            (Some(text), _) => TextSource::Arg(text),
            (None, Some(path)) => TextSource::File(path),
            (None, None) => TextSource::Stdin,
        }
    }

    /// Reads the full input text from the source.
    pub fn read(self) -> CliResult<String> {
        match self {
            TextSource::Arg(text) => Ok(text),
            TextSource::File(path) => {
                if !path.exists() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))
            }
            TextSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read from stdin")?;
                Ok(buffer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_positional_text_wins_over_input_flag() {
        let source = TextSource::from_args(
            Some("hello".to_string()),
            Some(PathBuf::from("unused.txt")),
        );
        assert_eq!(source, TextSource::Arg("hello".to_string()));
    }

    #[test]
    fn test_missing_arguments_select_stdin() {
        let source = TextSource::from_args(None, None);
        assert_eq!(source, TextSource::Stdin);
    }

    #[test]
    fn test_arg_source_returns_text_unchanged() {
        let source = TextSource::Arg("hello world".to_string());
        assert_eq!(source.read().unwrap(), "hello world");
    }

    #[test]
    fn test_file_source_reads_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "attack at dawn").unwrap();

        let source = TextSource::File(file.path().to_path_buf());
        assert_eq!(source.read().unwrap(), "attack at dawn");
    }

    #[test]
    fn test_missing_file_reports_file_not_found() {
        let source = TextSource::File(PathBuf::from("does-not-exist.txt"));
        let error = source.read().unwrap_err();
        assert!(error.to_string().contains("File not found"));
    }
}
