//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs translations as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    translations: Vec<TranslationData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationData {
    /// The input text as given to the cipher
    pub input: String,
    /// The translated text
    pub output: String,
    /// Direction of the translation
    pub direction: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            translations: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_translation(&mut self, input: &str, output: &str, direction: &str) -> Result<()> {
        self.translations.push(TranslationData {
            input: input.trim().to_string(),
            output: output.to_string(),
            direction: direction.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.translations)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
