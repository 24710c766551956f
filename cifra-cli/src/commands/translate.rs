//! Encrypt and decrypt command implementation

use crate::config::{Cipher, CipherConfig};
use crate::error::{CliError, CliResult};
use crate::input::TextSource;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::Context;
use cifra_core::{alphabet_preset, map_preset, ShiftCipher};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Direction of a translation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plain text to cipher text
    Encrypt,
    /// Cipher text to plain text
    Decrypt,
}

impl Direction {
    /// Lowercase name, used in logs and JSON output
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

/// Arguments shared by the encrypt and decrypt commands
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Text to translate (reads stdin when neither TEXT nor --input is given)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Alphabet preset for the shift cipher
    #[arg(short, long, value_name = "PRESET", default_value = "latin")]
    pub alphabet: String,

    /// Shift key, written in alphabet symbols
    #[arg(short, long, value_name = "KEY")]
    pub key: Option<String>,

    /// Index basis for key offsets
    #[arg(long, value_enum, default_value = "one")]
    pub index_basis: IndexBasisArg,

    /// Handling of symbols outside the alphabet
    #[arg(long, value_enum, default_value = "fail")]
    pub on_conflict: ConflictPolicyArg,

    /// Substitution map preset (replaces the shift cipher)
    #[arg(
        short,
        long,
        value_name = "PRESET",
        conflicts_with_all = ["alphabet", "key", "index_basis"]
    )]
    pub map: Option<String>,

    /// Cipher configuration file
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with_all = ["alphabet", "key", "index_basis", "on_conflict", "map"]
    )]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Translated text only
    Text,
    /// JSON array with input, output and direction
    Json,
}

/// Index basis applied to key offsets
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum IndexBasisArg {
    /// Offsets equal the key symbol's alphabet index
    Zero,
    /// Offsets equal the alphabet index plus one
    One,
}

impl From<IndexBasisArg> for cifra_core::IndexBasis {
    fn from(basis: IndexBasisArg) -> Self {
        match basis {
            IndexBasisArg::Zero => cifra_core::IndexBasis::Zero,
            IndexBasisArg::One => cifra_core::IndexBasis::One,
        }
    }
}

/// Handling of symbols outside the cipher's vocabulary
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ConflictPolicyArg {
    /// Translation stops at the first unknown symbol
    Fail,
    /// Unknown symbols are dropped from the output
    Ignore,
}

impl From<ConflictPolicyArg> for cifra_core::ConflictPolicy {
    fn from(policy: ConflictPolicyArg) -> Self {
        match policy {
            ConflictPolicyArg::Fail => cifra_core::ConflictPolicy::Fail,
            ConflictPolicyArg::Ignore => cifra_core::ConflictPolicy::Ignore,
        }
    }
}

impl TranslateArgs {
    /// Execute the encrypt or decrypt command
    pub fn execute(&self, direction: Direction) -> CliResult<()> {
        self.init_logging()?;

        log::info!("Starting {} run", direction.name());
        log::debug!("Arguments: {:?}", self);

        let cipher = self.build_cipher()?;
        log::debug!("Cipher: {}", cipher.name());

        let source = TextSource::from_args(self.text.clone(), self.input.clone());
        let text = source.read()?;

        let translated = match direction {
            Direction::Encrypt => cipher.encrypt(&text),
            Direction::Decrypt => cipher.decrypt(&text),
        }
        .map_err(|e| CliError::CipherError(e.to_string()))?;

        self.write_translation(&text, &translated, direction)
    }

    /// Build the cipher from the configuration file or the cipher flags
    fn build_cipher(&self) -> CliResult<Cipher> {
        if let Some(path) = &self.config {
            return CipherConfig::from_file(path)?.build();
        }

        if let Some(name) = &self.map {
            let preset = map_preset(name).map_err(|e| CliError::CipherError(e.to_string()))?;
            let mut cipher = preset
                .to_cipher()
                .map_err(|e| CliError::CipherError(e.to_string()))?;
            cipher.set_conflict_policy(self.on_conflict.into());
            return Ok(Cipher::Substitution(cipher));
        }

        let preset =
            alphabet_preset(&self.alphabet).map_err(|e| CliError::CipherError(e.to_string()))?;
        let alphabet = preset
            .to_alphabet()
            .map_err(|e| CliError::CipherError(e.to_string()))?;

        let mut builder = ShiftCipher::builder()
            .alphabet(alphabet)
            .separators(preset.to_separators())
            .index_basis(self.index_basis.into())
            .conflict_policy(self.on_conflict.into());
        if let Some(key) = &self.key {
            builder = builder.key(key.clone());
        }

        let cipher = builder
            .build()
            .map_err(|e| CliError::CipherError(e.to_string()))?;
        Ok(Cipher::Shift(cipher))
    }

    /// Write the translation with the selected formatter
    fn write_translation(&self, input: &str, output: &str, direction: Direction) -> CliResult<()> {
        let mut formatter = self.create_formatter()?;
        formatter.format_translation(input, output, direction.name())?;
        formatter.finish()
    }

    /// Create the formatter for the selected output target and format
    fn create_formatter(&self) -> CliResult<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> CliResult<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}
