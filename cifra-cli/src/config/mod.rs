//! Configuration module

use crate::error::{CliError, CliResult};
use anyhow::Context;
use cifra_core::{
    alphabet_preset, map_preset, Alphabet, ConflictPolicy, IndexBasis, Separators, ShiftCipher,
    SubstitutionCipher,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A fully configured cipher, ready to translate text
#[derive(Debug, Clone)]
pub enum Cipher {
    /// Positional shift cipher
    Shift(ShiftCipher),
    /// Pair-table substitution cipher
    Substitution(SubstitutionCipher),
}

impl Cipher {
    /// Human-readable cipher kind
    pub fn name(&self) -> &'static str {
        match self {
            Cipher::Shift(_) => "shift",
            Cipher::Substitution(_) => "substitution",
        }
    }

    /// Translates plain text to cipher text.
    pub fn encrypt(&self, text: &str) -> cifra_core::Result<String> {
        match self {
            Cipher::Shift(cipher) => cipher.encrypt(text),
            Cipher::Substitution(cipher) => cipher.encrypt(text),
        }
    }

    /// Translates cipher text back to plain text.
    pub fn decrypt(&self, text: &str) -> cifra_core::Result<String> {
        match self {
            Cipher::Shift(cipher) => cipher.decrypt(text),
            Cipher::Substitution(cipher) => cipher.decrypt(text),
        }
    }
}

/// Cipher configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CipherConfig {
    /// Shift cipher section
    pub shift: Option<ShiftConfig>,

    /// Substitution cipher section
    pub substitution: Option<SubstitutionConfig>,
}

/// Shift cipher configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ShiftConfig {
    /// Alphabet preset name
    pub alphabet: Option<String>,

    /// Inline alphabet symbols, in alphabet order
    pub symbols: Option<Vec<String>>,

    /// Separator overrides
    pub separators: Option<SeparatorConfig>,

    /// Key, written in alphabet symbols
    pub key: Option<String>,

    /// Index basis, "zero" or "one"
    pub index_basis: String,

    /// Conflict policy, "fail" or "ignore"
    pub on_conflict: String,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            alphabet: None,
            symbols: None,
            separators: None,
            key: None,
            index_basis: "one".to_string(),
            on_conflict: "fail".to_string(),
        }
    }
}

/// Substitution cipher configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SubstitutionConfig {
    /// Map preset name
    pub map: Option<String>,

    /// Inline substitution pairs
    pub pairs: Option<Vec<PairConfig>>,

    /// Plain-side separator overrides
    pub plain_separators: Option<SeparatorConfig>,

    /// Cipher-side separator overrides
    pub cipher_separators: Option<SeparatorConfig>,

    /// Conflict policy, "fail" or "ignore"
    pub on_conflict: String,
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            map: None,
            pairs: None,
            plain_separators: None,
            cipher_separators: None,
            on_conflict: "fail".to_string(),
        }
    }
}

/// One plain/cipher pair of an inline substitution table
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PairConfig {
    /// Plain-side symbol
    pub plain: String,
    /// Cipher-side symbol
    pub cipher: String,
}

/// Separator spellings for one side of a cipher
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SeparatorConfig {
    /// Between symbols of a word
    pub symbol: String,
    /// Between words
    pub word: String,
    /// Spelled at symbol/word junctions, when distinct
    pub symbol_word: Option<String>,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            word: " ".to_string(),
            symbol_word: None,
        }
    }
}

impl SeparatorConfig {
    /// Converts to the core separator set.
    pub fn to_separators(&self) -> Separators {
        let separators = Separators::new(self.symbol.clone(), self.word.clone());
        match &self.symbol_word {
            Some(junction) => separators.with_symbol_word(junction.clone()),
            None => separators,
        }
    }
}

impl CipherConfig {
    /// Loads a cipher configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config =
            toml::from_str(&content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Builds the configured cipher.
    ///
    /// Exactly one of the `[shift]` and `[substitution]` sections may be
    /// present.
    pub fn build(&self) -> CliResult<Cipher> {
        match (&self.shift, &self.substitution) {
            (Some(shift), None) => shift.build(),
            (None, Some(substitution)) => substitution.build(),
            (Some(_), Some(_)) => Err(CliError::ConfigError(
                "both [shift] and [substitution] sections are present".to_string(),
            )
            .into()),
            (None, None) => Err(CliError::ConfigError(
                "neither [shift] nor [substitution] section is present".to_string(),
            )
            .into()),
        }
    }
}

impl ShiftConfig {
    /// Builds a shift cipher from this section.
    pub fn build(&self) -> CliResult<Cipher> {
        let (alphabet, preset_separators) = match (&self.alphabet, &self.symbols) {
            (Some(name), None) => {
                let preset =
                    alphabet_preset(name).map_err(|e| CliError::CipherError(e.to_string()))?;
                let alphabet = preset
                    .to_alphabet()
                    .map_err(|e| CliError::CipherError(e.to_string()))?;
                (alphabet, Some(preset.to_separators()))
            }
            (None, Some(symbols)) => {
                let alphabet = Alphabet::new(symbols.iter().cloned())
                    .map_err(|e| CliError::CipherError(e.to_string()))?;
                (alphabet, None)
            }
            (Some(_), Some(_)) => {
                return Err(CliError::ConfigError(
                    "[shift] names both an alphabet preset and inline symbols".to_string(),
                )
                .into())
            }
            (None, None) => {
                return Err(CliError::ConfigError(
                    "[shift] names neither an alphabet preset nor inline symbols".to_string(),
                )
                .into())
            }
        };

        let separators = match &self.separators {
            Some(config) => config.to_separators(),
            None => preset_separators.unwrap_or_default(),
        };

        let mut builder = ShiftCipher::builder()
            .alphabet(alphabet)
            .separators(separators)
            .index_basis(parse_index_basis(&self.index_basis)?)
            .conflict_policy(parse_conflict_policy(&self.on_conflict)?);
        if let Some(key) = &self.key {
            builder = builder.key(key.clone());
        }

        let cipher = builder
            .build()
            .map_err(|e| CliError::CipherError(e.to_string()))?;
        Ok(Cipher::Shift(cipher))
    }
}

impl SubstitutionConfig {
    /// Builds a substitution cipher from this section.
    pub fn build(&self) -> CliResult<Cipher> {
        let policy = parse_conflict_policy(&self.on_conflict)?;

        let cipher = match (&self.map, &self.pairs) {
            (Some(name), None) => {
                if self.plain_separators.is_some() || self.cipher_separators.is_some() {
                    return Err(CliError::ConfigError(
                        "separator overrides cannot be combined with a map preset".to_string(),
                    )
                    .into());
                }
                let preset =
                    map_preset(name).map_err(|e| CliError::CipherError(e.to_string()))?;
                let mut cipher = preset
                    .to_cipher()
                    .map_err(|e| CliError::CipherError(e.to_string()))?;
                cipher.set_conflict_policy(policy);
                cipher
            }
            (None, Some(pairs)) => {
                let mut builder = SubstitutionCipher::builder()
                    .mappings(
                        pairs
                            .iter()
                            .map(|pair| (pair.plain.clone(), pair.cipher.clone())),
                    )
                    .conflict_policy(policy);
                if let Some(separators) = &self.plain_separators {
                    builder = builder.plain_separators(separators.to_separators());
                }
                if let Some(separators) = &self.cipher_separators {
                    builder = builder.cipher_separators(separators.to_separators());
                }
                builder
                    .build()
                    .map_err(|e| CliError::CipherError(e.to_string()))?
            }
            (Some(_), Some(_)) => {
                return Err(CliError::ConfigError(
                    "[substitution] names both a map preset and inline pairs".to_string(),
                )
                .into())
            }
            (None, None) => {
                return Err(CliError::ConfigError(
                    "[substitution] names neither a map preset nor inline pairs".to_string(),
                )
                .into())
            }
        };

        Ok(Cipher::Substitution(cipher))
    }
}

/// Parses an index basis name used in configuration files and flags.
pub fn parse_index_basis(name: &str) -> CliResult<IndexBasis> {
    match name {
        "zero" => Ok(IndexBasis::Zero),
        "one" => Ok(IndexBasis::One),
        other => Err(CliError::ConfigError(format!(
            "unknown index basis '{other}', expected \"zero\" or \"one\""
        ))
        .into()),
    }
}

/// Parses a conflict policy name used in configuration files and flags.
pub fn parse_conflict_policy(name: &str) -> CliResult<ConflictPolicy> {
    match name {
        "fail" => Ok(ConflictPolicy::Fail),
        "ignore" => Ok(ConflictPolicy::Ignore),
        other => Err(CliError::ConfigError(format!(
            "unknown conflict policy '{other}', expected \"fail\" or \"ignore\""
        ))
        .into()),
    }
}
