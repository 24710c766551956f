//! Built-in alphabets and substitution tables
//!
//! Preset data lives in TOML files under `configs/`, embedded into the
//! binary at compile time and parsed once on first use. A broken embedded
//! file is a build defect, caught by the tests in this module; looking up a
//! preset by name is the only fallible path exposed to callers.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};
use crate::separators::Separators;
use crate::substitution::SubstitutionCipher;

static ALPHABET_PRESETS: OnceLock<HashMap<String, AlphabetPreset>> = OnceLock::new();
static MAP_PRESETS: OnceLock<HashMap<String, MapPreset>> = OnceLock::new();

macro_rules! embed_preset {
    ($name:expr, $path:expr) => {
        ($name, include_str!($path))
    };
}

/// One embedded alphabet: ordered symbols plus the separator convention the
/// alphabet is normally written with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphabetPreset {
    /// Name and description.
    pub metadata: PresetMetadata,
    /// The symbol list.
    pub alphabet: AlphabetData,
    /// Customary separators for text in this alphabet.
    pub separators: SeparatorData,
}

/// One embedded substitution table with per-side separator conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPreset {
    /// Name and description.
    pub metadata: PresetMetadata,
    /// The pair list.
    pub map: MapData,
    /// Plain-side separators.
    pub plain: SideData,
    /// Cipher-side separators.
    pub cipher: SideData,
}

/// Preset identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetMetadata {
    /// Lookup name, matching the file's key.
    pub name: String,
    /// One-line description, shown by listings.
    pub description: String,
}

/// Symbol list of an alphabet preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphabetData {
    /// Symbols in alphabet order.
    pub symbols: Vec<String>,
}

/// Separator spellings as written in preset files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeparatorData {
    /// Between symbols of a word.
    pub symbol: String,
    /// Between words.
    pub word: String,
    /// Spelled at symbol/word junctions, when distinct.
    #[serde(default)]
    pub symbol_word: Option<String>,
}

/// Pair list of a map preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapData {
    /// Ordered `(plain, cipher)` pairs.
    pub pairs: Vec<MapPairData>,
}

/// One substitution pair as written in preset files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPairData {
    /// Plain-side symbol.
    pub plain: String,
    /// Cipher-side symbol.
    pub cipher: String,
}

/// One side of a map preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideData {
    /// The side's separators.
    pub separators: SeparatorData,
}

impl AlphabetPreset {
    /// Builds the [`Alphabet`] from the preset's symbol list.
    pub fn to_alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(self.alphabet.symbols.iter().cloned())
    }

    /// The preset's separator convention.
    pub fn to_separators(&self) -> Separators {
        self.separators.to_separators()
    }
}

impl MapPreset {
    /// Builds a [`SubstitutionCipher`] from the preset's pairs and
    /// separators.
    pub fn to_cipher(&self) -> Result<SubstitutionCipher> {
        SubstitutionCipher::builder()
            .mappings(
                self.map
                    .pairs
                    .iter()
                    .map(|pair| (pair.plain.clone(), pair.cipher.clone())),
            )
            .plain_separators(self.plain.separators.to_separators())
            .cipher_separators(self.cipher.separators.to_separators())
            .build()
    }
}

impl SeparatorData {
    fn to_separators(&self) -> Separators {
        let separators = Separators::new(self.symbol.clone(), self.word.clone());
        match &self.symbol_word {
            Some(symbol_word) => separators.with_symbol_word(symbol_word.clone()),
            None => separators,
        }
    }
}

fn load_alphabet_presets() -> HashMap<String, AlphabetPreset> {
    let embedded = [
        embed_preset!("latin", "../configs/alphabets/latin.toml"),
        embed_preset!("spanish", "../configs/alphabets/spanish.toml"),
        embed_preset!("morse", "../configs/alphabets/morse.toml"),
    ];

    let mut presets = HashMap::new();
    for (name, toml_content) in embedded {
        let preset: AlphabetPreset = toml::from_str(toml_content)
            .unwrap_or_else(|e| panic!("embedded alphabet preset '{name}' is invalid: {e}"));
        assert_eq!(
            preset.metadata.name, name,
            "embedded alphabet preset name mismatch"
        );
        presets.insert(name.to_string(), preset);
    }
    presets
}

fn load_map_presets() -> HashMap<String, MapPreset> {
    let embedded = [embed_preset!("morse", "../configs/maps/morse.toml")];

    let mut presets = HashMap::new();
    for (name, toml_content) in embedded {
        let preset: MapPreset = toml::from_str(toml_content)
            .unwrap_or_else(|e| panic!("embedded map preset '{name}' is invalid: {e}"));
        assert_eq!(
            preset.metadata.name, name,
            "embedded map preset name mismatch"
        );
        presets.insert(name.to_string(), preset);
    }
    presets
}

/// Looks up a built-in alphabet by name.
///
/// # Errors
///
/// [`CipherError::UnknownPreset`] when no alphabet has that name.
pub fn alphabet_preset(name: &str) -> Result<&'static AlphabetPreset> {
    let presets = ALPHABET_PRESETS.get_or_init(load_alphabet_presets);
    presets.get(name).ok_or_else(|| CipherError::UnknownPreset {
        name: name.to_string(),
    })
}

/// Looks up a built-in substitution table by name.
///
/// # Errors
///
/// [`CipherError::UnknownPreset`] when no map has that name.
pub fn map_preset(name: &str) -> Result<&'static MapPreset> {
    let presets = MAP_PRESETS.get_or_init(load_map_presets);
    presets.get(name).ok_or_else(|| CipherError::UnknownPreset {
        name: name.to_string(),
    })
}

/// Names of the built-in alphabets, sorted.
pub fn available_alphabets() -> Vec<&'static str> {
    let presets = ALPHABET_PRESETS.get_or_init(load_alphabet_presets);
    let mut names: Vec<&'static str> = presets.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

/// Names of the built-in substitution tables, sorted.
pub fn available_maps() -> Vec<&'static str> {
    let presets = MAP_PRESETS.get_or_init(load_map_presets);
    let mut names: Vec<&'static str> = presets.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}
