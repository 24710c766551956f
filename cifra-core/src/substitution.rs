//! Direct substitution cipher with independent separators per side
//!
//! Translates symbol-for-symbol through a lookup table. Each side of the
//! table is its own vocabulary with its own separators, so the two sides may
//! look nothing alike: letters joined bare and split by spaces on the plain
//! side, Morse tokens joined by spaces and split by `/` on the cipher side.

use std::collections::{HashMap, HashSet};

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};
use crate::policy::ConflictPolicy;
use crate::separators::Separators;
use crate::tokenizer::Tokenizer;

/// Bidirectional symbol-substitution cipher.
///
/// The mapping is given as ordered `(plain, cipher)` pairs. Plain symbols
/// must be unique and both sides non-blank; cipher symbols are *not* checked
/// for uniqueness. When several plain symbols share a cipher symbol the
/// decode table keeps the last pair in order, and decryption of that symbol
/// returns that pair's plain side. Keep the mapping one-to-one if decryption
/// must invert encryption exactly.
#[derive(Debug, Clone)]
pub struct SubstitutionCipher {
    pairs: Vec<(String, String)>,
    encode_map: HashMap<String, String>,
    decode_map: HashMap<String, String>,
    plain_alphabet: Alphabet,
    cipher_alphabet: Alphabet,
    plain_separators: Separators,
    cipher_separators: Separators,
    policy: ConflictPolicy,
}

/// Lookup tables and per-side vocabularies derived from the pair list.
#[derive(Debug)]
struct MapTables {
    pairs: Vec<(String, String)>,
    encode_map: HashMap<String, String>,
    decode_map: HashMap<String, String>,
    plain_alphabet: Alphabet,
    cipher_alphabet: Alphabet,
}

impl SubstitutionCipher {
    /// Creates a builder.
    pub fn builder() -> SubstitutionCipherBuilder {
        SubstitutionCipherBuilder::default()
    }

    /// The mapping pairs in the order given.
    pub fn mappings(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Separators of the plain side.
    pub fn plain_separators(&self) -> &Separators {
        &self.plain_separators
    }

    /// Separators of the cipher side.
    pub fn cipher_separators(&self) -> &Separators {
        &self.cipher_separators
    }

    /// Current conflict policy.
    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Changes the conflict policy.
    pub fn set_conflict_policy(&mut self, policy: ConflictPolicy) {
        self.policy = policy;
    }

    /// Replaces the mapping, revalidating pairs and both separator sides
    /// against the new vocabularies. The previous mapping stays active on
    /// error.
    pub fn set_mappings<I, P, C>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(plain, cipher)| (plain.into(), cipher.into()))
            .collect();
        let tables = MapTables::build(pairs)?;
        self.plain_separators.validate(&tables.plain_alphabet)?;
        self.cipher_separators.validate(&tables.cipher_alphabet)?;
        self.pairs = tables.pairs;
        self.encode_map = tables.encode_map;
        self.decode_map = tables.decode_map;
        self.plain_alphabet = tables.plain_alphabet;
        self.cipher_alphabet = tables.cipher_alphabet;
        Ok(())
    }

    /// Translates plain text to cipher text.
    ///
    /// # Errors
    ///
    /// Under [`ConflictPolicy::Fail`]: [`CipherError::InvalidInputSymbol`]
    /// for a character outside every class, [`CipherError::SymbolNotMapped`]
    /// for a symbol token with no table entry. Under
    /// [`ConflictPolicy::Ignore`] both are dropped instead.
    pub fn encrypt(&self, text: &str) -> Result<String> {
        self.translate(
            text,
            &self.encode_map,
            &self.plain_alphabet,
            &self.plain_separators,
            &self.cipher_separators,
        )
    }

    /// Translates cipher text back to plain text, reconstructing the plain
    /// side's separators.
    pub fn decrypt(&self, text: &str) -> Result<String> {
        self.translate(
            text,
            &self.decode_map,
            &self.cipher_alphabet,
            &self.cipher_separators,
            &self.plain_separators,
        )
    }

    /// [`encrypt`](Self::encrypt) with errors suppressed into `None`.
    pub fn encrypt_opt(&self, text: &str) -> Option<String> {
        self.encrypt(text).ok()
    }

    /// [`decrypt`](Self::decrypt) with errors suppressed into `None`.
    pub fn decrypt_opt(&self, text: &str) -> Option<String> {
        self.decrypt(text).ok()
    }

    fn translate(
        &self,
        text: &str,
        map: &HashMap<String, String>,
        source_alphabet: &Alphabet,
        source_separators: &Separators,
        target_separators: &Separators,
    ) -> Result<String> {
        let tokenizer = Tokenizer::new(source_alphabet, source_separators, self.policy);
        tokenizer.translate(text, target_separators, |run| match map.get(run.text) {
            Some(translated) => Ok(Some(translated.clone())),
            None => match self.policy {
                ConflictPolicy::Fail => Err(CipherError::SymbolNotMapped {
                    symbol: run.text.to_string(),
                    position: run.start,
                }),
                ConflictPolicy::Ignore => Ok(None),
            },
        })
    }
}

impl MapTables {
    /// Validates the pair list and derives lookup tables plus the per-side
    /// vocabularies. The decode table is built in pair order, so a repeated
    /// cipher symbol resolves to the last pair that uses it.
    fn build(pairs: Vec<(String, String)>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(CipherError::EmptyMap);
        }
        let mut seen_plain: HashSet<&str> = HashSet::with_capacity(pairs.len());
        for (index, (plain, cipher)) in pairs.iter().enumerate() {
            if plain.trim().is_empty() || cipher.trim().is_empty() {
                return Err(CipherError::BlankMapEntry { index });
            }
            if !seen_plain.insert(plain) {
                return Err(CipherError::DuplicateMapEntry {
                    symbol: plain.clone(),
                });
            }
        }

        let mut encode_map = HashMap::with_capacity(pairs.len());
        let mut decode_map = HashMap::with_capacity(pairs.len());
        let mut cipher_symbols: Vec<String> = Vec::with_capacity(pairs.len());
        let mut seen_cipher: HashSet<&str> = HashSet::with_capacity(pairs.len());
        for (plain, cipher) in &pairs {
            encode_map.insert(plain.clone(), cipher.clone());
            decode_map.insert(cipher.clone(), plain.clone());
            if seen_cipher.insert(cipher) {
                cipher_symbols.push(cipher.clone());
            }
        }
        let plain_symbols: Vec<String> = pairs.iter().map(|(plain, _)| plain.clone()).collect();

        Ok(Self {
            pairs,
            encode_map,
            decode_map,
            plain_alphabet: Alphabet::from_validated(plain_symbols),
            cipher_alphabet: Alphabet::from_validated(cipher_symbols),
        })
    }
}

/// Fluent builder for [`SubstitutionCipher`].
#[derive(Debug, Default)]
pub struct SubstitutionCipherBuilder {
    pairs: Vec<(String, String)>,
    plain_separators: Option<Separators>,
    cipher_separators: Option<Separators>,
    policy: ConflictPolicy,
}

impl SubstitutionCipherBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `(plain, cipher)` pair.
    pub fn mapping(mut self, plain: impl Into<String>, cipher: impl Into<String>) -> Self {
        self.pairs.push((plain.into(), cipher.into()));
        self
    }

    /// Appends pairs in order.
    pub fn mappings<I, P, C>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        self.pairs
            .extend(pairs.into_iter().map(|(p, c)| (p.into(), c.into())));
        self
    }

    /// Sets the plain side's separators. Defaults to plain text (`""`
    /// between symbols, `" "` between words).
    pub fn plain_separators(mut self, separators: Separators) -> Self {
        self.plain_separators = Some(separators);
        self
    }

    /// Sets the cipher side's separators. Same default as the plain side.
    pub fn cipher_separators(mut self, separators: Separators) -> Self {
        self.cipher_separators = Some(separators);
        self
    }

    /// Sets the conflict policy. Defaults to [`ConflictPolicy::Fail`].
    pub fn conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates and builds the cipher.
    pub fn build(self) -> Result<SubstitutionCipher> {
        let tables = MapTables::build(self.pairs)?;
        let plain_separators = self.plain_separators.unwrap_or_default();
        let cipher_separators = self.cipher_separators.unwrap_or_default();
        plain_separators.validate(&tables.plain_alphabet)?;
        cipher_separators.validate(&tables.cipher_alphabet)?;

        Ok(SubstitutionCipher {
            pairs: tables.pairs,
            encode_map: tables.encode_map,
            decode_map: tables.decode_map,
            plain_alphabet: tables.plain_alphabet,
            cipher_alphabet: tables.cipher_alphabet,
            plain_separators,
            cipher_separators,
            policy: self.policy,
        })
    }
}
