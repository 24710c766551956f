//! Periodic shift cipher over alphabet positions
//!
//! Generalizes Caesar (single-symbol key) and Vigenère (multi-symbol key) to
//! any [`Alphabet`]. Each translated symbol is shifted by the alphabet
//! position of the key symbol for its cycle slot, wrapping modulo the
//! alphabet size; decryption applies the same offsets negated.

use smallvec::SmallVec;

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};
use crate::policy::ConflictPolicy;
use crate::separators::Separators;
use crate::tokenizer::Tokenizer;

/// Offsets stay inline for keys up to eight symbols.
type KeyOffsets = SmallVec<[usize; 8]>;

/// Whether offset calculation counts the first alphabet position as 0 or 1.
///
/// Under [`IndexBasis::One`] a key symbol at alphabet position 0 still
/// shifts by one, so no key produces the identity and single-symbol keys
/// match the classic Caesar convention where key `a` maps `a` to `b`. Under
/// [`IndexBasis::Zero`] that key symbol leaves the text unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBasis {
    /// First alphabet position counts as 0.
    Zero,
    /// First alphabet position counts as 1.
    #[default]
    One,
}

impl IndexBasis {
    /// Basis name as written in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            IndexBasis::Zero => "zero",
            IndexBasis::One => "one",
        }
    }

    fn offset(&self) -> usize {
        match self {
            IndexBasis::Zero => 0,
            IndexBasis::One => 1,
        }
    }
}

/// Position-dependent shift cipher with a repeating key.
///
/// The alphabet and separators are fixed per instance; the key, index basis,
/// and conflict policy are replaceable through setters. Setters validate
/// fully before mutating, so a failed call leaves the cipher unchanged.
///
/// Translation is separator-aware: separators structure the input and are
/// re-emitted canonically, and the shift position advances only on
/// translated symbols, continuously across word boundaries.
#[derive(Debug, Clone)]
pub struct ShiftCipher {
    alphabet: Alphabet,
    separators: Separators,
    key: Vec<String>,
    key_indices: KeyOffsets,
    basis: IndexBasis,
    policy: ConflictPolicy,
}

impl ShiftCipher {
    /// Creates a cipher with the default key (the first alphabet symbol),
    /// index basis [`IndexBasis::One`], and [`ConflictPolicy::Fail`].
    pub fn new(alphabet: Alphabet, separators: Separators) -> Result<Self> {
        Self::builder()
            .alphabet(alphabet)
            .separators(separators)
            .build()
    }

    /// Creates a builder for non-default configuration.
    pub fn builder() -> ShiftCipherBuilder {
        ShiftCipherBuilder::default()
    }

    /// The alphabet this cipher shifts over.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The separator configuration, shared by input and output.
    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// The key as one string, symbols joined with the symbol separator.
    pub fn key(&self) -> String {
        self.separators
            .join_symbols(self.key.iter().map(String::as_str))
    }

    /// The key as its symbol sequence.
    pub fn key_symbols(&self) -> &[String] {
        &self.key
    }

    /// Replaces the key, parsing `key` with the symbol separator.
    ///
    /// # Errors
    ///
    /// [`CipherError::EmptyKey`] when no symbols remain after splitting,
    /// [`CipherError::KeySymbolNotInAlphabet`] for an unknown symbol. The
    /// previous key stays active on error.
    pub fn set_key(&mut self, key: &str) -> Result<()> {
        self.set_key_symbols(self.separators.split_symbols(key))
    }

    /// Replaces the key from a symbol sequence, preserving order and
    /// multiplicity. Same validation and atomicity as [`set_key`](Self::set_key).
    pub fn set_key_symbols<I, S>(&mut self, symbols: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        let indices = resolve_key(&self.alphabet, &symbols)?;
        self.key = symbols;
        self.key_indices = indices;
        Ok(())
    }

    /// Current index basis.
    pub fn index_basis(&self) -> IndexBasis {
        self.basis
    }

    /// Changes the index basis.
    pub fn set_index_basis(&mut self, basis: IndexBasis) {
        self.basis = basis;
    }

    /// Current conflict policy.
    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Changes the conflict policy.
    pub fn set_conflict_policy(&mut self, policy: ConflictPolicy) {
        self.policy = policy;
    }

    /// Shifts `text` forward through the key.
    ///
    /// # Errors
    ///
    /// Under [`ConflictPolicy::Fail`]: [`CipherError::InvalidInputSymbol`]
    /// for a character outside every class,
    /// [`CipherError::SymbolNotInAlphabet`] for an unknown symbol token.
    /// Under [`ConflictPolicy::Ignore`] both are dropped instead.
    pub fn encrypt(&self, text: &str) -> Result<String> {
        self.translate(text, 1)
    }

    /// Inverse of [`encrypt`](Self::encrypt): `decrypt(encrypt(x))` returns
    /// `x` trimmed of surrounding whitespace.
    pub fn decrypt(&self, text: &str) -> Result<String> {
        self.translate(text, -1)
    }

    /// [`encrypt`](Self::encrypt) with errors suppressed into `None`.
    pub fn encrypt_opt(&self, text: &str) -> Option<String> {
        self.translate(text, 1).ok()
    }

    /// [`decrypt`](Self::decrypt) with errors suppressed into `None`.
    pub fn decrypt_opt(&self, text: &str) -> Option<String> {
        self.translate(text, -1).ok()
    }

    fn translate(&self, text: &str, direction: i64) -> Result<String> {
        let tokenizer = Tokenizer::new(&self.alphabet, &self.separators, self.policy);
        let alphabet_len = self.alphabet.len() as i64;
        let basis = self.basis.offset() as i64;
        // Counts translated symbols only, continuously across words.
        let mut position = 0usize;

        tokenizer.translate(text, &self.separators, |run| {
            let Some(index) = self.alphabet.index_of(run.text) else {
                return match self.policy {
                    ConflictPolicy::Fail => Err(CipherError::SymbolNotInAlphabet {
                        symbol: run.text.to_string(),
                        position: run.start,
                    }),
                    ConflictPolicy::Ignore => Ok(None),
                };
            };
            let cycle = position % self.key_indices.len();
            let offset = (self.key_indices[cycle] as i64 + basis) * direction;
            let shifted = (index as i64 + offset).rem_euclid(alphabet_len) as usize;
            position += 1;
            Ok(Some(self.alphabet.symbol_at(shifted).to_string()))
        })
    }
}

/// Fluent builder for [`ShiftCipher`].
#[derive(Debug, Default)]
pub struct ShiftCipherBuilder {
    alphabet: Option<Alphabet>,
    separators: Option<Separators>,
    key: Option<KeySpec>,
    basis: IndexBasis,
    policy: ConflictPolicy,
}

#[derive(Debug)]
enum KeySpec {
    Text(String),
    Symbols(Vec<String>),
}

impl ShiftCipherBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alphabet. Required.
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Sets the separators. Defaults to plain text (`""` between symbols,
    /// `" "` between words).
    pub fn separators(mut self, separators: Separators) -> Self {
        self.separators = Some(separators);
        self
    }

    /// Sets the key from a delimited string, split with the symbol
    /// separator at build time.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(KeySpec::Text(key.into()));
        self
    }

    /// Sets the key from a symbol sequence.
    pub fn key_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key = Some(KeySpec::Symbols(
            symbols.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Sets the index basis. Defaults to [`IndexBasis::One`].
    pub fn index_basis(mut self, basis: IndexBasis) -> Self {
        self.basis = basis;
        self
    }

    /// Sets the conflict policy. Defaults to [`ConflictPolicy::Fail`].
    pub fn conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates the configuration and builds the cipher.
    ///
    /// The key defaults to the first alphabet symbol when unset.
    pub fn build(self) -> Result<ShiftCipher> {
        let alphabet = self.alphabet.ok_or(CipherError::EmptyAlphabet)?;
        let separators = self.separators.unwrap_or_default();
        separators.validate(&alphabet)?;

        let key: Vec<String> = match self.key {
            None => vec![alphabet.first_symbol().to_string()],
            Some(KeySpec::Text(text)) => separators.split_symbols(&text),
            Some(KeySpec::Symbols(symbols)) => symbols,
        };
        let key_indices = resolve_key(&alphabet, &key)?;

        Ok(ShiftCipher {
            alphabet,
            separators,
            key,
            key_indices,
            basis: self.basis,
            policy: self.policy,
        })
    }
}

fn resolve_key(alphabet: &Alphabet, symbols: &[String]) -> Result<KeyOffsets> {
    if symbols.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    symbols
        .iter()
        .map(|symbol| {
            alphabet
                .index_of(symbol)
                .ok_or_else(|| CipherError::KeySymbolNotInAlphabet {
                    symbol: symbol.clone(),
                })
        })
        .collect()
}
