//! Error taxonomy shared by every cipher component
//!
//! Errors split into two families: configuration errors, raised when an
//! alphabet, separator set, key, or substitution map is built or replaced,
//! and translation errors, raised while translating a specific input text.
//! Configuration errors are fatal to the constructor or setter call that
//! produced them and leave the previous state untouched; translation errors
//! are per-call.

use thiserror::Error;

/// Errors produced by cipher construction, mutation, and translation
#[derive(Error, Debug)]
pub enum CipherError {
    /// Alphabet with no symbols
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// Alphabet symbol that is empty or whitespace-only
    #[error("alphabet symbol at index {index} is blank")]
    BlankAlphabetSymbol {
        /// Position of the offending symbol in the input sequence
        index: usize,
    },

    /// Alphabet symbol listed more than once
    #[error("alphabet symbol '{symbol}' appears more than once")]
    DuplicateAlphabetSymbol {
        /// The repeated symbol
        symbol: String,
    },

    /// Two separators that are equal or share a character
    #[error("separator '{separator}' is not distinct from the other separators")]
    SeparatorsEqual {
        /// The separator that collides
        separator: String,
    },

    /// Separator sharing a character with an alphabet symbol
    #[error("separator '{separator}' shares a character with alphabet symbol '{symbol}'")]
    SeparatorInAlphabet {
        /// The offending separator
        separator: String,
        /// The alphabet symbol it overlaps
        symbol: String,
    },

    /// Multi-character symbol used with an empty symbol separator
    #[error("empty symbol separator requires single-character symbols, found '{symbol}'")]
    AmbiguousFixedWidth {
        /// The symbol that is longer than one character
        symbol: String,
    },

    /// Key with no symbols
    #[error("key must contain at least one symbol")]
    EmptyKey,

    /// Key symbol missing from the alphabet
    #[error("key symbol '{symbol}' is not in the alphabet")]
    KeySymbolNotInAlphabet {
        /// The unknown key symbol
        symbol: String,
    },

    /// Substitution map with no pairs
    #[error("substitution map must contain at least one pair")]
    EmptyMap,

    /// Substitution pair with an empty or whitespace-only side
    #[error("substitution pair {index} has a blank side")]
    BlankMapEntry {
        /// Position of the offending pair in the input sequence
        index: usize,
    },

    /// Plain symbol mapped more than once
    #[error("substitution map lists plain symbol '{symbol}' more than once")]
    DuplicateMapEntry {
        /// The repeated plain symbol
        symbol: String,
    },

    /// Unknown built-in preset name
    #[error("unknown preset '{name}'")]
    UnknownPreset {
        /// The requested preset name
        name: String,
    },

    /// Input character that belongs to no character class
    #[error("character '{character}' at byte {position} is not part of the cipher")]
    InvalidInputSymbol {
        /// The unclassifiable character
        character: char,
        /// Byte offset into the input text
        position: usize,
    },

    /// Input token that is not an alphabet symbol
    #[error("symbol '{symbol}' at byte {position} is not in the alphabet")]
    SymbolNotInAlphabet {
        /// The unknown token
        symbol: String,
        /// Byte offset into the input text
        position: usize,
    },

    /// Input token with no entry in the substitution map
    #[error("symbol '{symbol}' at byte {position} has no mapping")]
    SymbolNotMapped {
        /// The unmapped token
        symbol: String,
        /// Byte offset into the input text
        position: usize,
    },
}

impl CipherError {
    /// True for errors raised at construction or mutation time.
    ///
    /// Translation errors (the complement) depend on the input text, not on
    /// the cipher configuration.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            CipherError::InvalidInputSymbol { .. }
                | CipherError::SymbolNotInAlphabet { .. }
                | CipherError::SymbolNotMapped { .. }
        )
    }
}

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;
