//! Ordered symbol vocabulary with two-way index lookup
//!
//! An [`Alphabet`] is the ordered, duplicate-free set of symbols a cipher
//! operates on. Symbols are opaque strings (a Latin letter, a Morse token
//! such as `-.-.`), not necessarily single characters. Order is significant:
//! the shift cipher works on symbol positions.

use std::collections::{HashMap, HashSet};

use crate::error::{CipherError, Result};

/// Ordered, duplicate-free symbol vocabulary.
///
/// Construction validates that the vocabulary is non-empty and that every
/// symbol is non-blank and unique. Instances are immutable; ciphers that
/// need a different vocabulary are rebuilt.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<String>,
    indices: HashMap<String, usize>,
    characters: HashSet<char>,
}

impl Alphabet {
    /// Builds an alphabet from an ordered symbol sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::EmptyAlphabet`] for an empty sequence,
    /// [`CipherError::BlankAlphabetSymbol`] when a symbol is empty or
    /// whitespace-only, and [`CipherError::DuplicateAlphabetSymbol`] when a
    /// symbol repeats. Duplicates are rejected rather than collapsed so that
    /// shift offsets stay unambiguous.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(CipherError::EmptyAlphabet);
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(symbols.len());
        for (index, symbol) in symbols.iter().enumerate() {
            if symbol.trim().is_empty() {
                return Err(CipherError::BlankAlphabetSymbol { index });
            }
            if !seen.insert(symbol) {
                return Err(CipherError::DuplicateAlphabetSymbol {
                    symbol: symbol.clone(),
                });
            }
        }
        Ok(Self::from_validated(symbols))
    }

    /// Builds an alphabet from symbols already known to be non-empty,
    /// non-blank, and unique. Used for vocabularies derived from other
    /// validated structures, where re-raising alphabet errors would report
    /// the wrong kind.
    pub(crate) fn from_validated(symbols: Vec<String>) -> Self {
        debug_assert!(!symbols.is_empty());
        let indices = symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| (symbol.clone(), index))
            .collect();
        let characters = symbols.iter().flat_map(|symbol| symbol.chars()).collect();
        Self {
            symbols,
            indices,
            characters,
        }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; kept for the conventional pairing with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Position of `symbol`, or `None` when it is not in the vocabulary.
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.indices.get(symbol).copied()
    }

    /// Symbol at `index`, taken modulo the alphabet size.
    pub fn symbol_at(&self, index: usize) -> &str {
        &self.symbols[index % self.symbols.len()]
    }

    /// Whether `symbol` is in the vocabulary.
    pub fn contains(&self, symbol: &str) -> bool {
        self.indices.contains_key(symbol)
    }

    /// Whether `character` occurs inside any vocabulary symbol.
    pub fn contains_char(&self, character: char) -> bool {
        self.characters.contains(&character)
    }

    /// True when every symbol is exactly one character.
    ///
    /// Only fixed-width vocabularies can be tokenized with an empty symbol
    /// separator.
    pub fn is_fixed_width(&self) -> bool {
        self.symbols.iter().all(|symbol| symbol.chars().count() == 1)
    }

    /// First symbol longer than one character, if any.
    pub(crate) fn first_multi_char_symbol(&self) -> Option<&str> {
        self.symbols
            .iter()
            .find(|symbol| symbol.chars().count() > 1)
            .map(String::as_str)
    }

    /// Symbols in vocabulary order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// First symbol in vocabulary order.
    pub(crate) fn first_symbol(&self) -> &str {
        &self.symbols[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin() -> Alphabet {
        Alphabet::new(('a'..='z').map(|c| c.to_string())).unwrap()
    }

    #[test]
    fn test_index_lookup_both_directions() {
        let alphabet = latin();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.index_of("a"), Some(0));
        assert_eq!(alphabet.index_of("z"), Some(25));
        assert_eq!(alphabet.symbol_at(0), "a");
        assert_eq!(alphabet.symbol_at(25), "z");
    }

    #[test]
    fn test_symbol_at_wraps_modulo_size() {
        let alphabet = latin();
        assert_eq!(alphabet.symbol_at(26), "a");
        assert_eq!(alphabet.symbol_at(27), "b");
        assert_eq!(alphabet.symbol_at(26 * 3 + 1), "b");
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let result = Alphabet::new(Vec::<String>::new());
        assert!(matches!(result, Err(CipherError::EmptyAlphabet)));
    }

    #[test]
    fn test_blank_symbol_rejected() {
        let result = Alphabet::new(["a", " ", "c"]);
        assert!(matches!(
            result,
            Err(CipherError::BlankAlphabetSymbol { index: 1 })
        ));
        let result = Alphabet::new(["a", "b", ""]);
        assert!(matches!(
            result,
            Err(CipherError::BlankAlphabetSymbol { index: 2 })
        ));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let result = Alphabet::new(["alpha", "beta", "alpha"]);
        match result {
            Err(CipherError::DuplicateAlphabetSymbol { symbol }) => {
                assert_eq!(symbol, "alpha");
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_char_membership_spans_multi_char_symbols() {
        let alphabet = Alphabet::new([".-", "-...", "-.-."]).unwrap();
        assert!(alphabet.contains_char('.'));
        assert!(alphabet.contains_char('-'));
        assert!(!alphabet.contains_char('x'));
        assert!(!alphabet.is_fixed_width());
        assert_eq!(alphabet.first_multi_char_symbol(), Some(".-"));
    }

    #[test]
    fn test_fixed_width_detection() {
        assert!(latin().is_fixed_width());
        assert_eq!(latin().first_multi_char_symbol(), None);
    }

    #[test]
    fn test_multibyte_chars_count_as_one() {
        let alphabet = Alphabet::new(["ñ", "á"]).unwrap();
        assert!(alphabet.is_fixed_width());
        assert!(alphabet.contains_char('ñ'));
    }
}
