//! Separator configuration and its validation rules
//!
//! Three separator spellings structure a text: the symbol separator between
//! symbols of a word, the word separator between words, and an optional
//! symbol-word separator spelled at the junction between a symbol and an
//! adjacent word separator. Standard Morse is the motivating case: symbols
//! separated by `" "`, words by `"/"`, so a word boundary reads `" / "`.

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};

/// Separator triple for one side of a cipher.
///
/// Each spelling may be empty. An empty symbol separator switches the
/// tokenizer to fixed-width mode, which requires every vocabulary symbol to
/// be a single character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    symbol: String,
    word: String,
    symbol_word: Option<String>,
}

impl Separators {
    /// Creates a separator pair with no dedicated symbol-word spelling.
    pub fn new(symbol: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            word: word.into(),
            symbol_word: None,
        }
    }

    /// Sets the spelling used between a symbol and an adjacent word
    /// separator.
    pub fn with_symbol_word(mut self, symbol_word: impl Into<String>) -> Self {
        self.symbol_word = Some(symbol_word.into());
        self
    }

    /// Separator between symbols of a word.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Separator between words.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Dedicated symbol-word spelling, when configured.
    pub fn symbol_word(&self) -> Option<&str> {
        self.symbol_word.as_deref()
    }

    /// Spelling written between a symbol and an adjacent word separator.
    ///
    /// A word boundary is serialized as `junction + word + junction`.
    pub fn junction(&self) -> &str {
        self.symbol_word.as_deref().unwrap_or(&self.symbol)
    }

    /// All configured spellings, in symbol, word, symbol-word order.
    fn all(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.symbol.as_str()),
            Some(self.word.as_str()),
            self.symbol_word.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Checks this triple against `alphabet`.
    ///
    /// Separators must be pairwise distinct and share no character with each
    /// other (each character of the input must classify uniquely) nor with
    /// any vocabulary symbol. An empty symbol separator additionally demands
    /// a fixed-width vocabulary.
    pub(crate) fn validate(&self, alphabet: &Alphabet) -> Result<()> {
        let mut pairs = vec![(self.symbol.as_str(), self.word.as_str())];
        if let Some(symbol_word) = self.symbol_word.as_deref() {
            pairs.push((self.symbol.as_str(), symbol_word));
            pairs.push((self.word.as_str(), symbol_word));
        }
        for (first, second) in pairs {
            if first == second {
                return Err(CipherError::SeparatorsEqual {
                    separator: first.to_string(),
                });
            }
            if first.chars().any(|c| second.contains(c)) {
                return Err(CipherError::SeparatorsEqual {
                    separator: second.to_string(),
                });
            }
        }
        for separator in self.all() {
            if separator.is_empty() {
                continue;
            }
            let overlapping = alphabet
                .symbols()
                .find(|symbol| symbol.chars().any(|c| separator.contains(c)));
            if let Some(symbol) = overlapping {
                return Err(CipherError::SeparatorInAlphabet {
                    separator: separator.to_string(),
                    symbol: symbol.to_string(),
                });
            }
        }
        if self.symbol.is_empty() {
            if let Some(symbol) = alphabet.first_multi_char_symbol() {
                return Err(CipherError::AmbiguousFixedWidth {
                    symbol: symbol.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Splits a delimited symbol string (a key, typically) on the symbol
    /// separator. With an empty symbol separator each character is one
    /// symbol. Empty fragments are dropped.
    pub fn split_symbols(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if self.symbol.is_empty() {
            trimmed.chars().map(String::from).collect()
        } else {
            trimmed
                .split(self.symbol.as_str())
                .filter(|fragment| !fragment.is_empty())
                .map(str::to_string)
                .collect()
        }
    }

    /// Joins symbols with the symbol separator.
    pub fn join_symbols<'a, I>(&self, symbols: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        symbols.into_iter().collect::<Vec<_>>().join(&self.symbol)
    }
}

impl Default for Separators {
    /// Plain-text convention: adjacent characters are symbols, spaces
    /// separate words.
    fn default() -> Self {
        Self::new("", " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin() -> Alphabet {
        Alphabet::new(('a'..='z').map(|c| c.to_string())).unwrap()
    }

    fn morse() -> Alphabet {
        Alphabet::new([".-", "-...", "-.-.", "-..", "."]).unwrap()
    }

    #[test]
    fn test_junction_defaults_to_symbol_separator() {
        let separators = Separators::new(" ", "/");
        assert_eq!(separators.junction(), " ");
        let separators = Separators::new(" ", "/").with_symbol_word("\t");
        assert_eq!(separators.junction(), "\t");
    }

    #[test]
    fn test_equal_separators_rejected() {
        for spelling in ["", ".", ",", "_", ":", "/"] {
            let separators = Separators::new(spelling, spelling);
            let result = separators.validate(&latin());
            assert!(
                matches!(result, Err(CipherError::SeparatorsEqual { .. })),
                "spelling {spelling:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_overlapping_separators_rejected() {
        let separators = Separators::new(" ", " / ");
        assert!(matches!(
            separators.validate(&latin()),
            Err(CipherError::SeparatorsEqual { .. })
        ));
    }

    #[test]
    fn test_symbol_word_collisions_rejected() {
        let separators = Separators::new(" ", "/").with_symbol_word(" ");
        assert!(matches!(
            separators.validate(&morse()),
            Err(CipherError::SeparatorsEqual { .. })
        ));
        let separators = Separators::new(" ", "/").with_symbol_word("//");
        assert!(matches!(
            separators.validate(&morse()),
            Err(CipherError::SeparatorsEqual { .. })
        ));
    }

    #[test]
    fn test_separator_sharing_alphabet_char_rejected() {
        let alphabet = Alphabet::new(["alpha", "beta", "delta"]).unwrap();
        for character in "alphabetdelta".chars() {
            let separators = Separators::new(format!("<{character}>"), ".");
            let result = separators.validate(&alphabet);
            match result {
                Err(CipherError::SeparatorInAlphabet { symbol, .. }) => {
                    assert!(symbol.contains(character));
                }
                other => panic!("expected overlap error for {character:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_word_separator_sharing_alphabet_char_rejected() {
        let alphabet = Alphabet::new(["alpha", "beta", "delta"]).unwrap();
        let separators = Separators::new(".", "<a>");
        assert!(matches!(
            separators.validate(&alphabet),
            Err(CipherError::SeparatorInAlphabet { .. })
        ));
    }

    #[test]
    fn test_empty_symbol_separator_needs_fixed_width() {
        let separators = Separators::new("", "/");
        match separators.validate(&morse()) {
            Err(CipherError::AmbiguousFixedWidth { symbol }) => assert_eq!(symbol, ".-"),
            other => panic!("expected fixed-width error, got {other:?}"),
        }
        assert!(separators.validate(&latin()).is_ok());
    }

    #[test]
    fn test_morse_separators_accepted() {
        let separators = Separators::new(" ", "/");
        assert!(separators.validate(&morse()).is_ok());
    }

    #[test]
    fn test_split_symbols_empty_separator() {
        let separators = Separators::new("", " ");
        assert_eq!(separators.split_symbols("  abc  "), vec!["a", "b", "c"]);
        assert_eq!(separators.split_symbols("ñb"), vec!["ñ", "b"]);
    }

    #[test]
    fn test_split_symbols_spelled_separator() {
        let separators = Separators::new(" ", "/");
        assert_eq!(
            separators.split_symbols(" .- -... "),
            vec![".-", "-..."]
        );
        assert_eq!(separators.split_symbols(""), Vec::<String>::new());
    }

    #[test]
    fn test_join_symbols_round_trips_split() {
        let separators = Separators::new(" ", "/");
        let joined = separators.join_symbols([".-", "-...", "-.-."]);
        assert_eq!(joined, ".- -... -.-.");
        assert_eq!(
            separators.split_symbols(&joined),
            vec![".-", "-...", "-.-."]
        );
    }
}
