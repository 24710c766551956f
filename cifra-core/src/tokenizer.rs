//! Four-class tokenizer and run reassembly
//!
//! Translation never works on raw characters. Input text is first classified
//! into typed runs: stretches of vocabulary characters (matched later as
//! whole symbols) and stretches of separator characters, one class per
//! configured separator. Both ciphers share the same scan and the same
//! run-to-text reassembly; they differ only in how a symbol run is
//! translated.
//!
//! Classification is per character, which is why separator spellings must be
//! pairwise character-disjoint and share nothing with the vocabulary: every
//! character of the input classifies uniquely or not at all.

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};
use crate::policy::ConflictPolicy;
use crate::separators::Separators;

/// Character class of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Vocabulary characters, matched against the vocabulary as one token.
    Symbol,
    /// Characters of the symbol separator.
    SymbolSeparator,
    /// Characters of the word separator.
    WordSeparator,
    /// Characters of the dedicated symbol-word separator.
    SymbolWordSeparator,
}

/// One classified stretch of input text.
///
/// Runs borrow the input. `start` is the byte offset in the original
/// (untrimmed) text, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'t> {
    /// Class shared by every character of the run.
    pub kind: RunKind,
    /// The run's text.
    pub text: &'t str,
    /// Byte offset of the run in the input text.
    pub start: usize,
}

/// Splits text into classified runs for one cipher side.
///
/// Borrows the side's vocabulary and separators; construction is cheap and
/// done per translation call.
pub struct Tokenizer<'c> {
    alphabet: &'c Alphabet,
    separators: &'c Separators,
    policy: ConflictPolicy,
}

impl<'c> Tokenizer<'c> {
    /// Creates a tokenizer over an already validated vocabulary/separator
    /// pair.
    pub fn new(alphabet: &'c Alphabet, separators: &'c Separators, policy: ConflictPolicy) -> Self {
        Self {
            alphabet,
            separators,
            policy,
        }
    }

    /// Class of a single character, or `None` when it belongs to no
    /// separator and no vocabulary symbol.
    fn classify(&self, character: char) -> Option<RunKind> {
        if self
            .separators
            .symbol_word()
            .is_some_and(|spelling| spelling.contains(character))
        {
            return Some(RunKind::SymbolWordSeparator);
        }
        if self.separators.word().contains(character) {
            return Some(RunKind::WordSeparator);
        }
        if self.separators.symbol().contains(character) {
            return Some(RunKind::SymbolSeparator);
        }
        if self.alphabet.contains_char(character) {
            return Some(RunKind::Symbol);
        }
        None
    }

    /// Scans `text` (trimmed of surrounding whitespace) into runs.
    ///
    /// A class transition closes the current run, as does end of input.
    /// Consecutive same-class separator characters collapse into a single
    /// run. With an empty symbol separator the vocabulary is fixed-width and
    /// every vocabulary character forms its own one-character symbol run.
    ///
    /// An unclassifiable character is [`CipherError::InvalidInputSymbol`]
    /// under [`ConflictPolicy::Fail`]. Under [`ConflictPolicy::Ignore`] it is
    /// dropped and closes the current run, so the fragments around it are
    /// matched independently rather than spliced together.
    pub fn tokenize<'t>(&self, text: &'t str) -> Result<Vec<Run<'t>>> {
        let leading = text.len() - text.trim_start().len();
        let trimmed = text.trim();
        let single_char_symbols = self.separators.symbol().is_empty();

        let mut runs: Vec<Run<'t>> = Vec::new();
        let mut open: Option<(RunKind, usize, usize)> = None;

        for (position, character) in trimmed.char_indices() {
            let Some(kind) = self.classify(character) else {
                match self.policy {
                    ConflictPolicy::Fail => {
                        return Err(CipherError::InvalidInputSymbol {
                            character,
                            position: leading + position,
                        });
                    }
                    ConflictPolicy::Ignore => {
                        if let Some((kind, start, end)) = open.take() {
                            runs.push(Run {
                                kind,
                                text: &trimmed[start..end],
                                start: leading + start,
                            });
                        }
                        continue;
                    }
                }
            };
            let end = position + character.len_utf8();
            let extends = match open {
                Some((open_kind, _, _)) => {
                    open_kind == kind && !(kind == RunKind::Symbol && single_char_symbols)
                }
                None => false,
            };
            if extends {
                if let Some(run) = open.as_mut() {
                    run.2 = end;
                }
            } else {
                if let Some((kind, start, end)) = open.take() {
                    runs.push(Run {
                        kind,
                        text: &trimmed[start..end],
                        start: leading + start,
                    });
                }
                open = Some((kind, position, end));
            }
        }
        if let Some((kind, start, end)) = open.take() {
            runs.push(Run {
                kind,
                text: &trimmed[start..end],
                start: leading + start,
            });
        }
        Ok(runs)
    }

    /// Tokenizes `text`, translates each symbol run through
    /// `translate_symbol`, and reassembles the output with the `target`
    /// separators.
    ///
    /// The closure returns `Ok(Some(translated))` to emit a symbol,
    /// `Ok(None)` to skip it, or an error to abort. Skips that empty a word
    /// remove the word and its boundary entirely; symbols of a word are
    /// joined with the target symbol separator and words with
    /// `junction + word + junction`.
    pub(crate) fn translate<F>(
        &self,
        text: &str,
        target: &Separators,
        mut translate_symbol: F,
    ) -> Result<String>
    where
        F: FnMut(&Run<'_>) -> Result<Option<String>>,
    {
        let runs = self.tokenize(text)?;

        let mut words: Vec<String> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        for run in &runs {
            match run.kind {
                RunKind::Symbol => {
                    if let Some(translated) = translate_symbol(run)? {
                        current.push(translated);
                    }
                }
                RunKind::WordSeparator => {
                    if !current.is_empty() {
                        words.push(target.join_symbols(current.iter().map(String::as_str)));
                        current.clear();
                    }
                }
                RunKind::SymbolSeparator | RunKind::SymbolWordSeparator => {}
            }
        }
        if !current.is_empty() {
            words.push(target.join_symbols(current.iter().map(String::as_str)));
        }

        let junction = target.junction();
        let boundary = format!("{junction}{}{junction}", target.word());
        Ok(words.join(&boundary))
    }
}
