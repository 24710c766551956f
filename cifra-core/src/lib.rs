//! Reversible, separator-aware text transformation over user-defined
//! alphabets
//!
//! Two ciphers share one tokenizer core: a periodic shift cipher
//! (generalized Caesar/Vigenère) that rotates symbols through alphabet
//! positions, and a substitution cipher that maps symbols through a lookup
//! table with independent separators per side. Symbols are opaque strings,
//! so the same machinery handles bare letters and multi-character tokens
//! like Morse code.
//!
//! ```
//! use cifra_core::{Alphabet, IndexBasis, Separators, ShiftCipher};
//!
//! let alphabet = Alphabet::new(('a'..='z').map(|c| c.to_string()))?;
//! let cipher = ShiftCipher::builder()
//!     .alphabet(alphabet)
//!     .separators(Separators::new("", " "))
//!     .key("abc")
//!     .index_basis(IndexBasis::One)
//!     .build()?;
//!
//! let encrypted = cipher.encrypt("hello world")?;
//! assert_eq!(cipher.decrypt(&encrypted)?, "hello world");
//! # Ok::<(), cifra_core::CipherError>(())
//! ```
//!
//! Built-in alphabets and substitution tables are available through
//! [`alphabet_preset`] and [`map_preset`]:
//!
//! ```
//! use cifra_core::map_preset;
//!
//! let morse = map_preset("morse")?.to_cipher()?;
//! assert_eq!(morse.encrypt("sos")?, "... --- ...");
//! # Ok::<(), cifra_core::CipherError>(())
//! ```

#![warn(missing_docs)]

pub mod alphabet;
pub mod error;
pub mod policy;
pub mod preset;
pub mod separators;
pub mod shift;
pub mod substitution;
pub mod tokenizer;

// Re-export key types
pub use alphabet::Alphabet;
pub use error::{CipherError, Result};
pub use policy::ConflictPolicy;
pub use preset::{
    alphabet_preset, available_alphabets, available_maps, map_preset, AlphabetPreset, MapPreset,
};
pub use separators::Separators;
pub use shift::{IndexBasis, ShiftCipher, ShiftCipherBuilder};
pub use substitution::{SubstitutionCipher, SubstitutionCipherBuilder};
pub use tokenizer::{Run, RunKind, Tokenizer};
