//! Shared types for the anagram solver.
//!
//! Everything here is language configuration or per-query letter bookkeeping;
//! nothing in this crate knows about the dictionary graph.
//!
//! # Architecture
//!
//! - [`alphabet`] -- Rarest-first letter ordering and character lookup
//! - [`codepage`] -- 8-bit code pages used to decode dictionary characters
//! - [`letters`] -- Letter count vectors, presence masks and scoped removal
//! - [`word`] -- Immutable words with their own letter vectors

pub mod alphabet;
pub mod codepage;
pub mod letters;
pub mod word;

pub use alphabet::{Alphabet, AlphabetError};
pub use codepage::CodePage;
pub use letters::{InsufficientLetters, LetterMask, LetterVector};
pub use word::Word;

/// Language configuration: the alphabet used for counting and the code page
/// used to decode graph characters.
///
/// Built once per process and shared read-only by every query.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub alphabet: Alphabet,
    pub code_page: CodePage,
}

impl LanguageConfig {
    pub fn new(alphabet: Alphabet, code_page: CodePage) -> Self {
        Self {
            alphabet,
            code_page,
        }
    }

    /// Esperanto letters ordered rarest-first, decoded through ISO-8859-3.
    pub fn esperanto() -> Self {
        Self::new(Alphabet::esperanto(), CodePage::iso_8859_3())
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self::esperanto()
    }
}
