// Test fixtures: small dictionaries built in memory

use anagram_core::{Alphabet, CodePage, LanguageConfig};
use anagram_dawg::Dawg;

/// Build a trie-shaped graph containing `words`.
pub fn dawg_from_words(words: &[&str], code_page: CodePage) -> Dawg {
    Dawg::from_words(words, code_page).expect("fixture words encode")
}

/// Three-letter language {a, b, c} over Latin-1.
pub fn abc_language() -> LanguageConfig {
    LanguageConfig::new(Alphabet::new("abc").unwrap(), CodePage::latin1())
}

/// The {"ab", "ca", "abc"} dictionary used throughout the tests.
pub fn abc_dawg() -> Dawg {
    dawg_from_words(&["ab", "abc", "ca"], CodePage::latin1())
}
