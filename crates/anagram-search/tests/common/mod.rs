// Shared helpers: build dictionary files from word lists

#![allow(dead_code)]

use anagram_core::{Alphabet, CodePage, LanguageConfig};
use anagram_dawg::Dawg;
use anagram_search::AnagramHandle;

/// Encode `words` as a trie-shaped dictionary file.
pub fn dictionary_bytes(words: &[&str], code_page: &CodePage) -> Vec<u8> {
    Dawg::from_words(words, code_page.clone())
        .expect("words encode in the code page")
        .to_bytes()
}

/// Esperanto handle over a small word list.
pub fn esperanto_handle(words: &[&str]) -> AnagramHandle {
    let language = LanguageConfig::esperanto();
    let data = dictionary_bytes(words, &language.code_page);
    AnagramHandle::from_bytes(&data, language).expect("valid dictionary")
}

/// Handle over a custom Latin-1 alphabet.
pub fn latin1_handle(alphabet: &str, words: &[&str]) -> AnagramHandle {
    let code_page = CodePage::latin1();
    let data = dictionary_bytes(words, &code_page);
    let language = LanguageConfig::new(Alphabet::new(alphabet).expect("alphabet"), code_page);
    AnagramHandle::from_bytes(&data, language).expect("valid dictionary")
}
