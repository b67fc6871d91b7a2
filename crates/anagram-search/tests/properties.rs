//! End-to-end properties of the solver over dictionaries loaded from bytes.
//!
//! A real dictionary can be checked as well: set ANAGRAM_DICT_PATH to a
//! `dict.dwg` file and run the ignored tests.
//!
//! Run: ANAGRAM_DICT_PATH=/path/to/dict.dwg cargo test -p anagram-search --test properties -- --ignored

mod common;

use std::collections::HashSet;

use anagram_core::{Alphabet, LanguageConfig};
use anagram_search::{AnagramHandle, MAX_RESULTS, QueryError};

use common::{esperanto_handle, latin1_handle};

const WORDS: &[&str] = &[
    "akto", "at", "kaj", "kat", "kato", "ko", "ok", "oka", "pi", "po", "poŝ", "poŝo", "ŝi",
    "ŝipo", "ŝipoj", "ta", "tako", "to",
];

fn alphabet(handle: &AnagramHandle) -> &Alphabet {
    &handle.language().alphabet
}

/// Words of a phrase, sorted, so permutations compare equal.
fn multiset(phrase: &str) -> Vec<&str> {
    let mut words: Vec<&str> = phrase.split(' ').collect();
    words.sort_unstable();
    words
}

// ---------------------------------------------------------------------------
// Phrase properties
// ---------------------------------------------------------------------------

#[test]
fn every_phrase_uses_the_letters_exactly() {
    let handle = esperanto_handle(WORDS);
    let letters = "ŝipo kato";
    let expected = alphabet(&handle).vector(letters);

    let results = handle.anagrams(letters);
    assert!(!results.is_empty());
    for phrase in &results {
        assert_eq!(alphabet(&handle).vector(phrase), expected, "{phrase}");
    }
    assert!(results.iter().any(|p| multiset(p) == ["kato", "ŝipo"]));
    assert!(results.iter().any(|p| multiset(p) == ["tako", "ŝipo"]));
}

#[test]
fn no_phrase_is_a_permutation_of_another() {
    let mut handle = esperanto_handle(WORDS);
    handle.set_max_words(6);
    let results = handle.anagrams("ŝipokatoko");
    assert!(!results.is_empty());

    let mut seen = HashSet::new();
    for phrase in &results {
        assert!(seen.insert(multiset(phrase)), "duplicate multiset: {phrase}");
    }
}

#[test]
fn phrases_respect_max_words() {
    let mut handle = esperanto_handle(WORDS);
    for max_words in 0..=4 {
        handle.set_max_words(max_words);
        for phrase in handle.anagrams("ŝipokato") {
            assert!(phrase.split(' ').count() <= max_words.max(1), "{phrase}");
        }
    }
}

#[test]
fn included_words_do_not_count_against_the_last_word() {
    let mut handle = esperanto_handle(WORDS);
    handle.set_max_words(1);
    let query = handle.query("ŝipokato").include(["tako"]);
    let outcome = handle.solve(&query).unwrap();
    assert_eq!(outcome.results, vec!["tako ŝipo"]);

    let query = handle.query("ŝipo").max_words(0);
    let outcome = handle.solve(&query).unwrap();
    assert_eq!(outcome.results, vec!["ŝipo"]);
}

#[test]
fn excluded_words_never_appear() {
    let handle = esperanto_handle(WORDS);
    let query = handle.query("ŝipokato").exclude(["KATO"]);
    let outcome = handle.solve(&query).unwrap();
    assert!(!outcome.results.is_empty());
    for phrase in &outcome.results {
        assert!(!phrase.split(' ').any(|w| w == "kato"), "{phrase}");
    }
}

#[test]
fn included_words_lead_every_phrase() {
    let handle = esperanto_handle(WORDS);
    let query = handle.query("ŝipokato").include(["tako"]);
    let outcome = handle.solve(&query).unwrap();
    assert!(!outcome.results.is_empty());
    for phrase in &outcome.results {
        assert!(phrase.starts_with("tako "), "{phrase}");
    }
}

#[test]
fn unavailable_include_rejects_the_query() {
    let handle = esperanto_handle(WORDS);
    let query = handle.query("ŝipokato").include(["kaj"]);
    match handle.solve(&query) {
        Err(QueryError::IncludeUnavailable { word, .. }) => assert_eq!(word, "kaj"),
        other => panic!("expected rejection, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Candidate properties
// ---------------------------------------------------------------------------

#[test]
fn candidates_respect_length_bounds() {
    let handle = esperanto_handle(WORDS);
    let query = handle.query("ŝipokatoj").min_letters(3).max_letters(4).candidates();
    let outcome = handle.solve(&query).unwrap();
    assert!(!outcome.results.is_empty());
    for word in &outcome.results {
        let len = alphabet(&handle).vector(word).total();
        assert!((3..=4).contains(&len), "{word} has {len} letters");
    }
}

#[test]
fn candidates_fit_in_the_letters() {
    let handle = esperanto_handle(WORDS);
    let available = alphabet(&handle).vector("ŝipo");
    let candidates = handle.candidates("ŝipo");
    // words holding ŝ come first: it is the rarer letter
    assert_eq!(candidates, vec!["poŝ", "ŝi", "ŝipo", "pi", "po"]);
    for word in &candidates {
        let mut budget = available.clone();
        assert!(budget.remove(&alphabet(&handle).vector(word)).is_ok(), "{word}");
    }
}

// ---------------------------------------------------------------------------
// Result cap
// ---------------------------------------------------------------------------

#[test]
fn result_cap_truncates_large_searches() {
    let letters = "abcdefghijklmnopqrst";
    let mut words: Vec<String> = letters.chars().map(String::from).collect();
    for a in letters.chars() {
        for b in letters.chars().filter(|&b| b != a) {
            words.push(format!("{a}{b}"));
        }
    }
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    let handle = latin1_handle(letters, &words);

    let query = handle.query(letters).max_words(20);
    let outcome = handle.solve(&query).unwrap();
    assert_eq!(outcome.results.len(), MAX_RESULTS);
    assert!(outcome.truncated);

    let unique: HashSet<&String> = outcome.results.iter().collect();
    assert_eq!(unique.len(), MAX_RESULTS);
}

#[test]
fn candidate_listing_is_capped() {
    // every word of one to three distinct letters: 16276 candidates
    let letters = "abcdefghijklmnopqrstuvwxyz";
    let mut words: Vec<String> = Vec::new();
    for a in letters.chars() {
        words.push(a.to_string());
        for b in letters.chars().filter(|&b| b != a) {
            words.push(format!("{a}{b}"));
            for c in letters.chars().filter(|&c| c != a && c != b) {
                words.push(format!("{a}{b}{c}"));
            }
        }
    }
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    let handle = latin1_handle(letters, &words);

    let outcome = handle.solve(&handle.query(letters).candidates()).unwrap();
    assert_eq!(outcome.results.len(), MAX_RESULTS);
    assert!(outcome.truncated);

    let unique: HashSet<&String> = outcome.results.iter().collect();
    assert_eq!(unique.len(), MAX_RESULTS);
    let available = alphabet(&handle).vector(letters);
    for word in &outcome.results {
        let mut budget = available.clone();
        assert!(budget.remove(&alphabet(&handle).vector(word)).is_ok(), "{word}");
    }

    // a smaller pool stays under the cap
    let outcome = handle.solve(&handle.query("abc").candidates()).unwrap();
    assert_eq!(outcome.results.len(), 3 + 6 + 6);
    assert!(!outcome.truncated);
}

// ---------------------------------------------------------------------------
// Sharing
// ---------------------------------------------------------------------------

#[test]
fn concurrent_queries_agree() {
    let handle = esperanto_handle(WORDS);
    let expected = handle.anagrams("ŝipokato");
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let handle = handle.clone();
            std::thread::spawn(move || handle.anagrams("ŝipokato"))
        })
        .collect();
    for worker in workers {
        assert_eq!(worker.join().unwrap(), expected);
    }
}

// ---------------------------------------------------------------------------
// Real dictionary
// ---------------------------------------------------------------------------

#[test]
#[ignore = "requires dict.dwg dictionary file"]
fn real_dictionary_loads_and_answers() {
    let path = std::env::var("ANAGRAM_DICT_PATH").expect("ANAGRAM_DICT_PATH not set");
    let data = std::fs::read(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    let handle = AnagramHandle::from_bytes(&data, LanguageConfig::esperanto())
        .unwrap_or_else(|e| panic!("failed to load {path}: {e}"));

    assert!(handle.edge_count() > 0);
    let letters = "esperanto";
    let expected = alphabet(&handle).vector(letters);
    for phrase in handle.anagrams(letters) {
        assert_eq!(alphabet(&handle).vector(&phrase), expected, "{phrase}");
    }
}
