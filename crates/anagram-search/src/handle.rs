// AnagramHandle: a loaded dictionary plus its language, ready for queries.
//
// The graph and language configuration are immutable after load and sit
// behind `Arc`, so cloning a handle is cheap and clones can serve queries on
// different threads. Each query owns its own letter vector, candidate
// buckets and accumulator; nothing mutable is shared.

use std::sync::Arc;

use anagram_core::{Alphabet, AlphabetError, CodePage, LanguageConfig};
use anagram_dawg::{Dawg, DawgError};

use crate::query::{self, Query, QueryError, QueryOptions, QueryOutcome};

/// Error type for handle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum AnagramError {
    /// The dictionary bytes are not a well-formed graph.
    #[error("failed to load dictionary: {0}")]
    Dictionary(#[from] DawgError),

    /// The alphabet string is unusable.
    #[error("invalid alphabet: {0}")]
    Alphabet(#[from] AlphabetError),
}

/// Top-level handle owning a dictionary graph and its language.
///
/// Default query options set through the `set_*` methods apply to the
/// convenience methods ([`anagrams`](Self::anagrams),
/// [`candidates`](Self::candidates), [`query`](Self::query)); an explicit
/// [`Query`] passed to [`solve`](Self::solve) carries its own.
#[derive(Debug, Clone)]
pub struct AnagramHandle {
    dawg: Arc<Dawg>,
    language: Arc<LanguageConfig>,
    options: QueryOptions,
}

impl AnagramHandle {
    /// Load a dictionary from the contents of a `.dwg` file.
    pub fn from_bytes(data: &[u8], language: LanguageConfig) -> Result<Self, AnagramError> {
        let dawg = Dawg::from_bytes(data, language.code_page.clone())?;
        Ok(Self {
            dawg: Arc::new(dawg),
            language: Arc::new(language),
            options: QueryOptions::default(),
        })
    }

    /// Load a dictionary with a custom alphabet (rarest letter first) and
    /// code page.
    pub fn with_alphabet(
        data: &[u8],
        alphabet: &str,
        code_page: CodePage,
    ) -> Result<Self, AnagramError> {
        let alphabet = Alphabet::new(alphabet)?;
        Self::from_bytes(data, LanguageConfig::new(alphabet, code_page))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Run a fully specified query.
    pub fn solve(&self, query: &Query) -> Result<QueryOutcome, QueryError> {
        query::run(&self.dawg, &self.language.alphabet, query)
    }

    /// Phrases that use every letter of `letters` exactly once.
    pub fn anagrams(&self, letters: &str) -> Vec<String> {
        self.solve(&self.query(letters))
            .map(|outcome| outcome.results)
            .unwrap_or_default()
    }

    /// Dictionary words that fit in `letters`.
    pub fn candidates(&self, letters: &str) -> Vec<String> {
        let query = self.query(letters).candidates();
        self.solve(&query)
            .map(|outcome| outcome.results)
            .unwrap_or_default()
    }

    /// A query over `letters` carrying this handle's default options.
    pub fn query(&self, letters: &str) -> Query {
        Query::new(letters).with_options(self.options)
    }

    /// Whether `word` is in the dictionary, exactly as spelled.
    pub fn is_word(&self, word: &str) -> bool {
        self.dawg.contains(word)
    }

    /// Answer a wire request.
    #[cfg(feature = "serde")]
    pub fn request(
        &self,
        request: &crate::request::AnagramRequest,
    ) -> crate::request::AnagramResponse {
        let query = request.to_query(self.options);
        crate::request::AnagramResponse::from_result(self.solve(&query))
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the default maximum number of words in a phrase.
    pub fn set_max_words(&mut self, value: usize) {
        self.options.max_words = value;
    }

    /// Set the default minimum word length in alphabet letters.
    pub fn set_min_letters(&mut self, value: usize) {
        self.options.min_letters = value;
    }

    /// Set the default maximum word length in alphabet letters.
    pub fn set_max_letters(&mut self, value: usize) {
        self.options.max_letters = value;
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    pub fn language(&self) -> &LanguageConfig {
        &self.language
    }

    /// Number of edges in the loaded graph.
    pub fn edge_count(&self) -> usize {
        self.dawg.edge_count()
    }
}
