// Query orchestration: options, bounds and the per-query pipeline

use anagram_core::{Alphabet, InsufficientLetters, Word};
use anagram_dawg::Dawg;
use log::{debug, warn};

use crate::candidates::{CandidateBuckets, CandidateGenerator, Excludes};
use crate::phrase::{PhraseSearch, join_phrase};
use crate::{MAX_PHRASE_WORDS, MAX_RESULTS, MAX_WORD_LETTERS};

/// What a query returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Phrases that use every letter exactly once.
    #[default]
    Phrases,
    /// Every dictionary word that fits in the letters, without combining.
    Candidates,
}

/// Bounds applied to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Most words in a phrase, pre-included words counted.
    pub max_words: usize,
    /// Fewest alphabet letters in a single word.
    pub min_letters: usize,
    /// Most alphabet letters in a single word.
    pub max_letters: usize,
    pub mode: Mode,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            max_words: 3,
            min_letters: 1,
            max_letters: MAX_WORD_LETTERS,
            mode: Mode::Phrases,
        }
    }
}

impl QueryOptions {
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn with_min_letters(mut self, min_letters: usize) -> Self {
        self.min_letters = min_letters;
        self
    }

    pub fn with_max_letters(mut self, max_letters: usize) -> Self {
        self.max_letters = max_letters;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// One anagram request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Raw letters; characters outside the alphabet are ignored.
    pub letters: String,
    /// Words every phrase must start with, in order.
    pub include: Vec<String>,
    /// Words that must never appear, matched case-insensitively.
    pub exclude: Vec<String>,
    pub options: QueryOptions,
}

impl Query {
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    /// Add words to the include list.
    pub fn include<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add words to the exclude list.
    pub fn exclude<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn max_words(mut self, max_words: usize) -> Self {
        self.options.max_words = max_words;
        self
    }

    pub fn min_letters(mut self, min_letters: usize) -> Self {
        self.options.min_letters = min_letters;
        self
    }

    pub fn max_letters(mut self, max_letters: usize) -> Self {
        self.options.max_letters = max_letters;
        self
    }

    /// Switch to candidates mode.
    pub fn candidates(mut self) -> Self {
        self.options.mode = Mode::Candidates;
        self
    }
}

/// A query the solver refuses to run.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A pre-included word needs letters the request does not have.
    #[error("cannot include \"{word}\": {source}")]
    IncludeUnavailable {
        word: String,
        #[source]
        source: InsufficientLetters,
    },
}

/// Results of a successful query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOutcome {
    pub results: Vec<String>,
    /// The result cap cut the list short.
    pub truncated: bool,
}

/// Run `query` against `dawg`.
///
/// Includes are taken out of the letters first; if one does not fit the
/// query is rejected before the dictionary is touched. An empty result list
/// is a success.
pub fn run(dawg: &Dawg, alphabet: &Alphabet, query: &Query) -> Result<QueryOutcome, QueryError> {
    let mut vector = alphabet.vector(&query.letters);

    let includes: Vec<Word> = query
        .include
        .iter()
        .map(|text| Word::new(alphabet, text.as_str()))
        .collect();
    for word in &includes {
        vector
            .remove(word.letters())
            .map_err(|source| QueryError::IncludeUnavailable {
                word: word.text().to_string(),
                source,
            })?;
    }

    let remaining = vector.total() as usize;
    let max_letters = clamp_max_letters(query.options.max_letters, remaining);
    let max_words = clamp_max_words(query.options.max_words, includes.len(), remaining);
    let excludes = Excludes::new(&query.exclude);

    let mut buckets = CandidateBuckets::new(alphabet.len());
    if let Some(root) = dawg.root() {
        CandidateGenerator::new(dawg, alphabet, &excludes, query.options.min_letters, max_letters)
            .generate(&mut buckets, root, &mut vector, 0);
    }

    let outcome = match query.options.mode {
        Mode::Candidates => QueryOutcome {
            results: buckets.flatten(MAX_RESULTS),
            truncated: buckets.len() > MAX_RESULTS,
        },
        Mode::Phrases if vector.mask().is_empty() => {
            let accumulator: Vec<&Word> = includes.iter().collect();
            let results = if accumulator.is_empty() {
                Vec::new()
            } else {
                vec![join_phrase(&accumulator)]
            };
            QueryOutcome {
                results,
                truncated: false,
            }
        }
        Mode::Phrases => {
            let mut accumulator: Vec<&Word> = includes.iter().collect();
            let (results, truncated) =
                PhraseSearch::new(&buckets, max_words, MAX_RESULTS).run(&mut accumulator, &mut vector);
            QueryOutcome { results, truncated }
        }
    };

    debug!(
        "query {:?} ({:?}): {} candidates, {} results{}",
        query.letters,
        query.options.mode,
        buckets.len(),
        outcome.results.len(),
        if outcome.truncated { " (capped)" } else { "" }
    );
    Ok(outcome)
}

/// Longest useful word: no longer than the letters on hand or the hard cap.
fn clamp_max_letters(requested: usize, available: usize) -> usize {
    if requested > MAX_WORD_LETTERS {
        warn!("max letters {requested} clamped to {MAX_WORD_LETTERS}");
    }
    requested.min(MAX_WORD_LETTERS).min(available)
}

/// Every generated word takes at least one letter, so a phrase never needs
/// more words than its includes plus the letters left.
fn clamp_max_words(requested: usize, included: usize, available: usize) -> usize {
    if requested > MAX_PHRASE_WORDS {
        warn!("max words {requested} clamped to {MAX_PHRASE_WORDS}");
    }
    requested
        .min(MAX_PHRASE_WORDS)
        .min(included.saturating_add(available))
}
