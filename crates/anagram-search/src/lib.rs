//! Anagram search over a DAWG dictionary.
//!
//! A query walks the dictionary once to collect every word that fits in the
//! available letters, then combines those words by backtracking into phrases
//! that use the letters up exactly.
//!
//! # Architecture
//!
//! - [`candidates`] -- Letter-budgeted graph traversal into per-letter buckets
//! - [`phrase`] -- Backtracking combiner producing canonical phrases
//! - [`query`] -- Request options, bounds and the per-query pipeline
//! - [`handle`] -- Loaded dictionary plus language configuration
//! - `request` -- Wire DTOs for JSON callers (feature `serde`)

pub mod candidates;
pub mod handle;
pub mod phrase;
pub mod query;
#[cfg(feature = "serde")]
pub mod request;

#[cfg(test)]
mod fixtures;

pub use handle::{AnagramError, AnagramHandle};
pub use query::{Mode, Query, QueryError, QueryOptions, QueryOutcome};

/// Hard cap on results per query, in either mode.
pub const MAX_RESULTS: usize = 10_000;

/// Longest word (in alphabet letters) the generator will consider.
pub const MAX_WORD_LETTERS: usize = 64;

/// Most words a phrase may contain.
pub const MAX_PHRASE_WORDS: usize = 64;

/// Longest partial word (in characters, punctuation included) the generator
/// will follow before abandoning a branch.
pub const MAX_WORD_CHARS: usize = 255;
