// Candidate generation: letter-budgeted DAWG traversal into per-letter buckets

use anagram_core::alphabet::simple_lower;
use anagram_core::{Alphabet, LetterVector, Word};
use anagram_dawg::{Dawg, Edge};
use hashbrown::HashSet;

use crate::MAX_WORD_CHARS;

/// Words a query must never produce, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Excludes {
    words: HashSet<String>,
}

impl Excludes {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| fold_case(w.as_ref())).collect(),
        }
    }

    /// Parse a space-separated list.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split_whitespace())
    }

    pub fn contains(&self, word: &str) -> bool {
        !self.words.is_empty() && self.words.contains(&fold_case(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn fold_case(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}

/// Candidate words grouped by their own rarest letter.
///
/// Bucket `i` holds every word whose lowest alphabet index is `i`, in the
/// order the traversal found them.
#[derive(Debug, Clone)]
pub struct CandidateBuckets {
    buckets: Vec<Vec<Word>>,
}

impl CandidateBuckets {
    /// One empty bucket per alphabet letter.
    pub fn new(alphabet_len: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); alphabet_len],
        }
    }

    /// File `word` under its own rarest letter. Words with no alphabet
    /// letters have no bucket and are dropped.
    pub fn file(&mut self, word: Word) -> bool {
        match word.first().and_then(|i| self.buckets.get_mut(i)) {
            Some(bucket) => {
                bucket.push(word);
                true
            }
            None => false,
        }
    }

    /// Words whose rarest letter is `index`.
    pub fn bucket(&self, index: usize) -> &[Word] {
        self.buckets.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of candidates.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// All candidates, bucket by bucket, each bucket in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.buckets.iter().flatten()
    }

    /// Flatten into display texts, keeping at most `limit`.
    pub fn flatten(&self, limit: usize) -> Vec<String> {
        self.iter()
            .take(limit)
            .map(|w| w.text().to_string())
            .collect()
    }
}

/// Depth-first enumeration of the dictionary words that fit in a letter
/// budget.
///
/// Characters outside the alphabet (hyphens, apostrophes) pass freely and do
/// not count toward a word's length. Letters are taken from the budget on
/// the way down and returned on the way back up, so the vector handed to
/// [`generate`](Self::generate) is unchanged when it returns.
pub struct CandidateGenerator<'a> {
    dawg: &'a Dawg,
    alphabet: &'a Alphabet,
    excludes: &'a Excludes,
    min_len: usize,
    max_len: usize,
}

impl<'a> CandidateGenerator<'a> {
    pub fn new(
        dawg: &'a Dawg,
        alphabet: &'a Alphabet,
        excludes: &'a Excludes,
        min_len: usize,
        max_len: usize,
    ) -> Self {
        Self {
            dawg,
            alphabet,
            excludes,
            min_len,
            max_len,
        }
    }

    /// Walk the sibling group `start_group` with `consumed` letters already
    /// used, filing every complete word into `buckets`.
    pub fn generate(
        &self,
        buckets: &mut CandidateBuckets,
        start_group: u32,
        vector: &mut LetterVector,
        consumed: usize,
    ) {
        let mut partial = String::new();
        self.visit_group(buckets, start_group, vector, &mut partial, 0, consumed);
    }

    fn visit_group(
        &self,
        buckets: &mut CandidateBuckets,
        group: u32,
        vector: &mut LetterVector,
        partial: &mut String,
        depth: usize,
        consumed: usize,
    ) {
        if depth >= MAX_WORD_CHARS {
            return;
        }

        for edge in self.dawg.siblings(group) {
            let c = self.dawg.char_of(edge);
            match self.alphabet.index_of(c) {
                Some(index) => {
                    let Some(mut taken) = vector.take_letter(index) else {
                        continue;
                    };
                    self.visit_edge(buckets, edge, c, &mut taken, partial, depth, consumed + 1);
                }
                None => self.visit_edge(buckets, edge, c, vector, partial, depth, consumed),
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn visit_edge(
        &self,
        buckets: &mut CandidateBuckets,
        edge: Edge,
        c: char,
        vector: &mut LetterVector,
        partial: &mut String,
        depth: usize,
        consumed: usize,
    ) {
        partial.push(c);

        if edge.ends_word() && (self.min_len..=self.max_len).contains(&consumed) {
            self.file_word(buckets, partial);
        }

        if consumed <= self.max_len {
            if let Some(child) = edge.child() {
                self.visit_group(buckets, child, vector, partial, depth + 1, consumed);
            }
        }

        partial.pop();
    }

    fn file_word(&self, buckets: &mut CandidateBuckets, text: &str) {
        let word = Word::new(self.alphabet, text);
        if word.first().is_none() || self.excludes.contains(text) {
            return;
        }
        buckets.file(word);
    }
}
