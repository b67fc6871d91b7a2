// Phrase search: backtracking combination of candidates into exact anagrams

use anagram_core::{LetterMask, LetterVector, Word};

use crate::candidates::CandidateBuckets;

/// Whether the search should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The result cap was reached; unwind without exploring anything else.
    Stop,
}

/// Backtracking combiner.
///
/// At every level only the bucket of the rarest remaining letter is tried,
/// and while that letter stays the rarest the scan resumes at the position of
/// the previous pick instead of the start of the bucket. Each multiset of
/// words is therefore reached in exactly one order and no permutation of an
/// emitted phrase is ever emitted again.
pub struct PhraseSearch<'a> {
    buckets: &'a CandidateBuckets,
    max_words: usize,
    limit: usize,
    results: Vec<String>,
}

impl<'a> PhraseSearch<'a> {
    /// Search over `buckets`, stopping after `limit` results.
    ///
    /// `max_words` bounds how deep the search goes: a level is always tried,
    /// but the search only descends while the phrase holds fewer than
    /// `max_words - 1` words. A phrase therefore has at most
    /// `max(max_words, depth + 1)` words, where `depth` is the number of
    /// words already in the accumulator.
    pub fn new(buckets: &'a CandidateBuckets, max_words: usize, limit: usize) -> Self {
        Self {
            buckets,
            max_words,
            limit,
            results: Vec::new(),
        }
    }

    /// Run the search from `accumulator` (words already placed, such as
    /// caller-supplied includes) over the letters left in `vector`.
    ///
    /// `vector` is restored before this returns. The flag is `true` when the
    /// result cap cut the search short.
    pub fn run(
        mut self,
        accumulator: &mut Vec<&'a Word>,
        vector: &mut LetterVector,
    ) -> (Vec<String>, bool) {
        let mask = vector.mask();
        let flow = if self.limit == 0 {
            Flow::Stop
        } else {
            self.search(accumulator, vector, mask, 0)
        };
        (self.results, flow == Flow::Stop)
    }

    fn search(
        &mut self,
        accumulator: &mut Vec<&'a Word>,
        vector: &mut LetterVector,
        mask: LetterMask,
        start: usize,
    ) -> Flow {
        let Some(first) = mask.first() else {
            return Flow::Continue;
        };
        let depth = accumulator.len();

        let buckets = self.buckets;
        for (i, word) in buckets.bucket(first).iter().enumerate().skip(start) {
            if !mask.contains(word.mask()) {
                continue;
            }
            let Ok(mut removal) = vector.remove_scoped(word.letters()) else {
                continue;
            };
            let remaining = removal.mask();

            accumulator.push(word);
            let flow = if remaining.is_empty() {
                self.emit(accumulator)
            } else if depth + 1 < self.max_words {
                let next_start = if remaining.first() == Some(first) { i } else { 0 };
                self.search(accumulator, &mut removal, remaining, next_start)
            } else {
                Flow::Continue
            };
            accumulator.pop();

            if flow == Flow::Stop {
                return Flow::Stop;
            }
        }

        Flow::Continue
    }

    fn emit(&mut self, accumulator: &[&Word]) -> Flow {
        self.results.push(join_phrase(accumulator));
        if self.results.len() >= self.limit {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}

/// Space-join the display texts of `words`.
pub fn join_phrase(words: &[&Word]) -> String {
    let mut phrase = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            phrase.push(' ');
        }
        phrase.push_str(word.text());
    }
    phrase
}
