// Alphabet: rarest-first letter ordering and character-to-index lookup

use hashbrown::HashMap;

use crate::letters::LetterVector;

/// Largest supported alphabet. Presence masks are stored in a `u64`.
pub const MAX_ALPHABET_LEN: usize = 64;

/// Esperanto letters ordered from rarest to most common.
///
/// The search always branches on the rarest remaining letter first, so this
/// order decides how quickly the candidate space narrows.
pub const ESPERANTO_ALPHABET: &str = "ĥĵŝhŭzĉĝcbfgvpdmujktrslnoeia";

/// Error type for alphabet construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("alphabet is empty")]
    Empty,
    #[error("alphabet has {0} letters, at most {MAX_ALPHABET_LEN} are supported")]
    TooLong(usize),
    #[error("letter {0:?} appears more than once in the alphabet")]
    Duplicate(char),
}

/// Ordered set of distinguished letters.
///
/// Defines an injective mapping from (lowercased) letter to index in
/// `0..len()`. Characters outside the alphabet have no index and are never
/// counted.
#[derive(Debug, Clone)]
pub struct Alphabet {
    letters: Vec<char>,
    index: HashMap<char, u8>,
}

impl Alphabet {
    /// Build an alphabet from its letters in rarest-first order.
    ///
    /// Letters are lowercased; the result must be non-empty, free of
    /// duplicates and no longer than [`MAX_ALPHABET_LEN`].
    pub fn new(letters: &str) -> Result<Self, AlphabetError> {
        let letters: Vec<char> = letters.chars().map(simple_lower).collect();
        if letters.is_empty() {
            return Err(AlphabetError::Empty);
        }
        if letters.len() > MAX_ALPHABET_LEN {
            return Err(AlphabetError::TooLong(letters.len()));
        }

        let mut index = HashMap::with_capacity(letters.len());
        for (i, &letter) in letters.iter().enumerate() {
            if index.insert(letter, i as u8).is_some() {
                return Err(AlphabetError::Duplicate(letter));
            }
        }

        Ok(Self { letters, index })
    }

    /// The default Esperanto alphabet.
    pub fn esperanto() -> Self {
        let letters: Vec<char> = ESPERANTO_ALPHABET.chars().collect();
        let index = letters
            .iter()
            .enumerate()
            .map(|(i, &letter)| (letter, i as u8))
            .collect();
        Self { letters, index }
    }

    /// Number of letters.
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters in rarest-first order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letter at `index`, if in range.
    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// Index of `c` (case-insensitive), or `None` for characters outside the
    /// alphabet.
    #[inline]
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&simple_lower(c)).map(|&i| i as usize)
    }

    /// Count the alphabet letters of `text`.
    ///
    /// Matching is case-insensitive; characters outside the alphabet are
    /// skipped, never rejected.
    pub fn vector(&self, text: &str) -> LetterVector {
        let mut vector = LetterVector::zeroed(self.len());
        for c in text.chars() {
            if let Some(i) = self.index_of(c) {
                vector.add_letter(i);
            }
        }
        vector
    }
}

/// Convert a character to its simple (one-to-one) lowercase equivalent.
///
/// Characters whose lowercase form expands to several characters keep only
/// the first one.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Compare two strings character by character, ignoring case.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    let mut a = a.chars().map(simple_lower);
    let mut b = b.chars().map(simple_lower);
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x == y => {}
            _ => return false,
        }
    }
}
