// Word: a dictionary entry (or caller-supplied word) with its letter vector

use crate::alphabet::Alphabet;
use crate::letters::{LetterMask, LetterVector};

/// An immutable word together with the letters it consumes.
///
/// `letters` describes what the word uses up, not what is left of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: LetterVector,
    mask: LetterMask,
}

impl Word {
    /// Count the letters of `text` under `alphabet`.
    pub fn new(alphabet: &Alphabet, text: impl Into<String>) -> Self {
        let text = text.into();
        let letters = alphabet.vector(&text);
        let mask = letters.mask();
        Self {
            text,
            letters,
            mask,
        }
    }

    /// Display text, exactly as spelled in the dictionary or request.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn letters(&self) -> &LetterVector {
        &self.letters
    }

    #[inline]
    pub fn mask(&self) -> LetterMask {
        self.mask
    }

    /// The word's own rarest letter; this is the bucket it is filed under.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.mask.first()
    }

    /// Number of alphabet letters consumed.
    pub fn letter_count(&self) -> u32 {
        self.letters.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_keeps_display_text() {
        let alphabet = Alphabet::esperanto();
        let word = Word::new(&alphabet, "Ĉu-ne");
        assert_eq!(word.text(), "Ĉu-ne");
        assert_eq!(word.letter_count(), 4);
    }

    #[test]
    fn word_first_is_rarest_letter() {
        let alphabet = Alphabet::esperanto();
        let word = Word::new(&alphabet, "ŝipo");
        assert_eq!(word.first(), alphabet.index_of('ŝ'));
        assert_eq!(word.mask(), word.letters().mask());
    }

    #[test]
    fn word_without_alphabet_letters_has_no_bucket() {
        let alphabet = Alphabet::esperanto();
        let word = Word::new(&alphabet, "--");
        assert_eq!(word.first(), None);
        assert_eq!(word.letter_count(), 0);
    }
}
