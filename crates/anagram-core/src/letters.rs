// Letter vectors: per-letter counts, presence masks and scoped removal

use std::ops::{Deref, DerefMut};

/// Presence bitmask over alphabet indices: bit `i` is set iff the vector it
/// was computed from has a positive count at index `i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterMask(u64);

impl LetterMask {
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub fn bits(self) -> u64 {
        self.0
    }

    /// `true` when no letter is present (the vector is exhausted).
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` if every letter present in `other` is also present here.
    #[inline]
    pub fn contains(self, other: LetterMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Lowest present index: the rarest remaining letter.
    #[inline]
    pub fn first(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }
}

/// A removal failed because some letter is not available often enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("insufficient letters: index {index} needs {needed}, only {available} available")]
pub struct InsufficientLetters {
    pub index: usize,
    pub needed: u32,
    pub available: u32,
}

/// Occurrence counts, one per alphabet index.
///
/// The mask and rarest index are never stored; they are always derived from
/// the current counts, so they cannot drift out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterVector {
    counts: Vec<u32>,
}

impl LetterVector {
    /// All-zero vector for an alphabet of `len` letters.
    pub fn zeroed(len: usize) -> Self {
        Self {
            counts: vec![0; len],
        }
    }

    /// Vector with the given counts.
    pub fn from_counts(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[inline]
    pub fn count(&self, index: usize) -> u32 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Total number of letters.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    #[inline]
    pub fn add_letter(&mut self, index: usize) {
        self.counts[index] += 1;
    }

    /// Presence mask of the current counts.
    pub fn mask(&self) -> LetterMask {
        let bits = self
            .counts
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .fold(0u64, |bits, (i, _)| bits | (1u64 << i));
        LetterMask(bits)
    }

    /// Rarest remaining letter, or `None` when exhausted.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.mask().first()
    }

    /// Check that every count of `other` is available here.
    pub fn covers(&self, other: &LetterVector) -> Result<(), InsufficientLetters> {
        for (index, (&available, &needed)) in self.counts.iter().zip(&other.counts).enumerate() {
            if needed > available {
                return Err(InsufficientLetters {
                    index,
                    needed,
                    available,
                });
            }
        }
        Ok(())
    }

    /// Subtract `other` componentwise.
    ///
    /// Fails without touching the counts if any letter of `other` is not
    /// available. On success returns the mask of what is left; its
    /// [`first`](LetterMask::first) is the new rarest letter.
    pub fn remove(&mut self, other: &LetterVector) -> Result<LetterMask, InsufficientLetters> {
        self.covers(other)?;
        for (count, &n) in self.counts.iter_mut().zip(&other.counts) {
            *count -= n;
        }
        Ok(self.mask())
    }

    /// Add `other` back componentwise; exact inverse of [`remove`](Self::remove).
    pub fn restore(&mut self, other: &LetterVector) {
        for (count, &n) in self.counts.iter_mut().zip(&other.counts) {
            *count += n;
        }
    }

    /// Remove `other` for the lifetime of the returned guard.
    ///
    /// The guard dereferences to this vector and adds `other` back when it is
    /// dropped, whichever way the caller leaves the scope.
    pub fn remove_scoped<'a>(
        &'a mut self,
        other: &'a LetterVector,
    ) -> Result<Removal<'a>, InsufficientLetters> {
        let mask = self.remove(other)?;
        Ok(Removal {
            vector: self,
            removed: other,
            mask,
        })
    }

    /// Take one letter at `index` for the lifetime of the returned guard.
    ///
    /// Returns `None` if no such letter is left.
    pub fn take_letter(&mut self, index: usize) -> Option<LetterTake<'_>> {
        let count = self.counts.get_mut(index)?;
        if *count == 0 {
            return None;
        }
        *count -= 1;
        Some(LetterTake {
            vector: self,
            index,
        })
    }
}

/// Guard returned by [`LetterVector::remove_scoped`].
pub struct Removal<'a> {
    vector: &'a mut LetterVector,
    removed: &'a LetterVector,
    mask: LetterMask,
}

impl Removal<'_> {
    /// Mask of the letters left right after the removal.
    #[inline]
    pub fn mask(&self) -> LetterMask {
        self.mask
    }
}

impl Deref for Removal<'_> {
    type Target = LetterVector;

    fn deref(&self) -> &LetterVector {
        self.vector
    }
}

impl DerefMut for Removal<'_> {
    fn deref_mut(&mut self) -> &mut LetterVector {
        self.vector
    }
}

impl Drop for Removal<'_> {
    fn drop(&mut self) {
        self.vector.restore(self.removed);
    }
}

/// Guard returned by [`LetterVector::take_letter`].
pub struct LetterTake<'a> {
    vector: &'a mut LetterVector,
    index: usize,
}

impl Deref for LetterTake<'_> {
    type Target = LetterVector;

    fn deref(&self) -> &LetterVector {
        self.vector
    }
}

impl DerefMut for LetterTake<'_> {
    fn deref_mut(&mut self) -> &mut LetterVector {
        self.vector
    }
}

impl Drop for LetterTake<'_> {
    fn drop(&mut self) {
        self.vector.counts[self.index] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(counts: &[u32]) -> LetterVector {
        LetterVector::from_counts(counts.to_vec())
    }

    #[test]
    fn mask_and_first_follow_counts() {
        let vector = v(&[0, 2, 0, 1]);
        assert_eq!(vector.mask().bits(), 0b1010);
        assert_eq!(vector.first(), Some(1));
        assert_eq!(v(&[0, 0]).first(), None);
    }

    #[test]
    fn mask_contains() {
        let big = LetterMask::from_bits(0b1011);
        assert!(big.contains(LetterMask::from_bits(0b0011)));
        assert!(!big.contains(LetterMask::from_bits(0b0100)));
        assert!(big.contains(LetterMask::EMPTY));
    }

    #[test]
    fn remove_returns_recomputed_mask() {
        let mut vector = v(&[1, 2, 1]);
        let mask = vector.remove(&v(&[1, 1, 0])).unwrap();
        assert_eq!(vector.counts(), &[0, 1, 1]);
        assert_eq!(mask.bits(), 0b110);
        assert_eq!(mask.first(), Some(1));
    }

    #[test]
    fn remove_everything_exhausts() {
        let mut vector = v(&[1, 1]);
        let mask = vector.remove(&v(&[1, 1])).unwrap();
        assert!(mask.is_empty());
        assert_eq!(mask.first(), None);
    }

    #[test]
    fn failed_remove_leaves_vector_untouched() {
        let mut vector = v(&[1, 1, 1]);
        let err = vector.remove(&v(&[1, 0, 2])).unwrap_err();
        assert_eq!(
            err,
            InsufficientLetters {
                index: 2,
                needed: 2,
                available: 1
            }
        );
        assert_eq!(vector.counts(), &[1, 1, 1]);
    }

    #[test]
    fn restore_inverts_remove() {
        let mut vector = v(&[3, 1, 4]);
        let word = v(&[1, 1, 2]);
        vector.remove(&word).unwrap();
        vector.restore(&word);
        assert_eq!(vector, v(&[3, 1, 4]));
    }

    #[test]
    fn scoped_removal_restores_on_drop() {
        let mut vector = v(&[2, 1]);
        let word = v(&[1, 1]);
        {
            let guard = vector.remove_scoped(&word).unwrap();
            assert_eq!(guard.counts(), &[1, 0]);
            assert_eq!(guard.mask().bits(), 0b01);
        }
        assert_eq!(vector.counts(), &[2, 1]);
    }

    #[test]
    fn nested_scoped_removals_unwind_in_order() {
        let mut vector = v(&[2, 2]);
        let word = v(&[1, 1]);
        {
            let mut outer = vector.remove_scoped(&word).unwrap();
            {
                let inner = outer.remove_scoped(&word).unwrap();
                assert!(inner.mask().is_empty());
            }
            assert_eq!(outer.counts(), &[1, 1]);
        }
        assert_eq!(vector.counts(), &[2, 2]);
    }

    #[test]
    fn take_letter_restores_on_drop() {
        let mut vector = v(&[0, 1]);
        assert!(vector.take_letter(0).is_none());
        assert!(vector.take_letter(5).is_none());
        {
            let taken = vector.take_letter(1).unwrap();
            assert_eq!(taken.count(1), 0);
        }
        assert_eq!(vector.count(1), 1);
    }

    #[test]
    fn total_sums_counts() {
        assert_eq!(v(&[1, 0, 3]).total(), 4);
    }
}
