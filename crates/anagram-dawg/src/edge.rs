// Bit-packed DAWG edge records

use bytemuck::{Pod, Zeroable};

/// Bit 23: this edge completes a word.
pub const END_OF_WORD: u32 = 1 << 23;

/// Bit 22: this edge is the last one in its sibling group.
pub const END_OF_GROUP: u32 = 1 << 22;

/// Bits 20..0: index of the child sibling group, 0 for none.
pub const CHILD_MASK: u32 = 0x1F_FFFF;

/// Bits 31..24 hold the character byte.
const BYTE_SHIFT: u32 = 24;

/// One 32-bit edge record.
///
/// ```text
///  31          24  23  22  21  20                      0
/// +--------------+---+---+---+--------------------------+
/// |  char byte   | W | L | - |      child group         |
/// +--------------+---+---+---+--------------------------+
/// ```
///
/// `W` marks the end of a word, `L` the last sibling of a group. Bit 21 is
/// reserved and ignored.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Edge(u32);

impl Edge {
    /// Wrap a raw record (already in host byte order).
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Pack the fields of an edge. `child` is truncated to 21 bits.
    pub const fn new(byte: u8, ends_word: bool, last: bool, child: u32) -> Self {
        let mut raw = ((byte as u32) << BYTE_SHIFT) | (child & CHILD_MASK);
        if ends_word {
            raw |= END_OF_WORD;
        }
        if last {
            raw |= END_OF_GROUP;
        }
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The encoded character byte (decode it with a code page).
    #[inline]
    pub const fn byte(self) -> u8 {
        (self.0 >> BYTE_SHIFT) as u8
    }

    #[inline]
    pub const fn ends_word(self) -> bool {
        self.0 & END_OF_WORD != 0
    }

    #[inline]
    pub const fn is_last(self) -> bool {
        self.0 & END_OF_GROUP != 0
    }

    /// Start index of the child sibling group, if any.
    #[inline]
    pub const fn child(self) -> Option<u32> {
        match self.0 & CHILD_MASK {
            0 => None,
            child => Some(child),
        }
    }
}

impl std::fmt::Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Edge")
            .field("byte", &self.byte())
            .field("ends_word", &self.ends_word())
            .field("last", &self.is_last())
            .field("child", &self.child())
            .finish()
    }
}
