//! DAWG (directed acyclic word graph) dictionary.
//!
//! Loads the compact binary dictionary produced offline and answers "which
//! edges continue from here, and does this edge complete a word?". The graph
//! is immutable once loaded and can be shared between threads freely.
//!
//! # Architecture
//!
//! - [`format`] -- Binary header parsing and record decoding
//! - [`edge`] -- Bit-packed edge records
//! - [`graph`] -- Validated graph, sibling iteration and lookup
//! - [`builder`] -- `Dawg::from_words`, a trie-shaped graph from a word list

pub mod builder;
pub mod edge;
pub mod format;
pub mod graph;

pub use edge::Edge;
pub use graph::{Dawg, Siblings};

/// Index of the root sibling group. Index 0 is reserved for "no child".
pub const ROOT_GROUP: u32 = 1;

/// Largest edge index a child pointer can address (21 bits).
pub const MAX_EDGES: usize = 0x1F_FFFF;

/// Error type for dictionary loading and building.
///
/// Every loading variant means the dictionary is corrupt; none of them is
/// recoverable and no query may run against the data.
#[derive(Debug, thiserror::Error)]
pub enum DawgError {
    #[error("file too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("declared {declared} edges need {expected} bytes, got {actual}")]
    LengthMismatch {
        declared: usize,
        expected: usize,
        actual: usize,
    },
    #[error("edge count {0} exceeds the addressable maximum of {MAX_EDGES}")]
    TooManyEdges(usize),
    #[error("edge {edge} points to child group {child}, past the last edge {count}")]
    ChildOutOfBounds { edge: usize, child: u32, count: usize },
    #[error("last edge {0} does not terminate its sibling group")]
    UnterminatedGroup(usize),
    #[error("sibling group at edge {0} is reachable from itself")]
    Cycle(u32),
    #[error("word {word:?}: {ch:?} has no byte in the code page")]
    Unencodable { word: String, ch: char },
}
