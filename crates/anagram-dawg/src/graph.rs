// Validated, read-only word graph

use anagram_core::CodePage;

use crate::edge::Edge;
use crate::format;
use crate::{DawgError, ROOT_GROUP};

/// Immutable dictionary automaton.
///
/// Edges with a common parent form a sibling group: a run of consecutive
/// records ending at the first one flagged last. Loading checks that every
/// child pointer is in range, that every group terminates inside the table
/// and that no group can reach itself, so traversal can index and recurse
/// without further checks.
pub struct Dawg {
    code_page: CodePage,
    /// Edge table addressed `1..=edge_count`; slot 0 is reserved.
    edges: Vec<Edge>,
}

impl std::fmt::Debug for Dawg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dawg")
            .field("edge_count", &self.edge_count())
            .field("code_page", &self.code_page.name())
            .finish()
    }
}

impl Dawg {
    /// Load a graph from the raw dictionary file contents.
    pub fn from_bytes(data: &[u8], code_page: CodePage) -> Result<Self, DawgError> {
        let edges = format::decode_edges(data)?;
        let dawg = Self::from_edges(edges, code_page)?;
        log::info!(
            "loaded dictionary graph: {} edges ({})",
            dawg.edge_count(),
            dawg.code_page.name()
        );
        Ok(dawg)
    }

    /// Build a graph from an already decoded edge table (slot 0 reserved).
    pub fn from_edges(mut edges: Vec<Edge>, code_page: CodePage) -> Result<Self, DawgError> {
        if edges.is_empty() {
            edges.push(Edge::default());
        }
        let dawg = Self { code_page, edges };
        dawg.validate()?;
        Ok(dawg)
    }

    /// Serialize back into the binary dictionary format.
    pub fn to_bytes(&self) -> Vec<u8> {
        format::encode_edges(&self.edges)
    }

    /// Number of edges (excluding the reserved slot).
    pub fn edge_count(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn code_page(&self) -> &CodePage {
        &self.code_page
    }

    /// The root sibling group, or `None` for an empty dictionary.
    pub fn root(&self) -> Option<u32> {
        (self.edge_count() > 0).then_some(ROOT_GROUP)
    }

    /// Decode the character carried by `edge`.
    #[inline]
    pub fn char_of(&self, edge: Edge) -> char {
        self.code_page.decode(edge.byte())
    }

    /// Iterate over the sibling group starting at `group`.
    ///
    /// Out-of-range groups (including 0) yield nothing.
    pub fn siblings(&self, group: u32) -> Siblings<'_> {
        let start = group as usize;
        let next = (start >= 1 && start < self.edges.len()).then_some(start);
        Siblings {
            edges: &self.edges,
            next,
        }
    }

    /// Exact (case-sensitive) dictionary lookup.
    pub fn contains(&self, word: &str) -> bool {
        let mut group = self.root();
        let mut chars = word.chars().peekable();
        if chars.peek().is_none() {
            return false;
        }

        while let Some(c) = chars.next() {
            let Some(current) = group else {
                return false;
            };
            let Some(edge) = self.siblings(current).find(|&e| self.char_of(e) == c) else {
                return false;
            };
            if chars.peek().is_none() {
                return edge.ends_word();
            }
            group = edge.child();
        }
        false
    }

    /// All words in graph order. Intended for diagnostics and small graphs.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(root) = self.root() {
            let mut prefix = String::new();
            self.collect_words(root, &mut prefix, &mut words);
        }
        words
    }

    fn collect_words(&self, group: u32, prefix: &mut String, words: &mut Vec<String>) {
        for edge in self.siblings(group) {
            prefix.push(self.char_of(edge));
            if edge.ends_word() {
                words.push(prefix.clone());
            }
            if let Some(child) = edge.child() {
                self.collect_words(child, prefix, words);
            }
            prefix.pop();
        }
    }

    fn validate(&self) -> Result<(), DawgError> {
        let count = self.edge_count();
        if count == 0 {
            return Ok(());
        }

        for (i, edge) in self.edges.iter().enumerate().skip(1) {
            if let Some(child) = edge.child() {
                if child as usize > count {
                    return Err(DawgError::ChildOutOfBounds {
                        edge: i,
                        child,
                        count,
                    });
                }
            }
        }

        // Every group runs until the next last-flagged edge; the final record
        // must carry the flag or a group could run off the table.
        if !self.edges[count].is_last() {
            return Err(DawgError::UnterminatedGroup(count));
        }

        self.check_acyclic()
    }

    /// Iterative three-colour DFS over sibling groups reachable from the root.
    fn check_acyclic(&self) -> Result<(), DawgError> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        struct Frame {
            group: u32,
            cursor: usize,
            exhausted: bool,
        }

        let mut marks = vec![Mark::Unvisited; self.edges.len()];
        let mut stack = vec![Frame {
            group: ROOT_GROUP,
            cursor: ROOT_GROUP as usize,
            exhausted: false,
        }];
        marks[ROOT_GROUP as usize] = Mark::InProgress;

        while let Some(frame) = stack.last_mut() {
            if frame.exhausted {
                marks[frame.group as usize] = Mark::Done;
                stack.pop();
                continue;
            }

            let edge = self.edges[frame.cursor];
            if edge.is_last() {
                frame.exhausted = true;
            } else {
                frame.cursor += 1;
            }

            if let Some(child) = edge.child() {
                match marks[child as usize] {
                    Mark::InProgress => return Err(DawgError::Cycle(child)),
                    Mark::Done => {}
                    Mark::Unvisited => {
                        marks[child as usize] = Mark::InProgress;
                        stack.push(Frame {
                            group: child,
                            cursor: child as usize,
                            exhausted: false,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Iterator over one sibling group, stopping after the last-flagged edge.
pub struct Siblings<'a> {
    edges: &'a [Edge],
    next: Option<usize>,
}

impl Iterator for Siblings<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let index = self.next?;
        let edge = *self.edges.get(index)?;
        self.next = if edge.is_last() { None } else { Some(index + 1) };
        Some(edge)
    }
}
