// Word list to graph: trie layout in the binary edge format

use std::collections::BTreeMap;

use anagram_core::CodePage;

use crate::edge::Edge;
use crate::graph::Dawg;
use crate::{DawgError, MAX_EDGES};

/// Outgoing edges of one trie node: byte -> (ends word, child node).
type Node = BTreeMap<u8, (bool, Option<usize>)>;

impl Dawg {
    /// Build a graph holding exactly `words`.
    ///
    /// The result is an unminimised trie: every node gets its own sibling
    /// group, groups are laid out breadth-first and siblings sorted by byte.
    /// Lookups and traversal behave as on a minimised dictionary, only the
    /// file is larger. Empty words are skipped and duplicates collapse.
    pub fn from_words<S: AsRef<str>>(words: &[S], code_page: CodePage) -> Result<Self, DawgError> {
        let mut nodes: Vec<Node> = vec![Node::new()];
        for word in words {
            let word = word.as_ref();
            let bytes = encode_word(word, &code_page)?;
            let mut current = 0;
            for (i, &b) in bytes.iter().enumerate() {
                let next = nodes.len();
                let entry = nodes[current].entry(b).or_insert((false, None));
                if i + 1 == bytes.len() {
                    entry.0 = true;
                    break;
                }
                let child = *entry.1.get_or_insert(next);
                if child == next {
                    nodes.push(Node::new());
                }
                current = child;
            }
        }

        let count: usize = nodes.iter().map(BTreeMap::len).sum();
        if count > MAX_EDGES {
            return Err(DawgError::TooManyEdges(count));
        }

        let order = breadth_first(&nodes);
        let mut start = vec![0u32; nodes.len()];
        let mut next = 1u32;
        for &node in &order {
            start[node] = next;
            next += nodes[node].len() as u32;
        }

        let mut edges = Vec::with_capacity(count + 1);
        edges.push(Edge::default());
        for &node in &order {
            let siblings = nodes[node].len();
            for (k, (&b, &(ends_word, child))) in nodes[node].iter().enumerate() {
                let child = child.map_or(0, |c| start[c]);
                edges.push(Edge::new(b, ends_word, k + 1 == siblings, child));
            }
        }

        Self::from_edges(edges, code_page)
    }
}

fn encode_word(word: &str, code_page: &CodePage) -> Result<Vec<u8>, DawgError> {
    word.chars()
        .map(|ch| {
            code_page.encode(ch).ok_or_else(|| DawgError::Unencodable {
                word: word.to_string(),
                ch,
            })
        })
        .collect()
}

/// Node indices in breadth-first order from the root.
fn breadth_first(nodes: &[Node]) -> Vec<usize> {
    let mut order = vec![0usize];
    let mut i = 0;
    while i < order.len() {
        let node = order[i];
        order.extend(nodes[node].values().filter_map(|&(_, child)| child));
        i += 1;
    }
    order
}
