//! index/trie.rs
//! Prefix trie over dictionary entries, keyed by Unicode scalar values.
//!
//! Design notes:
//! - Nodes live in a flat arena and refer to children by index.
//! - A node carries `code` only when some entry's text ends exactly there.
//! - Built once, read-only afterwards; safe to share across threads.

use std::collections::HashMap;

use crate::dictionary::Dictionary;

/// Arena index of a trie node.
pub type NodeId = usize;

/// Index of the root node.
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, NodeId>,
    code: Option<u8>,
}

/// Immutable dictionary index.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    /// Build the index for `dictionary`.
    ///
    /// Entries are inserted in code order, so when two entries share the same
    /// text the later position wins.
    pub fn build(dictionary: &Dictionary) -> Self {
        let mut trie = Self {
            nodes: vec![TrieNode::default()],
        };

        for (code, entry) in dictionary.entries().iter().enumerate() {
            if entry.is_empty() {
                tracing::warn!(code, "empty dictionary entry can never be matched");
            }
            // `Dictionary` guarantees at most 254 entries, so every position fits in a u8.
            if let Some(previous) = trie.insert(entry, code as u8) {
                tracing::warn!(
                    code,
                    previous,
                    entry = entry.as_str(),
                    "dictionary entry shadows an earlier entry with identical text"
                );
            }
        }

        tracing::debug!(
            entries = dictionary.len(),
            nodes = trie.nodes.len(),
            "dictionary index built"
        );
        trie
    }

    /// Insert `text`, tagging its terminal node with `code`.
    /// Returns the code previously stored on that node, if any.
    fn insert(&mut self, text: &str, code: u8) -> Option<u8> {
        let mut node = ROOT;
        for ch in text.chars() {
            node = match self.nodes[node].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(ch, next);
                    next
                }
            };
        }
        self.nodes[node].code.replace(code)
    }

    /// Follow the edge labelled `ch` out of `node`.
    #[inline]
    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes.get(node)?.children.get(&ch).copied()
    }

    /// Code recorded on `node`, if an entry ends there.
    #[inline]
    pub fn code(&self, node: NodeId) -> Option<u8> {
        self.nodes.get(node).and_then(|n| n.code)
    }

    /// Exact lookup of a whole entry text.
    pub fn get(&self, text: &str) -> Option<u8> {
        let mut node = ROOT;
        for ch in text.chars() {
            node = self.child(node, ch)?;
        }
        self.code(node)
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
