//! index/matcher.rs
//! Longest-valid-match lookup over a [`Trie`].
//!
//! The walk follows edges as far as the text allows, recording every node it
//! passes. It then backtracks over that record and picks the deepest node that
//! carries a code. A long path that is only a prefix of some entry therefore
//! still resolves to the longest complete entry along it.

use crate::index::trie::{NodeId, Trie, ROOT};

/// Result of one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Code of the matched entry, `None` when the character at `start` is a literal.
    pub code: Option<u8>,
    /// Index just past the consumed characters. Always greater than `start`.
    pub next: usize,
}

/// Reusable matcher. Holds the visited-node scratch buffer so repeated lookups
/// during one encode do not allocate.
#[derive(Debug)]
pub struct Matcher<'t> {
    trie: &'t Trie,
    visited: Vec<(NodeId, usize)>,
}

impl<'t> Matcher<'t> {
    pub fn new(trie: &'t Trie) -> Self {
        Self {
            trie,
            visited: Vec::new(),
        }
    }

    /// Find the best dictionary match in `text` beginning at `start`.
    ///
    /// Never fails and always makes progress: without a match it reports one
    /// unmatched character (`next == start + 1`).
    pub fn find(&mut self, text: &[char], start: usize) -> Match {
        self.visited.clear();

        let mut node = ROOT;
        for (offset, &ch) in text.iter().enumerate().skip(start) {
            match self.trie.child(node, ch) {
                Some(next) => {
                    node = next;
                    self.visited.push((node, offset + 1));
                }
                None => break,
            }
        }

        self.visited
            .iter()
            .rev()
            .find_map(|&(node, next)| self.trie.code(node).map(|code| Match { code: Some(code), next }))
            .unwrap_or(Match {
                code: None,
                next: start + 1,
            })
    }
}

/// One-shot lookup; see [`Matcher::find`].
pub fn find_match(trie: &Trie, text: &[char], start: usize) -> Match {
    Matcher::new(trie).find(text, start)
}
