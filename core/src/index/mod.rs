//! index/mod.rs
//! Dictionary index: prefix trie plus the longest-valid-match lookup the
//! encoder drives. The decoder never touches the trie; it looks codes up in
//! the `Dictionary` directly.

pub mod matcher;
pub mod trie;

pub use matcher::{find_match, Match, Matcher};
pub use trie::{NodeId, Trie, ROOT};
