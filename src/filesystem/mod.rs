//! Synthesized directory trees built from flat file listings.
//!
//! A workspace walk yields absolute file paths. This module splits each path
//! into segments relative to its workspace root, folds the segments into a
//! [`DirectoryNode`] trie and renders the trie as an indented outline.

mod format;
mod partition;
mod tree;

pub use format::format_tree;
pub use partition::basename;
pub use tree::DirectoryNode;
