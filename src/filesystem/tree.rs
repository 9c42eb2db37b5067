use std::path::{Path, PathBuf};

use hashlink::LinkedHashMap;
use hashlink::linked_hash_map::RawEntryMut;
use tracing::debug;

use super::partition::{Segments, basename, partition};

/// One directory level of a synthesized workspace tree.
///
/// Files and subdirectories keep the order in which they were first seen.
/// Subdirectories are keyed by name so each name exists once per level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryNode {
    name: String,
    files: Vec<String>,
    subdirectories: LinkedHashMap<String, DirectoryNode>,
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builds the tree of one workspace root from the files found under it.
    pub fn from_paths<I, P>(root: &Path, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        paths
            .into_iter()
            .map(Into::into)
            .fold(Self::new(basename(root)), |mut tree, path| {
                tree.insert(partition(&path, Some(root)));
                tree
            })
    }

    /// Places the leaf of `segments` under its directories, creating missing ones.
    /// Duplicate file names are kept as given.
    pub fn insert(&mut self, segments: Segments) {
        let Some((directories, leaf)) = segments.split_leaf() else {
            debug!("Skipping empty path under '{}'", self.name);
            return;
        };

        let current = directories
            .into_iter()
            .fold(self, |current, directory| current.subdirectory_mut(directory));
        current.files.push(leaf);
    }

    /// Looks up a child directory, appending it when missing.
    /// Existing children keep their position.
    fn subdirectory_mut(&mut self, name: String) -> &mut DirectoryNode {
        match self.subdirectories.raw_entry_mut().from_key(&name) {
            RawEntryMut::Occupied(entry) => entry.into_mut(),
            RawEntryMut::Vacant(entry) => entry.insert(name.clone(), DirectoryNode::new(name)).1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn subdirectories(&self) -> impl Iterator<Item = &DirectoryNode> {
        self.subdirectories.values()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.subdirectories.is_empty()
    }

    /// Number of file entries in this node and all of its descendants.
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .subdirectories
                .values()
                .map(DirectoryNode::file_count)
                .sum::<usize>()
    }
}
