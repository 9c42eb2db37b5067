use std::path::{Component, Path};

use derive_more::{Deref, From};
use tracing::debug;

/// Path components of a file relative to a workspace root.
/// The last element is the file name, everything before it are directories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deref, From)]
pub struct Segments(Vec<String>);

impl Segments {
    /// Splits off the leaf, returning `(directories, file_name)`.
    pub fn split_leaf(self) -> Option<(Vec<String>, String)> {
        let mut parts = self.0;
        let leaf = parts.pop()?;
        Some((parts, leaf))
    }
}

/// Decomposes `full_path` into segments below `root`.
///
/// Without a root (or with an empty one) all of the path's own components are
/// returned. A path that is not under `root` is treated as root-relative.
pub fn partition(full_path: &Path, root: Option<&Path>) -> Segments {
    let relative = match root.filter(|r| !r.as_os_str().is_empty()) {
        Some(root) => match full_path.strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => {
                debug!(
                    "Path {} is not under {}, using its own components",
                    full_path.display(),
                    root.display()
                );
                full_path
            }
        },
        None => full_path,
    };

    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .into()
}

/// Last path component, used as the name of a workspace root node and of the
/// current file.
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
