use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use hashlink::LinkedHashMap;

use super::ide::{Ide, IdeError};

/// In-memory host for provider tests.
///
/// Workspace roots map to their file listings in the order the walk returns
/// them. A root registered with [`FakeIde::with_failing_root`] fails its walk.
#[derive(Debug, Default)]
pub struct FakeIde {
    current_file: Option<PathBuf>,
    contents: HashMap<PathBuf, String>,
    roots: LinkedHashMap<PathBuf, Option<Vec<PathBuf>>>,
}

impl FakeIde {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_current_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        self.contents.insert(path.clone(), content.into());
        self.current_file = Some(path);
        self
    }

    /// Current file the host reports without any readable content behind it.
    pub fn with_unreadable_current_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_file = Some(path.into());
        self
    }

    pub fn with_root<I, P>(mut self, root: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let files = files.into_iter().map(Into::into).collect();
        self.roots.insert(root.into(), Some(files));
        self
    }

    pub fn with_failing_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.insert(root.into(), None);
        self
    }
}

impl Ide for FakeIde {
    async fn get_current_file(&self) -> Result<Option<PathBuf>, IdeError> {
        Ok(self.current_file.clone())
    }

    async fn read_file(&self, path: &Path) -> Result<String, IdeError> {
        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| IdeError::ReadFileError {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "not in fake host"),
            })
    }

    async fn get_workspace_dirs(&self) -> Result<Vec<PathBuf>, IdeError> {
        Ok(self.roots.keys().cloned().collect())
    }

    async fn walk_dir(&self, root: &Path) -> Result<Vec<PathBuf>, IdeError> {
        match self.roots.get(root) {
            Some(Some(files)) => Ok(files.clone()),
            _ => Err(IdeError::NotADirectoryError {
                root: root.to_path_buf(),
            }),
        }
    }
}
