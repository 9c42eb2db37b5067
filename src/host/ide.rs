use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use snafu::Snafu;

use crate::ext::BestEffortPathExt;

/// Operations a context provider may request from its host.
pub trait Ide {
    /// The file open in the active editor, if any.
    async fn get_current_file(&self) -> Result<Option<PathBuf>, IdeError>;
    async fn read_file(&self, path: &Path) -> Result<String, IdeError>;
    async fn get_workspace_dirs(&self) -> Result<Vec<PathBuf>, IdeError>;
    /// Absolute paths of every file below `root`.
    async fn walk_dir(&self, root: &Path) -> Result<Vec<PathBuf>, IdeError>;
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum IdeError {
    #[snafu(display("Failed to read file: {}", path.best_effort_path_display()))]
    ReadFileError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("File is not valid UTF-8: {}", path.best_effort_path_display()))]
    InvalidUtf8Error {
        path: PathBuf,
        source: FromUtf8Error,
    },
    #[snafu(display("Failed to walk directory: {}", root.best_effort_path_display()))]
    WalkError { root: PathBuf, source: ignore::Error },
    #[snafu(display("Workspace root is not a directory: {}", root.best_effort_path_display()))]
    NotADirectoryError { root: PathBuf },
}
