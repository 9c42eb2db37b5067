use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ignore::WalkBuilder;
use snafu::{ResultExt, ensure};
use tracing::debug;

use super::ide::{Ide, IdeError, InvalidUtf8Snafu, NotADirectorySnafu, ReadFileSnafu, WalkSnafu};
use crate::application::RuntimeConfig;
use crate::config::WalkSettings;

/// Host backed by the local filesystem.
///
/// The "open" file and the workspace roots are whatever the user passed on
/// the command line.
#[derive(Debug, Clone)]
pub struct LocalIde {
    current_file: Option<PathBuf>,
    workspace_dirs: Vec<PathBuf>,
    walk: WalkSettings,
}

impl LocalIde {
    pub fn new(
        current_file: Option<PathBuf>,
        workspace_dirs: Vec<PathBuf>,
        walk: WalkSettings,
    ) -> Self {
        Self {
            current_file: current_file.map(|path| absolutize(&path)),
            workspace_dirs: workspace_dirs.iter().map(|dir| absolutize(dir)).collect(),
            walk,
        }
    }
}

impl From<&RuntimeConfig> for LocalIde {
    fn from(config: &RuntimeConfig) -> Self {
        Self::new(
            config.current_file.clone(),
            config.workspace_dirs.clone(),
            config.walk.clone(),
        )
    }
}

/// Workspace roots must be absolute for the walked paths to strip cleanly.
fn absolutize(path: &Path) -> PathBuf {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Ide for LocalIde {
    async fn get_current_file(&self) -> Result<Option<PathBuf>, IdeError> {
        Ok(self.current_file.clone())
    }

    async fn read_file(&self, path: &Path) -> Result<String, IdeError> {
        debug!("Reading {}", path.display());
        let bytes = compio::fs::read(path).await.context(ReadFileSnafu { path })?;
        String::from_utf8(bytes).context(InvalidUtf8Snafu { path })
    }

    async fn get_workspace_dirs(&self) -> Result<Vec<PathBuf>, IdeError> {
        Ok(self.workspace_dirs.clone())
    }

    /// Walks on the blocking pool. Dropping the returned future stops the
    /// walk at the next entry.
    async fn walk_dir(&self, root: &Path) -> Result<Vec<PathBuf>, IdeError> {
        ensure!(root.is_dir(), NotADirectorySnafu { root });

        let abandoned = Arc::new(AtomicBool::new(false));
        let _guard = AbandonOnDrop(abandoned.clone());
        let root = root.to_path_buf();
        let settings = self.walk.clone();

        compio::runtime::spawn_blocking(move || walk_files(&root, &settings, &abandoned))
            .await
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    }
}

struct AbandonOnDrop(Arc<AtomicBool>);

impl Drop for AbandonOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

fn walk_files(
    root: &Path,
    settings: &WalkSettings,
    abandoned: &AtomicBool,
) -> Result<Vec<PathBuf>, IdeError> {
    let ignored = settings.ignore.clone();
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(!settings.hidden)
        .require_git(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            !ignored
                .iter()
                .any(|name| entry.file_name() == OsStr::new(name))
        });

    let mut files = Vec::new();
    for result in builder.build() {
        if abandoned.load(Ordering::Relaxed) {
            debug!("Walk of {} abandoned", root.display());
            break;
        }
        let entry = result.context(WalkSnafu { root })?;
        if entry.file_type().is_some_and(|kind| kind.is_file()) {
            files.push(entry.into_path());
        }
    }

    debug!("Found {} files under {}", files.len(), root.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn workspace() -> TempDir {
        let dir = tempfile::Builder::new()
            .prefix("workspace")
            .tempdir()
            .expect("Failed to create temp directory");
        fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        fs::create_dir_all(dir.path().join("target/debug")).unwrap();
        fs::write(dir.path().join("README.md"), "# readme").unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
        fs::write(dir.path().join("src/nested/mod.rs"), "").unwrap();
        fs::write(dir.path().join("target/debug/out.bin"), "bin").unwrap();
        fs::write(dir.path().join(".hidden"), "secret").unwrap();
        dir
    }

    fn settings(ignore: &[&str], hidden: bool) -> WalkSettings {
        WalkSettings {
            ignore: ignore.iter().map(|s| s.to_string()).collect(),
            hidden,
        }
    }

    fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[compio::test]
    async fn walk_dir_lists_files_sorted_and_skips_ignored() {
        let dir = workspace();
        let ide = LocalIde::new(None, vec![dir.path().to_path_buf()], settings(&["target"], false));
        let root = ide.get_workspace_dirs().await.unwrap().remove(0);

        let files = ide.walk_dir(&root).await.expect("walk should succeed");

        assert_eq!(
            relative_names(&root, &files),
            ["README.md", "src/main.rs", "src/nested/mod.rs"]
        );
    }

    #[compio::test]
    async fn walk_dir_includes_hidden_files_when_enabled() {
        let dir = workspace();
        let ide = LocalIde::new(None, vec![dir.path().to_path_buf()], settings(&["target"], true));
        let root = ide.get_workspace_dirs().await.unwrap().remove(0);

        let files = ide.walk_dir(&root).await.unwrap();

        assert!(relative_names(&root, &files).contains(&".hidden".to_string()));
    }

    #[test]
    fn walk_files_stops_once_abandoned() {
        let dir = workspace();

        let walked = walk_files(dir.path(), &settings(&["target"], false), &AtomicBool::new(false))
            .unwrap();
        let abandoned = walk_files(dir.path(), &settings(&["target"], false), &AtomicBool::new(true))
            .unwrap();

        assert_eq!(walked.len(), 3);
        assert!(abandoned.is_empty());
    }

    #[test]
    fn dropping_the_guard_marks_walk_abandoned() {
        let flag = Arc::new(AtomicBool::new(false));

        drop(AbandonOnDrop(flag.clone()));

        assert!(flag.load(Ordering::Relaxed));
    }

    #[compio::test]
    async fn walk_dir_rejects_missing_root() {
        let ide = LocalIde::new(None, Vec::new(), WalkSettings::default());

        let result = ide.walk_dir(Path::new("/this/path/does/not/exist")).await;

        assert!(matches!(result, Err(IdeError::NotADirectoryError { .. })));
    }

    #[compio::test]
    async fn read_file_returns_content() {
        let dir = workspace();
        let ide = LocalIde::new(None, Vec::new(), WalkSettings::default());

        let content = ide.read_file(&dir.path().join("src/main.rs")).await.unwrap();

        assert_eq!(content, "fn main() {}");
    }

    #[compio::test]
    async fn read_file_propagates_missing_file() {
        let ide = LocalIde::new(None, Vec::new(), WalkSettings::default());

        let result = ide.read_file(Path::new("/this/path/does/not/exist.txt")).await;

        assert!(matches!(result, Err(IdeError::ReadFileError { .. })));
    }

    #[compio::test]
    async fn read_file_rejects_invalid_utf8() {
        let dir = workspace();
        let path = dir.path().join("binary.dat");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let ide = LocalIde::new(None, Vec::new(), WalkSettings::default());

        let result = ide.read_file(&path).await;

        assert!(matches!(result, Err(IdeError::InvalidUtf8Error { .. })));
    }

    #[compio::test]
    async fn current_file_is_made_absolute() {
        let ide = LocalIde::new(Some(PathBuf::from("relative.rs")), Vec::new(), WalkSettings::default());

        let current = ide.get_current_file().await.unwrap().unwrap();

        assert!(current.is_absolute());
        assert!(current.ends_with("relative.rs"));
    }
}
