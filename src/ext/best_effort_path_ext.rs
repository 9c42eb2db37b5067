use std::path::{Component, Path, PathBuf};

/// Readable absolute form of a path for log and error messages.
///
/// Falls back to lexical normalization when the path does not exist, so
/// messages about missing files still show where they were looked up.
pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl BestEffortPathExt for Path {
    fn best_effort_path_display(&self) -> String {
        self.canonicalize()
            .unwrap_or_else(|_| {
                let absolute = std::path::absolute(self).unwrap_or_else(|_| self.to_path_buf());
                normalize(&absolute)
            })
            .display()
            .to_string()
    }
}

impl BestEffortPathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        self.as_path().best_effort_path_display()
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .fold(Vec::new(), |mut kept, component| {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if matches!(kept.last(), Some(Component::Normal(_))) {
                        kept.pop();
                    }
                }
                other => kept.push(other),
            }
            kept
        })
        .iter()
        .collect()
}
