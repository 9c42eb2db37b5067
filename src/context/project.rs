use snafu::ResultExt;
use tracing::{debug, info};

use super::provider::{
    CurrentFileSnafu, ReadCurrentFileSnafu, WalkWorkspaceSnafu, WorkspaceDirsSnafu,
};
use super::template::{ITEM_NAME, file_extension, project_guidance};
use crate::context::{
    ContextError, ContextItem, ContextProviderDescription, ContextProviderKind,
    ContextProviderTrait,
};
use crate::filesystem::{DirectoryNode, basename, format_tree};
use crate::host::Ide;

const ROOT_SEPARATOR: &str = "\n\n";

static DESCRIPTION: ContextProviderDescription = ContextProviderDescription {
    title: "beginner",
    display_title: "Beginner",
    description: "Provide context-aware assistance for beginners",
    kind: ContextProviderKind::Normal,
    render_inline_as: "",
};

/// Beginner guidance built around the open file and the workspace layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectBeginnerProvider;

impl ContextProviderTrait for ProjectBeginnerProvider {
    fn description(&self) -> &'static ContextProviderDescription {
        &DESCRIPTION
    }

    async fn get_context_items(
        &self,
        query: &str,
        ide: &impl Ide,
    ) -> Result<Vec<ContextItem>, ContextError> {
        let Some(current_file) = ide.get_current_file().await.context(CurrentFileSnafu)? else {
            info!("No file is open, skipping project context");
            return Ok(Vec::new());
        };
        debug!(
            "Providing project context for {} and query {query:?}",
            current_file.display()
        );

        let content = ide
            .read_file(&current_file)
            .await
            .context(ReadCurrentFileSnafu {
                path: current_file.clone(),
            })?;
        let file_name = basename(&current_file);
        let extension = file_extension(&file_name);

        let structure = project_structure(ide).await?;

        Ok(vec![ContextItem {
            name: ITEM_NAME.to_string(),
            description: format!("Beginner context for {file_name}"),
            content: project_guidance(&file_name, extension, &content, &structure),
        }])
    }
}

/// Renders the tree of every workspace root, separated by a blank line.
///
/// Roots are walked one after another; the first failing walk aborts the
/// whole structure.
pub async fn project_structure(ide: &impl Ide) -> Result<String, ContextError> {
    let roots = ide.get_workspace_dirs().await.context(WorkspaceDirsSnafu)?;

    let mut outlines = Vec::with_capacity(roots.len());
    for root in roots {
        let files = ide
            .walk_dir(&root)
            .await
            .context(WalkWorkspaceSnafu { root: root.clone() })?;
        let tree = DirectoryNode::from_paths(&root, files);
        if tree.is_empty() {
            debug!("Workspace '{}' has no files", tree.name());
        } else {
            debug!(
                "Workspace '{}' holds {} files",
                tree.name(),
                tree.file_count()
            );
        }
        outlines.push(format_tree(&tree, ""));
    }

    Ok(outlines.join(ROOT_SEPARATOR))
}
