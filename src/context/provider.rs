use std::path::PathBuf;

use snafu::Snafu;

use crate::application::data::ProviderVariant;
use crate::context::{
    ContextItem, ContextProviderDescription, GeneralBeginnerProvider, ProjectBeginnerProvider,
};
use crate::ext::BestEffortPathExt;
use crate::host::{Ide, IdeError};

pub trait ContextProviderTrait {
    fn description(&self) -> &'static ContextProviderDescription;
    /// Builds the items this provider contributes for `query`.
    /// An empty list means the provider has nothing to add.
    async fn get_context_items(
        &self,
        query: &str,
        ide: &impl Ide,
    ) -> Result<Vec<ContextItem>, ContextError>;
}

#[derive(Debug, Clone)]
pub enum ContextProvider {
    General(GeneralBeginnerProvider),
    Project(ProjectBeginnerProvider),
}

impl From<ProviderVariant> for ContextProvider {
    fn from(variant: ProviderVariant) -> Self {
        match variant {
            ProviderVariant::General => ContextProvider::General(GeneralBeginnerProvider),
            ProviderVariant::Project => ContextProvider::Project(ProjectBeginnerProvider),
        }
    }
}

impl ContextProviderTrait for ContextProvider {
    fn description(&self) -> &'static ContextProviderDescription {
        match self {
            ContextProvider::General(provider) => provider.description(),
            ContextProvider::Project(provider) => provider.description(),
        }
    }

    async fn get_context_items(
        &self,
        query: &str,
        ide: &impl Ide,
    ) -> Result<Vec<ContextItem>, ContextError> {
        match self {
            ContextProvider::General(provider) => provider.get_context_items(query, ide).await,
            ContextProvider::Project(provider) => provider.get_context_items(query, ide).await,
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum ContextError {
    #[snafu(display("Failed to ask the host for the current file"))]
    CurrentFileError { source: IdeError },
    #[snafu(display("Failed to read the current file {}", path.best_effort_path_display()))]
    ReadCurrentFileError { path: PathBuf, source: IdeError },
    #[snafu(display("Failed to list workspace directories"))]
    WorkspaceDirsError { source: IdeError },
    #[snafu(display("Failed to walk workspace {}", root.best_effort_path_display()))]
    WalkWorkspaceError { root: PathBuf, source: IdeError },
}
