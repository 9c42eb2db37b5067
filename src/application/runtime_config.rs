use std::path::PathBuf;

use crate::application::data::ProviderVariant;
use crate::cli::Cli;
use crate::config::{Config, WalkSettings};

/// Command line arguments merged with `novice.yaml`.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub query: String,
    pub variant: ProviderVariant,
    pub current_file: Option<PathBuf>,
    pub workspace_dirs: Vec<PathBuf>,
    pub walk: WalkSettings,
    pub describe: bool,
}

impl RuntimeConfig {
    pub fn new(cli: Cli, config: Config) -> Self {
        Self {
            query: cli.query,
            variant: cli.variant,
            current_file: cli.file,
            workspace_dirs: cli.workspaces,
            walk: config.walk,
            describe: cli.describe,
        }
    }
}
