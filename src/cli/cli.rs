use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{LogLevel, ProviderVariant};

/// Assemble beginner-oriented assistant context for a workspace.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// The query the context is assembled for
    #[clap(default_value = "")]
    pub query: String,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    #[clap(long, short = 'p', default_value = "project", value_enum)]
    pub variant: ProviderVariant,

    /// The file treated as open in the editor
    #[clap(long, short)]
    pub file: Option<PathBuf>,

    /// A workspace root directory, may be repeated
    #[clap(long = "workspace", short, default_value = ".")]
    pub workspaces: Vec<PathBuf>,

    /// The directory holding novice.yaml
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// Print the provider description instead of its context items
    #[clap(long)]
    pub describe: bool,
}
