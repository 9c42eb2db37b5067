use clap::ValueEnum;

/// Which beginner provider answers for the `beginner` title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ProviderVariant {
    /// Fixed guidance only.
    General,
    /// Guidance built from the open file and the workspace layout.
    #[default]
    Project,
}
