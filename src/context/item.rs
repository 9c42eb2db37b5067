use derive_more::Display;

/// A named block of text contributed to an assistant prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextItem {
    pub name: String,
    pub description: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ContextProviderKind {
    /// Items are produced without any user selection.
    #[display("normal")]
    Normal,
}

/// Static registration data a host needs to list a provider.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{display_title} ({title}, {kind}): {description}")]
pub struct ContextProviderDescription {
    pub title: &'static str,
    pub display_title: &'static str,
    pub description: &'static str,
    pub kind: ContextProviderKind,
    /// How the host renders a reference to this provider inline; empty for none.
    pub render_inline_as: &'static str,
}
