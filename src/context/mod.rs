//! Context providers that contribute beginner-oriented guidance to a prompt.
//!
//! Two variants exist. [`GeneralBeginnerProvider`] returns fixed guidance and
//! never touches the host. [`ProjectBeginnerProvider`] reads the open file and
//! the layout of every workspace root through the [`Ide`](crate::host::Ide)
//! trait and folds both into its guidance.

mod general;
mod item;
mod project;
mod provider;
mod template;

pub use general::GeneralBeginnerProvider;
pub use item::{ContextItem, ContextProviderDescription, ContextProviderKind};
pub use project::ProjectBeginnerProvider;
pub use provider::{ContextError, ContextProvider, ContextProviderTrait};
