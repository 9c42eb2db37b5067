//! The editor host the context providers read from.
//!
//! Providers only see the [`Ide`] trait. [`LocalIde`] serves it from the local
//! filesystem for the command line; tests use the in-memory `FakeIde`.

mod ide;
mod local;

#[cfg(test)]
pub mod fake;

pub use ide::{Ide, IdeError};
pub use local::LocalIde;
