//! Browse query engine: the public, read-only front-end.

mod query;
mod selection;
mod session;

pub use query::{BrowseQuery, BrowseView};
pub use selection::{CategorySelection, CategoryToken};
pub use session::{BrowseSession, ProductDetail};

use thiserror::Error;

/// Errors for browse commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowseError {
    #[error("Product not found: {0}")]
    NotFound(u64),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
