//! Admin editor: the credential-gated front-end that mutates the catalog.

mod confirm;
mod editor;
mod form;
mod search;
mod types;

pub use confirm::{ConfirmGate, DELETE_CONFIRMATION_PROMPT};
pub use editor::AdminEditor;
pub use form::{ProductForm, PLACEHOLDER_IMAGE};
pub use search::search;
pub use types::*;
