//! Confirmation gate for destructive commands.

/// Prompt shown before a product is deleted.
pub const DELETE_CONFIRMATION_PROMPT: &str = "Are you sure you want to delete this product?";

/// A synchronous yes/no question put to the user.
pub trait ConfirmGate {
    /// Returns `true` if the user agreed.
    fn confirm(&self, prompt: &str) -> bool;
}

/// An answer given up front, e.g. a `confirm=true` request parameter.
impl ConfirmGate for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}
