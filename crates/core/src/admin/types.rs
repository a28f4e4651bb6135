//! Types for the admin editor.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notice::Notice;
use crate::product::Product;

/// Editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EditorMode {
    /// Blank form; submitting creates a product.
    #[default]
    Add,
    /// Form holds an existing product; submitting replaces it.
    Editing { id: u64 },
}

/// A required form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Title,
    Category,
    Description,
    Price,
    Image,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Category => "category",
            FormField::Description => "description",
            FormField::Price => "price",
            FormField::Image => "image",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Required fields that were left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("Missing required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<FormField>,
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors for admin editor commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error("Product not found: {0}")]
    NotFound(u64),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No product id left to assign")]
    IdSpaceExhausted,
}

impl AdminError {
    /// The notice to show the user for this failure.
    pub fn notice(&self) -> Notice {
        match self {
            AdminError::NotFound(_) => Notice::error("Product not found"),
            AdminError::Validation(e) => Notice::error(e.to_string()),
            AdminError::IdSpaceExhausted => Notice::error("No product id left to assign"),
        }
    }
}

/// What a successful submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitAction {
    Created,
    Updated,
}

impl SubmitAction {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmitAction::Created => "create",
            SubmitAction::Updated => "update",
        }
    }
}

/// Result of a successful submit.
#[derive(Debug, Clone, Serialize)]
pub struct Submitted {
    pub action: SubmitAction,
    pub product: Product,
    pub notices: Vec<Notice>,
}

/// Result of a delete command that did not fail.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The user declined; nothing changed.
    Cancelled,
    /// The product was removed.
    Deleted {
        product: Product,
        notices: Vec<Notice>,
    },
}
