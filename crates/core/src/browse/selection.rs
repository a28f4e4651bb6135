//! Multi-select category filter with a distinguished "all" choice.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::BrowseError;
use crate::product::{Category, Product};

/// A checkbox in the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryToken {
    All,
    Category(Category),
}

impl FromStr for CategoryToken {
    type Err = BrowseError;

    /// Accepts `all` (or its alias `todos`) and the category tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "todos" => Ok(CategoryToken::All),
            other => Category::from_token(other)
                .map(CategoryToken::Category)
                .ok_or_else(|| BrowseError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for CategoryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryToken::All => f.write_str("all"),
            CategoryToken::Category(c) => f.write_str(c.token()),
        }
    }
}

/// Current category selection. Never empty: when nothing specific is
/// checked, "all" is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySelection {
    all: bool,
    categories: BTreeSet<Category>,
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self {
            all: true,
            categories: BTreeSet::new(),
        }
    }
}

impl CategorySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection reached by checking each token in turn, starting from "all".
    pub fn from_tokens(tokens: impl IntoIterator<Item = CategoryToken>) -> Self {
        let mut selection = Self::default();
        for token in tokens {
            selection.set(token, true);
        }
        selection
    }

    /// Check or uncheck one box.
    ///
    /// Checking "all" clears the specific categories; checking a category
    /// clears "all". If that leaves nothing checked, "all" comes back.
    pub fn set(&mut self, token: CategoryToken, checked: bool) {
        match (token, checked) {
            (CategoryToken::All, true) => {
                self.all = true;
                self.categories.clear();
            }
            (CategoryToken::All, false) => self.all = false,
            (CategoryToken::Category(c), true) => {
                self.categories.insert(c);
                self.all = false;
            }
            (CategoryToken::Category(c), false) => {
                self.categories.remove(&c);
            }
        }

        if !self.all && self.categories.is_empty() {
            self.all = true;
        }
    }

    pub fn is_all(&self) -> bool {
        self.all
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Specific categories checked, in display order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }

    /// Whether `product` passes the filter. Uncategorized products only pass
    /// under "all".
    pub fn matches(&self, product: &Product) -> bool {
        self.all
            || product
                .category
                .known()
                .is_some_and(|c| self.categories.contains(&c))
    }
}
