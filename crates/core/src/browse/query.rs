//! The combined browse view: category filter AND text search.

use serde::Serialize;

use super::CategorySelection;
use crate::product::{Catalog, Product};

/// Current browse inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrowseQuery {
    pub categories: CategorySelection,
    pub text: String,
}

impl BrowseQuery {
    pub fn new(categories: CategorySelection, text: impl Into<String>) -> Self {
        Self {
            categories,
            text: text.into(),
        }
    }

    /// Filter `catalog` from scratch. Order follows the catalog.
    pub fn view<'a>(&self, catalog: &'a Catalog) -> BrowseView<'a> {
        let needle = self.text.trim().to_lowercase();
        let products: Vec<&Product> = catalog
            .iter()
            .filter(|p| self.categories.matches(p) && matches_text(p, &needle))
            .collect();

        if products.is_empty() {
            BrowseView::NoResults
        } else {
            BrowseView::Results(products)
        }
    }
}

/// Title or description contains `needle` (already lowercased). An empty
/// needle passes everything.
fn matches_text(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// What the browse page should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseView<'a> {
    Results(Vec<&'a Product>),
    /// Nothing matched; distinct from an empty result list still loading.
    NoResults,
}

impl<'a> BrowseView<'a> {
    pub fn products(&self) -> &[&'a Product] {
        match self {
            BrowseView::Results(products) => products,
            BrowseView::NoResults => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.products().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BrowseView::NoResults)
    }

    pub fn ids(&self) -> Vec<u64> {
        self.products().iter().map(|p| p.id).collect()
    }
}
