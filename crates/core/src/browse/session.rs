//! A browse session: one loaded catalog plus the current query.

use serde::Serialize;

use super::{BrowseError, BrowseQuery, BrowseView, CategoryToken};
use crate::contact::{ContactLink, ContactSettings};
use crate::product::{Catalog, Product};
use crate::store::{CatalogSource, CatalogStore, Frontend};

/// Everything the product detail view shows.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub product: Product,
    pub category_label: &'static str,
    pub category_icon: &'static str,
    /// Absent when no contact number is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactLink>,
}

/// Public browsing over a read-only copy of the catalog.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    catalog: Catalog,
    source: CatalogSource,
    query: BrowseQuery,
}

impl BrowseSession {
    /// Load through the browse fallback chain.
    pub async fn open(store: &CatalogStore) -> Self {
        let loaded = store.load(Frontend::Browse).await;
        Self {
            catalog: loaded.catalog,
            source: loaded.source,
            query: BrowseQuery::default(),
        }
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            source: CatalogSource::Persisted,
            query: BrowseQuery::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Where the catalog came from.
    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn query(&self) -> &BrowseQuery {
        &self.query
    }

    /// Replace the search text and recompute.
    pub fn on_search(&mut self, text: impl Into<String>) -> BrowseView<'_> {
        self.query.text = text.into();
        self.view()
    }

    /// Check or uncheck a category box and recompute.
    pub fn on_category_toggle(&mut self, token: CategoryToken, checked: bool) -> BrowseView<'_> {
        self.query.categories.set(token, checked);
        self.view()
    }

    pub fn view(&self) -> BrowseView<'_> {
        self.query.view(&self.catalog)
    }

    /// Detail view for one product.
    pub fn detail(&self, id: u64, contact: &ContactSettings) -> Result<ProductDetail, BrowseError> {
        let product = self.catalog.get(id).ok_or(BrowseError::NotFound(id))?;
        Ok(ProductDetail {
            product: product.clone(),
            category_label: product.category.label(),
            category_icon: product.category.icon(),
            contact: contact.link_for(product),
        })
    }
}
