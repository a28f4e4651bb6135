//! Public browse API handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storefront_core::{
    BrowseError, BrowseSession, CatalogSource, Category, CategoryToken, Product, ProductDetail,
};

use super::handlers::ErrorResponse;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the product list
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsParams {
    /// Free-text search over title and description
    pub q: Option<String>,
    /// Comma-separated category tokens (`all`, `categoria1`, ...)
    pub categories: Option<String>,
}

/// Whether anything matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    Results,
    NoResults,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub state: ViewState,
    pub source: CatalogSource,
    pub products: Vec<Product>,
    pub total: usize,
}

/// One checkbox in the category filter
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub token: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn browse_error(e: BrowseError) -> ApiError {
    let status = match e {
        BrowseError::NotFound(_) => StatusCode::NOT_FOUND,
        BrowseError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

fn parse_categories(raw: &str) -> Result<Vec<CategoryToken>, BrowseError> {
    raw.split(',')
        .filter(|token| !token.trim().is_empty())
        .map(str::parse)
        .collect()
}

// ============================================================================
// Handlers
// ============================================================================

/// List products matching the category filter and search text.
///
/// Every request loads its own copy through the browse fallback chain, so
/// admin edits show up on the next request.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListProductsParams>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let tokens = match params.categories.as_deref() {
        Some(raw) => parse_categories(raw).map_err(browse_error)?,
        None => Vec::new(),
    };

    let mut session = BrowseSession::open(state.store()).await;
    for token in tokens {
        session.on_category_toggle(token, true);
    }
    if let Some(q) = params.q {
        session.on_search(q);
    }

    let view = session.view();
    let products: Vec<Product> = view.products().iter().map(|p| (*p).clone()).collect();
    Ok(Json(ProductListResponse {
        state: if view.is_empty() {
            ViewState::NoResults
        } else {
            ViewState::Results
        },
        source: session.source(),
        total: products.len(),
        products,
    }))
}

/// Product detail with category label and contact link.
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ProductDetail>, ApiError> {
    let session = BrowseSession::open(state.store()).await;
    session
        .detail(id, state.contact())
        .map(Json)
        .map_err(browse_error)
}

/// The fixed category set, in display order.
pub async fn list_categories() -> Json<Vec<CategoryResponse>> {
    Json(
        Category::ALL
            .iter()
            .map(|c| CategoryResponse {
                token: c.token(),
                label: c.label(),
                icon: c.icon(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories() {
        let tokens = parse_categories("categoria1, categoria3").unwrap();
        assert_eq!(
            tokens,
            vec![
                CategoryToken::Category(Category::Categoria1),
                CategoryToken::Category(Category::Categoria3)
            ]
        );
    }

    #[test]
    fn test_parse_categories_skips_empty_items() {
        assert_eq!(parse_categories("all,,").unwrap(), vec![CategoryToken::All]);
        assert!(parse_categories("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_categories_unknown() {
        let result = parse_categories("categoria1,shoes");
        assert_eq!(
            result,
            Err(BrowseError::UnknownCategory("shoes".to_string()))
        );
    }
}
