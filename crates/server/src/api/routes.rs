use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use super::{admin, browse, handlers, middleware::auth_middleware, middleware::metrics_middleware};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = state.static_dir().to_path_buf();

    // Admin routes (gated, except login which the layer does not cover)
    let admin_routes = Router::new()
        .route("/products", get(admin::list_products))
        .route("/products/{id}", delete(admin::delete_product))
        .route("/products/{id}/edit", post(admin::begin_edit))
        .route("/editor", get(admin::get_editor))
        .route("/editor/submit", post(admin::submit))
        .route("/editor/reset", post(admin::reset_editor))
        .route("/logout", post(admin::logout))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            auth_middleware,
        ))
        .route("/login", post(admin::login));

    // API routes
    let api_routes = Router::new()
        // Health, config and metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::get_metrics))
        // Browse (public)
        .route("/categories", get(browse::list_categories))
        .route("/products", get(browse::list_products))
        .route("/products/{id}", get(browse::get_product))
        .nest("/admin", admin_routes)
        .layer(middleware::from_fn(metrics_middleware))
        .with_state(state);

    // Serve the static site with index fallback
    let index_path = static_dir.join("index.html");
    let serve_dir = ServeDir::new(&static_dir).fallback(ServeFile::new(index_path));

    Router::new()
        .nest("/api/v1", api_routes)
        .fallback_service(serve_dir)
}
