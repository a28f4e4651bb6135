//! Admin editor API handlers. Everything except login sits behind the
//! admin gate.

use axum::{
    extract::{Path, Query, State},
    http::{Extensions, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use storefront_core::{
    AdminEditor, AdminError, AuthError, AuthRequest, DeleteOutcome, EditorMode, Product,
    ProductForm, SubmitAction, Submitted, PASSWORD_HEADER,
};
use tokio::task::JoinError;
use tracing::{error, info, warn};

use super::handlers::ErrorResponse;
use super::middleware::{session_token, source_ip, AuthUser};
use crate::metrics::AUTH_FAILURES_TOTAL;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the admin product list
#[derive(Debug, Default, Deserialize)]
pub struct AdminListParams {
    /// Matches title, description, price or category label
    pub search: Option<String>,
}

/// Query parameters for deleting a product
#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    /// Answer to the confirmation prompt; absent means "no"
    #[serde(default)]
    pub confirm: bool,
}

/// Login form
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Send back as `X-Admin-Session` until logout
    pub token: String,
    pub user: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    /// Whether a live session was ended
    pub closed: bool,
}

#[derive(Debug, Serialize)]
pub struct AdminListResponse {
    pub products: Vec<Product>,
    pub total: usize,
}

/// Current editor state
#[derive(Debug, Serialize)]
pub struct EditorResponse {
    #[serde(flatten)]
    pub mode: EditorMode,
    pub form: ProductForm,
    /// Seconds a client should keep a notice on screen
    pub notice_display_secs: u64,
}

impl EditorResponse {
    fn new(editor: &AdminEditor, state: &AppState) -> Self {
        Self {
            mode: editor.mode(),
            form: editor.form().clone(),
            notice_display_secs: state.notice_display().as_secs(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn admin_error(e: AdminError) -> ApiError {
    let status = match e {
        AdminError::NotFound(_) => StatusCode::NOT_FOUND,
        AdminError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AdminError::IdSpaceExhausted => StatusCode::CONFLICT,
    };
    api_error(status, e.to_string())
}

fn join_error(e: JoinError) -> ApiError {
    error!("Admin command did not finish: {}", e);
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "Admin command failed")
}

// ============================================================================
// Handlers
// ============================================================================

/// Check the password once and issue a session token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    extensions: Extensions,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let source_ip = source_ip(&extensions);
    let request = AuthRequest {
        headers: HashMap::from([(PASSWORD_HEADER.to_string(), body.password)]),
        source_ip,
    };

    match state.authenticator().authenticate(&request).await {
        Ok(identity) => {
            let user = identity.user_id.clone();
            let token = state.sessions().open(identity);
            info!("{} logged in from {}", user, source_ip);
            Ok(Json(LoginResponse { token, user }))
        }
        Err(AuthError::NotAuthenticated | AuthError::InvalidCredentials(_)) => {
            warn!("Failed admin login from {}", source_ip);
            AUTH_FAILURES_TOTAL
                .with_label_values(&["invalid_credentials"])
                .inc();
            Err(api_error(StatusCode::UNAUTHORIZED, "Incorrect password"))
        }
        Err(e) => {
            AUTH_FAILURES_TOTAL
                .with_label_values(&["internal_error"])
                .inc();
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// End the session named by the `X-Admin-Session` header.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    headers: HeaderMap,
) -> Json<LogoutResponse> {
    let closed = session_token(&headers).is_some_and(|token| state.sessions().close(token));
    if closed {
        info!("{} logged out", user);
    }
    Json(LogoutResponse { closed })
}

/// List the admin's working catalog, optionally filtered.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AdminListParams>,
) -> Json<AdminListResponse> {
    let editor = state.editor().lock().await;
    let products: Vec<Product> = match params.search.as_deref() {
        Some(term) => editor.search(term).into_iter().cloned().collect(),
        None => editor.products().iter().cloned().collect(),
    };
    Json(AdminListResponse {
        total: products.len(),
        products,
    })
}

pub async fn get_editor(State(state): State<Arc<AppState>>) -> Json<EditorResponse> {
    let editor = state.editor().lock().await;
    Json(EditorResponse::new(&editor, &state))
}

/// Load a product into the form and switch to editing mode.
pub async fn begin_edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<EditorResponse>, ApiError> {
    let mut editor = state.editor().lock().await;
    editor.begin_edit(id).map_err(admin_error)?;
    Ok(Json(EditorResponse::new(&editor, &state)))
}

/// Discard the form and return to add mode.
pub async fn reset_editor(State(state): State<Arc<AppState>>) -> Json<EditorResponse> {
    let mut editor = state.editor().lock().await;
    editor.reset();
    Json(EditorResponse::new(&editor, &state))
}

/// Create or update, depending on the editor mode.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(form): Json<ProductForm>,
) -> Result<(StatusCode, Json<Submitted>), ApiError> {
    // Persisting touches storage synchronously
    let mut editor = state.editor().clone().lock_owned().await;
    let submitted = tokio::task::spawn_blocking(move || editor.submit(form))
        .await
        .map_err(join_error)?
        .map_err(admin_error)?;

    info!(
        "{} {}d product {}",
        user,
        submitted.action.as_str(),
        submitted.product.id
    );
    let status = match submitted.action {
        SubmitAction::Created => StatusCode::CREATED,
        SubmitAction::Updated => StatusCode::OK,
    };
    Ok((status, Json(submitted)))
}

/// Delete a product. Without `confirm=true` nothing happens.
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<u64>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    let mut editor = state.editor().clone().lock_owned().await;
    let outcome = tokio::task::spawn_blocking(move || editor.delete(id, &params.confirm))
        .await
        .map_err(join_error)?
        .map_err(admin_error)?;

    if let DeleteOutcome::Deleted { .. } = outcome {
        info!("{} deleted product {}", user, id);
    }
    Ok(Json(outcome))
}
