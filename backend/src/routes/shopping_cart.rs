//! Shopping cart download route

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::ShoppingListService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::get,
    Router,
};

/// Create recipe-scoped shopping cart routes
pub fn shopping_cart_routes() -> Router<AppState> {
    Router::new().route("/download_shopping_cart", get(download_shopping_cart))
}

/// GET /api/v1/recipes/download_shopping_cart - Shopping list for the user's cart as text
async fn download_shopping_cart(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let export = ShoppingListService::export(
        state.shopping_lists(),
        auth.user_id,
        &state.config().shopping_list,
    )
    .await?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        export.filename
    ))
    .map_err(|e| ApiError::Internal(anyhow::anyhow!("Invalid attachment filename: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(header::CONTENT_DISPOSITION, disposition);

    Ok((headers, export.body))
}
