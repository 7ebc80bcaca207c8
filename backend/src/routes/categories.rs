//! Category CRUD routes
//!
//! Reads are anonymous; writes require the employee role. The id mismatch
//! check on PUT runs before validation, and responds 404 rather than 400.

use crate::auth::RequireEmployee;
use crate::error::{ApiError, ApiResult};
use crate::routes::map_store_error;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use shop_shared::models::Category;
use shop_shared::types::{CategoryPayload, MessageResponse};
use validator::Validate;

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_by_id).put(update).delete(remove))
}

/// GET /v1/categories
async fn list(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.store().categories().list().await)
}

/// GET /v1/categories/:id
///
/// A missing id is served as 200 with a `null` body, not 404.
async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Json<Option<Category>> {
    Json(state.store().categories().get(id).await)
}

/// POST /v1/categories
async fn create(
    State(state): State<AppState>,
    _auth: RequireEmployee,
    Json(payload): Json<CategoryPayload>,
) -> ApiResult<Json<Category>> {
    payload.validate()?;

    let category = Category {
        id: 0,
        title: payload.title.unwrap_or_default(),
    };
    let stored = state.store().categories().add(category).await;
    Ok(Json(stored))
}

/// PUT /v1/categories/:id
async fn update(
    State(state): State<AppState>,
    _auth: RequireEmployee,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryPayload>,
) -> ApiResult<Json<Category>> {
    if payload.id != Some(id) {
        return Err(ApiError::NotFound("Category not found".to_string()));
    }
    payload.validate()?;

    let category = Category {
        id,
        title: payload.title.unwrap_or_default(),
    };
    let stored = state
        .store()
        .categories()
        .update(category)
        .await
        .map_err(|e| map_store_error(e, "Category not found"))?;
    Ok(Json(stored))
}

/// DELETE /v1/categories/:id
async fn remove(
    State(state): State<AppState>,
    _auth: RequireEmployee,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .store()
        .categories()
        .remove(id)
        .await
        .map_err(|e| map_store_error(e, "Category not found"))?;
    Ok(Json(MessageResponse::new("Category removed successfully")))
}
