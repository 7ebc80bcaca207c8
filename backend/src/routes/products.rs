//! Product CRUD routes
//!
//! Reads are anonymous and always carry the resolved category (or `null`
//! when the reference dangles). Creation requires the employee role; update
//! and delete require manager. The referenced category is deliberately not
//! verified on writes.

use crate::auth::{RequireEmployee, RequireManager};
use crate::error::{ApiError, ApiResult};
use crate::routes::map_store_error;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use shop_shared::models::{Product, ProductView};
use shop_shared::types::{MessageResponse, ProductPayload};
use validator::Validate;

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_by_id).put(update).delete(remove))
        .route("/categories/:id", get(list_by_category))
}

/// GET /v1/products
async fn list(State(state): State<AppState>) -> Json<Vec<ProductView>> {
    Json(state.store().product_views().await)
}

/// GET /v1/products/:id
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<Option<ProductView>> {
    Json(state.store().product_view(id).await)
}

/// GET /v1/products/categories/:id
async fn list_by_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<Vec<ProductView>> {
    Json(state.store().product_views_by_category(id).await)
}

fn to_product(id: i32, payload: ProductPayload) -> Product {
    Product {
        id,
        title: payload.title.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        price: payload.price.unwrap_or_default(),
        category_id: payload.category_id.unwrap_or_default(),
    }
}

/// POST /v1/products
async fn create(
    State(state): State<AppState>,
    _auth: RequireEmployee,
    Json(payload): Json<ProductPayload>,
) -> ApiResult<Json<Product>> {
    payload.validate()?;

    let stored = state.store().products().add(to_product(0, payload)).await;
    Ok(Json(stored))
}

/// PUT /v1/products/:id
async fn update(
    State(state): State<AppState>,
    _auth: RequireManager,
    Path(id): Path<i32>,
    Json(payload): Json<ProductPayload>,
) -> ApiResult<Json<Product>> {
    if payload.id != Some(id) {
        return Err(ApiError::NotFound("Product not found".to_string()));
    }
    payload.validate()?;

    let stored = state
        .store()
        .products()
        .update(to_product(id, payload))
        .await
        .map_err(|e| map_store_error(e, "Product not found"))?;
    Ok(Json(stored))
}

/// DELETE /v1/products/:id
async fn remove(
    State(state): State<AppState>,
    _auth: RequireManager,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .store()
        .products()
        .remove(id)
        .await
        .map_err(|e| map_store_error(e, "Product not found"))?;
    Ok(Json(MessageResponse::new("Product removed successfully")))
}
