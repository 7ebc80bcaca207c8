//! User routes: self-registration, login and manager-gated administration
//!
//! Self-registration is public and always persists the employee role, no
//! matter what the client sent; the override happens after validation and
//! before the write. Password hashes never leave the service: every user
//! response is redacted first.

use crate::auth::{PasswordService, RequireManager};
use crate::error::{ApiError, ApiResult};
use crate::routes::map_store_error;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use shop_shared::models::{Role, User};
use shop_shared::types::{LoginRequest, LoginResponse, MessageResponse, UserPayload};
use shop_shared::validation::FieldError;
use tracing::info;
use validator::Validate;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(register))
        .route("/login", post(login))
        .route("/:id", put(update).delete(remove))
}

fn username_taken_error() -> ApiError {
    ApiError::Validation(vec![FieldError {
        field: "username".to_string(),
        message: "Username is already taken".to_string(),
    }])
}

/// GET /v1/users
async fn list(State(state): State<AppState>, _auth: RequireManager) -> Json<Vec<User>> {
    let users = state.store().users().list().await;
    Json(users.into_iter().map(User::redacted).collect())
}

/// POST /v1/users
///
/// Public self-registration.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> ApiResult<Json<User>> {
    payload.validate()?;

    let username = payload.username.unwrap_or_default();
    if state.store().username_taken(&username, None).await {
        return Err(username_taken_error());
    }

    let password_hash = PasswordService::hash_async(payload.password.unwrap_or_default()).await?;
    let user = User {
        id: 0,
        username,
        password: password_hash,
        // Self-registration never grants a privileged role
        role: Role::Employee,
    };
    let stored = state.store().users().add(user).await;
    info!(username = %stored.username, "User registered");
    Ok(Json(stored.redacted()))
}

/// POST /v1/users/login
///
/// Success returns only the username and a bearer token.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (username, password) = match (payload.username, payload.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => return Err(ApiError::BadRequest("Invalid login request".to_string())),
    };

    let user = state
        .store()
        .find_user_by_username(&username)
        .await
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let verified = PasswordService::verify_async(password, user.password.clone()).await?;
    if !verified {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = state.jwt().issue(&user)?;
    info!(username = %user.username, "User logged in");
    Ok(Json(LoginResponse {
        name: user.username,
        token,
    }))
}

/// PUT /v1/users/:id
///
/// Full replace by a manager; the supplied role is honored here (defaulting
/// to employee when absent) and the password is re-hashed.
async fn update(
    State(state): State<AppState>,
    _auth: RequireManager,
    Path(id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> ApiResult<Json<User>> {
    if payload.id != Some(id) {
        return Err(ApiError::NotFound("User not found".to_string()));
    }
    payload.validate()?;

    let username = payload.username.unwrap_or_default();
    if state.store().username_taken(&username, Some(id)).await {
        return Err(username_taken_error());
    }

    let password_hash = PasswordService::hash_async(payload.password.unwrap_or_default()).await?;
    let user = User {
        id,
        username,
        password: password_hash,
        role: payload.role.unwrap_or(Role::Employee),
    };
    let stored = state
        .store()
        .users()
        .update(user)
        .await
        .map_err(|e| map_store_error(e, "User not found"))?;
    Ok(Json(stored.redacted()))
}

/// DELETE /v1/users/:id
async fn remove(
    State(state): State<AppState>,
    _auth: RequireManager,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .store()
        .users()
        .remove(id)
        .await
        .map_err(|e| map_store_error(e, "User not found"))?;
    Ok(Json(MessageResponse::new("User removed successfully")))
}
