//! Authentication and authorization extractors
//!
//! The authorization gate is declared per endpoint through the handler's
//! extractor: [`AuthUser`] asks only for a valid token, while
//! [`RequireEmployee`] / [`RequireManager`] also enforce an exact role match.
//! Extractors run before the handler body, so a rejected request causes no
//! side effects. Missing or invalid token is 401, wrong role is 403.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use shop_shared::models::Role;

/// Authenticated identity extracted from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
    pub role: Role,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        let claims = app_state
            .jwt()
            .validate(token)
            .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()))?;

        Ok(AuthUser {
            username: claims.sub,
            role: claims.role,
        })
    }
}

macro_rules! role_extractor {
    ($name:ident, $role:expr) => {
        /// Valid token whose role claim equals the required role
        #[derive(Debug, Clone)]
        pub struct $name(pub AuthUser);

        #[axum::async_trait]
        impl<S> axum::extract::FromRequestParts<S> for $name
        where
            AppState: FromRef<S>,
            S: Send + Sync,
        {
            type Rejection = ApiError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &S,
            ) -> Result<Self, Self::Rejection> {
                let user = AuthUser::from_request_parts(parts, state).await?;
                if user.role != $role {
                    return Err(ApiError::Forbidden("Insufficient role".to_string()));
                }
                Ok($name(user))
            }
        }
    };
}

role_extractor!(RequireEmployee, Role::Employee);
role_extractor!(RequireManager, Role::Manager);
