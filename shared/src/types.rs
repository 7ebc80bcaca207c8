//! API request and response types
//!
//! Write payloads keep every field optional so that a missing field surfaces
//! as a per-field validation message instead of a deserialization failure.
//! Handlers run [`validator::Validate::validate`] before touching the store.

use crate::models::Role;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Category create/update payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryPayload {
    pub id: Option<i32>,
    #[validate(
        required(message = "This field is required"),
        length(min = 3, max = 60, message = "This field must be between 3 and 60 characters")
    )]
    pub title: Option<String>,
}

/// Product create/update payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub id: Option<i32>,
    #[validate(
        required(message = "This field is required"),
        length(min = 3, max = 60, message = "This field must be between 3 and 60 characters")
    )]
    pub title: Option<String>,
    #[validate(length(max = 1024, message = "This field must be at most 1024 characters"))]
    pub description: Option<String>,
    #[validate(
        required(message = "This field is required"),
        custom(function = "crate::validation::validate_price")
    )]
    pub price: Option<Decimal>,
    #[validate(required(message = "This field is required"))]
    pub category_id: Option<i32>,
}

/// User create/update payload
///
/// `role` is ignored on self-registration (the server forces "employee") and
/// honored on manager-gated updates.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserPayload {
    pub id: Option<i32>,
    #[validate(
        required(message = "This field is required"),
        length(min = 3, max = 20, message = "This field must be between 3 and 20 characters")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "This field is required"),
        length(min = 3, max = 20, message = "This field must be between 3 and 20 characters")
    )]
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// Login request
///
/// Both fields are optional on the wire; the handler rejects a missing or
/// empty one with 400 before looking at the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login response: the username and a bearer token, nothing else
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub name: String,
    pub token: String,
}

/// Confirmation body for deletes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    /// Per-field validation messages, present only on validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<crate::validation::FieldError>>,
}
