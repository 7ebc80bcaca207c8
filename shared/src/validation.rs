//! Validation helpers
//!
//! The payload types in [`crate::types`] derive `validator::Validate`; this
//! module holds the custom validators plus the flattening of
//! `ValidationErrors` into the `(field, message)` pairs the API returns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

/// A single field-level validation failure as serialized in 400 responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Price must be strictly positive
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        let mut err = ValidationError::new("price");
        err.message = Some("Price must be greater than zero".into());
        return Err(err);
    }
    Ok(())
}

/// Flatten `ValidationErrors` into per-field messages, one entry per failed
/// rule, ordered by field name for stable responses.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut flattened: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, violations)| {
            violations.iter().map(|violation| FieldError {
                field: field.to_string(),
                message: violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| violation.code.to_string()),
            })
        })
        .collect();
    flattened.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
    flattened
}
