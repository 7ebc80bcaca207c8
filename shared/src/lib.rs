//! Shop Shared Library
//!
//! This crate contains the domain models, API request/response types and
//! validation helpers shared between the backend and its tests.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::{Category, Product, ProductView, Role, User};
pub use types::*;
pub use validation::FieldError;
