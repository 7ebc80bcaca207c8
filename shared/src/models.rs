//! Data models for the Shop application
//!
//! Ids are store-assigned integers: 0 means "not yet persisted", the store
//! replaces it with a monotonic id on insert.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authorization role carried in token claims
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Manager,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Employee => write!(f, "employee"),
            Role::Manager => write!(f, "manager"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(Role::Employee),
            "manager" => Ok(Role::Manager),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i32,
    pub title: String,
}

/// Product as persisted: the category is referenced by id only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: i32,
}

/// Product as served on reads, with the category resolved at query time.
///
/// `category` is `null` when `category_id` dangles; a stale reference is
/// tolerated rather than treated as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: i32,
    pub category: Option<Category>,
}

impl ProductView {
    pub fn new(product: Product, category: Option<Category>) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            category_id: product.category_id,
            category,
        }
    }
}

/// User account
///
/// `password` holds the argon2 hash at rest. It must be blanked via
/// [`User::redacted`] before the record is serialized into any response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl User {
    /// Return a copy safe for serialization, with the password blanked.
    pub fn redacted(mut self) -> Self {
        self.password = String::new();
        self
    }
}
