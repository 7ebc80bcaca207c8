//! Application state management
//!
//! Shared state handed to every request handler via Axum's state extraction.
//! All fields are Arc-backed, so cloning per request is cheap, and the state
//! is immutable after creation apart from the store's own interior
//! mutability.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::store::ShopStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// In-memory entity store
    pub store: ShopStore,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Pre-computes the JWT keys from the configured secret, so this should
    /// run once at startup.
    pub fn new(config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.token_expiry_secs);

        Self {
            store: ShopStore::new(),
            config: Arc::new(config),
            jwt,
        }
    }

    #[inline]
    pub fn store(&self) -> &ShopStore {
        &self.store
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}
