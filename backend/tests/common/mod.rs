//! Common test utilities for integration tests
//!
//! Builds the real router over a fresh in-memory store per test, so tests
//! are hermetic and need no external services. Necessary because the
//! manager role is not attainable through any endpoint, the helper seeds
//! managers straight into the store.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use shop_backend::auth::PasswordService;
use shop_backend::{config::AppConfig, routes, state::AppState};
use shop_shared::models::{Role, User};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with an empty store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.jwt.secret = "integration-test-secret".to_string();

        let state = AppState::new(config);
        let app = routes::create_router(state.clone());

        Self { app, state }
    }

    /// Seed a user directly into the store, bypassing the HTTP surface,
    /// and return a token for them.
    pub async fn seed_user(&self, username: &str, password: &str, role: Role) -> String {
        let hash = PasswordService::hash(password).expect("hashing failed");
        let user = User {
            id: 0,
            username: username.to_string(),
            password: hash,
            role,
        };
        let stored = self.state.store().users().add(user).await;
        self.state.jwt().issue(&stored).expect("token issue failed")
    }

    /// Token for a freshly seeded employee
    pub async fn employee_token(&self) -> String {
        self.seed_user("employee_fixture", "password", Role::Employee).await
    }

    /// Token for a freshly seeded manager
    pub async fn manager_token(&self) -> String {
        self.seed_user("manager_fixture", "password", Role::Manager).await
    }

    /// Make a request, optionally authenticated, optionally with a JSON body
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request("GET", path, None, None).await
    }

    pub async fn post(&self, path: &str, token: Option<&str>, body: &Value) -> (StatusCode, Value) {
        self.request("POST", path, token, Some(body)).await
    }

    pub async fn put(&self, path: &str, token: Option<&str>, body: &Value) -> (StatusCode, Value) {
        self.request("PUT", path, token, Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request("DELETE", path, token, None).await
    }

    /// Create a category through the API and return its assigned id
    pub async fn create_category(&self, token: &str, title: &str) -> i32 {
        let (status, body) = self
            .post("/v1/categories", Some(token), &serde_json::json!({ "title": title }))
            .await;
        assert_eq!(status, StatusCode::OK, "category fixture failed: {body}");
        body["id"].as_i64().unwrap() as i32
    }

    /// Create a product through the API and return its assigned id
    pub async fn create_product(&self, token: &str, title: &str, category_id: i32) -> i32 {
        let body = serde_json::json!({
            "title": title,
            "description": "fixture",
            "price": "9.99",
            "categoryId": category_id,
        });
        let (status, body) = self.post("/v1/products", Some(token), &body).await;
        assert_eq!(status, StatusCode::OK, "product fixture failed: {body}");
        body["id"].as_i64().unwrap() as i32
    }
}
