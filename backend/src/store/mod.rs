//! In-memory entity store
//!
//! The store is volatile: it holds the three entity collections for the
//! lifetime of the process and is the sole arbiter of id assignment. Product
//! reads resolve the referenced category eagerly; a dangling reference is
//! served as a `null` category, never an error.

mod collection;

pub use collection::{Collection, Record, StoreError};

use shop_shared::models::{Category, Product, ProductView, User};
use std::sync::Arc;

impl Record for Category {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl Record for Product {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl Record for User {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

struct Collections {
    categories: Collection<Category>,
    products: Collection<Product>,
    users: Collection<User>,
}

/// Shared handle to the in-memory store. Cloning is an Arc increment.
#[derive(Clone)]
pub struct ShopStore {
    inner: Arc<Collections>,
}

impl Default for ShopStore {
    fn default() -> Self {
        Self {
            inner: Arc::new(Collections {
                categories: Collection::default(),
                products: Collection::default(),
                users: Collection::default(),
            }),
        }
    }
}

impl ShopStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &Collection<Category> {
        &self.inner.categories
    }

    pub fn products(&self) -> &Collection<Product> {
        &self.inner.products
    }

    pub fn users(&self) -> &Collection<User> {
        &self.inner.users
    }

    /// All products with their category resolved
    pub async fn product_views(&self) -> Vec<ProductView> {
        let products = self.inner.products.list().await;
        let mut views = Vec::with_capacity(products.len());
        for product in products {
            views.push(self.attach_category(product).await);
        }
        views
    }

    /// One product with its category resolved
    pub async fn product_view(&self, id: i32) -> Option<ProductView> {
        let product = self.inner.products.get(id).await?;
        Some(self.attach_category(product).await)
    }

    /// Products belonging to one category, each with the category resolved
    pub async fn product_views_by_category(&self, category_id: i32) -> Vec<ProductView> {
        let mut views = self.product_views().await;
        views.retain(|view| view.category_id == category_id);
        views
    }

    /// Case-sensitive username lookup, as credentials are
    pub async fn find_user_by_username(&self, username: &str) -> Option<User> {
        self.inner
            .users
            .list()
            .await
            .into_iter()
            .find(|user| user.username == username)
    }

    /// Whether another user (excluding `exclude_id`) already holds `username`
    pub async fn username_taken(&self, username: &str, exclude_id: Option<i32>) -> bool {
        self.inner
            .users
            .list()
            .await
            .iter()
            .any(|user| user.username == username && Some(user.id) != exclude_id)
    }

    async fn attach_category(&self, product: Product) -> ProductView {
        let category = self.inner.categories.get(product.category_id).await;
        ProductView::new(product, category)
    }
}
