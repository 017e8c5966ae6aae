//! Product transport - one HTTP call per operation
//!
//! The flows only see the `ProductTransport` trait, so they run the same
//! against the real backend and against test doubles.

use async_trait::async_trait;

use crate::error::Result;
use crate::product::{Product, ProductId};

mod http;

pub use http::HttpTransport;

/// Operations offered by the product backend
///
/// Implementations log the outcome of every call and hand failures back
/// unchanged; they never retry.
#[async_trait]
pub trait ProductTransport: Send + Sync {
    /// Create a product; the returned record carries the server-assigned id
    async fn create_product(
        &self,
        name: &str,
        description: &str,
        images: Vec<String>,
        price: f64,
    ) -> Result<Product>;

    /// Fetch the whole collection, in backend order
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Fetch a single product
    async fn get_product(&self, id: &ProductId) -> Result<Product>;

    /// Delete a product; no payload is expected back
    async fn delete_product(&self, id: &ProductId) -> Result<()>;

    /// Where this transport sends requests, for user-facing messages
    fn endpoint(&self) -> &str;
}
