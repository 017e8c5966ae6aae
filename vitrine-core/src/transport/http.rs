//! HTTP transport for the product backend
//!
//! | Operation | Method | Path            |
//! |-----------|--------|-----------------|
//! | create    | POST   | `/product`      |
//! | list      | GET    | `/product`      |
//! | get       | GET    | `/product/{id}` |
//! | delete    | DELETE | `/product/{id}` |

use async_trait::async_trait;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::ProductTransport;
use crate::config::ClientConfig;
use crate::error::{CatalogError, Result};
use crate::product::{NewProduct, Product, ProductId};

/// reqwest-backed `ProductTransport`
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    collection: Url,
}

impl HttpTransport {
    /// Build a transport for the configured backend
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let collection = Url::parse(&config.collection_url()).map_err(|e| {
            CatalogError::Config(format!("Invalid backend URL '{}': {e}", config.base_url))
        })?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("vitrine/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(|e| CatalogError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            collection,
        })
    }

    /// `/product/{id}`, with the id encoded as one path segment
    fn item_url(&self, id: &ProductId) -> Result<Url> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::Config(format!("Cannot extend URL {}", self.collection)))?
            .push(&id.to_string());
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&NewProduct>,
    ) -> Result<reqwest::Response> {
        let method_name = method_name(&method);
        debug!("{} {}", method_name, url);

        let mut request = self
            .client
            .request(method, url.clone())
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|source| CatalogError::Network {
            url: url.to_string(),
            timed_out: source.is_timeout(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Request {
                method: method_name,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let url = response.url().to_string();
        response
            .json::<T>()
            .await
            .map_err(|source| CatalogError::Decode { url, source })
    }
}

fn method_name(method: &Method) -> &'static str {
    if *method == Method::POST {
        "POST"
    } else if *method == Method::DELETE {
        "DELETE"
    } else {
        "GET"
    }
}

#[async_trait]
impl ProductTransport for HttpTransport {
    async fn create_product(
        &self,
        name: &str,
        description: &str,
        images: Vec<String>,
        price: f64,
    ) -> Result<Product> {
        let body = NewProduct {
            name: name.to_string(),
            description: description.to_string(),
            images,
            price,
        };

        let result = async {
            let response = self
                .send(Method::POST, self.collection.clone(), Some(&body))
                .await?;
            Self::decode::<Product>(response).await
        }
        .await;

        match &result {
            Ok(product) => info!("Product created: {} ({})", product.name, product.id),
            Err(e) => warn!("Failed to create product '{}': {}", name, e),
        }
        result
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let result = async {
            let response = self.send(Method::GET, self.collection.clone(), None).await?;
            Self::decode::<Vec<Product>>(response).await
        }
        .await;

        match &result {
            Ok(products) => info!("Products loaded: {}", products.len()),
            Err(e) => warn!("Failed to list products: {}", e),
        }
        result
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product> {
        let result = async {
            let response = self.send(Method::GET, self.item_url(id)?, None).await?;
            Self::decode::<Product>(response).await
        }
        .await;

        match &result {
            Ok(product) => debug!("Product fetched: {} ({})", product.name, product.id),
            Err(e) => warn!("Failed to fetch product {}: {}", id, e),
        }
        result
    }

    async fn delete_product(&self, id: &ProductId) -> Result<()> {
        let result = async {
            self.send(Method::DELETE, self.item_url(id)?, None).await?;
            Ok::<(), CatalogError>(())
        }
        .await;

        match &result {
            Ok(()) => info!("Product {} deleted", id),
            Err(e) => warn!("Failed to delete product {}: {}", id, e),
        }
        result
    }

    fn endpoint(&self) -> &str {
        &self.base_url
    }
}
