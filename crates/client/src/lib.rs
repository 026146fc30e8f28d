//! `storefront-client` — HTTP fetch gateway for the remote product catalog.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use storefront_catalog::{Product, ProductSource};

/// Default catalog API base URL.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Fetch gateway errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The network call itself failed (DNS, connection, abort).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not a decodable catalog envelope.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Response envelope of the catalog endpoint.
///
/// The endpoint also reports paging metadata (`total`, `skip`, `limit`);
/// only the product list is consumed.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Thin client for the remote catalog API.
///
/// Issues exactly one `GET {base}/products` per fetch; no retry, no
/// timeout, no request-level pagination; the whole catalog is assumed to
/// arrive in one response. A non-success HTTP status whose body still
/// decodes as a catalog envelope is treated as success; only transport
/// failures and undecodable bodies are errors.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the whole catalog in one request.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = format!("{}/products", self.base_url);
        debug!(%url, "fetching catalog");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let envelope: ProductsResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        debug!(count = envelope.products.len(), "catalog fetched");
        Ok(envelope.products)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait(?Send)]
impl ProductSource for CatalogClient {
    type Error = ClientError;

    async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        CatalogClient::fetch_products(self).await
    }
}
