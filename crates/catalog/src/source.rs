//! Catalog fetch collaborator.
//!
//! The assistant never talks to the product store directly; it asks a
//! `CatalogSource` for a full product list and swaps it in wholesale.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::product::Product;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("catalog endpoint returned status {0}")]
    Status(u16),

    #[error("failed to decode catalog: {0}")]
    Decode(String),

    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
}

/// Full-catalog fetch. Implementations return the complete product list or an error;
/// partial results are not a thing.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError>;
}

/// In-process source backed by a fixed list (seed data, tests).
///
/// The list can be swapped or the source switched into a failing mode, which is
/// how tests exercise the refresh failure path.
#[derive(Debug, Default)]
pub struct StaticCatalogSource {
    state: Mutex<StaticState>,
}

#[derive(Debug, Default)]
struct StaticState {
    products: Vec<Product>,
    failure: Option<String>,
}

impl StaticCatalogSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            state: Mutex::new(StaticState {
                products,
                failure: None,
            }),
        }
    }

    pub fn set_products(&self, products: Vec<Product>) {
        if let Ok(mut state) = self.state.lock() {
            state.products = products;
        }
    }

    /// Make subsequent fetches fail with `reason` (`None` restores normal behaviour).
    pub fn set_failure(&self, reason: Option<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.failure = reason;
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let state = self
            .state
            .lock()
            .map_err(|_| CatalogError::Unavailable("static source lock poisoned".to_string()))?;

        match &state.failure {
            Some(reason) => Err(CatalogError::Unavailable(reason.clone())),
            None => Ok(state.products.clone()),
        }
    }
}

/// Upper bound on one catalog fetch, connect through body.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches `GET {base_url}/products` and decodes a JSON array of products.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, CatalogError> {
        Self::with_timeout(base_url, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Unavailable(format!("http client: {e}")))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl AsRef<str>) -> Self {
        let url = format!("{}/products", base_url.as_ref().trim_end_matches('/'));
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CatalogError::Status(resp.status().as_u16()));
        }

        resp.json::<Vec<Product>>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}
