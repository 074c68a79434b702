//! Catalog source backed by the storefront products endpoint

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::config::StorefrontConfig;
use crate::error::{BundlerError, BundlerResult};
use crate::services::http_client::build_http_client;
use crate::traits::CatalogSource;

pub const PRODUCTS_PATH: &str = "api/products";

/// Real catalog source fetching `GET {base}/api/products`
pub struct RealCatalogSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl RealCatalogSource {
    pub fn new(config: &StorefrontConfig) -> BundlerResult<Self> {
        Self::with_client(build_http_client(config)?, config)
    }

    /// Reuse an existing client (connection pool shared with other collaborators)
    pub fn with_client(client: reqwest::Client, config: &StorefrontConfig) -> BundlerResult<Self> {
        Ok(Self {
            client,
            endpoint: config.endpoint(PRODUCTS_PATH)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for RealCatalogSource {
    async fn fetch_catalog(&self) -> BundlerResult<serde_json::Value> {
        debug!("Fetching catalog from {}", self.endpoint);

        let response = self.client.get(self.endpoint.clone()).send().await?;

        if !response.status().is_success() {
            return Err(BundlerError::CatalogFetch {
                message: format!("HTTP {}", response.status()),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
