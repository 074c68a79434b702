//! Cart service backed by the storefront cart endpoint

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;
use url::Url;

use shared::ProductId;
use crate::config::StorefrontConfig;
use crate::error::{BundlerError, BundlerResult};
use crate::services::http_client::build_http_client;
use crate::traits::CartService;
use crate::types::Credential;

pub const CART_ADD_PATH: &str = "api/cart/add";

/// Real cart service posting to `{base}/api/cart/add/{id}`
pub struct RealCartService {
    client: reqwest::Client,
    add_endpoint: Url,
}

impl RealCartService {
    pub fn new(config: &StorefrontConfig) -> BundlerResult<Self> {
        Self::with_client(build_http_client(config)?, config)
    }

    pub fn with_client(client: reqwest::Client, config: &StorefrontConfig) -> BundlerResult<Self> {
        Ok(Self {
            client,
            add_endpoint: config.endpoint(CART_ADD_PATH)?,
        })
    }

    /// Endpoint for one product; the id is percent-encoded as a single path segment
    pub fn add_url(&self, product_id: &ProductId) -> BundlerResult<Url> {
        let mut url = self.add_endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| BundlerError::ConfigError {
                message: format!("Cart endpoint cannot take path segments: {}", self.add_endpoint),
            })?
            .pop_if_empty()
            .push(product_id.as_str());
        Ok(url)
    }
}

/// Error message for a rejected add: the body's `message`, else a generic one
pub fn failure_message(product_id: &ProductId, body: Option<&serde_json::Value>) -> String {
    body.and_then(|value| value.get("message"))
        .and_then(serde_json::Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Failed adding item {product_id}"))
}

#[async_trait]
impl CartService for RealCartService {
    async fn add_item(&self, product_id: &ProductId, credential: &Credential) -> BundlerResult<()> {
        let url = self.add_url(product_id)?;
        debug!("Adding product {} to cart", product_id);

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, credential.bearer())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| BundlerError::CartRequest {
                product_id: product_id.clone(),
                message: e.to_string(),
            })?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.json::<serde_json::Value>().await.ok();
        let message = failure_message(product_id, body.as_ref());
        debug!("Cart rejected product {} with HTTP {}: {}", product_id, status, message);

        Err(BundlerError::CartRequest {
            product_id: product_id.clone(),
            message,
        })
    }
}
