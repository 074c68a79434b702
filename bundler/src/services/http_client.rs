//! Shared reqwest client construction

use crate::config::StorefrontConfig;
use crate::error::{BundlerError, BundlerResult};

/// Build the HTTP client used by every storefront collaborator
pub fn build_http_client(config: &StorefrontConfig) -> BundlerResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| BundlerError::ConfigError {
            message: format!("Failed to create HTTP client: {e}"),
        })
}
