//! Template source backed by the storefront bundles endpoint

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use shared::BundleTemplate;
use crate::config::StorefrontConfig;
use crate::core::templates::shape_templates;
use crate::error::{BundlerError, BundlerResult};
use crate::services::http_client::build_http_client;
use crate::traits::TemplateSource;

pub const BUNDLES_PATH: &str = "api/bundles";

/// Real template source fetching `GET {base}/api/bundles`
pub struct RealTemplateSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl RealTemplateSource {
    pub fn new(config: &StorefrontConfig) -> BundlerResult<Self> {
        Self::with_client(build_http_client(config)?, config)
    }

    pub fn with_client(client: reqwest::Client, config: &StorefrontConfig) -> BundlerResult<Self> {
        Ok(Self {
            client,
            endpoint: config.endpoint(BUNDLES_PATH)?,
        })
    }
}

#[async_trait]
impl TemplateSource for RealTemplateSource {
    /// Records that cannot identify a template are skipped; the rest are kept
    async fn fetch_templates(&self) -> BundlerResult<Vec<BundleTemplate>> {
        debug!("Fetching bundle templates from {}", self.endpoint);

        let response = self.client.get(self.endpoint.clone()).send().await?;

        if !response.status().is_success() {
            return Err(BundlerError::TemplateFetch {
                message: format!("HTTP {}", response.status()),
            });
        }

        let body = response.text().await?;
        let payload: serde_json::Value = serde_json::from_str(&body)?;

        match payload.as_array() {
            Some(records) => Ok(shape_templates(records)),
            None => Err(BundlerError::TemplateFetch {
                message: "expected a JSON array of bundles".to_string(),
            }),
        }
    }
}
