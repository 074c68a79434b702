//! Collaborator trait definitions for dependency injection

use async_trait::async_trait;

use shared::{BundleTemplate, ProductId};
use crate::error::BundlerResult;
use crate::types::Credential;

/// Source of the raw product catalog
#[mockall::automock]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw catalog payload, in whatever shape the service returns
    async fn fetch_catalog(&self) -> BundlerResult<serde_json::Value>;
}

/// Source of custom bundle templates
#[mockall::automock]
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Fetch the custom template list (may legitimately be empty)
    async fn fetch_templates(&self) -> BundlerResult<Vec<BundleTemplate>>;
}

/// Cart service accepting one product at a time
#[mockall::automock]
#[async_trait]
pub trait CartService: Send + Sync {
    /// Add a single product to the shopper's cart
    async fn add_item(&self, product_id: &ProductId, credential: &Credential) -> BundlerResult<()>;
}

/// Storage for the shopper's bearer credential
#[mockall::automock]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Current credential, if the shopper is logged in
    async fn credential(&self) -> Option<Credential>;
}
