//! Bundle resolution and pricing engine for the storefront
//!
//! Turns bundle templates (abstract slot requirements) into concrete product
//! bundles drawn from a live catalog, prices them, and submits them to the
//! shopper's cart item by item.
//!
//! The `core` module is pure and synchronous; the storefront shell and the
//! HTTP services around it are async and injected through the traits in
//! `traits`.

pub mod error;
pub mod types;
pub mod traits;
pub mod config;
pub mod state;
pub mod core;
pub mod services;
pub mod storefront_impl;

// Re-export main types
pub use error::{BundlerError, BundlerResult};
pub use types::*;
pub use traits::*;
pub use config::StorefrontConfig;
pub use crate::core::{default_templates, normalize, price, resolve, shape_catalog, shape_templates};
pub use storefront_impl::{add_bundle_to_cart, Storefront};
pub use services::{RealCartService, RealCatalogSource, RealCredentialStore, RealTemplateSource};

/// Storefront wired to the HTTP services
pub type HttpStorefront = Storefront<RealCatalogSource, RealTemplateSource, RealCartService, RealCredentialStore>;

/// Build an HTTP-backed storefront sharing one client across collaborators
pub fn http_storefront(config: &StorefrontConfig, credentials: RealCredentialStore) -> BundlerResult<HttpStorefront> {
    shared::logging::log_startup("storefront", &format!("storefront client for {}", config.api_base_url));
    let client = services::build_http_client(config)
        .inspect_err(|e| shared::logging::log_error("storefront", "Building HTTP client", e))?;
    Ok(Storefront::new(
        RealCatalogSource::with_client(client.clone(), config)?,
        RealTemplateSource::with_client(client.clone(), config)?,
        RealCartService::with_client(client, config)?,
        credentials,
    ))
}
