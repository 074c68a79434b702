//! Bundler error types

use thiserror::Error;
use shared::{ProductId, SharedError};

/// Result type for bundler operations
pub type BundlerResult<T> = Result<T, BundlerError>;

/// Bundler error types
#[derive(Error, Debug)]
pub enum BundlerError {
    #[error("Catalog fetch failed: {message}")]
    CatalogFetch { message: String },

    #[error("Bundle template fetch failed: {message}")]
    TemplateFetch { message: String },

    #[error("Cart request failed for product {product_id}: {message}")]
    CartRequest { product_id: ProductId, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),
}

impl BundlerError {
    /// Message suitable for surfacing to a shopper
    pub fn user_message(&self) -> String {
        match self {
            BundlerError::CartRequest { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
