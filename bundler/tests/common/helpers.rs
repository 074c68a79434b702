//! Mock builders shared by the storefront tests

use bundler::{BundlerError, MockCartService, MockCatalogSource, MockCredentialStore, MockTemplateSource};
use bundler::Credential;
use serde_json::Value;
use shared::BundleTemplate;

pub fn catalog_returning(payload: Value) -> MockCatalogSource {
    let mut source = MockCatalogSource::new();
    source
        .expect_fetch_catalog()
        .returning(move || Ok(payload.clone()));
    source
}

pub fn failing_catalog() -> MockCatalogSource {
    let mut source = MockCatalogSource::new();
    source.expect_fetch_catalog().returning(|| {
        Err(BundlerError::CatalogFetch {
            message: "connection refused".to_string(),
        })
    });
    source
}

pub fn templates_returning(templates: Vec<BundleTemplate>) -> MockTemplateSource {
    let mut source = MockTemplateSource::new();
    source
        .expect_fetch_templates()
        .returning(move || Ok(templates.clone()));
    source
}

pub fn failing_templates() -> MockTemplateSource {
    let mut source = MockTemplateSource::new();
    source.expect_fetch_templates().returning(|| {
        Err(BundlerError::TemplateFetch {
            message: "HTTP 500".to_string(),
        })
    });
    source
}

/// Cart that must never be called
pub fn untouched_cart() -> MockCartService {
    let mut cart = MockCartService::new();
    cart.expect_add_item().never();
    cart
}

pub fn logged_in(token: &str) -> MockCredentialStore {
    let token = token.to_string();
    let mut store = MockCredentialStore::new();
    store
        .expect_credential()
        .returning(move || Some(Credential::new(token.clone())));
    store
}

pub fn logged_out() -> MockCredentialStore {
    let mut store = MockCredentialStore::new();
    store.expect_credential().returning(|| None);
    store
}
