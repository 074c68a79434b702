//! Tests for the HTTP-backed bundler services
//!
//! Each collaborator is exercised against a local wiremock server.


use crate::config::StorefrontConfig;

/// Config pointing at a mock server
pub fn config_for(server: &wiremock::MockServer) -> StorefrontConfig {
    StorefrontConfig::with_base_url(&server.uri()).unwrap()
}
