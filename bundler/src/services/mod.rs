//! Bundler services implementations

pub mod http_client;
pub mod catalog_client;
pub mod template_client;
pub mod cart_client;
pub mod credentials;

#[cfg(test)]
pub mod tests;

pub use http_client::*;
pub use catalog_client::*;
pub use template_client::*;
pub use cart_client::*;
pub use credentials::*;
