//! Bundler core business logic
//!
//! Everything here is pure and synchronous: a deterministic function of the
//! catalog snapshot and the template list.

pub mod catalog;
pub mod defaults;
pub mod normalizer;
pub mod pricing;
pub mod resolver;
pub mod templates;

pub use catalog::shape_catalog;
pub use defaults::default_templates;
pub use normalizer::normalize;
pub use pricing::price;
pub use resolver::{resolve, CatalogIndex};
pub use templates::shape_templates;
