//! Shared types for the storefront bundle engine
//!
//! Holds the catalog and bundle data model plus the logging setup used by
//! every crate in the workspace.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
