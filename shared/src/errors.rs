//! Shared error types for the storefront bundle engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Unknown category label: {label}")]
    UnknownCategory { label: String },

    #[error("Invalid product id: {input}")]
    InvalidProductId { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
