//! Cart error types.
//!
//! Cart transitions never fail: bad quantities are clamped and unknown ids are
//! ignored. The variants here cover the edges around the store instead.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur around the cart store.
#[derive(Error, Debug)]
pub enum CartError {
    /// The store was used before a provider installed one.
    #[error("use_cart must be used within a cart provider")]
    MissingProvider,

    /// Product price is negative or not a finite number.
    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice { id: ProductId, price: String },

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CartError {
    fn from(e: toml::de::Error) -> Self {
        CartError::Config(e.to_string())
    }
}
