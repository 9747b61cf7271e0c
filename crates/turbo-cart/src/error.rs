//! Cart error types.
//!
//! The engine itself never fails; these errors come from loading and
//! validating the store configuration that seeds a session.

use std::path::PathBuf;

use thiserror::Error;

use crate::ids::ProductId;
use crate::money::Money;

/// Errors raised while building a cart session.
#[derive(Error, Debug)]
pub enum CartError {
    /// Config file could not be read or written.
    #[error("Failed to access store config {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML.
    #[error("Invalid TOML store config")]
    TomlParse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML.
    #[error("Failed to serialize store config as TOML")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Config is not valid JSON.
    #[error("Invalid JSON store config")]
    Json(#[from] serde_json::Error),

    /// Threshold below zero.
    #[error("Threshold must not be negative, got {0}")]
    NegativeThreshold(Money),

    /// Product or gift with a price below zero.
    #[error("Price of {id} must not be negative, got {price}")]
    NegativePrice { id: ProductId, price: Money },

    /// Two catalog entries share an ID.
    #[error("Duplicate product in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// The gift is listed as a purchasable product.
    #[error("Gift {0} must not appear in the purchasable catalog")]
    GiftInCatalog(ProductId),

    /// Gift message template with no visible text.
    #[error("Gift message must not be blank")]
    BlankGiftMessage,

    /// Empty identifier.
    #[error("Product IDs must not be empty (entry named {0:?})")]
    BlankId(String),
}
