//! Product and gift types.

use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Create a new product.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: Money::new(price),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CartError> {
        validate_entry(&self.id, &self.name, self.price)
    }
}

/// The free gift granted once the cart subtotal reaches the threshold.
///
/// Shaped like a [`Product`] so it can be shown as a cart line, but it is
/// never sold and never priced into the subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GiftSpec {
    /// Gift identifier, distinct from every catalog product.
    pub id: ProductId,
    /// Gift name.
    pub name: String,
    /// Nominal price, displayed but never charged.
    #[serde(default)]
    pub price: Money,
}

impl GiftSpec {
    /// Create a new gift definition.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: Money::new(price),
        }
    }

    /// Check whether an ID refers to this gift.
    pub fn is(&self, id: &ProductId) -> bool {
        &self.id == id
    }

    pub(crate) fn validate(&self) -> Result<(), CartError> {
        validate_entry(&self.id, &self.name, self.price)
    }
}

fn validate_entry(id: &ProductId, name: &str, price: Money) -> Result<(), CartError> {
    if id.is_blank() {
        return Err(CartError::BlankId(name.to_string()));
    }
    if price.is_negative() {
        return Err(CartError::NegativePrice {
            id: id.clone(),
            price,
        });
    }
    Ok(())
}
