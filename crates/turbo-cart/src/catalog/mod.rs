//! Product catalog module.
//!
//! The catalog is fixed for the lifetime of a session: it is validated once
//! when the session is built and only read afterwards.

mod product;

pub use product::{GiftSpec, Product};

use std::collections::HashSet;

use crate::error::CartError;
use crate::ids::ProductId;

/// The fixed list of purchasable products, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting blank IDs, negative prices and duplicates.
    pub fn new(products: Vec<Product>) -> Result<Self, CartError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(&product.id) {
                return Err(CartError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Check whether the catalog lists a product.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Iterate product IDs in display order.
    pub fn ids(&self) -> impl Iterator<Item = &ProductId> {
        self.products.iter().map(|p| &p.id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
