//! Pending quantity selection per catalog product.
//!
//! The selector holds how many units of each product the shopper intends to
//! add next. It is sized to the catalog once and never grows: IDs outside
//! the catalog are ignored.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::ids::ProductId;

/// Pending quantity for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Product the quantity applies to.
    pub product_id: ProductId,
    /// Units waiting to be added to the cart.
    pub quantity: u32,
}

/// Pending quantities for every catalog product, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorState {
    entries: Vec<Selection>,
}

impl SelectorState {
    /// Create a selector with a zero entry per catalog product.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            entries: catalog
                .ids()
                .map(|id| Selection {
                    product_id: id.clone(),
                    quantity: 0,
                })
                .collect(),
        }
    }

    /// Shift a pending quantity by `delta`, clamping into `0..=u32::MAX`.
    ///
    /// Returns `false` when the product is not tracked.
    pub fn adjust(&mut self, product_id: &ProductId, delta: i64) -> bool {
        let Some(entry) = self.entry_mut(product_id) else {
            return false;
        };
        let next = i64::from(entry.quantity).saturating_add(delta);
        entry.quantity = next.clamp(0, i64::from(u32::MAX)) as u32;
        true
    }

    /// Set a pending quantity back to zero.
    pub fn reset(&mut self, product_id: &ProductId) -> bool {
        match self.entry_mut(product_id) {
            Some(entry) => {
                entry.quantity = 0;
                true
            }
            None => false,
        }
    }

    /// Current pending quantity, zero for untracked products.
    pub fn peek(&self, product_id: &ProductId) -> u32 {
        self.entries
            .iter()
            .find(|e| &e.product_id == product_id)
            .map_or(0, |e| e.quantity)
    }

    /// Whether a decrement would change anything.
    pub fn can_decrement(&self, product_id: &ProductId) -> bool {
        self.peek(product_id) > 0
    }

    /// Check whether a product is tracked.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries.iter().any(|e| &e.product_id == product_id)
    }

    /// All pending quantities, in catalog order.
    pub fn snapshot(&self) -> &[Selection] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, product_id: &ProductId) -> Option<&mut Selection> {
        self.entries.iter_mut().find(|e| &e.product_id == product_id)
    }
}
