//! Cart and line item types.

use crate::catalog::{GiftSpec, Product};
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// A shopping cart: line items in insertion order, unique by ID.
///
/// The cart is only mutated through [`CartEngine`](crate::cart::CartEngine),
/// which keeps the free-gift line in step with the subtotal.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Cart {
    /// Items in the cart.
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line by product ID.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Check whether a line exists for a product.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.id == id)
    }

    /// Get total item count (sum of quantities, gift included).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` units of a product, merging into an existing line.
    pub(crate) fn merge_or_push(&mut self, product: &Product, quantity: u32) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }
        self.items.push(LineItem::from_product(product, quantity));
    }

    /// Shift a line's quantity by `delta`, never below one.
    ///
    /// Returns `false` when no line matches.
    pub(crate) fn shift_quantity(&mut self, id: &ProductId, delta: i64) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == id) else {
            return false;
        };
        let next = i64::from(item.quantity).saturating_add(delta);
        item.quantity = next.clamp(1, i64::from(u32::MAX)) as u32;
        self.prune_empty();
        true
    }

    /// Remove a line by ID.
    pub(crate) fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Append the gift line.
    pub(crate) fn push_gift(&mut self, gift: &GiftSpec) {
        self.items.push(LineItem::gift(gift));
    }

    fn prune_empty(&mut self) {
        self.items.retain(|i| i.quantity > 0);
    }
}

/// A line in the cart: a product copy with a quantity, or the gift.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product or gift ID.
    pub id: ProductId,
    /// Name copied from the catalog.
    pub name: String,
    /// Unit price copied from the catalog.
    pub price: Money,
    /// Quantity.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line from a catalog product.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
        }
    }

    /// Create the gift line, always a single unit.
    pub fn gift(gift: &GiftSpec) -> Self {
        Self {
            id: gift.id.clone(),
            name: gift.name.clone(),
            price: gift.price,
            quantity: 1,
        }
    }

    /// Nominal line total (price × quantity).
    pub fn total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::new("p1", "Laptop", 500)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_merge_same_product() {
        let mut cart = Cart::new();
        cart.merge_or_push(&laptop(), 1);
        cart.merge_or_push(&laptop(), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.get(&ProductId::new("p1")).unwrap().total(), Money::new(1500));
    }

    #[test]
    fn test_shift_quantity_floors_at_one() {
        let mut cart = Cart::new();
        cart.merge_or_push(&laptop(), 2);
        let id = ProductId::new("p1");

        assert!(cart.shift_quantity(&id, -1));
        assert!(cart.shift_quantity(&id, -1));
        assert!(cart.shift_quantity(&id, -5));
        assert_eq!(cart.get(&id).unwrap().quantity, 1);

        assert!(cart.shift_quantity(&id, 4));
        assert_eq!(cart.get(&id).unwrap().quantity, 5);
    }

    #[test]
    fn test_shift_unknown_line() {
        let mut cart = Cart::new();
        assert!(!cart.shift_quantity(&ProductId::new("missing"), 1));
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        cart.merge_or_push(&laptop(), 1);
        assert!(cart.remove(&ProductId::new("p1")));
        assert!(!cart.remove(&ProductId::new("p1")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_gift_line_is_single_unit() {
        let line = LineItem::gift(&GiftSpec::new("gift", "Wireless Mouse", 799));
        assert_eq!(line.quantity, 1);
        assert_eq!(line.price, Money::new(799));
    }
}
