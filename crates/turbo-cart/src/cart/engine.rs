//! Cart mutations with inline gift reconciliation.
//!
//! Every mutator finishes by reconciling the gift line, so a caller never
//! sees a cart whose gift disagrees with its subtotal. Nothing here fails:
//! bad input is skipped and reported through [`Change::Skipped`].

use serde::Serialize;

use crate::cart::{Cart, CartPricing, GiftRule, GiftTransition};
use crate::catalog::{GiftSpec, Product};
use crate::ids::ProductId;
use crate::money::Money;

/// Why a mutation left the cart untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Nothing was selected for the product.
    NothingToAdd,
    /// No such product in the cart or catalog.
    UnknownProduct,
    /// The gift line is managed by the threshold rule only.
    GiftProtected,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NothingToAdd => "nothing_to_add",
            SkipReason::UnknownProduct => "unknown_product",
            SkipReason::GiftProtected => "gift_protected",
        }
    }
}

/// Whether a mutation touched the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Change {
    Applied,
    Skipped(SkipReason),
}

impl Change {
    pub fn is_applied(&self) -> bool {
        matches!(self, Change::Applied)
    }
}

/// Outcome of a cart mutation and the reconciliation that followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartUpdate {
    pub change: Change,
    pub gift: GiftTransition,
}

/// Owns the gift rule and applies every cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEngine {
    rule: GiftRule,
}

impl CartEngine {
    pub fn new(rule: GiftRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &GiftRule {
        &self.rule
    }

    pub fn gift(&self) -> &GiftSpec {
        self.rule.gift()
    }

    pub fn threshold(&self) -> Money {
        self.rule.threshold()
    }

    /// Sum of price × quantity over non-gift lines.
    pub fn subtotal(&self, cart: &Cart) -> Money {
        self.rule.subtotal(cart)
    }

    /// Progress toward the gift threshold, capped at 100.
    pub fn progress(&self, cart: &Cart) -> f64 {
        self.rule.progress(cart)
    }

    /// Amount still needed before the gift is granted.
    pub fn remaining_for_gift(&self, cart: &Cart) -> Money {
        self.rule.remaining(cart)
    }

    pub fn pricing(&self, cart: &Cart) -> CartPricing {
        self.rule.pricing(cart)
    }

    /// Add `quantity` units of `product`, merging with an existing line.
    pub fn add_to_cart(&self, cart: &mut Cart, product: &Product, quantity: u32) -> CartUpdate {
        let change = if quantity == 0 {
            Change::Skipped(SkipReason::NothingToAdd)
        } else if self.rule.gift().is(&product.id) {
            Change::Skipped(SkipReason::GiftProtected)
        } else {
            cart.merge_or_push(product, quantity);
            tracing::debug!(product_id = %product.id, quantity, "added to cart");
            Change::Applied
        };
        self.settle(cart, &product.id, change)
    }

    /// Shift a line's quantity by `delta`, never below one.
    pub fn update_cart_quantity(
        &self,
        cart: &mut Cart,
        product_id: &ProductId,
        delta: i64,
    ) -> CartUpdate {
        let change = if self.rule.gift().is(product_id) {
            Change::Skipped(SkipReason::GiftProtected)
        } else if cart.shift_quantity(product_id, delta) {
            tracing::debug!(product_id = %product_id, delta, "cart quantity updated");
            Change::Applied
        } else {
            Change::Skipped(SkipReason::UnknownProduct)
        };
        self.settle(cart, product_id, change)
    }

    /// Remove a line. The gift line cannot be removed this way.
    pub fn remove_from_cart(&self, cart: &mut Cart, product_id: &ProductId) -> CartUpdate {
        let change = if self.rule.gift().is(product_id) {
            Change::Skipped(SkipReason::GiftProtected)
        } else if cart.remove(product_id) {
            tracing::debug!(product_id = %product_id, "removed from cart");
            Change::Applied
        } else {
            Change::Skipped(SkipReason::UnknownProduct)
        };
        self.settle(cart, product_id, change)
    }

    /// Bring the gift line in line with the subtotal.
    pub fn reconcile_gift(&self, cart: &mut Cart) -> GiftTransition {
        self.rule.reconcile(cart)
    }

    fn settle(&self, cart: &mut Cart, product_id: &ProductId, change: Change) -> CartUpdate {
        if let Change::Skipped(reason) = change {
            tracing::debug!(
                product_id = %product_id,
                reason = reason.as_str(),
                "cart mutation skipped"
            );
        }
        CartUpdate {
            change,
            gift: self.rule.reconcile(cart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CartEngine {
        CartEngine::new(GiftRule::new(
            GiftSpec::new("gift", "Wireless Mouse", 999),
            Money::new(500),
        ))
    }

    fn gift_id() -> ProductId {
        ProductId::new("gift")
    }

    #[test]
    fn test_add_zero_is_skipped() {
        let engine = engine();
        let mut cart = Cart::new();
        let update = engine.add_to_cart(&mut cart, &Product::new("p1", "Laptop", 100), 0);

        assert_eq!(update.change, Change::Skipped(SkipReason::NothingToAdd));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_grants_gift() {
        let engine = engine();
        let mut cart = Cart::new();
        let update = engine.add_to_cart(&mut cart, &Product::new("p1", "Laptop", 600), 1);

        assert_eq!(update.change, Change::Applied);
        assert_eq!(update.gift, GiftTransition::Granted);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_add_merges_lines() {
        let engine = engine();
        let mut cart = Cart::new();
        let phone = Product::new("p2", "Phone", 100);
        engine.add_to_cart(&mut cart, &phone, 1);
        engine.add_to_cart(&mut cart, &phone, 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&phone.id).unwrap().quantity, 3);
    }

    #[test]
    fn test_gift_cannot_be_added_as_product() {
        let engine = engine();
        let mut cart = Cart::new();
        let fake = Product::new("gift", "Wireless Mouse", 0);
        let update = engine.add_to_cart(&mut cart, &fake, 3);

        assert_eq!(update.change, Change::Skipped(SkipReason::GiftProtected));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_revokes_gift() {
        let engine = engine();
        let mut cart = Cart::new();
        let phone = Product::new("p2", "Phone", 300);
        engine.add_to_cart(&mut cart, &phone, 2);
        assert_eq!(cart.len(), 2);

        let update = engine.update_cart_quantity(&mut cart, &phone.id, -1);
        assert_eq!(update.change, Change::Applied);
        assert_eq!(update.gift, GiftTransition::Revoked);
        assert_eq!(cart.len(), 1);
        assert_eq!(engine.subtotal(&cart), Money::new(300));
    }

    #[test]
    fn test_update_holds_at_one() {
        let engine = engine();
        let mut cart = Cart::new();
        let phone = Product::new("p2", "Phone", 100);
        engine.add_to_cart(&mut cart, &phone, 1);

        for _ in 0..3 {
            engine.update_cart_quantity(&mut cart, &phone.id, -1);
        }
        assert_eq!(cart.get(&phone.id).unwrap().quantity, 1);
    }

    #[test]
    fn test_update_gift_is_rejected() {
        let engine = engine();
        let mut cart = Cart::new();
        engine.add_to_cart(&mut cart, &Product::new("p1", "Laptop", 600), 1);
        let before = cart.clone();

        let update = engine.update_cart_quantity(&mut cart, &gift_id(), 5);
        assert_eq!(update.change, Change::Skipped(SkipReason::GiftProtected));
        assert_eq!(update.gift, GiftTransition::Unchanged);
        assert_eq!(cart, before);
        assert_eq!(cart.get(&gift_id()).unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_gift_is_rejected() {
        let engine = engine();
        let mut cart = Cart::new();
        engine.add_to_cart(&mut cart, &Product::new("p1", "Laptop", 600), 1);

        let update = engine.remove_from_cart(&mut cart, &gift_id());
        assert_eq!(update.change, Change::Skipped(SkipReason::GiftProtected));
        assert!(cart.contains(&gift_id()));
    }

    #[test]
    fn test_remove_revokes_gift() {
        let engine = engine();
        let mut cart = Cart::new();
        let laptop = Product::new("p1", "Laptop", 600);
        engine.add_to_cart(&mut cart, &laptop, 1);

        let update = engine.remove_from_cart(&mut cart, &laptop.id);
        assert_eq!(update.change, Change::Applied);
        assert_eq!(update.gift, GiftTransition::Revoked);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_product_is_skipped() {
        let engine = engine();
        let mut cart = Cart::new();
        let missing = ProductId::new("missing");

        assert_eq!(
            engine.update_cart_quantity(&mut cart, &missing, 1).change,
            Change::Skipped(SkipReason::UnknownProduct)
        );
        assert_eq!(
            engine.remove_from_cart(&mut cart, &missing).change,
            Change::Skipped(SkipReason::UnknownProduct)
        );
    }
}
