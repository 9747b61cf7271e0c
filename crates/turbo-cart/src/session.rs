//! Cart session: the in-process contract used by a storefront.
//!
//! A session owns the catalog, the pending selections, the cart and the
//! current gift message. Callers adjust selections, then move them into the
//! cart; every cart mutation settles the gift before it returns.

use serde::Serialize;

use crate::cart::{
    Cart, CartEngine, CartPricing, CartUpdate, Change, GiftTransition, LineItem, SkipReason,
};
use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::selector::{Selection, SelectorState};

/// Serializable view of a session at one point in time.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionSnapshot {
    pub items: Vec<LineItem>,
    pub selections: Vec<Selection>,
    pub pricing: CartPricing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,
}

/// One shopper's cart state.
#[derive(Debug, Clone)]
pub struct CartSession {
    catalog: Catalog,
    selector: SelectorState,
    cart: Cart,
    engine: CartEngine,
    gift_message: Option<String>,
}

impl CartSession {
    /// Validate a store config and start an empty session.
    pub fn new(config: &StoreConfig) -> Result<Self, CartError> {
        let catalog = config.catalog()?;
        Ok(Self::from_parts(catalog, config.engine()))
    }

    /// Start an empty session from an already validated catalog.
    pub fn from_parts(catalog: Catalog, engine: CartEngine) -> Self {
        let selector = SelectorState::new(&catalog);
        let mut session = Self {
            catalog,
            selector,
            cart: Cart::new(),
            engine,
            gift_message: None,
        };
        // A zero threshold qualifies even the empty cart.
        let transition = session.engine.reconcile_gift(&mut session.cart);
        session.apply_transition(transition);
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selector(&self) -> &SelectorState {
        &self.selector
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn engine(&self) -> &CartEngine {
        &self.engine
    }

    pub fn subtotal(&self) -> Money {
        self.engine.subtotal(&self.cart)
    }

    /// Progress toward the gift threshold (0.0 - 100.0).
    pub fn progress(&self) -> f64 {
        self.engine.progress(&self.cart)
    }

    pub fn remaining_for_gift(&self) -> Money {
        self.engine.remaining_for_gift(&self.cart)
    }

    pub fn pricing(&self) -> CartPricing {
        self.engine.pricing(&self.cart)
    }

    /// Congratulation text, present while the gift is in the cart.
    pub fn gift_message(&self) -> Option<&str> {
        self.gift_message.as_deref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            items: self.cart.items().to_vec(),
            selections: self.selector.snapshot().to_vec(),
            pricing: self.pricing(),
            gift_message: self.gift_message.clone(),
        }
    }

    /// Shift the pending quantity of a catalog product.
    pub fn adjust_selector(&mut self, product_id: &ProductId, delta: i64) -> Change {
        if self.selector.adjust(product_id, delta) {
            tracing::debug!(
                product_id = %product_id,
                delta,
                pending = self.selector.peek(product_id),
                "selection adjusted"
            );
            Change::Applied
        } else {
            tracing::debug!(product_id = %product_id, "selection for unknown product ignored");
            Change::Skipped(SkipReason::UnknownProduct)
        }
    }

    /// Move the pending quantity of a product into the cart.
    ///
    /// The selection is reset only when something was actually added.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> CartUpdate {
        let update = match self.catalog.get(product_id) {
            Some(product) => {
                let quantity = self.selector.peek(product_id);
                self.engine.add_to_cart(&mut self.cart, product, quantity)
            }
            None => {
                tracing::debug!(product_id = %product_id, "add for unknown product ignored");
                CartUpdate {
                    change: Change::Skipped(SkipReason::UnknownProduct),
                    gift: self.engine.reconcile_gift(&mut self.cart),
                }
            }
        };
        if update.change.is_applied() {
            self.selector.reset(product_id);
        }
        self.apply_transition(update.gift);
        update
    }

    /// Shift the quantity of a cart line, never below one.
    pub fn update_cart_quantity(&mut self, product_id: &ProductId, delta: i64) -> CartUpdate {
        let update = self
            .engine
            .update_cart_quantity(&mut self.cart, product_id, delta);
        self.apply_transition(update.gift);
        update
    }

    /// Remove a cart line. The gift cannot be removed by hand.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> CartUpdate {
        let update = self.engine.remove_from_cart(&mut self.cart, product_id);
        self.apply_transition(update.gift);
        update
    }

    fn apply_transition(&mut self, transition: GiftTransition) {
        match transition {
            GiftTransition::Granted => self.gift_message = Some(self.engine.rule().message()),
            GiftTransition::Revoked => self.gift_message = None,
            GiftTransition::Unchanged => {}
        }
    }
}
