//! Shopping cart module.
//!
//! Contains the cart, its line items, the free-gift rule and the engine
//! that applies mutations.

mod cart;
mod engine;
mod gift;
mod pricing;

pub use cart::{Cart, LineItem};
pub use engine::{CartEngine, CartUpdate, Change, SkipReason};
pub use gift::{GiftRule, GiftTransition, DEFAULT_GIFT_MESSAGE};
pub use pricing::CartPricing;
