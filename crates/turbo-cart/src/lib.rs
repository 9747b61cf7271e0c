//! Cart engine with a threshold-triggered free gift for TurboCommerce.
//!
//! This crate tracks a shopper's pending quantity selections, turns them
//! into cart lines, and keeps a promotional gift line in the cart exactly
//! while the subtotal is at or above a threshold:
//!
//! - **Catalog**: fixed products plus the gift definition
//! - **Selector**: pending quantity per product
//! - **Cart**: line items, gift rule, mutation engine
//! - **Session**: the accessors and mutators a storefront calls
//!
//! # Example
//!
//! ```rust
//! use turbo_cart::prelude::*;
//!
//! let mut session = CartSession::new(&StoreConfig::demo()).unwrap();
//! let laptop = ProductId::new("laptop");
//!
//! session.adjust_selector(&laptop, 2);
//! let update = session.add_to_cart(&laptop);
//!
//! assert_eq!(update.gift, GiftTransition::Granted);
//! assert_eq!(session.subtotal(), Money::new(1000));
//! assert!(session.gift_message().is_some());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod selector;
pub mod session;

pub use error::CartError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    pub use crate::cart::{
        Cart, CartEngine, CartPricing, CartUpdate, Change, GiftRule, GiftTransition, LineItem,
        SkipReason,
    };
    pub use crate::catalog::{Catalog, GiftSpec, Product};
    pub use crate::config::StoreConfig;
    pub use crate::selector::{Selection, SelectorState};
    pub use crate::session::{CartSession, SessionSnapshot};
}
