//! Threshold-triggered free gift rule.

use serde::Serialize;

use crate::cart::{Cart, CartPricing};
use crate::catalog::GiftSpec;
use crate::money::Money;

/// Default congratulation text; `{gift}` is replaced by the gift name.
pub const DEFAULT_GIFT_MESSAGE: &str = "Congratulations! You've earned a free {gift}!";

/// Result of reconciling the gift line against the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GiftTransition {
    /// Subtotal reached the threshold and the gift was added.
    Granted,
    /// Subtotal fell below the threshold and the gift was removed.
    Revoked,
    /// Cart already agreed with the threshold.
    Unchanged,
}

/// Grants one gift line while the non-gift subtotal is at or above the
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftRule {
    gift: GiftSpec,
    threshold: Money,
    message_template: String,
}

impl GiftRule {
    /// Create a rule with the default congratulation text.
    pub fn new(gift: GiftSpec, threshold: Money) -> Self {
        Self {
            gift,
            threshold,
            message_template: DEFAULT_GIFT_MESSAGE.to_string(),
        }
    }

    /// Override the congratulation text.
    pub fn with_message_template(mut self, template: impl Into<String>) -> Self {
        self.message_template = template.into();
        self
    }

    pub fn gift(&self) -> &GiftSpec {
        &self.gift
    }

    pub fn threshold(&self) -> Money {
        self.threshold
    }

    /// Congratulation text shown when the gift is granted.
    /// A blank template falls back to [`DEFAULT_GIFT_MESSAGE`].
    pub fn message(&self) -> String {
        let template = if self.message_template.trim().is_empty() {
            DEFAULT_GIFT_MESSAGE
        } else {
            &self.message_template
        };
        template.replace("{gift}", &self.gift.name)
    }

    /// Sum of price × quantity over every non-gift line.
    pub fn subtotal(&self, cart: &Cart) -> Money {
        cart.items()
            .iter()
            .filter(|item| !self.gift.is(&item.id))
            .map(|item| item.total())
            .sum()
    }

    /// Whether the cart currently carries the gift line.
    pub fn has_gift(&self, cart: &Cart) -> bool {
        cart.contains(&self.gift.id)
    }

    /// Whether the subtotal qualifies for the gift.
    pub fn is_eligible(&self, cart: &Cart) -> bool {
        self.subtotal(cart) >= self.threshold
    }

    /// Progress toward the threshold as a percentage, capped at 100.
    pub fn progress(&self, cart: &Cart) -> f64 {
        self.subtotal(cart).percent_of(self.threshold)
    }

    /// Amount still needed before the gift is granted.
    pub fn remaining(&self, cart: &Cart) -> Money {
        let remaining = self.threshold - self.subtotal(cart);
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Add or remove the gift line so it is present iff the subtotal is at
    /// or above the threshold. Applying it twice changes nothing.
    pub fn reconcile(&self, cart: &mut Cart) -> GiftTransition {
        let subtotal = self.subtotal(cart);
        let has_gift = self.has_gift(cart);

        if subtotal >= self.threshold && !has_gift {
            cart.push_gift(&self.gift);
            tracing::info!(
                gift_id = %self.gift.id,
                subtotal = subtotal.amount,
                threshold = self.threshold.amount,
                "free gift granted"
            );
            GiftTransition::Granted
        } else if subtotal < self.threshold && has_gift {
            cart.remove(&self.gift.id);
            tracing::info!(
                gift_id = %self.gift.id,
                subtotal = subtotal.amount,
                threshold = self.threshold.amount,
                "free gift revoked"
            );
            GiftTransition::Revoked
        } else {
            GiftTransition::Unchanged
        }
    }

    /// Pricing summary for a cart.
    pub fn pricing(&self, cart: &Cart) -> CartPricing {
        let subtotal = self.subtotal(cart);
        CartPricing {
            subtotal,
            threshold: self.threshold,
            remaining: self.remaining(cart),
            progress: self.progress(cart),
            eligible: subtotal >= self.threshold,
        }
    }
}
