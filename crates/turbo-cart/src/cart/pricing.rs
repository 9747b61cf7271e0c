//! Cart pricing summary.

use crate::money::Money;
use serde::Serialize;

/// Subtotal and gift-threshold figures for a cart.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CartPricing {
    /// Sum over non-gift lines.
    pub subtotal: Money,
    /// Subtotal needed for the free gift.
    pub threshold: Money,
    /// Amount still missing before the gift is granted.
    pub remaining: Money,
    /// Progress toward the threshold (0.0 - 100.0).
    pub progress: f64,
    /// Whether the subtotal qualifies for the gift.
    pub eligible: bool,
}

impl CartPricing {
    /// Progress rounded down to a whole percentage, for progress bars.
    pub fn progress_percent(&self) -> u8 {
        self.progress.floor().clamp(0.0, 100.0) as u8
    }
}
