//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest unit of the store's single
//! currency. Formatting with a symbol is left to whoever renders the cart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// A monetary amount in the smallest currency unit.
///
/// Pricing arithmetic saturates at the `i64` bounds so subtotal and
/// threshold comparisons never fail.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount: i64,
}

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Add another amount, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount))
    }

    /// Subtract another amount, saturating at the numeric bounds.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money::new(self.amount.saturating_sub(other.amount))
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn times(&self, quantity: u32) -> Money {
        Money::new(self.amount.saturating_mul(i64::from(quantity)))
    }

    /// Express this amount as a percentage of `whole`, capped at 100.
    ///
    /// A zero `whole` is always fully reached.
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.amount <= 0 {
            return 100.0;
        }
        let ratio = self.amount as f64 * 100.0 / whole.amount as f64;
        ratio.clamp(0.0, 100.0)
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money::new(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        self.saturating_sub(other)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount)
    }
}
