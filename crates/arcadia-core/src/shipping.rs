//! # Shipping Calculator
//!
//! Free-shipping threshold logic. Pure function of its inputs: the threshold
//! and flat rate are configuration values (see `arcadia-checkout`'s
//! `StorefrontConfig`), never hardcoded here.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Which amount the free-shipping threshold is compared against.
///
/// The storefront historically evaluates the threshold against the
/// PRE-discount subtotal: a $55 cart with a $10-off coupon still ships free
/// past a $50 threshold... but a $55 cart never does with a $60 threshold,
/// coupon or not. That behavior is preserved as the default and kept
/// explicit here rather than silently "corrected".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingBasis {
    /// Threshold compared against the subtotal before any coupon discount.
    #[default]
    PreDiscount,
    /// Threshold compared against the discounted subtotal.
    PostDiscount,
}

/// Shipping pricing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Subtotal at or above which shipping is free.
    pub free_threshold: Money,

    /// Flat shipping rate charged below the threshold.
    pub flat_rate: Money,
}

impl ShippingPolicy {
    /// Creates a policy from a threshold and a flat rate.
    pub const fn new(free_threshold: Money, flat_rate: Money) -> Self {
        ShippingPolicy {
            free_threshold,
            flat_rate,
        }
    }

    /// Shipping cost for a given basis amount.
    ///
    /// `basis >= threshold` → free; otherwise the flat rate.
    pub fn cost(&self, basis: Money) -> Money {
        if basis >= self.free_threshold {
            Money::zero()
        } else {
            self.flat_rate
        }
    }
}
