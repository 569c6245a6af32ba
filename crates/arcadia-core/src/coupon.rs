//! # Coupon Evaluator
//!
//! Eligibility checks and discount computation for coupon codes.
//!
//! ## Evaluation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  evaluate(coupon, subtotal, now)                                        │
//! │                                                                         │
//! │  1. is_active?          ── no ──► Err(Inactive)                         │
//! │  2. expires_at < now?   ── yes ─► Err(Expired)                          │
//! │  3. times_used >= limit?── yes ─► Err(UsageLimitExceeded)               │
//! │  4. subtotal < minimum? ── yes ─► Err(BelowMinimum)                     │
//! │  5. compute discount:                                                   │
//! │     Percentage(bps)   → subtotal × bps / 10000 (rounded)               │
//! │     FixedAmount(¢)    → min(¢, subtotal)                               │
//! │                                                                         │
//! │  The discount never exceeds the subtotal, so no negative totals.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each rejection carries its own error variant so the UI can explain exactly
//! why a code did nothing; a zero discount is never applied silently.
//!
//! The clock is a parameter (`now`) rather than a `Utc::now()` call so the
//! evaluator stays pure and boundary cases are testable.

use chrono::{DateTime, Utc};

use crate::error::CouponError;
use crate::money::Money;
use crate::types::{Coupon, Discount};

/// Evaluates a coupon against a subtotal.
///
/// Returns the discount amount when the coupon is applicable, or the precise
/// ineligibility reason otherwise. Stateless: safe to call speculatively to
/// preview totals before committing.
pub fn evaluate(coupon: &Coupon, subtotal: Money, now: DateTime<Utc>) -> Result<Money, CouponError> {
    if !coupon.is_active {
        return Err(CouponError::Inactive {
            code: coupon.code.clone(),
        });
    }

    if let Some(expires_at) = coupon.expires_at {
        if expires_at <= now {
            return Err(CouponError::Expired {
                code: coupon.code.clone(),
            });
        }
    }

    if let Some(limit) = coupon.usage_limit {
        if coupon.times_used >= limit {
            return Err(CouponError::UsageLimitExceeded {
                code: coupon.code.clone(),
            });
        }
    }

    if subtotal < coupon.minimum_order() {
        return Err(CouponError::BelowMinimum {
            code: coupon.code.clone(),
            minimum_cents: coupon.minimum_order_cents,
            subtotal_cents: subtotal.cents(),
        });
    }

    let discount = match coupon.discount {
        Discount::Percentage { bps } => subtotal.percentage(bps),
        Discount::FixedAmount { cents } => Money::from_cents(cents),
    };

    // Cap at the subtotal in every case: a fixed discount larger than the
    // cart, or a percentage above 100%, discounts exactly the subtotal.
    Ok(discount.min(subtotal))
}

// =============================================================================
// Unit Tests
// =============================================================================
