//! # Checkout Totals
//!
//! Composes the subtotal, coupon discount and shipping cost into the price
//! breakdown sent to the backend with a payment-intent request.
//!
//! Totals are DERIVED, never cached: the discount is re-evaluated against the
//! live subtotal on every call, so a cart edited after a coupon was applied
//! can never carry a stale discount into the payment intent.

use chrono::{DateTime, Utc};

use crate::coupon;
use crate::money::Money;
use crate::shipping::{ShippingBasis, ShippingPolicy};
use crate::types::{CheckoutTotals, Coupon};

/// Computes the full checkout breakdown.
///
/// A coupon that is no longer applicable at the current subtotal (e.g. the
/// cart shrank below its minimum after the code was applied) contributes a
/// zero discount here; surfacing the reason to the shopper is the
/// orchestrator's job at apply time.
pub fn compute_totals(
    subtotal: Money,
    coupon: Option<&Coupon>,
    policy: ShippingPolicy,
    basis: ShippingBasis,
    now: DateTime<Utc>,
) -> CheckoutTotals {
    let discount = coupon
        .and_then(|c| coupon::evaluate(c, subtotal, now).ok())
        .unwrap_or(Money::zero());

    let shipping_basis = match basis {
        ShippingBasis::PreDiscount => subtotal,
        ShippingBasis::PostDiscount => subtotal - discount,
    };
    let shipping = policy.cost(shipping_basis);

    let grand_total = subtotal - discount + shipping;

    CheckoutTotals {
        subtotal_cents: subtotal.cents(),
        discount_cents: discount.cents(),
        shipping_cents: shipping.cents(),
        grand_total_cents: grand_total.cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
