//! # Domain Types
//!
//! Core domain types used throughout the Arcadia storefront engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │ ProductSnapshot  │   │     Coupon       │   │  CheckoutTotals  │    │
//! │  │  ──────────────  │   │  ──────────────  │   │  ──────────────  │    │
//! │  │  id (opaque)     │   │  code (UPPER)    │   │  subtotal        │    │
//! │  │  name            │   │  discount        │   │  discount        │    │
//! │  │  unit_price      │   │  min_order       │   │  shipping        │    │
//! │  │  stock / image   │   │  usage counters  │   │  grand_total     │    │
//! │  └──────────────────┘   └──────────────────┘   └──────────────────┘    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐                           │
//! │  │    Discount      │   │   OrderStatus    │                           │
//! │  │  ──────────────  │   │  ──────────────  │                           │
//! │  │  Percentage(bps) │   │  Pending         │                           │
//! │  │  FixedAmount(¢)  │   │  Confirmed*      │  (* = terminal)           │
//! │  └──────────────────┘   │  Cancelled*      │                           │
//! │                         │  Failed*         │                           │
//! │                         └──────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A cart line freezes the product data it was added with (`ProductSnapshot`).
//! Prices agreed to in the cart never silently change while shopping, even if
//! the catalog price does.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Snapshot
// =============================================================================

/// The product data frozen into a cart line at add time.
///
/// This is deliberately NOT the live catalog record: the cart displays and
/// prices exactly what the shopper agreed to when they clicked "add".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    /// Opaque catalog identifier.
    pub id: String,

    /// Display name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub unit_price_cents: i64,

    /// Stock level observed at add time. The store itself never enforces
    /// this; the caller validates stock before adding.
    pub stock: Option<i64>,

    /// Image reference for the cart panel.
    pub image_url: Option<String>,

    /// Unit weight in grams, when the catalog provides one.
    pub weight_grams: Option<i64>,
}

impl ProductSnapshot {
    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Delivery Method
// =============================================================================

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    /// Shipped to a customer address (requires a complete address).
    Shipping,
    /// Picked up in store.
    Pickup,
}

impl Default for DeliveryMethod {
    fn default() -> Self {
        DeliveryMethod::Shipping
    }
}

// =============================================================================
// Customer Info
// =============================================================================

/// A postal address collected during checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Contact and delivery details collected before requesting a payment intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub delivery_method: DeliveryMethod,
    /// Required (and validated) when `delivery_method` is `Shipping`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
}

// =============================================================================
// Coupon
// =============================================================================

/// The discount a coupon grants.
///
/// A closed tagged variant on purpose: the original storefront carried the
/// kind as a loose string next to an untyped number, which made it possible
/// to apply a "percentage" of 599 cents. Here the unit travels with the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Discount {
    /// Percentage of the subtotal, in basis points (1000 = 10%).
    Percentage { bps: u32 },
    /// Flat amount off, in cents. Capped at the subtotal when applied.
    FixedAmount { cents: i64 },
}

/// A coupon record as returned by the backend lookup.
///
/// Read-only to the checkout engine: the backend owns the definition and the
/// `times_used` counter; the engine only evaluates eligibility and computes
/// the discount amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Canonical uppercase code. Lookups are case-insensitive.
    pub code: String,

    /// What the coupon grants.
    pub discount: Discount,

    /// Minimum subtotal (cents) the cart must reach to qualify.
    pub minimum_order_cents: i64,

    /// Maximum number of redemptions, if limited.
    pub usage_limit: Option<u32>,

    /// Redemptions so far (backend-maintained).
    pub times_used: u32,

    /// Expiry timestamp, if the coupon expires.
    #[ts(as = "Option<String>")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Whether the coupon is currently enabled.
    pub is_active: bool,
}

impl Coupon {
    /// Canonicalizes a user-entered code: trimmed, uppercase.
    pub fn canonical_code(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Returns the minimum order amount as Money.
    #[inline]
    pub fn minimum_order(&self) -> Money {
        Money::from_cents(self.minimum_order_cents)
    }
}

// =============================================================================
// Checkout Totals
// =============================================================================

/// The derived price breakdown for a checkout preview or payment intent.
///
/// ## Invariants
/// - `grand_total = subtotal - discount + shipping`
/// - `discount <= subtotal` (enforced by the coupon evaluator)
///
/// Derived, never stored: totals are recomputed from the live cart whenever
/// they are needed, so a cart edit after applying a coupon can never leave a
/// stale discount behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTotals {
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub shipping_cents: i64,
    pub grand_total_cents: i64,
}

impl CheckoutTotals {
    /// Returns the grand total as Money.
    #[inline]
    pub fn grand_total(&self) -> Money {
        Money::from_cents(self.grand_total_cents)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle status of a backend-owned order.
///
/// ## State Machine
/// ```text
/// pending ──► confirmed   (terminal)
///         ──► cancelled   (terminal)
///         ──► failed      (terminal)
/// ```
/// Only `pending` may transition. See [`crate::order::plan_transition`] for
/// the guard that enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Awaiting payment confirmation or administrative action.
    Pending,
    /// Payment confirmed; order is being fulfilled.
    Confirmed,
    /// Cancelled by an administrator.
    Cancelled,
    /// Payment failed.
    Failed,
}

impl OrderStatus {
    /// Terminal statuses permit no further transition.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, OrderStatus::Pending)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Confirmed => write!(f, "confirmed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
            OrderStatus::Failed => write!(f, "failed"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_code() {
        assert_eq!(Coupon::canonical_code("  save10 "), "SAVE10");
        assert_eq!(Coupon::canonical_code("SAVE10"), "SAVE10");
    }

    #[test]
    fn test_order_status_terminal() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(OrderStatus::Confirmed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(OrderStatus::Failed.is_terminal());
    }

    #[test]
    fn test_discount_serde_shape() {
        let pct = serde_json::to_value(Discount::Percentage { bps: 1000 }).unwrap();
        assert_eq!(pct["kind"], "percentage");
        assert_eq!(pct["bps"], 1000);

        let fixed = serde_json::to_value(Discount::FixedAmount { cents: 500 }).unwrap();
        assert_eq!(fixed["kind"], "fixed_amount");
        assert_eq!(fixed["cents"], 500);
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
