//! # Storefront Backend Interface
//!
//! The trait and wire types for everything the checkout layer asks of the
//! commerce backend: coupon lookup, payment-intent creation, order reads,
//! status updates, and notification dispatch.
//!
//! ## Trust Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  client (this workspace)              │  backend (authoritative)        │
//! │  ───────────────────────              │  ───────────────────────        │
//! │  cart contents, coupon preview,       │  prices re-verified, coupon     │
//! │  totals preview, validation           │  re-evaluated, intent amount    │
//! │                                       │  computed server-side           │
//! │                                                                          │
//! │  The client sends its view of the cart; it never dictates the charge   │
//! │  amount. The intent the backend returns carries the amount it WILL     │
//! │  charge, which the UI displays.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use arcadia_core::types::{Address, Coupon, CustomerInfo, DeliveryMethod, OrderStatus};
use serde::{Deserialize, Serialize};

use crate::error::BackendError;

// =============================================================================
// Wire Types
// =============================================================================

/// One cart line as sent to (and echoed back by) the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
}

/// The request to open a payment intent for the current cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    /// Client-computed grand total (cents). Display/verification only; the
    /// backend recomputes the charge from the line items.
    pub amount_cents: i64,

    /// ISO currency code, e.g. "usd".
    pub currency: String,

    pub line_items: Vec<LineItem>,
    pub customer: CustomerInfo,

    /// Canonical coupon code, if one is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,

    /// Client-generated key so a retried request cannot open a second
    /// intent for the same submission.
    pub idempotency_key: String,
}

/// A payment intent opened by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    /// Opaque handle the payment widget needs to collect payment.
    pub payment_handle: String,

    /// The pending order created alongside the intent.
    pub order_number: String,

    /// The amount (cents) the backend will charge.
    pub amount_cents: i64,

    pub currency: String,
}

/// An order as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_number: String,
    pub status: OrderStatus,
    pub total_cents: i64,

    /// Reference into the payment provider, once payment was attempted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,

    pub delivery_method: DeliveryMethod,
    pub customer_name: String,
    pub customer_email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    pub items: Vec<LineItem>,
}

/// What an order email is telling the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Order placed and payment succeeded.
    Confirmation,
    /// An administrator changed the order status.
    StatusUpdate,
}

/// One line of an order notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub name: String,
    pub quantity: i64,
    pub price_cents: i64,
}

/// The fire-and-forget payload the notification service turns into an order
/// email. Re-sending is safe: the recipient side only mails, it never
/// re-charges or re-ships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderNotification {
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total_cents: i64,
    pub delivery_method: DeliveryMethod,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    pub items: Vec<NotificationItem>,
    pub kind: NotificationKind,
}

// =============================================================================
// Backend Trait
// =============================================================================

/// Everything the checkout layer needs from the commerce backend.
///
/// Implementations wrap a transport (HTTP client, IPC bridge); tests plug in
/// an in-memory mock. Methods take `&self` so one backend handle can be
/// shared across a session and an order desk.
pub trait StorefrontBackend {
    /// Looks up a coupon by canonical code. `Ok(None)` means the code is
    /// simply unknown; `Err` means the lookup itself failed.
    fn lookup_coupon(
        &self,
        code: &str,
    ) -> impl std::future::Future<Output = Result<Option<Coupon>, BackendError>> + Send;

    /// Opens a payment intent and its pending order.
    fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> impl std::future::Future<Output = Result<PaymentIntent, BackendError>> + Send;

    /// Fetches the current state of an order.
    fn fetch_order(
        &self,
        order_number: &str,
    ) -> impl std::future::Future<Output = Result<Order, BackendError>> + Send;

    /// Writes a new order status, returning the updated order.
    fn update_order_status(
        &self,
        order_number: &str,
        status: OrderStatus,
    ) -> impl std::future::Future<Output = Result<Order, BackendError>> + Send;

    /// Dispatches an order email to the customer.
    fn send_order_notification(
        &self,
        notification: &OrderNotification,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_request_wire_shape() {
        let request = PaymentIntentRequest {
            amount_cents: 2849,
            currency: "usd".to_string(),
            line_items: vec![LineItem {
                product_id: "sku-1".to_string(),
                name: "Notebook".to_string(),
                unit_price_cents: 1250,
                quantity: 2,
            }],
            customer: CustomerInfo::default(),
            coupon_code: Some("SAVE10".to_string()),
            idempotency_key: "k-1".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["amountCents"], 2849);
        assert_eq!(value["couponCode"], "SAVE10");
        assert_eq!(value["lineItems"][0]["productId"], "sku-1");
    }

    #[test]
    fn test_absent_coupon_omitted_from_wire() {
        let request = PaymentIntentRequest {
            amount_cents: 1000,
            currency: "usd".to_string(),
            line_items: vec![],
            customer: CustomerInfo::default(),
            coupon_code: None,
            idempotency_key: "k-2".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("couponCode").is_none());
    }
}
