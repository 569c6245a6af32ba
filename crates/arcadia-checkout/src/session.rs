//! # Checkout Session
//!
//! Orchestrates one shopper's path from cart to paid order.
//!
//! ## Payment Phase State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                          │
//! │  Uninitiated ──submit──► AwaitingBackendIntent ──intent ok──►           │
//! │                               │                   ReadyForPayment       │
//! │                               │                        │                 │
//! │                         intent failed            begin_payment          │
//! │                               │                        ▼                 │
//! │                               ▼                   Processing            │
//! │                            Failed ◄──declined/error────┤                │
//! │                               │                        │                 │
//! │                             retry                  succeeded             │
//! │                               │                        ▼                 │
//! │                               └──► AwaitingBackendIntent   Succeeded    │
//! │                                                                          │
//! │  Succeeded is terminal for the session: the cart is cleared and a new   │
//! │  session starts the next checkout.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coupon Semantics
//! One coupon at a time: applying a second code replaces the first. The
//! discount is re-derived from the LIVE subtotal on every totals call, so
//! editing the cart after applying a code can never carry a stale amount
//! into the payment intent.

use arcadia_cart::{CartStorage, CartStore};
use arcadia_core::checkout::compute_totals;
use arcadia_core::coupon;
use arcadia_core::money::Money;
use arcadia_core::shipping::{ShippingBasis, ShippingPolicy};
use arcadia_core::types::{CheckoutTotals, Coupon, CustomerInfo};
use arcadia_core::validation;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::backend::{
    LineItem, NotificationItem, NotificationKind, OrderNotification, PaymentIntent,
    PaymentIntentRequest, StorefrontBackend,
};
use crate::config::StorefrontConfig;
use crate::error::{CheckoutError, CheckoutResult};

// =============================================================================
// Payment Phase
// =============================================================================

/// Why a payment attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentFailure {
    /// The payment provider declined the card. The shopper can retry with
    /// another card.
    CardDeclined { message: String },

    /// Anything else: backend unreachable, intent rejected, provider error.
    Unexpected { message: String },
}

/// Where the session is in the payment flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaymentPhase {
    /// No checkout submitted yet; the cart is still being edited.
    #[default]
    Uninitiated,

    /// Contact info validated, waiting on the backend to open an intent.
    AwaitingBackendIntent,

    /// Intent open; the payment widget can collect payment.
    ReadyForPayment,

    /// The shopper confirmed payment; waiting on the provider's verdict.
    Processing,

    /// Paid. Terminal for this session.
    Succeeded,

    /// The attempt failed. `retry` re-opens an intent.
    Failed { reason: PaymentFailure },
}

impl std::fmt::Display for PaymentPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentPhase::Uninitiated => write!(f, "uninitiated"),
            PaymentPhase::AwaitingBackendIntent => write!(f, "awaiting backend intent"),
            PaymentPhase::ReadyForPayment => write!(f, "ready for payment"),
            PaymentPhase::Processing => write!(f, "processing"),
            PaymentPhase::Succeeded => write!(f, "succeeded"),
            PaymentPhase::Failed { .. } => write!(f, "failed"),
        }
    }
}

/// The payment provider's verdict, as reported by the payment widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Succeeded { payment_reference: String },
    Declined { message: String },
    Errored { message: String },
}

// =============================================================================
// Checkout Session
// =============================================================================

/// One shopper's checkout: the cart, an optional coupon, and the payment
/// phase, bound to a backend.
pub struct CheckoutSession<B: StorefrontBackend, S: CartStorage> {
    backend: B,
    cart: CartStore<S>,

    currency: String,
    policy: ShippingPolicy,
    basis: ShippingBasis,

    coupon: Option<Coupon>,
    customer: Option<CustomerInfo>,
    intent: Option<PaymentIntent>,
    phase: PaymentPhase,
}

impl<B: StorefrontBackend, S: CartStorage> CheckoutSession<B, S> {
    /// Creates a session over an existing cart store.
    pub fn new(backend: B, cart: CartStore<S>, config: &StorefrontConfig) -> Self {
        CheckoutSession {
            backend,
            cart,
            currency: config.currency.clone(),
            policy: config.shipping_policy(),
            basis: config.shipping_basis(),
            coupon: None,
            customer: None,
            intent: None,
            phase: PaymentPhase::Uninitiated,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The cart this session checks out.
    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Mutable cart access, for edits while the cart is still negotiable.
    ///
    /// Allowed only in `Uninitiated` and `Failed`: once an intent has been
    /// requested, the cart must stay identical to the line items priced
    /// into it, so the confirmation email matches what was charged. A
    /// failed attempt re-prices on retry, so edits reopen there.
    pub fn cart_mut(&mut self) -> CheckoutResult<&mut CartStore<S>> {
        match self.phase {
            PaymentPhase::Uninitiated | PaymentPhase::Failed { .. } => Ok(&mut self.cart),
            _ => Err(self.invalid_phase("edit cart")),
        }
    }

    /// Current payment phase.
    pub fn phase(&self) -> &PaymentPhase {
        &self.phase
    }

    /// The open payment intent, once one exists.
    pub fn intent(&self) -> Option<&PaymentIntent> {
        self.intent.as_ref()
    }

    /// The applied coupon, if any.
    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    /// The live price breakdown for the current cart and coupon.
    pub fn totals(&self) -> CheckoutTotals {
        compute_totals(
            self.cart.subtotal(),
            self.coupon.as_ref(),
            self.policy,
            self.basis,
            Utc::now(),
        )
    }

    // =========================================================================
    // Coupons
    // =========================================================================

    /// Looks up and applies a coupon code, returning the discount it grants
    /// at the current subtotal.
    ///
    /// Replaces any previously applied coupon. An ineligible coupon is
    /// rejected with the specific reason (inactive, expired, used up, or
    /// below minimum) and the previous coupon stays applied.
    pub async fn apply_coupon(&mut self, raw_code: &str) -> CheckoutResult<Money> {
        validation::validate_coupon_code(raw_code)?;
        let code = Coupon::canonical_code(raw_code);

        let coupon = self
            .backend
            .lookup_coupon(&code)
            .await?
            .ok_or(CheckoutError::UnknownCoupon { code: code.clone() })?;

        let discount = coupon::evaluate(&coupon, self.cart.subtotal(), Utc::now())?;

        info!(code = %code, discount_cents = discount.cents(), "coupon applied");
        self.coupon = Some(coupon);
        Ok(discount)
    }

    /// Removes the applied coupon, if any.
    pub fn remove_coupon(&mut self) {
        if self.coupon.take().is_some() {
            debug!("coupon removed");
        }
    }

    // =========================================================================
    // Payment Flow
    // =========================================================================

    /// Submits the checkout: validates contact info, then asks the backend
    /// to open a payment intent for the current cart.
    pub async fn submit(&mut self, customer: CustomerInfo) -> CheckoutResult<&PaymentIntent> {
        if self.phase != PaymentPhase::Uninitiated {
            return Err(self.invalid_phase("submit"));
        }
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        validation::validate_customer_info(&customer)?;
        self.customer = Some(customer);

        self.request_intent().await
    }

    /// Marks payment collection as started. Valid only once an intent is
    /// open.
    pub fn begin_payment(&mut self) -> CheckoutResult<()> {
        if self.phase != PaymentPhase::ReadyForPayment {
            return Err(self.invalid_phase("begin payment"));
        }
        self.phase = PaymentPhase::Processing;
        Ok(())
    }

    /// Records the payment provider's verdict.
    ///
    /// On success the cart is cleared, the coupon dropped, and a
    /// confirmation email dispatched. A failed email never fails the
    /// checkout: the shopper paid, and the backend keeps the order either
    /// way.
    pub async fn resolve_payment(
        &mut self,
        outcome: PaymentOutcome,
    ) -> CheckoutResult<&PaymentPhase> {
        if self.phase != PaymentPhase::Processing {
            return Err(self.invalid_phase("resolve payment"));
        }

        match outcome {
            PaymentOutcome::Succeeded { payment_reference } => {
                info!(reference = %payment_reference, "payment succeeded");
                self.phase = PaymentPhase::Succeeded;
                // Build the confirmation from the cart BEFORE clearing it;
                // the payload needs the purchased items.
                let notification = self.build_confirmation();
                self.cart.clear();
                self.coupon = None;
                if let Some(notification) = notification {
                    if let Err(e) = self.backend.send_order_notification(&notification).await {
                        warn!(
                            error = %e,
                            order = %notification.order_number,
                            "confirmation email failed; order is unaffected"
                        );
                    }
                }
            }
            PaymentOutcome::Declined { message } => {
                warn!(message = %message, "payment declined");
                self.phase = PaymentPhase::Failed {
                    reason: PaymentFailure::CardDeclined { message },
                };
            }
            PaymentOutcome::Errored { message } => {
                warn!(message = %message, "payment errored");
                self.phase = PaymentPhase::Failed {
                    reason: PaymentFailure::Unexpected { message },
                };
            }
        }

        Ok(&self.phase)
    }

    /// Retries a failed checkout, re-opening an intent with the contact
    /// info already validated on the original submit.
    pub async fn retry(&mut self) -> CheckoutResult<&PaymentIntent> {
        if !matches!(self.phase, PaymentPhase::Failed { .. }) {
            return Err(self.invalid_phase("retry"));
        }
        if self.customer.is_none() {
            return Err(CheckoutError::NothingToRetry);
        }

        self.request_intent().await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn request_intent(&mut self) -> CheckoutResult<&PaymentIntent> {
        let customer = self
            .customer
            .clone()
            .ok_or(CheckoutError::NothingToRetry)?;

        self.phase = PaymentPhase::AwaitingBackendIntent;

        let totals = self.totals();
        let request = PaymentIntentRequest {
            amount_cents: totals.grand_total_cents,
            currency: self.currency.clone(),
            line_items: self
                .cart
                .lines()
                .iter()
                .map(|l| LineItem {
                    product_id: l.product.id.clone(),
                    name: l.product.name.clone(),
                    unit_price_cents: l.product.unit_price_cents,
                    quantity: l.quantity,
                })
                .collect(),
            customer,
            coupon_code: self.coupon.as_ref().map(|c| c.code.clone()),
            // Fresh per attempt: a RETRY is a new submission, not a replay.
            idempotency_key: Uuid::new_v4().to_string(),
        };

        match self.backend.create_payment_intent(&request).await {
            Ok(intent) => {
                info!(
                    order = %intent.order_number,
                    amount_cents = intent.amount_cents,
                    "payment intent opened"
                );
                self.phase = PaymentPhase::ReadyForPayment;
                Ok(self.intent.insert(intent))
            }
            Err(e) => {
                warn!(error = %e, "payment intent request failed");
                self.phase = PaymentPhase::Failed {
                    reason: PaymentFailure::Unexpected {
                        message: e.to_string(),
                    },
                };
                Err(e.into())
            }
        }
    }

    fn build_confirmation(&self) -> Option<OrderNotification> {
        let intent = self.intent.as_ref()?;
        let customer = self.customer.as_ref()?;

        Some(OrderNotification {
            order_number: intent.order_number.clone(),
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            total_cents: intent.amount_cents,
            delivery_method: customer.delivery_method,
            shipping_address: customer.shipping_address.clone(),
            items: self
                .cart
                .lines()
                .iter()
                .map(|l| NotificationItem {
                    name: l.product.name.clone(),
                    quantity: l.quantity,
                    price_cents: l.product.unit_price_cents,
                })
                .collect(),
            kind: NotificationKind::Confirmation,
        })
    }

    fn invalid_phase(&self, action: &'static str) -> CheckoutError {
        CheckoutError::InvalidPhase {
            action,
            phase: self.phase.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use arcadia_core::types::{
        Address, Coupon, CustomerInfo, DeliveryMethod, Discount, ProductSnapshot,
    };

    use super::*;
    use crate::error::BackendError;

    // -------------------------------------------------------------------------
    // Test doubles
    // -------------------------------------------------------------------------

    #[derive(Default)]
    struct MemoryStorage {
        entries: HashMap<String, String>,
    }

    impl CartStorage for MemoryStorage {
        fn load(&self, key: &str) -> arcadia_cart::StoreResult<Option<String>> {
            Ok(self.entries.get(key).cloned())
        }
        fn save(&mut self, key: &str, value: &str) -> arcadia_cart::StoreResult<()> {
            self.entries.insert(key.to_string(), value.to_string());
            Ok(())
        }
        fn remove(&mut self, key: &str) -> arcadia_cart::StoreResult<()> {
            self.entries.remove(key);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockBackend {
        coupons: HashMap<String, Coupon>,
        intent_down: AtomicBool,
        intents: Mutex<Vec<PaymentIntentRequest>>,
        notifications: Mutex<Vec<OrderNotification>>,
    }

    impl StorefrontBackend for MockBackend {
        async fn lookup_coupon(&self, code: &str) -> Result<Option<Coupon>, BackendError> {
            Ok(self.coupons.get(code).cloned())
        }

        async fn create_payment_intent(
            &self,
            request: &PaymentIntentRequest,
        ) -> Result<PaymentIntent, BackendError> {
            if self.intent_down.load(Ordering::SeqCst) {
                return Err(BackendError::Unavailable("connection refused".into()));
            }
            let n = {
                let mut intents = self.intents.lock().unwrap();
                intents.push(request.clone());
                intents.len()
            };
            Ok(PaymentIntent {
                payment_handle: format!("pi_secret_{n}"),
                order_number: format!("ORD-{n:04}"),
                amount_cents: request.amount_cents,
                currency: request.currency.clone(),
            })
        }

        async fn fetch_order(&self, order_number: &str) -> Result<crate::backend::Order, BackendError> {
            Err(BackendError::NotFound {
                kind: "order",
                id: order_number.to_string(),
            })
        }

        async fn update_order_status(
            &self,
            order_number: &str,
            _status: arcadia_core::types::OrderStatus,
        ) -> Result<crate::backend::Order, BackendError> {
            Err(BackendError::NotFound {
                kind: "order",
                id: order_number.to_string(),
            })
        }

        async fn send_order_notification(
            &self,
            notification: &OrderNotification,
        ) -> Result<(), BackendError> {
            self.notifications.lock().unwrap().push(notification.clone());
            Ok(())
        }
    }

    // -------------------------------------------------------------------------
    // Fixtures
    // -------------------------------------------------------------------------

    fn snapshot(id: &str, price_cents: i64) -> ProductSnapshot {
        ProductSnapshot {
            id: id.to_string(),
            name: format!("Product {}", id),
            unit_price_cents: price_cents,
            stock: Some(10),
            image_url: None,
            weight_grams: None,
        }
    }

    fn ten_percent() -> Coupon {
        Coupon {
            code: "SAVE10".to_string(),
            discount: Discount::Percentage { bps: 1000 },
            minimum_order_cents: 0,
            usage_limit: None,
            times_used: 0,
            expires_at: None,
            is_active: true,
        }
    }

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            delivery_method: DeliveryMethod::Shipping,
            shipping_address: Some(Address {
                line1: "100 Main St".to_string(),
                line2: None,
                city: "Austin".to_string(),
                state: "TX".to_string(),
                postal_code: "78701".to_string(),
                country: Some("US".to_string()),
            }),
            billing_address: None,
        }
    }

    fn session_with(backend: MockBackend) -> CheckoutSession<MockBackend, MemoryStorage> {
        let mut cart = CartStore::open(MemoryStorage::default());
        // $10.00 × 2 + $5.00 × 1 = $25.00 subtotal
        cart.add_item(snapshot("1", 1000), 2);
        cart.add_item(snapshot("2", 500), 1);
        CheckoutSession::new(backend, cart, &StorefrontConfig::default())
    }

    // -------------------------------------------------------------------------
    // Tests
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_happy_path() {
        let mut backend = MockBackend::default();
        backend.coupons.insert("SAVE10".to_string(), ten_percent());
        let mut session = session_with(backend);

        let discount = session.apply_coupon("  save10 ").await.unwrap();
        assert_eq!(discount.cents(), 250);

        // $25.00 − $2.50 + $5.99 shipping = $28.49
        let totals = session.totals();
        assert_eq!(totals.grand_total_cents, 2849);

        let intent = session.submit(customer()).await.unwrap();
        assert_eq!(intent.amount_cents, 2849);
        let order_number = intent.order_number.clone();
        assert_eq!(*session.phase(), PaymentPhase::ReadyForPayment);

        session.begin_payment().unwrap();
        let phase = session
            .resolve_payment(PaymentOutcome::Succeeded {
                payment_reference: "ch_1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(*phase, PaymentPhase::Succeeded);

        // Cart cleared, confirmation dispatched.
        assert!(session.cart().is_empty());
        let notes = session.backend.notifications.lock().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].order_number, order_number);
        assert_eq!(notes[0].customer_email, "ada@example.com");
        assert_eq!(notes[0].total_cents, 2849);
        assert_eq!(notes[0].items.len(), 2);
        assert_eq!(notes[0].kind, NotificationKind::Confirmation);
    }

    #[tokio::test]
    async fn test_empty_cart_cannot_submit() {
        let mut session = session_with(MockBackend::default());
        session.cart_mut().unwrap().clear();

        let err = session.submit(customer()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
        assert_eq!(*session.phase(), PaymentPhase::Uninitiated);
    }

    #[tokio::test]
    async fn test_unknown_coupon_rejected() {
        let mut session = session_with(MockBackend::default());

        let err = session.apply_coupon("NOPE").await.unwrap_err();
        assert!(matches!(err, CheckoutError::UnknownCoupon { .. }));
        assert!(session.coupon().is_none());
    }

    #[tokio::test]
    async fn test_ineligible_coupon_keeps_previous() {
        let mut backend = MockBackend::default();
        backend.coupons.insert("SAVE10".to_string(), ten_percent());
        let mut big_spender = ten_percent();
        big_spender.code = "BIG50".to_string();
        big_spender.minimum_order_cents = 10000;
        backend.coupons.insert("BIG50".to_string(), big_spender);

        let mut session = session_with(backend);
        session.apply_coupon("SAVE10").await.unwrap();

        let err = session.apply_coupon("BIG50").await.unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Coupon(arcadia_core::CouponError::BelowMinimum { .. })
        ));
        assert_eq!(session.coupon().unwrap().code, "SAVE10");
    }

    #[tokio::test]
    async fn test_second_coupon_replaces_first() {
        let mut backend = MockBackend::default();
        backend.coupons.insert("SAVE10".to_string(), ten_percent());
        let five_off = Coupon {
            code: "FIVEOFF".to_string(),
            discount: Discount::FixedAmount { cents: 500 },
            ..ten_percent()
        };
        backend.coupons.insert("FIVEOFF".to_string(), five_off);

        let mut session = session_with(backend);
        session.apply_coupon("SAVE10").await.unwrap();
        session.apply_coupon("FIVEOFF").await.unwrap();

        // Only the fixed $5.00 applies, never both.
        assert_eq!(session.totals().discount_cents, 500);
    }

    #[tokio::test]
    async fn test_cart_edit_after_coupon_recomputes_discount() {
        let mut backend = MockBackend::default();
        backend.coupons.insert("SAVE10".to_string(), ten_percent());
        let mut session = session_with(backend);

        session.apply_coupon("SAVE10").await.unwrap();
        assert_eq!(session.totals().discount_cents, 250);

        session
            .cart_mut()
            .unwrap()
            .update_quantity("1", 4); // subtotal now $45.00
        assert_eq!(session.totals().discount_cents, 450);
    }

    #[tokio::test]
    async fn test_intent_failure_then_retry() {
        let backend = MockBackend::default();
        backend.intent_down.store(true, Ordering::SeqCst);
        let mut session = session_with(backend);

        let err = session.submit(customer()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Backend(_)));
        assert!(matches!(session.phase(), PaymentPhase::Failed { .. }));

        // Backend recovers; retry reuses the validated contact info.
        session.backend.intent_down.store(false, Ordering::SeqCst);
        let intent = session.retry().await.unwrap();
        assert_eq!(intent.amount_cents, 2500 + 599);
        assert_eq!(*session.phase(), PaymentPhase::ReadyForPayment);

        // Only the retry reached the backend; the first attempt died at
        // the transport.
        let intents = session.backend.intents.lock().unwrap();
        assert_eq!(intents.len(), 1);
    }

    #[tokio::test]
    async fn test_declined_payment_can_retry() {
        let mut session = session_with(MockBackend::default());
        session.submit(customer()).await.unwrap();
        session.begin_payment().unwrap();

        session
            .resolve_payment(PaymentOutcome::Declined {
                message: "insufficient funds".to_string(),
            })
            .await
            .unwrap();
        assert!(matches!(
            session.phase(),
            PaymentPhase::Failed {
                reason: PaymentFailure::CardDeclined { .. }
            }
        ));
        // The cart survives a failed payment.
        assert!(!session.cart().is_empty());

        session.retry().await.unwrap();
        assert_eq!(*session.phase(), PaymentPhase::ReadyForPayment);

        // A fresh idempotency key per attempt: a retry is a new submission.
        let intents = session.backend.intents.lock().unwrap();
        assert_eq!(intents.len(), 2);
        assert_ne!(intents[0].idempotency_key, intents[1].idempotency_key);
    }

    #[tokio::test]
    async fn test_phase_guards() {
        let mut session = session_with(MockBackend::default());

        // Cannot collect payment before an intent exists.
        assert!(matches!(
            session.begin_payment().unwrap_err(),
            CheckoutError::InvalidPhase { .. }
        ));

        // Cannot retry before anything failed.
        assert!(matches!(
            session.retry().await.unwrap_err(),
            CheckoutError::InvalidPhase { .. }
        ));

        // Cannot submit twice.
        session.submit(customer()).await.unwrap();
        assert!(matches!(
            session.submit(customer()).await.unwrap_err(),
            CheckoutError::InvalidPhase { .. }
        ));
    }

    #[tokio::test]
    async fn test_cart_locked_once_intent_requested() {
        let mut session = session_with(MockBackend::default());
        session.submit(customer()).await.unwrap();

        // With an intent open, the cart must stay identical to the line
        // items it priced, so the confirmation matches what was charged.
        assert!(matches!(
            session.cart_mut().unwrap_err(),
            CheckoutError::InvalidPhase { .. }
        ));
        session.begin_payment().unwrap();
        assert!(session.cart_mut().is_err());

        // A failed attempt re-prices on retry, so edits reopen.
        session
            .resolve_payment(PaymentOutcome::Declined {
                message: "insufficient funds".to_string(),
            })
            .await
            .unwrap();
        session.cart_mut().unwrap().update_quantity("1", 1);

        let intent = session.retry().await.unwrap();
        assert_eq!(intent.amount_cents, 1000 + 500 + 599);
    }

    #[tokio::test]
    async fn test_invalid_contact_info_blocks_submit() {
        let mut session = session_with(MockBackend::default());

        let mut info = customer();
        info.shipping_address = None; // shipping delivery requires an address

        let err = session.submit(info).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)));
        assert_eq!(*session.phase(), PaymentPhase::Uninitiated);
        assert!(session.backend.intents.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_pickup_order_needs_no_address() {
        let mut session = session_with(MockBackend::default());

        let mut info = customer();
        info.delivery_method = DeliveryMethod::Pickup;
        info.shipping_address = None;

        session.submit(info).await.unwrap();
        assert_eq!(*session.phase(), PaymentPhase::ReadyForPayment);
    }
}
