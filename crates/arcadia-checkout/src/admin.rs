//! # Order Desk
//!
//! Administrative order-status updates: fetch the order, run the transition
//! guard, push the change, notify the customer.
//!
//! The guard (`arcadia_core::order::plan_transition`) runs client-side so an
//! admin gets an immediate, specific rejection instead of a backend error;
//! the backend enforces the same rule authoritatively.

use arcadia_core::order::{plan_transition, StatusChange};
use arcadia_core::types::OrderStatus;
use tracing::{info, warn};

use crate::backend::{
    NotificationItem, NotificationKind, Order, OrderNotification, StorefrontBackend,
};
use crate::error::CheckoutResult;

/// Administrative handle over backend orders.
pub struct OrderDesk<B: StorefrontBackend> {
    backend: B,
}

impl<B: StorefrontBackend> OrderDesk<B> {
    pub fn new(backend: B) -> Self {
        OrderDesk { backend }
    }

    /// Fetches an order.
    pub async fn order(&self, order_number: &str) -> CheckoutResult<Order> {
        Ok(self.backend.fetch_order(order_number).await?)
    }

    /// Moves an order to a new status.
    ///
    /// ## Behavior
    /// - `pending` → anything: applied, and a status-update email goes out
    /// - re-issuing the order's current status: no-op, no write, no email
    /// - any other change to a resolved order: `AlreadyResolved`
    ///
    /// The no-op path is what makes concurrent admin actions safe: whoever
    /// loses the race gets a harmless no-op instead of a double update.
    pub async fn transition(
        &self,
        order_number: &str,
        requested: OrderStatus,
    ) -> CheckoutResult<Order> {
        let order = self.backend.fetch_order(order_number).await?;

        match plan_transition(order.status, requested)? {
            StatusChange::NoOp => {
                info!(order = %order_number, status = %requested, "status unchanged, no-op");
                Ok(order)
            }
            StatusChange::Apply => {
                let updated = self
                    .backend
                    .update_order_status(order_number, requested)
                    .await?;
                info!(order = %order_number, from = %order.status, to = %requested, "order status updated");

                self.notify(&updated, NotificationKind::StatusUpdate).await;
                Ok(updated)
            }
        }
    }

    /// Re-sends the confirmation email for an order, for "never got the
    /// email" support requests. Safe to repeat: the notification service
    /// only mails, it never re-charges or re-ships.
    pub async fn resend_confirmation(&self, order_number: &str) -> CheckoutResult<()> {
        let order = self.backend.fetch_order(order_number).await?;
        let notification = notification_for(&order, NotificationKind::Confirmation);
        Ok(self.backend.send_order_notification(&notification).await?)
    }

    /// Email dispatch around a successful update is best-effort: the status
    /// change already happened, so a mail failure is logged, not returned.
    async fn notify(&self, order: &Order, kind: NotificationKind) {
        let notification = notification_for(order, kind);
        if let Err(e) = self.backend.send_order_notification(&notification).await {
            warn!(error = %e, order = %order.order_number, "status email failed to send");
        }
    }
}

fn notification_for(order: &Order, kind: NotificationKind) -> OrderNotification {
    OrderNotification {
        order_number: order.order_number.clone(),
        customer_name: order.customer_name.clone(),
        customer_email: order.customer_email.clone(),
        total_cents: order.total_cents,
        delivery_method: order.delivery_method,
        shipping_address: order.shipping_address.clone(),
        items: order
            .items
            .iter()
            .map(|i| NotificationItem {
                name: i.name.clone(),
                quantity: i.quantity,
                price_cents: i.unit_price_cents,
            })
            .collect(),
        kind,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
