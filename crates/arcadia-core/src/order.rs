//! # Order Status Transition Rules
//!
//! The administrative order-status state machine.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  current = pending,  requested = anything     → Apply                   │
//! │  current = terminal, requested = current      → NoOp  (idempotent)      │
//! │  current = terminal, requested = different    → Err(AlreadyResolved)    │
//! │                                                                         │
//! │  The idempotent NoOp is the whole concurrency story for admin actions:  │
//! │  two admins confirming the same order race harmlessly; whoever loses    │
//! │  the race gets a NoOp, not a double side effect.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The guard is pure; `arcadia-checkout`'s `OrderDesk` runs it client-side
//! before pushing the update to the backend, which enforces the same rule
//! server-side.

use crate::error::OrderStatusError;
use crate::types::OrderStatus;

/// The outcome of planning a status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// The transition is valid and should be applied.
    Apply,
    /// The order is already in the requested terminal status; nothing to do.
    NoOp,
}

/// Validates a requested status transition against the current status.
///
/// A `pending` → `pending` request is also a `NoOp`: nothing changed, and
/// rejecting it would turn a harmless duplicate submit into an error.
pub fn plan_transition(
    current: OrderStatus,
    requested: OrderStatus,
) -> Result<StatusChange, OrderStatusError> {
    if current == requested {
        return Ok(StatusChange::NoOp);
    }

    if current.is_terminal() {
        return Err(OrderStatusError::AlreadyResolved { current, requested });
    }

    Ok(StatusChange::Apply)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_may_transition_anywhere() {
        for target in [
            OrderStatus::Confirmed,
            OrderStatus::Cancelled,
            OrderStatus::Failed,
        ] {
            assert_eq!(
                plan_transition(OrderStatus::Pending, target).unwrap(),
                StatusChange::Apply
            );
        }
    }

    #[test]
    fn test_terminal_states_are_immutable() {
        // Once confirmed, any different transition is rejected...
        for target in [OrderStatus::Failed, OrderStatus::Cancelled, OrderStatus::Pending] {
            let err = plan_transition(OrderStatus::Confirmed, target).unwrap_err();
            assert!(matches!(err, OrderStatusError::AlreadyResolved { .. }));
        }
    }

    #[test]
    fn test_reissued_terminal_status_is_noop() {
        // ...but re-issuing the same terminal status succeeds as a no-op.
        assert_eq!(
            plan_transition(OrderStatus::Confirmed, OrderStatus::Confirmed).unwrap(),
            StatusChange::NoOp
        );
        assert_eq!(
            plan_transition(OrderStatus::Cancelled, OrderStatus::Cancelled).unwrap(),
            StatusChange::NoOp
        );
    }

    #[test]
    fn test_pending_to_pending_is_noop() {
        assert_eq!(
            plan_transition(OrderStatus::Pending, OrderStatus::Pending).unwrap(),
            StatusChange::NoOp
        );
    }
}
