//! # Error Types
//!
//! Domain-specific error types for arcadia-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  arcadia-core errors (this file)                                       │
//! │  ├── CoreError         - General domain errors                         │
//! │  ├── ValidationError   - Checkout input validation failures            │
//! │  ├── CouponError       - One variant per ineligibility reason          │
//! │  └── OrderStatusError  - Invalid administrative transitions            │
//! │                                                                         │
//! │  arcadia-cart errors (separate crate)                                  │
//! │  └── StoreError        - Durable storage failures (non-fatal)          │
//! │                                                                         │
//! │  arcadia-checkout errors (separate crate)                              │
//! │  ├── BackendError      - Backend/network round-trip failures           │
//! │  └── CheckoutError     - What the UI sees during checkout              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, amounts, status)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::OrderStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Coupon is not applicable to the current subtotal.
    #[error("Coupon error: {0}")]
    Coupon(#[from] CouponError),

    /// Administrative order transition was rejected.
    #[error("Order status error: {0}")]
    OrderStatus(#[from] OrderStatusError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Coupon Error
// =============================================================================

/// Why a coupon is not applicable.
///
/// One variant per reason, never a silent zero discount: the UI must be able
/// to tell the shopper exactly why their code did nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouponError {
    /// The coupon has been disabled by the backend.
    #[error("Coupon '{code}' is not active")]
    Inactive { code: String },

    /// The coupon's expiry timestamp is in the past.
    #[error("Coupon '{code}' has expired")]
    Expired { code: String },

    /// The coupon has already been redeemed its maximum number of times.
    #[error("Coupon '{code}' has reached its usage limit")]
    UsageLimitExceeded { code: String },

    /// The cart subtotal is below the coupon's minimum order amount.
    #[error("Coupon '{code}' requires a minimum order of {minimum_cents} cents (subtotal is {subtotal_cents})")]
    BelowMinimum {
        code: String,
        minimum_cents: i64,
        subtotal_cents: i64,
    },
}

// =============================================================================
// Order Status Error
// =============================================================================

/// Rejection of an administrative order-status transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderStatusError {
    /// The order is already in a terminal status and a *different* status
    /// was requested. Re-issuing the same terminal status is a no-op, not
    /// an error; see [`crate::order::plan_transition`].
    #[error("Order is already resolved as {current}, cannot transition to {requested}")]
    AlreadyResolved {
        current: OrderStatus,
        requested: OrderStatus,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any backend round-trip runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. malformed email or coupon code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
