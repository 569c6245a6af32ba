//! # Checkout Error Types
//!
//! Errors for the orchestration layer. Domain rule violations arrive as
//! `arcadia_core` errors and are wrapped, not re-described; transport
//! failures arrive as [`BackendError`]s from whichever backend
//! implementation is plugged in.

use arcadia_core::error::{CouponError, OrderStatusError, ValidationError};

// =============================================================================
// Backend Error
// =============================================================================

/// Errors surfaced by a [`crate::backend::StorefrontBackend`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend could not be reached or timed out.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backend understood the request and refused it.
    #[error("backend rejected request: {0}")]
    Rejected(String),

    /// A referenced entity does not exist on the backend.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Errors from the checkout session and order desk.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Coupon(#[from] CouponError),

    #[error(transparent)]
    OrderStatus(#[from] OrderStatusError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The entered code matched no coupon on the backend.
    #[error("coupon code '{code}' not recognized")]
    UnknownCoupon { code: String },

    /// Checkout requires at least one cart line.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// An operation was invoked in a payment phase that does not allow it.
    #[error("cannot {action} while payment is {phase}")]
    InvalidPhase {
        action: &'static str,
        phase: String,
    },

    /// Retry was requested but no prior submission exists to retry.
    #[error("nothing to retry: no checkout has been submitted")]
    NothingToRetry,
}

/// Result type for checkout operations.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Config Error
// =============================================================================

/// Errors from loading or saving [`crate::config::StorefrontConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("no config path available on this platform")]
    NoConfigPath,
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CheckoutError::UnknownCoupon {
            code: "NOPE".to_string(),
        };
        assert_eq!(err.to_string(), "coupon code 'NOPE' not recognized");

        let err = CheckoutError::InvalidPhase {
            action: "begin payment",
            phase: "processing".to_string(),
        };
        assert!(err.to_string().contains("begin payment"));
        assert!(err.to_string().contains("processing"));
    }

    #[test]
    fn test_core_errors_wrap_transparently() {
        let inner = CouponError::Inactive {
            code: "SAVE10".to_string(),
        };
        let expected = inner.to_string();
        let err: CheckoutError = inner.into();
        assert_eq!(err.to_string(), expected);
    }
}
