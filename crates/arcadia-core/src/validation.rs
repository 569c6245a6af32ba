//! # Validation Module
//!
//! Input validation for checkout forms and coupon entry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before any backend round-trip)                  │
//! │  ├── Required contact fields non-empty                                 │
//! │  └── Complete address when delivery method is Shipping                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend                                                      │
//! │  └── Authoritative re-validation on the payment-intent request         │
//! │                                                                         │
//! │  Defense in depth: a validation failure here never advances the        │
//! │  checkout state machine.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{Address, CustomerInfo, DeliveryMethod};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a quantity value: must be positive.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a user-entered coupon code prior to lookup.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 50 characters
/// - Letters, numbers, hyphens, underscores only
pub fn validate_coupon_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    require("coupon code", code)?;

    if code.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "coupon code".to_string(),
            max: 50,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "coupon code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// Deliberately shallow (`local@domain` shape only): the backend performs
/// authoritative validation; this exists to catch obvious typos before a
/// round-trip.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    require("email", email)?;

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Checkout Form Validators
// =============================================================================

/// Validates a shipping address: line, city, state and postal code are all
/// required.
pub fn validate_address(address: &Address) -> ValidationResult<()> {
    require("address line", &address.line1)?;
    require("city", &address.city)?;
    require("state", &address.state)?;
    require("postal code", &address.postal_code)?;
    Ok(())
}

/// Validates the contact/shipping form gating entry into the payment flow.
///
/// All required contact fields must be non-empty; when the delivery method
/// is `Shipping`, a complete address is required as well. Pickup orders
/// need no address.
pub fn validate_customer_info(info: &CustomerInfo) -> ValidationResult<()> {
    require("name", &info.name)?;
    validate_email(&info.email)?;

    if info.delivery_method == DeliveryMethod::Shipping {
        let address = info
            .shipping_address
            .as_ref()
            .ok_or_else(|| ValidationError::Required {
                field: "shipping address".to_string(),
            })?;
        validate_address(address)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
