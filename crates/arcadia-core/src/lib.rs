//! # arcadia-core: Pure Business Logic for the Arcadia Storefront
//!
//! This crate is the heart of the storefront engine. It contains all of the
//! pricing and order-lifecycle rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Arcadia Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web UI (TypeScript)                          │   │
//! │  │    Catalog ──► Cart panel ──► Checkout ──► Confirmation        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ arcadia-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  money   │ │   cart   │ │  coupon  │ │ shipping / order │  │   │
//! │  │   │  Money   │ │ CartLine │ │ evaluate │ │ policy / rules   │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        arcadia-cart (persisted store) / arcadia-checkout        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductSnapshot, Coupon, OrderStatus, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart line-item math (merge, floor-removal, totals)
//! - [`coupon`] - Coupon eligibility + discount computation
//! - [`shipping`] - Free-shipping threshold calculator
//! - [`order`] - Administrative order-status transition rules
//! - [`checkout`] - Checkout totals composition
//! - [`validation`] - Input validation for checkout forms
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output; the clock is a parameter
//! 2. **No I/O**: storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are minor units (i64 cents)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use arcadia_core::money::Money;
//! use arcadia_core::shipping::ShippingPolicy;
//!
//! let policy = ShippingPolicy::new(Money::from_cents(6000), Money::from_cents(599));
//!
//! // $59.99 subtotal is below the $60.00 threshold → flat rate applies
//! assert_eq!(policy.cost(Money::from_cents(5999)).cents(), 599);
//! assert_eq!(policy.cost(Money::from_cents(6000)).cents(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod coupon;
pub mod error;
pub mod money;
pub mod order;
pub mod shipping;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use arcadia_core::Money` instead of
// `use arcadia_core::money::Money`

pub use cart::{Cart, CartLine};
pub use checkout::compute_totals;
pub use error::{CoreError, CouponError, OrderStatusError, ValidationError};
pub use money::Money;
pub use order::{plan_transition, StatusChange};
pub use shipping::{ShippingBasis, ShippingPolicy};
pub use types::*;
