//! # arcadia-checkout: Checkout Orchestration
//!
//! The stateful layer between the cart and the commerce backend.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Orchestration                              │
//! │                                                                         │
//! │  ┌──────────────────┐        ┌──────────────────┐                      │
//! │  │ CheckoutSession  │        │    OrderDesk     │                      │
//! │  │  ──────────────  │        │  ──────────────  │                      │
//! │  │  coupon apply    │        │  status guard    │                      │
//! │  │  totals preview  │        │  status write    │                      │
//! │  │  payment phases  │        │  email re-send   │                      │
//! │  └────────┬─────────┘        └────────┬─────────┘                      │
//! │           │                           │                                 │
//! │           └───────────┬───────────────┘                                 │
//! │                       ▼                                                  │
//! │           ┌──────────────────────┐                                      │
//! │           │  StorefrontBackend   │   (trait: HTTP impl, test mock)      │
//! │           └──────────────────────┘                                      │
//! │                                                                         │
//! │  Pricing rules come from arcadia-core; cart state from arcadia-cart.   │
//! │  This crate owns sequencing, phase transitions, and backend I/O.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod backend;
pub mod config;
pub mod error;
pub mod session;

pub use admin::OrderDesk;
pub use backend::{
    LineItem, NotificationItem, NotificationKind, Order, OrderNotification, PaymentIntent,
    PaymentIntentRequest, StorefrontBackend,
};
pub use config::StorefrontConfig;
pub use error::{BackendError, CheckoutError, CheckoutResult, ConfigError, ConfigResult};
pub use session::{CheckoutSession, PaymentFailure, PaymentOutcome, PaymentPhase};
