//! # arcadia-cart: Persisted Cart Store
//!
//! The stateful cart layer of the Arcadia storefront. `arcadia-core` owns the
//! math; this crate owns what happens around it:
//!
//! - **Persistence**: the cart is written through to storage on every
//!   mutation and rehydrated on open, so it survives a restart
//! - **Notification**: subscribers see every change, for UI re-render
//! - **Panel state**: the cart drawer's open/closed flag, session-only
//!
//! ## Example
//!
//! ```rust,no_run
//! use arcadia_cart::{CartStore, FileStorage};
//! use arcadia_core::types::ProductSnapshot;
//!
//! let storage = FileStorage::new().expect("data dir");
//! let mut store = CartStore::open(storage);
//!
//! store.add_item(
//!     ProductSnapshot {
//!         id: "sku-42".into(),
//!         name: "Field Notebook".into(),
//!         unit_price_cents: 1250,
//!         stock: Some(8),
//!         image_url: None,
//!         weight_grams: Some(180),
//!     },
//!     2,
//! );
//!
//! assert_eq!(store.subtotal().cents(), 2500);
//! ```

pub mod storage;
pub mod store;

pub use storage::{CartStorage, FileStorage, StoreError, StoreResult};
pub use store::{CartStore, CART_STORAGE_KEY};
