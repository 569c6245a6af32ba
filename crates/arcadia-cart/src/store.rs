//! # Cart Store
//!
//! The stateful cart: pure line math from `arcadia_core::cart` plus
//! write-through persistence, change notification, and the transient
//! open/closed flag for the cart panel.
//!
//! ## Persistence Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  mutation (add / set_quantity / remove / clear)                         │
//! │      │                                                                   │
//! │      ├── 1. apply to the in-memory Cart (always succeeds)               │
//! │      ├── 2. write-through to storage                                    │
//! │      │       └── failure: warn + mark dirty, retried on next mutation   │
//! │      └── 3. notify subscribers with the new cart state                  │
//! │                                                                          │
//! │  The in-memory cart is the source of truth for the session; storage     │
//! │  exists so the cart survives a restart. A persistence failure must      │
//! │  never block shopping.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use arcadia_core::cart::{Cart, CartLine};
use arcadia_core::money::Money;
use arcadia_core::types::ProductSnapshot;
use tracing::{debug, warn};

use crate::storage::CartStorage;

/// Namespaced storage key for the persisted cart document. The version
/// suffix lets a future incompatible layout use a fresh key instead of
/// fighting old payloads.
pub const CART_STORAGE_KEY: &str = "arcadia.cart.v0";

type Listener = Box<dyn Fn(&Cart) + Send>;

/// A persisted, observable shopping cart.
pub struct CartStore<S: CartStorage> {
    cart: Cart,
    storage: S,

    /// Whether the cart panel is open. Session-only UI state: never
    /// persisted, and deliberately untouched by `clear`.
    is_open: bool,

    /// Set when a write-through failed; the next mutation retries.
    dirty: bool,

    listeners: Vec<Listener>,
}

impl<S: CartStorage> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("is_open", &self.is_open)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl<S: CartStorage> CartStore<S> {
    /// Opens a store, rehydrating any cart persisted under
    /// [`CART_STORAGE_KEY`].
    ///
    /// An unreadable or incompatible payload is discarded (with a warning)
    /// and the session starts with an empty cart. Old junk in storage must
    /// never wedge the storefront.
    pub fn open(storage: S) -> Self {
        let cart = match storage.load(CART_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Cart>(&raw) {
                Ok(cart) => {
                    debug!(lines = cart.len(), "cart rehydrated from storage");
                    cart
                }
                Err(e) => {
                    warn!(error = %e, "discarding incompatible persisted cart");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "cart storage unreadable, starting empty");
                Cart::new()
            }
        };

        CartStore {
            cart,
            storage,
            is_open: false,
            dirty: false,
            listeners: Vec::new(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a product, merging with an existing line for the same id.
    pub fn add_item(&mut self, product: ProductSnapshot, quantity: i64) {
        self.cart.add(product, quantity);
        self.commit();
    }

    /// Removes the line for a product id. No-op if absent.
    pub fn remove_item(&mut self, product_id: &str) {
        self.cart.remove(product_id);
        self.commit();
    }

    /// Sets a line's quantity. Zero or below removes the line.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        self.cart.set_quantity(product_id, quantity);
        self.commit();
    }

    /// Empties the cart. The panel open/closed flag is unaffected.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.commit();
    }

    /// Retries a failed write-through without mutating the cart.
    pub fn flush(&mut self) {
        if self.dirty {
            self.persist();
        }
    }

    // =========================================================================
    // Panel State
    // =========================================================================

    /// Whether the cart panel is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Opens or closes the cart panel. Never persisted.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Toggles the cart panel.
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.cart.lines
    }

    /// Total quantity across all lines (badge count).
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Sum of snapshot unit price × quantity over all lines.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    // =========================================================================
    // Change Notification
    // =========================================================================

    /// Registers a callback invoked after every mutation with the new cart
    /// state. Used by the UI layer to re-render the panel and badge.
    pub fn subscribe(&mut self, listener: impl Fn(&Cart) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn commit(&mut self) {
        self.persist();
        for listener in &self.listeners {
            listener(&self.cart);
        }
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.cart)
            .map_err(crate::storage::StoreError::from)
            .and_then(|raw| self.storage.save(CART_STORAGE_KEY, &raw));

        match result {
            Ok(()) => self.dirty = false,
            Err(e) => {
                warn!(error = %e, "cart write-through failed, will retry");
                self.dirty = true;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::storage::{FileStorage, StoreResult};

    /// In-memory backend for store-level tests.
    #[derive(Default)]
    struct MemoryStorage {
        entries: HashMap<String, String>,
    }

    impl CartStorage for MemoryStorage {
        fn load(&self, key: &str) -> StoreResult<Option<String>> {
            Ok(self.entries.get(key).cloned())
        }

        fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
            self.entries.insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&mut self, key: &str) -> StoreResult<()> {
            self.entries.remove(key);
            Ok(())
        }
    }

    /// Backend whose saves fail until `healthy` is flipped.
    struct FlakyStorage {
        inner: MemoryStorage,
        healthy: Rc<Cell<bool>>,
    }

    impl CartStorage for FlakyStorage {
        fn load(&self, key: &str) -> StoreResult<Option<String>> {
            self.inner.load(key)
        }

        fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
            if !self.healthy.get() {
                return Err(std::io::Error::other("disk full").into());
            }
            self.inner.save(key, value)
        }

        fn remove(&mut self, key: &str) -> StoreResult<()> {
            self.inner.remove(key)
        }
    }

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

    #[test]
    fn test_mutations_write_through() {
        let mut store = CartStore::open(MemoryStorage::default());
        store.add_item(snapshot("1", 999), 2);

        let raw = store.storage.entries.get(CART_STORAGE_KEY).unwrap();
        let persisted: Cart = serde_json::from_str(raw).unwrap();
        assert_eq!(persisted.total_items(), 2);
    }

    #[test]
    fn test_rehydrates_persisted_cart() {
        let dir = tempfile::tempdir().unwrap();

        {
            let storage = FileStorage::with_dir(dir.path().to_path_buf()).unwrap();
            let mut store = CartStore::open(storage);
            store.add_item(snapshot("1", 999), 2);
            store.add_item(snapshot("2", 500), 1);
        }

        let storage = FileStorage::with_dir(dir.path().to_path_buf()).unwrap();
        let store = CartStore::open(storage);
        assert_eq!(store.total_items(), 3);
        assert_eq!(store.subtotal().cents(), 2498);
    }

    #[test]
    fn test_incompatible_payload_discarded() {
        let mut storage = MemoryStorage::default();
        storage
            .save(CART_STORAGE_KEY, r#"{"totally":"unrelated"}"#)
            .unwrap();

        let store = CartStore::open(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_persistence_failure_is_nonfatal_and_retried() {
        let healthy = Rc::new(Cell::new(false));
        let storage = FlakyStorage {
            inner: MemoryStorage::default(),
            healthy: healthy.clone(),
        };

        let mut store = CartStore::open(storage);
        store.add_item(snapshot("1", 999), 1);

        // The mutation took effect in memory despite the failed write.
        assert_eq!(store.total_items(), 1);
        assert!(store.storage.inner.entries.is_empty());

        // The next mutation retries and catches storage up.
        healthy.set(true);
        store.add_item(snapshot("2", 500), 1);

        let raw = store.storage.inner.entries.get(CART_STORAGE_KEY).unwrap();
        let persisted: Cart = serde_json::from_str(raw).unwrap();
        assert_eq!(persisted.total_items(), 2);
    }

    #[test]
    fn test_flush_retries_without_mutation() {
        let healthy = Rc::new(Cell::new(false));
        let storage = FlakyStorage {
            inner: MemoryStorage::default(),
            healthy: healthy.clone(),
        };

        let mut store = CartStore::open(storage);
        store.add_item(snapshot("1", 999), 1);
        assert!(store.storage.inner.entries.is_empty());

        healthy.set(true);
        store.flush();
        assert!(store.storage.inner.entries.contains_key(CART_STORAGE_KEY));
    }

    #[test]
    fn test_clear_leaves_panel_state_alone() {
        let mut store = CartStore::open(MemoryStorage::default());
        store.add_item(snapshot("1", 999), 1);
        store.set_open(true);

        store.clear();
        assert!(store.is_empty());
        assert!(store.is_open());
    }

    #[test]
    fn test_toggle_open() {
        let mut store = CartStore::open(MemoryStorage::default());
        assert!(!store.is_open());
        store.toggle_open();
        assert!(store.is_open());
        store.toggle_open();
        assert!(!store.is_open());
    }

    #[test]
    fn test_subscribers_notified_per_mutation() {
        let count = Arc::new(AtomicI64::new(0));
        let seen_items = Arc::new(AtomicI64::new(-1));

        let mut store = CartStore::open(MemoryStorage::default());
        {
            let count = count.clone();
            let seen_items = seen_items.clone();
            store.subscribe(move |cart| {
                count.fetch_add(1, Ordering::SeqCst);
                seen_items.store(cart.total_items(), Ordering::SeqCst);
            });
        }

        store.add_item(snapshot("1", 999), 2);
        store.update_quantity("1", 5);
        store.remove_item("1");

        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(seen_items.load(Ordering::SeqCst), 0);
    }
}
