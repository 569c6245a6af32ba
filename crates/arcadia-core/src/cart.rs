//! # Cart Math
//!
//! Pure line-item arithmetic for the shopping cart. Persistence and change
//! notification live in `arcadia-cart`; this module is just the data and the
//! rules.
//!
//! ## Invariants
//! - At most one line per distinct product id (adding merges quantities)
//! - `quantity >= 1` on every stored line; a quantity reaching 0 removes the
//!   line, it is never persisted at 0 or below
//! - Totals always use each line's snapshot unit price, never the live
//!   catalog price

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::ProductSnapshot;

// =============================================================================
// Cart Line
// =============================================================================

/// One product-quantity pairing inside a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Frozen product data captured at add time.
    pub product: ProductSnapshot,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,
}

impl CartLine {
    /// Calculates the line total (snapshot unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of lines.
///
/// Insertion order is irrelevant to totals and only matters for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart, merging with an existing line.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by `quantity`
    /// - Product not in cart: appended as a new line
    /// - A non-positive `quantity` is clamped to 1 (adding always adds at
    ///   least one item; callers reject bad quantities via
    ///   [`crate::validation::validate_quantity`] before reaching here)
    ///
    /// No stock check happens here (the caller validates stock before
    /// invoking) and the cart has no upper bound.
    pub fn add(&mut self, product: ProductSnapshot, quantity: i64) {
        let quantity = quantity.max(1);

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
            return;
        }

        self.lines.push(CartLine { product, quantity });
    }

    /// Removes the line for a product id. No-op if absent.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Overwrites a line's quantity (absolute set, not a delta).
    ///
    /// ## Floor-removal
    /// A new quantity of 0 or below removes the line entirely; a line is
    /// never stored with `quantity <= 0`. No-op if the product is absent.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total quantity across all lines (not the count of distinct lines).
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of snapshot unit price × quantity over all lines.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
