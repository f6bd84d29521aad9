//! Cart store
//!
//! The session's selected items and their derived totals. The collection is
//! restored from storage on construction and written back after every
//! mutation, so a reload resumes where the customer left off.
//!
//! Invariants:
//! - at most one line per distinct dish id; repeated adds accumulate
//! - no line ever has quantity ≤ 0; clamping to zero removes the line

use rust_decimal::Decimal;
use shared::models::{CartItem, Dish, items_subtotal};

use crate::storage::KeyValueStorage;

/// Storage key for the serialized cart
pub const CART_STORAGE_KEY: &str = "gourmetgo-cart";

pub struct CartStore {
    items: Vec<CartItem>,
    storage: Box<dyn KeyValueStorage>,
}

impl CartStore {
    /// Restore the cart from storage; absence or a parse failure mean an
    /// empty cart, never an error.
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        let items = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Stored cart is unreadable, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Cart storage unavailable, starting empty");
                Vec::new()
            }
        };
        Self { items, storage }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a dish to the cart. A dish already present has its quantity
    /// incremented; unavailable dishes are a silent no-op (callers are
    /// expected to check `dish.available` first). No upper bound applies.
    pub fn add_item(&mut self, dish: &Dish, quantity: u32) {
        if !dish.available || quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|i| i.dish.id == dish.id) {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartItem {
                dish: dish.clone(),
                quantity,
            }),
        }
        self.persist();
    }

    /// Remove the line for a dish; absent ids are a no-op
    pub fn remove_item(&mut self, dish_id: &str) {
        self.items.retain(|i| i.dish.id != dish_id);
        self.persist();
    }

    /// Set a line's quantity, clamped at zero. A clamped result of zero
    /// removes the line; this is the decrement-to-zero removal path.
    pub fn update_quantity(&mut self, dish_id: &str, quantity: i64) {
        let quantity = quantity.clamp(0, u32::MAX as i64) as u32;
        if let Some(item) = self.items.iter_mut().find(|i| i.dish.id == dish_id) {
            item.quantity = quantity;
        }
        self.items.retain(|i| i.quantity > 0);
        self.persist();
    }

    /// Empty the cart (checkout success path)
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Σ(price × quantity) over all lines; zero for an empty cart
    pub fn total(&self) -> Decimal {
        items_subtotal(&self.items)
    }

    /// Σ(quantity) over all lines; zero for an empty cart
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum()
    }

    /// Write the full collection back to storage. Storage failures are
    /// logged and swallowed: the in-memory cart stays usable either way.
    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.items) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.storage.set(CART_STORAGE_KEY, &raw) {
            tracing::warn!(error = %e, "Failed to persist cart");
        }
    }
}
