//! Cart Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Dish;

/// A dish selection held in an in-progress order.
///
/// The dish is a value snapshot, not a live reference: once an item sits in
/// a cart (and later in an order's line items) menu edits do not touch it.
/// Quantity is strictly positive; a zero quantity means the item must be
/// removed from its collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub dish: Dish,
    pub quantity: u32,
}

impl CartItem {
    /// Line total (price × quantity)
    pub fn line_total(&self) -> Decimal {
        self.dish.price * Decimal::from(self.quantity)
    }
}

/// Subtotal over a list of cart items
pub fn items_subtotal(items: &[CartItem]) -> Decimal {
    items.iter().map(CartItem::line_total).sum()
}
