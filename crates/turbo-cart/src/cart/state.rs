//! Cart state snapshot.

use crate::cart::LineItem;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// An immutable snapshot of the cart.
///
/// `total` and `item_count` are derived from `items` whenever a snapshot is
/// built, and the fields are private, so the three can never disagree.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CartState {
    items: Vec<LineItem>,
    total: Money,
    item_count: u64,
}

impl CartState {
    /// An empty cart.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from items that already satisfy the cart invariants
    /// (unique ids, every quantity at least 1).
    pub(crate) fn from_items(items: Vec<LineItem>) -> Self {
        let total = items.iter().map(LineItem::line_total).sum();
        let item_count = items.iter().map(|i| u64::from(i.quantity)).sum();
        Self {
            items,
            total,
            item_count,
        }
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Subtotal: sum of unit price times quantity.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line item by product id.
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// True iff a line item with this id exists.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Quantity of the line item, or 0 if absent.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, |i| i.quantity)
    }
}
