//! Cart actions.

use crate::cart::{LineItem, ProductCandidate};
use crate::ids::ProductId;

/// A request to change the cart, handled by [`reduce`](super::reduce).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a product, merging with an existing line.
    Add(ProductCandidate),
    /// Remove a line entirely.
    Remove(ProductId),
    /// Set a line's quantity. Values below 1 remove the line.
    SetQuantity { id: ProductId, quantity: i64 },
    /// Empty the cart.
    Clear,
    /// Replace all lines with a previously saved set.
    Replace(Vec<LineItem>),
}

impl CartAction {
    /// Short name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::Add(_) => "add",
            CartAction::Remove(_) => "remove",
            CartAction::SetQuantity { .. } => "set_quantity",
            CartAction::Clear => "clear",
            CartAction::Replace(_) => "replace",
        }
    }
}
