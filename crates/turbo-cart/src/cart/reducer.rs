//! The cart transition function.

use crate::cart::{CartAction, CartState, LineItem};
use crate::ids::ProductId;

/// Apply one action to a snapshot, producing the next snapshot.
///
/// Every action is defined for every state: quantities are clamped, unknown
/// ids are no-ops, and the result always satisfies the cart invariants.
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    match action {
        CartAction::Add(candidate) => {
            let mut items = state.items().to_vec();
            if let Some(existing) = items.iter_mut().find(|i| i.id == candidate.id()) {
                // Name, price and image stay as first added.
                existing.quantity = existing.quantity.saturating_add(1);
            } else {
                items.push(LineItem::from_candidate(candidate));
            }
            CartState::from_items(items)
        }

        CartAction::Remove(id) => {
            if !state.contains(id) {
                return state.clone();
            }
            let items = state.items().iter().filter(|i| i.id != id).cloned().collect();
            CartState::from_items(items)
        }

        CartAction::SetQuantity { id, quantity } => set_quantity(state, id, quantity),

        CartAction::Clear => CartState::empty(),

        CartAction::Replace(items) => CartState::from_items(normalize(items)),
    }
}

/// Clamp-and-filter: negative requests become 0 and a 0 line is dropped.
fn set_quantity(state: &CartState, id: ProductId, requested: i64) -> CartState {
    if !state.contains(id) {
        return state.clone();
    }

    let quantity = clamp_quantity(requested);
    let items = state
        .items()
        .iter()
        .map(|item| {
            if item.id == id {
                LineItem {
                    quantity,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .filter(|item| item.quantity > 0)
        .collect();

    CartState::from_items(items)
}

fn clamp_quantity(requested: i64) -> u32 {
    u32::try_from(requested.max(0)).unwrap_or(u32::MAX)
}

/// Bring an externally supplied item list back within the cart invariants.
///
/// Zero-quantity entries are dropped. A repeated id is folded into its first
/// occurrence, which keeps its position, name and price.
fn normalize(items: Vec<LineItem>) -> Vec<LineItem> {
    let mut out: Vec<LineItem> = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity == 0 {
            continue;
        }
        match out.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => out.push(item),
        }
    }
    out
}
