//! The cart store: owner of the current snapshot.

use crate::cart::{reduce, CartAction, CartState, LineItem, ProductCandidate};
use crate::ids::ProductId;

/// Owns the current [`CartState`] and funnels every change through
/// [`CartStore::dispatch`].
///
/// Mutations replace the snapshot wholesale, so a consumer holding an older
/// snapshot can detect a change with `==` or by comparing [`revision`]s.
///
/// [`revision`]: CartStore::revision
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
    revision: u64,
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Number of transitions that changed the snapshot.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an action and return the new snapshot.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        let kind = action.kind();
        let next = reduce(&self.state, action);

        if next == self.state {
            tracing::trace!(action = kind, revision = self.revision, "cart unchanged");
            return &self.state;
        }

        self.state = next;
        self.revision += 1;
        tracing::debug!(
            action = kind,
            revision = self.revision,
            lines = self.state.len(),
            item_count = self.state.item_count(),
            total_cents = self.state.total().amount_cents(),
            "cart updated"
        );
        &self.state
    }

    /// Add one unit of a product.
    pub fn add_item(&mut self, candidate: ProductCandidate) -> &CartState {
        self.dispatch(CartAction::Add(candidate))
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: ProductId) -> &CartState {
        self.dispatch(CartAction::Remove(id))
    }

    /// Set a line's quantity to an absolute value. Values below 1 remove it.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> &CartState {
        self.dispatch(CartAction::SetQuantity { id, quantity })
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> &CartState {
        self.dispatch(CartAction::Clear)
    }

    /// Replace the cart with previously saved line items.
    pub fn load(&mut self, items: Vec<LineItem>) -> &CartState {
        self.dispatch(CartAction::Replace(items))
    }

    /// True iff the product has a line in the cart.
    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.state.contains(id)
    }

    /// Quantity in the cart, or 0.
    pub fn get_item_quantity(&self, id: ProductId) -> u32 {
        self.state.quantity_of(id)
    }

    /// Quantity change as issued by the cart page's controls: a request below
    /// 1 is an explicit removal, anything else sets the quantity.
    pub fn change_quantity(&mut self, id: ProductId, requested: i64) -> &CartState {
        if requested < 1 {
            self.remove_item(id)
        } else {
            self.update_quantity(id, requested)
        }
    }

    /// One more unit of an existing line. Unknown ids are ignored.
    pub fn increment(&mut self, id: ProductId) -> &CartState {
        let Some(current) = self.state.get(id).map(|i| i.quantity) else {
            return &self.state;
        };
        self.change_quantity(id, i64::from(current) + 1)
    }

    /// One fewer unit of an existing line; a line at 1 is removed.
    /// Unknown ids are ignored.
    pub fn decrement(&mut self, id: ProductId) -> &CartState {
        let Some(current) = self.state.get(id).map(|i| i.quantity) else {
            return &self.state;
        };
        self.change_quantity(id, i64::from(current) - 1)
    }
}
