//! Store provider for the display surfaces.
//!
//! One [`CartStore`] is owned per session and handed to every consumer
//! through a [`CartContext`]. Asking for the cart before anything was provided
//! is an integration bug and fails with [`CartError::MissingProvider`] instead
//! of quietly yielding an empty cart.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cart::{CartState, LineItem, ProductCandidate};
use crate::error::CartError;
use crate::ids::ProductId;
use crate::store::CartStore;

/// Shared handle to the session's store.
///
/// Cloning is cheap and every clone sees the same store. The handle is
/// `!Send`; the cart is driven from a single event loop. Mutations return the
/// new snapshot by value.
#[derive(Debug, Clone)]
pub struct CartHandle {
    store: Rc<RefCell<CartStore>>,
}

impl CartHandle {
    fn new(store: CartStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> CartState {
        self.store.borrow().state().clone()
    }

    /// Number of transitions that changed the snapshot.
    pub fn revision(&self) -> u64 {
        self.store.borrow().revision()
    }

    /// Add one unit of a product.
    pub fn add_item(&self, candidate: ProductCandidate) -> CartState {
        self.store.borrow_mut().add_item(candidate).clone()
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove_item(&self, id: ProductId) -> CartState {
        self.store.borrow_mut().remove_item(id).clone()
    }

    /// Set a line's quantity to an absolute value. Values below 1 remove it.
    pub fn update_quantity(&self, id: ProductId, quantity: i64) -> CartState {
        self.store.borrow_mut().update_quantity(id, quantity).clone()
    }

    /// Empty the cart.
    pub fn clear_cart(&self) -> CartState {
        self.store.borrow_mut().clear_cart().clone()
    }

    /// Replace the cart with previously saved line items.
    pub fn load(&self, items: Vec<LineItem>) -> CartState {
        self.store.borrow_mut().load(items).clone()
    }

    /// Quantity change from the cart page: below 1 removes the line.
    pub fn change_quantity(&self, id: ProductId, requested: i64) -> CartState {
        self.store.borrow_mut().change_quantity(id, requested).clone()
    }

    /// One more unit of an existing line.
    pub fn increment(&self, id: ProductId) -> CartState {
        self.store.borrow_mut().increment(id).clone()
    }

    /// One fewer unit of an existing line; a line at 1 is removed.
    pub fn decrement(&self, id: ProductId) -> CartState {
        self.store.borrow_mut().decrement(id).clone()
    }

    /// True iff the product has a line in the cart.
    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.store.borrow().is_in_cart(id)
    }

    /// Quantity in the cart, or 0.
    pub fn get_item_quantity(&self, id: ProductId) -> u32 {
        self.store.borrow().get_item_quantity(id)
    }
}

/// Slot through which the store is provided to consumers.
#[derive(Debug, Default)]
pub struct CartContext {
    handle: Option<CartHandle>,
}

impl CartContext {
    /// An empty context with no store provided yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a store and return a handle to it.
    ///
    /// Providing again replaces the store for later `use_cart` calls;
    /// handles obtained earlier keep pointing at the old one.
    pub fn provide(&mut self, store: CartStore) -> CartHandle {
        if self.handle.is_some() {
            tracing::warn!("replacing an already provided cart store");
        }
        let handle = CartHandle::new(store);
        self.handle = Some(handle.clone());
        handle
    }

    /// Check if a store has been provided.
    pub fn is_provided(&self) -> bool {
        self.handle.is_some()
    }

    /// Get the provided store.
    pub fn use_cart(&self) -> Result<CartHandle, CartError> {
        match &self.handle {
            Some(handle) => Ok(handle.clone()),
            None => {
                tracing::error!("cart accessed outside of a provider");
                Err(CartError::MissingProvider)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_use_cart_without_provider_fails() {
        let ctx = CartContext::new();
        assert!(!ctx.is_provided());
        assert!(matches!(ctx.use_cart(), Err(CartError::MissingProvider)));
    }

    #[test]
    fn test_missing_provider_message() {
        let err = CartContext::new().use_cart().unwrap_err();
        assert_eq!(err.to_string(), "use_cart must be used within a cart provider");
    }

    #[test]
    fn test_handles_share_one_store() {
        let mut ctx = CartContext::new();
        let page = ctx.provide(CartStore::new());
        let badge = ctx.use_cart().unwrap();

        let candidate =
            ProductCandidate::from_decimal(ProductId::new(1), "Headphones", 99.99, "").unwrap();
        let state = page.add_item(candidate);

        assert_eq!(state.total(), Money::new(9999));
        assert_eq!(badge.state().item_count(), 1);
        assert!(badge.is_in_cart(ProductId::new(1)));
        assert_eq!(badge.revision(), 1);
    }

    #[test]
    fn test_snapshots_are_detached() {
        let mut ctx = CartContext::new();
        let handle = ctx.provide(CartStore::new());
        let before = handle.state();

        let candidate = ProductCandidate::from_decimal(ProductId::new(2), "Mug", 12.0, "").unwrap();
        handle.add_item(candidate);

        assert!(before.is_empty());
        assert_ne!(before, handle.state());
    }

    #[test]
    fn test_handle_quantity_controls() {
        let mut ctx = CartContext::new();
        let handle = ctx.provide(CartStore::new());
        let id = ProductId::new(3);
        handle.add_item(ProductCandidate::from_decimal(id, "Lamp", 40.0, "").unwrap());

        assert_eq!(handle.increment(id).quantity_of(id), 2);
        assert_eq!(handle.change_quantity(id, 5).quantity_of(id), 5);
        assert_eq!(handle.decrement(id).quantity_of(id), 4);
        assert!(handle.change_quantity(id, 0).is_empty());
        assert_eq!(handle.get_item_quantity(id), 0);
    }
}
