//! Shopping cart state manager for TurboCommerce storefronts.
//!
//! The cart is a sequence of immutable snapshots. Every change is a
//! [`CartAction`] passed through one pure transition function, and the derived
//! `total` and `item_count` are recomputed on every transition.
//!
//! - **Cart**: line items, snapshots, actions, and the transition function
//! - **Store**: owner of the current snapshot with the mutation API
//! - **Context**: provides one store to every display surface
//! - **Summary**: shipping, tax and grand total for the cart page
//!
//! # Example
//!
//! ```
//! use turbo_cart::prelude::*;
//!
//! let mut ctx = CartContext::new();
//! let cart = ctx.provide(CartStore::new());
//!
//! let headphones =
//!     ProductCandidate::from_decimal(ProductId::new(1), "Headphones", 99.99, "/hp.jpg")?;
//! cart.add_item(headphones.clone());
//! let state = cart.add_item(headphones);
//!
//! assert_eq!(state.item_count(), 2);
//! assert_eq!(state.total(), Money::new(19998));
//!
//! let summary = OrderSummary::compute(&state, &SummaryConfig::default());
//! assert_eq!(summary.shipping_label(Currency::USD), "Free");
//! # Ok::<(), turbo_cart::CartError>(())
//! ```

pub mod cart;
pub mod config;
pub mod context;
pub mod error;
pub mod ids;
pub mod money;
pub mod snapshot;
pub mod store;
pub mod summary;
pub mod surface;

pub use cart::{reduce, CartAction, CartState, LineItem, ProductCandidate};
pub use config::{parse_config, CartConfig, ConfigFormat, StoreConfig};
pub use context::{CartContext, CartHandle};
pub use error::CartError;
pub use ids::ProductId;
pub use money::{Currency, Money};
pub use snapshot::CartSnapshot;
pub use store::CartStore;
pub use summary::{OrderSummary, SummaryConfig};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{reduce, CartAction, CartState, LineItem, ProductCandidate};
    pub use crate::config::{CartConfig, StoreConfig};
    pub use crate::context::{CartContext, CartHandle};
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
    pub use crate::snapshot::CartSnapshot;
    pub use crate::store::CartStore;
    pub use crate::summary::{OrderSummary, SummaryConfig};
    pub use crate::surface::{item_count_label, parse_quantity_input, AddButton, NavBadge};
}
