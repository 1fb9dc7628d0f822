//! Shopping cart module.
//!
//! Contains the line item and state types, the action protocol, and the pure
//! transition function that drives them.

mod action;
mod item;
mod reducer;
mod state;

pub use action::CartAction;
pub use item::{LineItem, ProductCandidate};
pub use reducer::reduce;
pub use state::CartState;
