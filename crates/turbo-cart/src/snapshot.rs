//! Saved cart contents.
//!
//! The store itself keeps nothing beyond the process. A collaborator that
//! wants durability serializes a [`CartSnapshot`] and feeds it back through
//! the `Replace` action later. Loading trusts the source; the reducer only
//! normalizes quantities and duplicate ids.

use crate::cart::{CartAction, CartState, LineItem};
use crate::error::CartError;
use serde::{Deserialize, Serialize};

/// Line items as written to storage. Derived totals are not stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSnapshot {
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl CartSnapshot {
    /// Capture the items of a state.
    pub fn from_state(state: &CartState) -> Self {
        Self {
            items: state.items().to_vec(),
        }
    }

    /// The action that restores this snapshot.
    pub fn into_action(self) -> CartAction {
        CartAction::Replace(self.items)
    }

    pub fn to_json(&self) -> Result<String, CartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CartError> {
        Ok(serde_json::from_str(json)?)
    }
}
