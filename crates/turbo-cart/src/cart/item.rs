//! Line item and product candidate types.

use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product offered to the cart by a display surface.
///
/// Construction validates the price, which keeps the `Add` transition itself
/// free of error cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCandidate {
    id: ProductId,
    name: String,
    unit_price: Money,
    image: String,
}

impl ProductCandidate {
    /// Create a candidate from a price in cents.
    ///
    /// Returns an error if the price is negative.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        image: impl Into<String>,
    ) -> Result<Self, CartError> {
        if unit_price.is_negative() {
            return Err(CartError::InvalidPrice {
                id,
                price: unit_price.display_amount(),
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            unit_price,
            image: image.into(),
        })
    }

    /// Create a candidate from a decimal price such as `99.99`.
    ///
    /// Returns an error if the price is negative, NaN, or infinite.
    pub fn from_decimal(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Result<Self, CartError> {
        let unit_price = Money::from_decimal(price).ok_or_else(|| CartError::InvalidPrice {
            id,
            price: price.to_string(),
        })?;
        Self::new(id, name, unit_price, image)
    }

    /// Product identifier.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price per unit.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Image reference.
    pub fn image(&self) -> &str {
        &self.image
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product key, unique within a cart.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price, fixed when the item first entered the cart.
    pub unit_price: Money,
    /// Image reference (informational only).
    #[serde(default)]
    pub image: String,
    /// Quantity. Always at least 1 inside a [`CartState`](super::CartState).
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1 from a candidate.
    pub fn from_candidate(candidate: ProductCandidate) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            unit_price: candidate.unit_price,
            image: candidate.image,
            quantity: 1,
        }
    }

    /// Total price for this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}
