//! Read-only views used by display surfaces.

use std::fmt;
use std::num::IntErrorKind;

use crate::cart::CartState;
use crate::ids::ProductId;

/// State of a product card's cart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddButton {
    /// Product is not in the cart yet.
    AddToCart,
    /// Product is in the cart with this quantity.
    InCart(u32),
}

impl AddButton {
    pub fn for_product(state: &CartState, id: ProductId) -> Self {
        match state.quantity_of(id) {
            0 => AddButton::AddToCart,
            quantity => AddButton::InCart(quantity),
        }
    }
}

impl fmt::Display for AddButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddButton::AddToCart => write!(f, "Add to Cart"),
            AddButton::InCart(quantity) => write!(f, "In Cart ({})", quantity),
        }
    }
}

/// Item count badge on the navigation bar. Hidden when the cart is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavBadge {
    count: u64,
}

impl NavBadge {
    pub fn from_state(state: &CartState) -> Self {
        Self {
            count: state.item_count(),
        }
    }

    /// Badge text, or `None` when it should not be rendered.
    pub fn label(&self) -> Option<String> {
        (self.count > 0).then(|| self.count.to_string())
    }
}

/// "1 item" / "3 items".
pub fn item_count_label(count: u64) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Parse the cart page's quantity box.
///
/// Reads the leading integer and ignores whatever follows it, so `"3 pcs"` is
/// 3. Input without a leading integer, and 0 itself, fall back to 1. Negative
/// values pass through and remove the line.
pub fn parse_quantity_input(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let sign_len = trimmed.len() - unsigned.len();
    let digits = unsigned.len()
        - unsigned
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .len();

    match trimmed[..sign_len + digits].parse::<i64>() {
        Ok(0) => 1,
        Ok(quantity) => quantity,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 1,
        },
    }
}
