//! Order summary shown on the cart page.
//!
//! Shipping, tax and the grand total are display values. They are computed
//! from a [`CartState`] on every render and never stored in it.

use crate::cart::CartState;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Pricing rules for the order summary. Amounts are in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Subtotal at or above which shipping is free.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: Money,

    /// Flat shipping fee below the threshold.
    #[serde(default = "default_flat_shipping_fee")]
    pub flat_shipping_fee: Money,

    /// Tax rate in basis points (800 = 8%).
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,
}

fn default_free_shipping_threshold() -> Money {
    Money::new(5000)
}

fn default_flat_shipping_fee() -> Money {
    Money::new(599)
}

fn default_tax_rate_bps() -> u32 {
    800
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: default_free_shipping_threshold(),
            flat_shipping_fee: default_flat_shipping_fee(),
            tax_rate_bps: default_tax_rate_bps(),
        }
    }
}

/// Cart page totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// Sum of line totals (the cart's `total`).
    pub subtotal: Money,
    /// Sum of quantities.
    pub item_count: u64,
    /// Shipping charge.
    pub shipping: Money,
    /// Whether the subtotal qualifies for free shipping.
    pub free_shipping: bool,
    /// Tax on the subtotal.
    pub tax: Money,
    /// subtotal + shipping + tax.
    pub grand_total: Money,
    /// How much more is needed to qualify for free shipping.
    pub free_shipping_remaining: Option<Money>,
}

impl OrderSummary {
    /// Compute the summary for a cart snapshot.
    ///
    /// An empty cart has nothing to ship, so its shipping is zero.
    pub fn compute(state: &CartState, config: &SummaryConfig) -> Self {
        let subtotal = state.total();
        let free_shipping = subtotal >= config.free_shipping_threshold;

        let shipping = if free_shipping || state.is_empty() {
            Money::zero()
        } else {
            config.flat_shipping_fee
        };

        let tax = subtotal.basis_points(config.tax_rate_bps);
        let grand_total = subtotal + shipping + tax;

        let free_shipping_remaining =
            (!free_shipping).then(|| config.free_shipping_threshold - subtotal);

        Self {
            subtotal,
            item_count: state.item_count(),
            shipping,
            free_shipping,
            tax,
            grand_total,
            free_shipping_remaining,
        }
    }

    /// "Free" or the shipping amount.
    pub fn shipping_label(&self, currency: Currency) -> String {
        if self.free_shipping {
            "Free".to_string()
        } else {
            self.shipping.display(currency)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartAction, ProductCandidate};
    use crate::ids::ProductId;
    use crate::store::CartStore;

    fn cart_with(prices: &[f64]) -> CartState {
        let mut store = CartStore::new();
        for (i, price) in prices.iter().enumerate() {
            let candidate =
                ProductCandidate::from_decimal(ProductId::new(i as u64), "Item", *price, "")
                    .unwrap();
            store.dispatch(CartAction::Add(candidate));
        }
        store.state().clone()
    }

    #[test]
    fn test_flat_shipping_below_threshold() {
        let summary = OrderSummary::compute(&cart_with(&[20.00]), &SummaryConfig::default());

        assert_eq!(summary.subtotal, Money::new(2000));
        assert_eq!(summary.shipping, Money::new(599));
        assert_eq!(summary.tax, Money::new(160));
        assert_eq!(summary.grand_total, Money::new(2759));
        assert_eq!(summary.free_shipping_remaining, Some(Money::new(3000)));
        assert_eq!(summary.shipping_label(Currency::USD), "$5.99");
    }

    #[test]
    fn test_free_shipping_at_threshold() {
        let summary = OrderSummary::compute(&cart_with(&[30.00, 20.00]), &SummaryConfig::default());

        assert!(summary.free_shipping);
        assert_eq!(summary.shipping, Money::zero());
        assert_eq!(summary.tax, Money::new(400));
        assert_eq!(summary.grand_total, Money::new(5400));
        assert_eq!(summary.free_shipping_remaining, None);
        assert_eq!(summary.shipping_label(Currency::USD), "Free");
    }

    #[test]
    fn test_headphones_summary() {
        let summary = OrderSummary::compute(&cart_with(&[99.99]), &SummaryConfig::default());
        // 8% of 99.99 is 7.9992
        assert_eq!(summary.tax, Money::new(800));
        assert_eq!(summary.grand_total, Money::new(10799));
    }

    #[test]
    fn test_empty_cart_has_no_shipping() {
        let summary = OrderSummary::compute(&CartState::empty(), &SummaryConfig::default());
        assert_eq!(summary.shipping, Money::zero());
        assert_eq!(summary.grand_total, Money::zero());
        assert_eq!(summary.free_shipping_remaining, Some(Money::new(5000)));
    }

    #[test]
    fn test_custom_config() {
        let config = SummaryConfig {
            free_shipping_threshold: Money::new(10000),
            flat_shipping_fee: Money::new(1000),
            tax_rate_bps: 0,
        };
        let summary = OrderSummary::compute(&cart_with(&[60.00]), &config);
        assert_eq!(summary.shipping, Money::new(1000));
        assert_eq!(summary.tax, Money::zero());
        assert_eq!(summary.grand_total, Money::new(7000));
    }
}
