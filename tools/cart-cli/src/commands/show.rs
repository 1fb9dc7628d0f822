//! Read-only cart views.

use anyhow::Result;
use serde::Serialize;
use turbo_cart::surface::{item_count_label, AddButton, NavBadge};
use turbo_cart::{OrderSummary, ProductId};

use super::IdArgs;
use crate::context::Context;
use crate::output::{button_badge, truncate};
use crate::storage;

const NAME_WIDTH: usize = 28;

/// List the cart contents.
pub async fn show(ctx: &Context) -> Result<()> {
    let store = storage::load_store(&ctx.snapshot_path()).await?;
    let state = store.state();

    if ctx.output.is_json() {
        ctx.output.json(state);
        return Ok(());
    }

    if state.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let currency = ctx.config.cart.store.currency;
    ctx.output.header(&format!(
        "Shopping Cart ({} in your cart)",
        item_count_label(state.item_count())
    ));

    let widths = [6, NAME_WIDTH, 10, 5, 10];
    ctx.output
        .table_row(&["ID", "Name", "Price", "Qty", "Total"], &widths);
    for item in state.items() {
        let row = [
            item.id.to_string(),
            truncate(&item.name, NAME_WIDTH),
            item.unit_price.display(currency),
            item.quantity.to_string(),
            item.line_total().display(currency),
        ];
        let cols: Vec<&str> = row.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &widths);
    }

    ctx.output.info("");
    ctx.output.kv("Subtotal", &state.total().display(currency));
    if let Some(badge) = NavBadge::from_state(state).label() {
        ctx.output.kv("Badge", &badge);
    }
    Ok(())
}

/// Show shipping, tax and the grand total.
pub async fn summary(ctx: &Context) -> Result<()> {
    let store = storage::load_store(&ctx.snapshot_path()).await?;
    let summary = OrderSummary::compute(store.state(), &ctx.config.cart.summary);

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    let currency = ctx.config.cart.store.currency;
    ctx.output.header("Order Summary");
    ctx.output.kv(
        &format!("Subtotal ({})", item_count_label(summary.item_count)),
        &summary.subtotal.display(currency),
    );
    ctx.output.kv("Shipping", &summary.shipping_label(currency));
    ctx.output.kv("Tax", &summary.tax.display(currency));
    ctx.output.kv("Total", &summary.grand_total.display(currency));

    if let Some(remaining) = summary.free_shipping_remaining {
        ctx.output.info(&format!(
            "Free shipping on orders over {}! Add {} more to qualify",
            ctx.config.cart.summary.free_shipping_threshold.display(currency),
            remaining.display(currency)
        ));
    }
    Ok(())
}

#[derive(Serialize)]
struct StatusReport {
    id: ProductId,
    in_cart: bool,
    quantity: u32,
}

/// Show whether a product is in the cart.
pub async fn status(args: IdArgs, ctx: &Context) -> Result<()> {
    let store = storage::load_store(&ctx.snapshot_path()).await?;

    if ctx.output.is_json() {
        ctx.output.json(&StatusReport {
            id: args.id,
            in_cart: store.is_in_cart(args.id),
            quantity: store.get_item_quantity(args.id),
        });
        return Ok(());
    }

    let button = AddButton::for_product(store.state(), args.id);
    ctx.output
        .kv(&format!("Product {}", args.id), &button_badge(button));
    Ok(())
}
