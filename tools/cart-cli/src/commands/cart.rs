//! Commands that change the cart.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use turbo_cart::surface::parse_quantity_input;
use turbo_cart::{CartState, CartStore, ProductCandidate, ProductId};

use super::{AddArgs, ClearArgs, IdArgs, SetArgs};
use crate::context::Context;
use crate::storage;

/// Load the cart, apply `change`, and save it if anything changed.
async fn with_store<F>(ctx: &Context, change: F) -> Result<CartStore>
where
    F: FnOnce(&mut CartStore),
{
    let path = ctx.snapshot_path();
    ctx.output.debug(&format!("Cart snapshot: {}", path.display()));

    let mut store = storage::load_store(&path).await?;
    let before = store.revision();

    change(&mut store);

    if store.revision() != before {
        storage::save_store(&path, &store).await?;
    }
    Ok(store)
}

fn report(ctx: &Context, state: &CartState) {
    if ctx.output.is_json() {
        ctx.output.json(state);
        return;
    }
    let currency = ctx.config.cart.store.currency;
    ctx.output.kv("Items", &state.item_count().to_string());
    ctx.output.kv("Subtotal", &state.total().display(currency));
}

/// Add one unit of a product.
pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let candidate = ProductCandidate::from_decimal(args.id, args.name, args.price, args.image)?;
    let name = candidate.name().to_string();

    let store = with_store(ctx, |store| {
        store.add_item(candidate);
    })
    .await?;

    ctx.output.success(&format!("{} added to cart!", name));
    report(ctx, store.state());
    Ok(())
}

/// Remove a line.
pub async fn remove(args: IdArgs, ctx: &Context) -> Result<()> {
    let mut found = false;
    let store = with_store(ctx, |store| {
        found = store.is_in_cart(args.id);
        store.remove_item(args.id);
    })
    .await?;

    if found {
        ctx.output.success("Item removed from cart");
    } else {
        ctx.output.warn(&format!("Product {} is not in the cart", args.id));
    }
    report(ctx, store.state());
    Ok(())
}

/// Set a line's quantity from user input.
pub async fn set(args: SetArgs, ctx: &Context) -> Result<()> {
    let requested = parse_quantity_input(&args.quantity);
    change(ctx, args.id, |store| {
        store.change_quantity(args.id, requested);
    })
    .await?;
    Ok(())
}

/// Increase a line's quantity by one.
pub async fn increment(args: IdArgs, ctx: &Context) -> Result<()> {
    change(ctx, args.id, |store| {
        store.increment(args.id);
    })
    .await?;
    Ok(())
}

/// Decrease a line's quantity by one.
pub async fn decrement(args: IdArgs, ctx: &Context) -> Result<()> {
    change(ctx, args.id, |store| {
        store.decrement(args.id);
    })
    .await?;
    Ok(())
}

/// What a quantity command did to its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuantityChange {
    NotInCart,
    Removed,
    Quantity(u32),
}

impl QuantityChange {
    fn new(was_in_cart: bool, quantity: u32) -> Self {
        match (was_in_cart, quantity) {
            (false, _) => QuantityChange::NotInCart,
            (true, 0) => QuantityChange::Removed,
            (true, quantity) => QuantityChange::Quantity(quantity),
        }
    }
}

async fn change<F>(ctx: &Context, id: ProductId, apply: F) -> Result<QuantityChange>
where
    F: FnOnce(&mut CartStore),
{
    let mut was_in_cart = false;
    let store = with_store(ctx, |store| {
        was_in_cart = store.is_in_cart(id);
        apply(store);
    })
    .await?;

    let outcome = QuantityChange::new(was_in_cart, store.get_item_quantity(id));
    match outcome {
        QuantityChange::NotInCart => ctx
            .output
            .warn(&format!("Product {} is not in the cart", id)),
        QuantityChange::Removed => ctx.output.success("Item removed from cart"),
        QuantityChange::Quantity(quantity) => ctx
            .output
            .success(&format!("Quantity of product {} is now {}", id, quantity)),
    }
    report(ctx, store.state());
    Ok(outcome)
}

/// Empty the cart.
pub async fn clear(args: ClearArgs, ctx: &Context) -> Result<()> {
    if !args.yes {
        if ctx.output.is_json() {
            bail!("Refusing to clear the cart without --yes in JSON mode");
        }
        let confirmed = Confirm::new()
            .with_prompt("Remove all items from the cart?")
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Clear cancelled");
            return Ok(());
        }
    }

    let store = with_store(ctx, |store| {
        store.clear_cart();
    })
    .await?;

    ctx.output.success("Cart cleared");
    report(ctx, store.state());
    Ok(())
}
