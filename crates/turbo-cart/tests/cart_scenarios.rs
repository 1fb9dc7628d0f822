//! End-to-end cart behavior through the public API.

use std::collections::HashSet;

use turbo_cart::prelude::*;

fn product(id: u64, name: &str, price: f64) -> ProductCandidate {
    ProductCandidate::from_decimal(ProductId::new(id), name, price, format!("/img/{}.jpg", id))
        .unwrap()
}

fn provided_cart() -> CartHandle {
    let mut ctx = CartContext::new();
    ctx.provide(CartStore::new())
}

fn assert_invariants(state: &CartState) {
    let mut seen = HashSet::new();
    for item in state.items() {
        assert!(seen.insert(item.id), "duplicate id {}", item.id);
        assert!(item.quantity >= 1, "zero-quantity line {}", item.id);
    }

    let total: i64 = state
        .items()
        .iter()
        .map(|i| i.unit_price.amount_cents() * i64::from(i.quantity))
        .sum();
    let count: u64 = state.items().iter().map(|i| u64::from(i.quantity)).sum();

    assert_eq!(state.total(), Money::new(total));
    assert_eq!(state.item_count(), count);
}

#[test]
fn test_headphones_add_merge_and_zero() {
    let cart = provided_cart();

    // A
    let state = cart.add_item(product(1, "Headphones", 99.99));
    assert_eq!(state.len(), 1);
    assert_eq!(state.item_count(), 1);
    assert_eq!(state.total(), Money::new(9999));

    // B
    let state = cart.add_item(product(1, "Headphones", 99.99));
    assert_eq!(state.len(), 1);
    assert_eq!(state.items()[0].quantity, 2);
    assert_eq!(state.item_count(), 2);
    assert_eq!(state.total(), Money::new(19998));

    // C
    let state = cart.update_quantity(ProductId::new(1), 0);
    assert!(state.items().is_empty());
    assert_eq!(state.total(), Money::zero());
    assert_eq!(state.item_count(), 0);
}

#[test]
fn test_add_then_remove() {
    let cart = provided_cart();
    cart.add_item(product(2, "Speaker", 50.00));
    let state = cart.remove_item(ProductId::new(2));

    assert!(state.items().is_empty());
    assert_eq!(state.total(), Money::zero());
}

#[test]
fn test_add_two_then_clear() {
    let cart = provided_cart();
    cart.add_item(product(3, "Keyboard", 30.0));
    cart.add_item(product(4, "Mouse", 20.0));
    let state = cart.clear_cart();

    assert!(state.items().is_empty());
    assert_eq!(state.item_count(), 0);
    assert_eq!(state.total(), Money::zero());
}

#[test]
fn test_update_unknown_id_on_empty_cart() {
    let cart = provided_cart();
    let before = cart.state();
    let state = cart.update_quantity(ProductId::new(999), 5);

    assert_eq!(state, before);
    assert_eq!(cart.revision(), 0);
}

#[test]
fn test_add_merge_keeps_first_price() {
    let cart = provided_cart();
    cart.add_item(product(10, "Lamp", 40.00));
    let state = cart.add_item(product(10, "Lamp (sale)", 15.00));

    assert_eq!(state.len(), 1);
    assert_eq!(state.items()[0].quantity, 2);
    assert_eq!(state.items()[0].unit_price, Money::new(4000));
    assert_eq!(state.items()[0].name, "Lamp");
}

#[test]
fn test_clear_is_idempotent() {
    let cart = provided_cart();
    cart.add_item(product(1, "A", 1.0));
    let once = cart.clear_cart();
    let twice = cart.clear_cart();

    assert_eq!(once, twice);
    assert_eq!(twice, CartState::empty());
}

#[test]
fn test_decrement_from_one_matches_set_zero() {
    let by_decrement = provided_cart();
    by_decrement.add_item(product(5, "Cable", 9.99));
    by_decrement.decrement(ProductId::new(5));

    let by_set = provided_cart();
    by_set.add_item(product(5, "Cable", 9.99));
    by_set.update_quantity(ProductId::new(5), 0);

    assert_eq!(by_decrement.state(), by_set.state());
    assert!(by_set.state().is_empty());
}

#[test]
fn test_quantity_box_input() {
    let cart = provided_cart();
    cart.add_item(product(6, "Case", 12.0));

    cart.change_quantity(ProductId::new(6), parse_quantity_input("3"));
    assert_eq!(cart.get_item_quantity(ProductId::new(6)), 3);

    cart.change_quantity(ProductId::new(6), parse_quantity_input("oops"));
    assert_eq!(cart.get_item_quantity(ProductId::new(6)), 1);

    cart.change_quantity(ProductId::new(6), parse_quantity_input("4 more"));
    assert_eq!(cart.get_item_quantity(ProductId::new(6)), 4);

    cart.change_quantity(ProductId::new(6), parse_quantity_input("0"));
    assert_eq!(cart.get_item_quantity(ProductId::new(6)), 1);

    cart.change_quantity(ProductId::new(6), parse_quantity_input("-2"));
    assert!(!cart.is_in_cart(ProductId::new(6)));
}

#[test]
fn test_surfaces_follow_the_store() {
    let cart = provided_cart();
    let id = ProductId::new(8);

    assert_eq!(AddButton::for_product(&cart.state(), id).to_string(), "Add to Cart");
    assert_eq!(NavBadge::from_state(&cart.state()).label(), None);

    cart.add_item(product(8, "Watch", 199.99));
    cart.add_item(product(8, "Watch", 199.99));

    assert_eq!(AddButton::for_product(&cart.state(), id).to_string(), "In Cart (2)");
    assert_eq!(NavBadge::from_state(&cart.state()).label(), Some("2".to_string()));
}

#[test]
fn test_summary_is_recomputed_not_stored() {
    let cart = provided_cart();
    let config = SummaryConfig::default();

    cart.add_item(product(1, "Socks", 12.50));
    let small = OrderSummary::compute(&cart.state(), &config);
    assert_eq!(small.shipping, Money::new(599));
    assert_eq!(small.tax, Money::new(100));
    assert_eq!(small.grand_total, Money::new(1949));

    cart.update_quantity(ProductId::new(1), 4);
    let large = OrderSummary::compute(&cart.state(), &config);
    assert!(large.free_shipping);
    assert_eq!(large.grand_total, Money::new(5400));
}

#[test]
fn test_snapshot_reload_through_store() {
    let cart = provided_cart();
    cart.add_item(product(1, "A", 3.33));
    cart.add_item(product(2, "B", 4.44));
    cart.add_item(product(1, "A", 3.33));

    let json = CartSnapshot::from_state(&cart.state()).to_json().unwrap();

    let mut ctx = CartContext::new();
    let restored = ctx.provide(CartStore::new());
    restored.load(CartSnapshot::from_json(&json).unwrap().items);

    assert_eq!(restored.state(), cart.state());
    assert_invariants(&restored.state());
}

#[test]
fn test_missing_provider_is_loud() {
    let ctx = CartContext::new();
    let err = ctx.use_cart().unwrap_err();
    assert!(matches!(err, CartError::MissingProvider));
}

/// Small xorshift generator so the sequences below are reproducible.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn random_action(rng: &mut Rng) -> CartAction {
    let id = ProductId::new(rng.below(8));
    match rng.below(10) {
        0..=4 => {
            let cents = rng.below(20_000) as i64;
            let candidate =
                ProductCandidate::new(id, format!("P{}", id), Money::new(cents), "").unwrap();
            CartAction::Add(candidate)
        }
        5 => CartAction::Remove(id),
        6 | 7 => CartAction::SetQuantity {
            id,
            quantity: rng.below(9) as i64 - 3,
        },
        8 => {
            let items = (0..rng.below(5))
                .map(|_| LineItem {
                    id: ProductId::new(rng.below(4)),
                    name: "saved".to_string(),
                    unit_price: Money::new(rng.below(5_000) as i64),
                    image: String::new(),
                    quantity: rng.below(4) as u32,
                })
                .collect();
            CartAction::Replace(items)
        }
        _ => CartAction::Clear,
    }
}

#[test]
fn test_invariants_hold_over_random_sequences() {
    for seed in 1..=50u64 {
        let mut rng = Rng(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1);
        let mut store = CartStore::new();

        for _ in 0..200 {
            let action = random_action(&mut rng);
            store.dispatch(action);
            assert_invariants(store.state());
        }
    }
}

#[test]
fn test_repeated_adds_never_duplicate() {
    let mut store = CartStore::new();
    for round in 0..5 {
        for id in 0..10 {
            store.add_item(product(id, "X", 1.0 + round as f64));
        }
    }

    assert_eq!(store.state().len(), 10);
    assert!(store.state().items().iter().all(|i| i.quantity == 5));
    assert_eq!(store.state().total(), Money::new(10 * 5 * 100));
    assert_invariants(store.state());
}
