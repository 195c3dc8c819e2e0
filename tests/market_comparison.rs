//! Integration test for the market fixture set.
//!
//! Expected ranking for the full six-item cart across the two active stores:
//!
//! 1. GreenMart stocks everything:
//!    - Apple: £0.75 shelf, £0.64 discounted -> £0.64
//!    - Banana: £0.50
//!    - Lettuce: £1.20
//!    - Milk: £1.50
//!    - Cheddar: £3.00
//!    - Sourdough: £2.40 shelf, £2.20 discounted -> £2.20
//!    - Total: £9.04 (904 pence), complete
//!
//! 2. QuickBasket undercuts every line it stocks but carries no cheddar:
//!    - Apple £0.70 + Banana £0.45 + Lettuce £1.10 + Milk £1.45 + Sourdough £2.00
//!    - Lettuce carries a £0.00 "discount", which falls back to the £1.10
//!      shelf price
//!    - Total: £5.70 (570 pence), incomplete
//!
//! GreenMart ranks first despite the higher total: availability outranks
//! price. Corner Store is inactive and filtered out before comparison.

use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use tally::{
    cart::Cart,
    comparison::compare,
    fixtures::Fixture,
    offers::cheapest_offer,
    stores::{Store, active},
};

fn active_stores(fixture: &Fixture) -> Vec<Store> {
    active(fixture.stores()).cloned().collect()
}

#[test]
fn full_cart_ranking_prefers_the_complete_store() -> TestResult {
    let fixture = Fixture::from_set("market")?;

    let catalog = fixture.catalog();
    let book = fixture.price_book()?;
    let cart = fixture.cart(None)?;
    let stores = active_stores(&fixture);

    let comparison = compare(&cart, &catalog, &stores, &book);

    assert_eq!(comparison.len(), 2);

    let best = comparison.cheapest().expect("expected a complete store");

    assert_eq!(best.store().name, "GreenMart");
    assert_eq!(best.total(), Money::from_minor(904, GBP));
    assert!(best.has_all_items());

    let runner_up = comparison.ranked().last().expect("expected two stores");

    assert_eq!(runner_up.store().name, "QuickBasket");
    assert_eq!(runner_up.total(), Money::from_minor(570, GBP));
    assert!(!runner_up.has_all_items());

    let missing: Vec<&str> = runner_up.missing().map(|line| line.name()).collect();

    assert_eq!(missing, vec!["Cheddar Cheese 200g"]);

    Ok(())
}

#[test]
fn zero_discount_falls_back_to_the_shelf_price() -> TestResult {
    let fixture = Fixture::from_set("market")?;
    let book = fixture.price_book()?;

    let lettuce = fixture.item_id("lettuce")?;
    let quickbasket = fixture
        .stores()
        .iter()
        .find(|store| store.name == "QuickBasket")
        .expect("expected QuickBasket in the fixture");

    assert_eq!(
        book.effective_price(&lettuce, &quickbasket.id),
        Some(Money::from_minor(110, GBP))
    );

    Ok(())
}

#[test]
fn dropping_the_missing_item_flips_the_ranking() -> TestResult {
    let fixture = Fixture::from_set("market")?;

    let catalog = fixture.catalog();
    let book = fixture.price_book()?;
    let stores = active_stores(&fixture);

    // Without cheddar both stores are complete, and QuickBasket's lower
    // shelf prices win: £5.00 against GreenMart's £5.40.
    let mut cart = Cart::new();

    for key in ["banana", "lettuce", "milk", "sourdough"] {
        cart.add(&fixture.item_id(key)?);
    }

    let comparison = compare(&cart, &catalog, &stores, &book);

    let best = comparison.cheapest().expect("expected a complete store");

    assert_eq!(best.store().name, "QuickBasket");
    assert_eq!(best.total(), Money::from_minor(500, GBP));

    assert_eq!(comparison.highest_total(), Some(Money::from_minor(540, GBP)));
    assert_eq!(comparison.savings(), Some(Money::from_minor(40, GBP)));

    Ok(())
}

#[test]
fn cheapest_offer_prefers_the_discounted_listing() -> TestResult {
    let fixture = Fixture::from_set("market")?;

    let book = fixture.price_book()?;
    let stores = active_stores(&fixture);
    let apple = fixture.item_id("apple")?;

    // GreenMart's £0.64 discount beats QuickBasket's £0.70 shelf price.
    let offer = cheapest_offer(&apple, &stores, &book).expect("expected an offer");

    assert_eq!(offer.store().name, "GreenMart");
    assert_eq!(offer.price(), Money::from_minor(64, GBP));

    Ok(())
}
