//! Basket Comparison Demo
//!
//! Loads a fixture set, fills a cart and ranks the stores by what the basket
//! would cost at each.
//!
//! Use `-f` to load a fixture set by name
//! Use `-n` to limit how many catalog items go in the cart
//! Use `-a` to include inactive stores

use std::io;

use anyhow::Result;

use clap::Parser;
use tally::{
    comparison::compare,
    fixtures::Fixture,
    report::{write_comparison, write_store_breakdown},
    stores::{self, Store},
    utils::DemoBasketArgs,
};

/// Basket Comparison Demo
#[expect(clippy::print_stdout, reason = "Demo code")]
pub fn main() -> Result<()> {
    let args = DemoBasketArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let catalog = fixture.catalog();
    let book = fixture.price_book()?;
    let cart = fixture.cart(args.n)?;

    let stores: Vec<Store> = if args.all_stores {
        fixture.stores().to_vec()
    } else {
        stores::active(fixture.stores()).cloned().collect()
    };

    let comparison = compare(&cart, &catalog, &stores, &book);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_comparison(&mut handle, &comparison)?;

    match comparison.cheapest() {
        Some(best) => {
            println!("\nCheapest store: {}", best.store().name);
            write_store_breakdown(&mut handle, best)?;
        }
        None => println!("\nNo store stocks the whole basket."),
    }

    if let Some(savings) = comparison.savings()
        && !savings.amount().is_zero()
    {
        println!("Picking the best store saves {savings}");
    }

    Ok(())
}
