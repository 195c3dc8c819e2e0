//! Comparison Report
//!
//! Terminal rendering for ranked comparisons.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::comparison::{Comparison, PricedLine, StoreComparison};

/// Errors that can occur when rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error writing the rendered table.
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Render the ranked comparison as a table, one row per store.
///
/// The cheapest complete store is marked `Best`; stores missing cart items
/// are marked `Incomplete` and list the missing item names.
///
/// # Errors
///
/// Returns a [`ReportError`] if the table cannot be written.
pub fn write_comparison(
    mut out: impl io::Write,
    comparison: &Comparison<'_>,
) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Store", "Available", "Missing", "Total", "Status"]);

    let cheapest = comparison.cheapest().map(|result| &result.store().id);

    for (rank, result) in comparison.iter().enumerate() {
        let missing: Vec<&str> = result.missing().map(PricedLine::name).collect();

        let status = if cheapest == Some(&result.store().id) {
            "Best"
        } else if result.has_all_items() {
            ""
        } else {
            "Incomplete"
        };

        builder.push_record([
            format!("#{}", rank + 1),
            result.store().name.clone(),
            format!("{}/{}", result.available_count(), result.line_count()),
            missing.join(", "),
            format!("{}", result.total()),
            status.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(Columns::one(4), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

/// Render one store's line-by-line breakdown.
///
/// # Errors
///
/// Returns a [`ReportError`] if the table cannot be written.
pub fn write_store_breakdown(
    mut out: impl io::Write,
    result: &StoreComparison<'_>,
) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Qty", "Unit", "Line"]);

    for line in result.lines() {
        let (unit, cost) = match (line.unit_price(), line.line_total()) {
            (Some(unit), Some(cost)) => (format!("{unit}"), format!("{cost}")),
            _ => (String::new(), "not available".to_string()),
        };

        builder.push_record([
            line.name().to_string(),
            format!("×{}", line.quantity()),
            unit,
            cost,
        ]);
    }

    builder.push_record([
        "Total".to_string(),
        String::new(),
        String::new(),
        format!("{}", result.total()),
    ]);

    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(Columns::new(2..), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use crate::{
        cart::Cart,
        catalog::{Catalog, Item, ItemId},
        categories::CategoryId,
        comparison::compare,
        listings::{Listing, ListingId, PriceBook},
        stores::{Store, StoreId},
    };

    use super::*;

    fn fixture_comparison_output() -> TestResult<String> {
        let catalog = Catalog::with_items([
            Item {
                id: ItemId::from("apple"),
                name: "Apple".to_string(),
                category: CategoryId::from("fruit"),
                active: true,
            },
            Item {
                id: ItemId::from("milk"),
                name: "Milk".to_string(),
                category: CategoryId::from("dairy"),
                active: true,
            },
        ]);

        let stores = [
            Store {
                id: StoreId::from("greenmart"),
                name: "GreenMart".to_string(),
                active: true,
            },
            Store {
                id: StoreId::from("quickbasket"),
                name: "QuickBasket".to_string(),
                active: true,
            },
        ];

        let book = PriceBook::with_listings(
            [
                Listing::new(
                    ListingId::from("l1"),
                    ItemId::from("apple"),
                    StoreId::from("greenmart"),
                    Some(Money::from_minor(75, GBP)),
                    None,
                ),
                Listing::new(
                    ListingId::from("l2"),
                    ItemId::from("milk"),
                    StoreId::from("greenmart"),
                    Some(Money::from_minor(150, GBP)),
                    None,
                ),
                Listing::new(
                    ListingId::from("l3"),
                    ItemId::from("apple"),
                    StoreId::from("quickbasket"),
                    Some(Money::from_minor(70, GBP)),
                    None,
                ),
            ],
            GBP,
        )?;

        let mut cart = Cart::new();
        cart.add(&ItemId::from("apple"));
        cart.add(&ItemId::from("milk"));

        let comparison = compare(&cart, &catalog, &stores, &book);

        let mut rendered = Vec::new();
        write_comparison(&mut rendered, &comparison)?;

        let breakdown_target = comparison.cheapest().expect("expected a complete store");
        write_store_breakdown(&mut rendered, breakdown_target)?;

        Ok(String::from_utf8(rendered)?)
    }

    #[test]
    fn report_marks_best_and_incomplete_stores() -> TestResult {
        let output = fixture_comparison_output()?;

        assert!(output.contains("GreenMart"), "missing store name:\n{output}");
        assert!(output.contains("Best"), "missing Best marker:\n{output}");
        assert!(
            output.contains("Incomplete"),
            "missing Incomplete marker:\n{output}"
        );
        assert!(output.contains("Milk"), "missing item name:\n{output}");
        assert!(
            output.contains("not available"),
            "missing unavailable marker:\n{output}"
        );

        Ok(())
    }

    #[test]
    fn report_ranks_complete_store_first() -> TestResult {
        let output = fixture_comparison_output()?;

        let greenmart = output.find("GreenMart").expect("GreenMart in output");
        let quickbasket = output.find("QuickBasket").expect("QuickBasket in output");

        assert!(greenmart < quickbasket, "ranking out of order:\n{output}");

        Ok(())
    }
}
