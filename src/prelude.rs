//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::Cart,
    catalog::{Catalog, Item, ItemId},
    categories::{Category, CategoryId, tree::CategoryTree},
    comparison::{Comparison, PricedLine, StoreComparison, UNKNOWN_ITEM_NAME, compare},
    fixtures::{Fixture, FixtureError},
    listings::{Listing, ListingId, PriceBook, PriceBookError},
    offers::{Offer, cheapest_offer, offers},
    report::{ReportError, write_comparison, write_store_breakdown},
    stores::{Store, StoreId, active},
};
