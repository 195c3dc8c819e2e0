//! Offers
//!
//! Single-item price lookups across stores, the basis of the "where is this
//! product cheapest" view.

use rusty_money::{Money, iso::Currency};

use crate::{
    catalog::ItemId,
    listings::{Listing, PriceBook},
    stores::Store,
};

/// One store's available price for a single item.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer<'a> {
    store: &'a Store,
    listing: &'a Listing<'a>,
    price: Money<'a, Currency>,
}

impl<'a> Offer<'a> {
    /// Returns the store making the offer.
    pub fn store(&self) -> &'a Store {
        self.store
    }

    /// Returns the listing behind the offer.
    pub fn listing(&self) -> &'a Listing<'a> {
        self.listing
    }

    /// Returns the effective price on offer.
    #[must_use]
    pub fn price(&self) -> Money<'a, Currency> {
        self.price
    }
}

/// All available offers for an item, in the supplied store order.
///
/// Stores with no listing for the item, or whose listing has no effective
/// price, are skipped.
pub fn offers<'a>(
    item: &ItemId,
    stores: &'a [Store],
    book: &'a PriceBook<'a>,
) -> Vec<Offer<'a>> {
    stores
        .iter()
        .filter_map(|store| {
            let listing = book.listing(item, &store.id)?;
            let price = listing.effective_price().copied()?;

            Some(Offer {
                store,
                listing,
                price,
            })
        })
        .collect()
}

/// The cheapest available offer for an item; the earliest supplied store wins
/// exact ties.
pub fn cheapest_offer<'a>(
    item: &ItemId,
    stores: &'a [Store],
    book: &'a PriceBook<'a>,
) -> Option<Offer<'a>> {
    offers(item, stores, book)
        .into_iter()
        .min_by(|a, b| a.price.amount().cmp(b.price.amount()))
}
