//! Listings and the Price Book
//!
//! A listing is one store's priced instance of a reference item. The price
//! book indexes listings by `(item, store)` and pins them to one currency.

use std::fmt;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{catalog::ItemId, stores::StoreId};

/// Identifier of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListingId(String);

impl ListingId {
    /// Creates a new listing id.
    pub fn new(id: impl Into<String>) -> Self {
        ListingId(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        ListingId::new(id)
    }
}

impl From<String> for ListingId {
    fn from(id: String) -> Self {
        ListingId(id)
    }
}

/// A store's priced instance of a reference item.
///
/// Either price may be absent; a listing with no usable price still exists
/// but offers the item as unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    id: ListingId,
    item: ItemId,
    store: StoreId,
    original_price: Option<Money<'a, Currency>>,
    discount_price: Option<Money<'a, Currency>>,
}

impl<'a> Listing<'a> {
    /// Creates a new listing.
    pub fn new(
        id: ListingId,
        item: ItemId,
        store: StoreId,
        original_price: Option<Money<'a, Currency>>,
        discount_price: Option<Money<'a, Currency>>,
    ) -> Self {
        Listing {
            id,
            item,
            store,
            original_price,
            discount_price,
        }
    }

    /// Returns the listing id.
    pub fn id(&self) -> &ListingId {
        &self.id
    }

    /// Returns the reference item this listing prices.
    pub fn item(&self) -> &ItemId {
        &self.item
    }

    /// Returns the store offering this listing.
    pub fn store(&self) -> &StoreId {
        &self.store
    }

    /// Returns the undiscounted shelf price, if recorded.
    pub fn original_price(&self) -> Option<&Money<'a, Currency>> {
        self.original_price.as_ref()
    }

    /// Returns the discounted price, if recorded.
    pub fn discount_price(&self) -> Option<&Money<'a, Currency>> {
        self.discount_price.as_ref()
    }

    /// The price actually charged: the discount price when set and strictly
    /// positive, otherwise the original price when set and strictly positive,
    /// otherwise `None` (the item is unavailable at this store).
    pub fn effective_price(&self) -> Option<&Money<'a, Currency>> {
        positive(self.discount_price.as_ref()).or_else(|| positive(self.original_price.as_ref()))
    }
}

fn positive<'m, 'a>(price: Option<&'m Money<'a, Currency>>) -> Option<&'m Money<'a, Currency>> {
    price.filter(|money| *money.amount() > Decimal::ZERO)
}

/// Errors related to price book construction.
#[derive(Debug, Error)]
pub enum PriceBookError {
    /// A listing's currency differs from the book currency (listing id, listing currency, book currency).
    #[error("Listing {0} has currency {1}, but price book has currency {2}")]
    CurrencyMismatch(ListingId, &'static str, &'static str),
}

/// Index of listings keyed by `(item, store)`, pinned to one currency.
///
/// At most one listing exists per `(item, store)` pair: inserting a second
/// listing for the same pair replaces the first (last write wins).
#[derive(Debug)]
pub struct PriceBook<'a> {
    listings: FxHashMap<ItemId, FxHashMap<StoreId, Listing<'a>>>,
    currency: &'static Currency,
}

impl<'a> PriceBook<'a> {
    /// Create an empty price book for the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        PriceBook {
            listings: FxHashMap::default(),
            currency,
        }
    }

    /// Create a price book from a collection of listings.
    ///
    /// # Errors
    ///
    /// Returns a `PriceBookError::CurrencyMismatch` if any listing carries a
    /// price in a currency other than the book's.
    pub fn with_listings(
        listings: impl IntoIterator<Item = Listing<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, PriceBookError> {
        let mut book = PriceBook::new(currency);

        for listing in listings {
            book.insert(listing)?;
        }

        Ok(book)
    }

    /// Insert a listing, replacing any previous listing for the same
    /// `(item, store)` pair. The replaced listing is returned.
    ///
    /// # Errors
    ///
    /// Returns a `PriceBookError::CurrencyMismatch` if the listing carries a
    /// price in a currency other than the book's.
    pub fn insert(&mut self, listing: Listing<'a>) -> Result<Option<Listing<'a>>, PriceBookError> {
        self.check_currency(&listing)?;

        Ok(self
            .listings
            .entry(listing.item.clone())
            .or_default()
            .insert(listing.store.clone(), listing))
    }

    fn check_currency(&self, listing: &Listing<'a>) -> Result<(), PriceBookError> {
        let prices = listing
            .original_price
            .iter()
            .chain(listing.discount_price.iter());

        for price in prices {
            if price.currency() != self.currency {
                return Err(PriceBookError::CurrencyMismatch(
                    listing.id.clone(),
                    price.currency().iso_alpha_code,
                    self.currency.iso_alpha_code,
                ));
            }
        }

        Ok(())
    }

    /// Look up the listing for an `(item, store)` pair.
    pub fn listing(&self, item: &ItemId, store: &StoreId) -> Option<&Listing<'a>> {
        self.listings.get(item).and_then(|row| row.get(store))
    }

    /// The effective price for an `(item, store)` pair, if the item is
    /// available there.
    pub fn effective_price(&self, item: &ItemId, store: &StoreId) -> Option<Money<'a, Currency>> {
        self.listing(item, store)
            .and_then(|listing| listing.effective_price().copied())
    }

    /// Iterate over all listings, in no particular order.
    pub fn listings(&self) -> impl Iterator<Item = &Listing<'a>> {
        self.listings.values().flat_map(FxHashMap::values)
    }

    /// Get the currency of the price book.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Get the number of listings in the price book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.values().map(FxHashMap::len).sum()
    }

    /// Check if the price book is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
