//! Basket Comparison
//!
//! Prices a cart against every store's listings and ranks the stores. This is
//! the heart of the crate: a pure function of its inputs, recomputed from
//! scratch on every cart change, with no I/O and no hidden state.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::{
    cart::Cart,
    catalog::{Catalog, ItemId},
    listings::PriceBook,
    stores::Store,
};

/// Display name used for cart entries whose item id is missing from the
/// catalog.
pub const UNKNOWN_ITEM_NAME: &str = "Unknown";

/// One cart entry priced against a single store.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine<'a> {
    item: ItemId,
    name: String,
    quantity: u32,
    unit_price: Option<Money<'a, Currency>>,
}

impl<'a> PricedLine<'a> {
    /// Returns the reference item id.
    pub fn item(&self) -> &ItemId {
        &self.item
    }

    /// Returns the item's display name, or [`UNKNOWN_ITEM_NAME`] when the
    /// item id was not in the catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the desired quantity.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the effective unit price, `None` when the item is unavailable
    /// at this store.
    pub fn unit_price(&self) -> Option<&Money<'a, Currency>> {
        self.unit_price.as_ref()
    }

    /// Line cost: unit price × quantity, `None` when unavailable.
    pub fn line_total(&self) -> Option<Money<'a, Currency>> {
        self.unit_price.map(|price| {
            let amount = price
                .amount()
                .saturating_mul(Decimal::from(self.quantity));

            Money::from_decimal(amount, price.currency())
        })
    }

    /// Check whether the item is available at this store.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.unit_price.is_some()
    }
}

/// The full cart priced against one store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreComparison<'a> {
    store: &'a Store,
    lines: SmallVec<[PricedLine<'a>; 8]>,
    total: Money<'a, Currency>,
    complete: bool,
}

impl<'a> StoreComparison<'a> {
    /// Returns the store this comparison prices.
    pub fn store(&self) -> &'a Store {
        self.store
    }

    /// Returns the priced lines, in cart order.
    pub fn lines(&self) -> &[PricedLine<'a>] {
        &self.lines
    }

    /// Sum of the available lines' costs. Unavailable lines contribute
    /// nothing.
    #[must_use]
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Whether every cart entry resolved to an available price here.
    #[must_use]
    pub fn has_all_items(&self) -> bool {
        self.complete
    }

    /// Iterate over the lines with no available price at this store.
    pub fn missing(&self) -> impl Iterator<Item = &PricedLine<'a>> {
        self.lines.iter().filter(|line| !line.is_available())
    }

    /// The number of cart entries available at this store.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_available()).count()
    }

    /// The number of cart entries evaluated.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Ranked outcome of comparing a cart across stores.
///
/// Complete stores (every cart item available) rank strictly before
/// incomplete ones regardless of totals; within each group stores order
/// ascending by total, and exact ties keep the input store order.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<'a> {
    ranked: Vec<StoreComparison<'a>>,
    currency: &'static Currency,
}

impl<'a> Comparison<'a> {
    /// The per-store results in ranked order.
    pub fn ranked(&self) -> &[StoreComparison<'a>] {
        &self.ranked
    }

    /// Iterate over the results in ranked order.
    pub fn iter(&self) -> impl Iterator<Item = &StoreComparison<'a>> {
        self.ranked.iter()
    }

    /// The first ranked store with full availability, if any.
    ///
    /// A store missing even one cart item is never cheapest, however low its
    /// partial total.
    pub fn cheapest(&self) -> Option<&StoreComparison<'a>> {
        self.ranked.iter().find(|result| result.complete)
    }

    /// The lowest basket total among complete stores.
    pub fn lowest_total(&self) -> Option<Money<'a, Currency>> {
        self.cheapest().map(StoreComparison::total)
    }

    /// The highest basket total among complete stores.
    pub fn highest_total(&self) -> Option<Money<'a, Currency>> {
        // Complete stores form a prefix of the ranking, sorted ascending.
        self.ranked
            .iter()
            .take_while(|result| result.complete)
            .last()
            .map(StoreComparison::total)
    }

    /// What shopping at the cheapest complete store saves over the most
    /// expensive one. `None` when no store has full availability.
    pub fn savings(&self) -> Option<Money<'a, Currency>> {
        let lowest = self.lowest_total()?;
        let highest = self.highest_total()?;

        let amount = highest.amount().saturating_sub(*lowest.amount());

        Some(Money::from_decimal(amount, self.currency))
    }

    /// The savings as a fraction of the most expensive complete store's
    /// total.
    pub fn savings_percent(&self) -> Option<Percentage> {
        let savings = self.savings()?;
        let highest = self.highest_total()?;

        if highest.amount().is_zero() {
            return Some(Percentage::from(0.0));
        }

        Some(Percentage::from(*savings.amount() / *highest.amount()))
    }

    /// Get the currency all totals are expressed in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Get the number of stores compared.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Check if no stores were compared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Price a cart against every supplied store and rank the results.
///
/// Stores are evaluated exactly as given; active/inactive filtering is the
/// caller's concern (see [`crate::stores::active`]). Cart entries whose item
/// id is not in the catalog still produce a line, named
/// [`UNKNOWN_ITEM_NAME`]; entries whose `(item, store)` pair has no listing,
/// or whose listing has no effective price, mark the store incomplete. An
/// empty cart prices to zero everywhere and leaves every store complete.
pub fn compare<'a>(
    cart: &Cart,
    catalog: &Catalog,
    stores: &'a [Store],
    book: &'a PriceBook<'a>,
) -> Comparison<'a> {
    let mut ranked: Vec<StoreComparison<'a>> = stores
        .iter()
        .map(|store| price_basket(cart, catalog, store, book))
        .collect();

    // Stable sort: complete stores first, cheaper first within each group,
    // input store order for exact ties.
    ranked.sort_by(|a, b| {
        b.complete
            .cmp(&a.complete)
            .then_with(|| a.total.amount().cmp(b.total.amount()))
    });

    Comparison {
        ranked,
        currency: book.currency(),
    }
}

fn price_basket<'a>(
    cart: &Cart,
    catalog: &Catalog,
    store: &'a Store,
    book: &'a PriceBook<'a>,
) -> StoreComparison<'a> {
    let mut lines = SmallVec::new();
    let mut total = Decimal::ZERO;
    let mut complete = true;

    for (item, quantity) in cart.iter() {
        let name = catalog
            .name_of(item)
            .unwrap_or(UNKNOWN_ITEM_NAME)
            .to_string();

        let unit_price = book.effective_price(item, &store.id);

        match unit_price {
            Some(price) => {
                let line = price.amount().saturating_mul(Decimal::from(quantity));
                total = total.saturating_add(line);
            }
            None => complete = false,
        }

        lines.push(PricedLine {
            item: item.clone(),
            name,
            quantity,
            unit_price,
        });
    }

    StoreComparison {
        store,
        lines,
        total: Money::from_decimal(total, book.currency()),
        complete,
    }
}
