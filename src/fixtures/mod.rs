//! Fixtures
//!
//! YAML-backed snapshots of the catalog, stores and prices, used by the demo
//! and the integration tests. A fixture set is three files sharing a name:
//! `catalog/{name}.yml`, `stores/{name}.yml` and `prices/{name}.yml` under
//! the base path.

use std::{fs, path::PathBuf};

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::Cart,
    catalog::{Catalog, Item, ItemId},
    categories::{Category, tree::CategoryTree},
    fixtures::{catalog::CatalogFixture, prices::PricesFixture, stores::StoresFixture},
    listings::{Listing, ListingId, PriceBook},
    stores::{Store, StoreId},
};

pub mod catalog;
pub mod prices;
pub mod stores;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between price rows
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Item not found
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// No prices loaded yet
    #[error("No prices loaded yet; currency unknown")]
    NoCurrency,

    /// No items loaded
    #[error("No items loaded; cannot create a cart")]
    NoItems,

    /// Not enough items in fixture
    #[error("Not enough items in fixture, available: {available}, requested: {requested}")]
    NotEnoughItems {
        /// Number of items defined in the fixture
        available: usize,
        /// Number of items requested
        requested: usize,
    },

    /// Price book construction error
    #[error(transparent)]
    PriceBook(#[from] crate::listings::PriceBookError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Categories, in file order
    categories: Vec<Category>,

    /// Reference items, in file order
    items: Vec<Item>,

    /// Stores, in comparison order
    stores: Vec<Store>,

    /// Listings built from the price rows
    listings: Vec<Listing<'static>>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            categories: Vec::new(),
            items: Vec::new(),
            stores: Vec::new(),
            listings: Vec::new(),
            currency: None,
        }
    }

    /// Load a complete fixture set (catalog, stores and prices with the same
    /// name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_catalog(name)?
            .load_stores(name)?
            .load_prices(name)?;

        Ok(fixture)
    }

    /// Load categories and items from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("catalog").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CatalogFixture = serde_norway::from_str(&contents)?;

        self.categories
            .extend(fixture.categories.into_iter().map(Category::from));

        self.items.extend(fixture.items.into_iter().map(Item::from));

        Ok(self)
    }

    /// Load stores from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_stores(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("stores").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: StoresFixture = serde_norway::from_str(&contents)?;

        self.stores
            .extend(fixture.stores.into_iter().map(Store::from));

        Ok(self)
    }

    /// Load price rows from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a price
    /// string is malformed, or if rows mix currencies.
    pub fn load_prices(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("prices").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: PricesFixture = serde_norway::from_str(&contents)?;

        for row in fixture.prices {
            let id = ListingId::from(row.listing_id());

            let original = row
                .original
                .as_deref()
                .map(|price| self.to_money(price))
                .transpose()?;

            let discount = row
                .discount
                .as_deref()
                .map(|price| self.to_money(price))
                .transpose()?;

            self.listings.push(Listing::new(
                id,
                ItemId::from(row.item),
                StoreId::from(row.store),
                original,
                discount,
            ));
        }

        Ok(self)
    }

    /// Parse a price string, validating currency consistency across the set.
    fn to_money(&mut self, price: &str) -> Result<Money<'static, Currency>, FixtureError> {
        let (minor_units, currency) = prices::parse_price(price)?;

        if let Some(existing) = self.currency {
            if existing != currency {
                return Err(FixtureError::CurrencyMismatch(
                    existing.iso_alpha_code.to_string(),
                    currency.iso_alpha_code.to_string(),
                ));
            }
        } else {
            self.currency = Some(currency);
        }

        Ok(Money::from_minor(minor_units, currency))
    }

    /// Build the reference item directory from the loaded items
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog::with_items(self.items.iter().cloned())
    }

    /// Build the category tree from the loaded categories
    #[must_use]
    pub fn category_tree(&self) -> CategoryTree {
        CategoryTree::build(self.categories.clone())
    }

    /// Get all loaded items, in file order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get all loaded stores, in comparison order
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Get all loaded listings
    pub fn listings(&self) -> &[Listing<'static>] {
        &self.listings
    }

    /// Build a price book from the loaded listings
    ///
    /// # Errors
    ///
    /// Returns an error if no prices are loaded or if the price book rejects
    /// a listing.
    pub fn price_book(&self) -> Result<PriceBook<'static>, FixtureError> {
        let currency = self.currency.ok_or(FixtureError::NoCurrency)?;

        Ok(PriceBook::with_listings(
            self.listings.iter().cloned(),
            currency,
        )?)
    }

    /// Create a cart holding one unit of each of the first `n` items (all
    /// items when `None`)
    ///
    /// # Errors
    ///
    /// Returns an error if no items are loaded or if more items are requested
    /// than the fixture defines.
    pub fn cart(&self, n: Option<usize>) -> Result<Cart, FixtureError> {
        if self.items.is_empty() {
            return Err(FixtureError::NoItems);
        }

        if let Some(n) = n
            && n > self.items.len()
        {
            return Err(FixtureError::NotEnoughItems {
                requested: n,
                available: self.items.len(),
            });
        }

        let mut cart = Cart::new();

        for item in self.items.iter().take(n.unwrap_or(self.items.len())) {
            cart.add(&item.id);
        }

        Ok(cart)
    }

    /// Look up a loaded item's id by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the item is not found.
    pub fn item_id(&self, key: &str) -> Result<ItemId, FixtureError> {
        self.items
            .iter()
            .find(|item| item.id.as_str() == key)
            .map(|item| item.id.clone())
            .ok_or_else(|| FixtureError::ItemNotFound(key.to_string()))
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no prices have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use super::*;

    fn write_fixture(base: &Path, category: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(category);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn fixture_loads_catalog_stores_and_prices() -> TestResult {
        let mut fixture = Fixture::new();

        fixture
            .load_catalog("market")?
            .load_stores("market")?
            .load_prices("market")?;

        assert_eq!(fixture.items().len(), 6);
        assert_eq!(fixture.stores().len(), 3);
        assert_eq!(fixture.listings().len(), 12);
        assert_eq!(fixture.currency()?, GBP);

        Ok(())
    }

    #[test]
    fn fixture_from_set_loads_all_fixtures() -> TestResult {
        let fixture = Fixture::from_set("market")?;

        assert_eq!(fixture.catalog().len(), 6);
        assert_eq!(fixture.category_tree().len(), 5);
        assert_eq!(fixture.price_book()?.len(), 12);

        Ok(())
    }

    #[test]
    fn fixture_cart_takes_the_first_n_items() -> TestResult {
        let fixture = Fixture::from_set("market")?;

        let full = fixture.cart(None)?;
        let partial = fixture.cart(Some(2))?;

        assert_eq!(full.len(), 6);
        assert_eq!(partial.len(), 2);
        assert_eq!(partial.quantity(&fixture.item_id("apple")?), 1);

        Ok(())
    }

    #[test]
    fn fixture_cart_rejects_request_for_too_many_items() -> TestResult {
        let fixture = Fixture::from_set("market")?;
        let result = fixture.cart(Some(10));

        assert!(matches!(
            result,
            Err(FixtureError::NotEnoughItems {
                requested: 10,
                available: 6
            })
        ));

        Ok(())
    }

    #[test]
    fn fixture_cart_with_no_items_returns_error() {
        let fixture = Fixture::new();
        let result = fixture.cart(None);

        assert!(matches!(result, Err(FixtureError::NoItems)));
    }

    #[test]
    fn fixture_item_id_not_found_returns_error() -> TestResult {
        let fixture = Fixture::from_set("market")?;
        let result = fixture.item_id("nonexistent");

        assert!(matches!(result, Err(FixtureError::ItemNotFound(_))));

        Ok(())
    }

    #[test]
    fn fixture_no_currency_returns_error() {
        let fixture = Fixture::new();

        assert!(matches!(fixture.currency(), Err(FixtureError::NoCurrency)));
        assert!(matches!(
            fixture.price_book(),
            Err(FixtureError::NoCurrency)
        ));
    }

    #[test]
    fn fixture_load_prices_rejects_currency_mismatch() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "prices",
            "mixed",
            "prices:\n  - item: apple\n    store: a\n    original: 1.00 USD\n  - item: milk\n    store: a\n    original: 1.00 GBP\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_prices("mixed");

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));

        Ok(())
    }

    #[test]
    fn fixture_load_prices_rejects_malformed_price() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "prices",
            "broken",
            "prices:\n  - item: apple\n    store: a\n    original: cheap\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_prices("broken");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));

        Ok(())
    }

    #[test]
    fn fixture_missing_file_returns_io_error() {
        let mut fixture = Fixture::with_base_path("./does-not-exist");
        let result = fixture.load_catalog("market");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn fixture_default_matches_new() {
        let fixture = Fixture::default();

        assert_eq!(fixture.base_path, PathBuf::from("./fixtures"));
        assert!(fixture.items.is_empty());
        assert!(fixture.stores.is_empty());
        assert!(fixture.listings.is_empty());
    }
}
