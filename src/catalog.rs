//! Reference Items
//!
//! The store-independent item directory. Stores publish [`crate::listings::Listing`]s
//! against these records.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::categories::CategoryId;

/// Identifier of a reference item, assigned by the item directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new item id.
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId(id)
    }
}

/// A reference item: the canonical description of a product, independent of
/// any store.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Item id
    pub id: ItemId,

    /// Display name
    pub name: String,

    /// Category the item belongs to
    pub category: CategoryId,

    /// Whether the item is visible to shoppers
    pub active: bool,
}

/// Directory of reference items keyed by id.
///
/// Inserting an item with an id already present replaces the previous record
/// (last write wins).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: FxHashMap<ItemId, Item>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Catalog {
            items: FxHashMap::default(),
        }
    }

    /// Create a catalog from a collection of items.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut catalog = Catalog::new();

        for item in items {
            catalog.insert(item);
        }

        catalog
    }

    /// Insert an item, returning the record it replaced, if any.
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.id.clone(), item)
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Look up an item's display name by id.
    pub fn name_of(&self, id: &ItemId) -> Option<&str> {
        self.items.get(id).map(|item| item.name.as_str())
    }

    /// Check whether an item id is present.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    /// Iterate over the items, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Get the number of items in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
