//! Stores

use std::fmt;

/// Identifier of a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreId(String);

impl StoreId {
    /// Creates a new store id.
    pub fn new(id: impl Into<String>) -> Self {
        StoreId(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoreId {
    fn from(id: &str) -> Self {
        StoreId::new(id)
    }
}

impl From<String> for StoreId {
    fn from(id: String) -> Self {
        StoreId(id)
    }
}

/// A store participating in price comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    /// Store id
    pub id: StoreId,

    /// Display name
    pub name: String,

    /// Whether the store is open for comparison
    pub active: bool,
}

/// Iterate only the active stores, preserving input order.
///
/// [`crate::comparison::compare`] evaluates exactly the stores it is given;
/// callers that want the usual shopper view pre-filter with this adapter.
pub fn active(stores: &[Store]) -> impl Iterator<Item = &Store> {
    stores.iter().filter(|store| store.active)
}
