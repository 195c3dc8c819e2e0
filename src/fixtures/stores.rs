//! Store Fixtures

use serde::Deserialize;

use crate::stores::{Store, StoreId};

/// Wrapper for stores in YAML
#[derive(Debug, Deserialize)]
pub struct StoresFixture {
    /// Stores, in comparison order
    pub stores: Vec<StoreFixture>,
}

/// Store fixture from YAML
#[derive(Debug, Deserialize)]
pub struct StoreFixture {
    /// Store id
    pub id: String,

    /// Display name
    pub name: String,

    /// Whether the store is open for comparison
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl From<StoreFixture> for Store {
    fn from(fixture: StoreFixture) -> Self {
        Store {
            id: StoreId::from(fixture.id),
            name: fixture.name,
            active: fixture.active,
        }
    }
}
