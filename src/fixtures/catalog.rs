//! Catalog Fixtures

use serde::Deserialize;

use crate::{
    catalog::{Item, ItemId},
    categories::{Category, CategoryId},
};

/// Wrapper for the catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Categories, in display file order
    #[serde(default)]
    pub categories: Vec<CategoryFixture>,

    /// Reference items, in file order
    pub items: Vec<ItemFixture>,
}

/// Category fixture from YAML
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Category id
    pub id: String,

    /// Display name
    pub name: String,

    /// Position among siblings
    #[serde(default)]
    pub order: u32,

    /// Parent category id, for subcategories
    #[serde(default)]
    pub parent: Option<String>,

    /// Whether the category is visible
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Item fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item id
    pub id: String,

    /// Display name
    pub name: String,

    /// Category id
    pub category: String,

    /// Whether the item is visible
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl From<CategoryFixture> for Category {
    fn from(fixture: CategoryFixture) -> Self {
        Category {
            id: CategoryId::from(fixture.id),
            name: fixture.name,
            display_order: fixture.order,
            parent: fixture.parent.map(CategoryId::from),
            active: fixture.active,
        }
    }
}

impl From<ItemFixture> for Item {
    fn from(fixture: ItemFixture) -> Self {
        Item {
            id: ItemId::from(fixture.id),
            name: fixture.name,
            category: CategoryId::from(fixture.category),
            active: fixture.active,
        }
    }
}
