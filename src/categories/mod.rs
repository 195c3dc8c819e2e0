//! Categories

use std::fmt;

pub mod tree;

/// Identifier of a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a new category id.
    pub fn new(id: impl Into<String>) -> Self {
        CategoryId(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        CategoryId::new(id)
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        CategoryId(id)
    }
}

/// A category in the item hierarchy.
///
/// Categories form a forest: a category with no parent is a root, and
/// `display_order` positions it among its siblings.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Category id
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Position among siblings, ascending
    pub display_order: u32,

    /// Parent category, if this is a subcategory
    pub parent: Option<CategoryId>,

    /// Whether the category is visible to shoppers
    pub active: bool,
}
