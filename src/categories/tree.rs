//! Category Tree
//!
//! Orders a flat category set for display: every parent immediately precedes
//! its descendants, and sibling groups sort by display order. The traversal
//! is pure and re-derived whenever the category set changes.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::categories::{Category, CategoryId};

/// Depth-first ordering and parent/child lookup over a flat category set.
///
/// A category with no parent is a root. A category whose declared parent id
/// is not in the set is also treated as a root rather than dropped. Cyclic
/// parent references are broken by a visited guard; every category is still
/// emitted exactly once.
#[derive(Debug, Clone)]
pub struct CategoryTree {
    nodes: Vec<Category>,
    index: FxHashMap<CategoryId, usize>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    flattened: Vec<usize>,
}

impl CategoryTree {
    /// Build the tree from a flat category set.
    ///
    /// Duplicate ids keep the last record for lookups. Sibling groups are
    /// sorted ascending by `display_order`; ties keep input order.
    #[must_use]
    pub fn build(categories: Vec<Category>) -> Self {
        let mut index = FxHashMap::default();

        for (pos, category) in categories.iter().enumerate() {
            index.insert(category.id.clone(), pos);
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); categories.len()];
        let mut roots: Vec<usize> = Vec::new();

        for (pos, category) in categories.iter().enumerate() {
            let parent_pos = category
                .parent
                .as_ref()
                .and_then(|parent| index.get(parent))
                .copied();

            match parent_pos {
                // A category that names itself as parent is a degenerate
                // cycle; treat it as a root.
                Some(parent) if parent != pos => {
                    if let Some(group) = children.get_mut(parent) {
                        group.push(pos);
                    }
                }
                _ => roots.push(pos),
            }
        }

        let order_of = |pos: &usize| categories.get(*pos).map_or(0, |c| c.display_order);

        roots.sort_by_key(order_of);

        for group in &mut children {
            group.sort_by_key(order_of);
        }

        let flattened = flatten(&categories, &children, &roots);

        CategoryTree {
            nodes: categories,
            index,
            children,
            roots,
            flattened,
        }
    }

    /// Look up a category by id.
    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.index.get(id).and_then(|&pos| self.nodes.get(pos))
    }

    /// The full category set in depth-first display order.
    pub fn flattened(&self) -> impl Iterator<Item = &Category> {
        self.flattened
            .iter()
            .filter_map(|&pos| self.nodes.get(pos))
    }

    /// The root categories in display order.
    pub fn roots(&self) -> impl Iterator<Item = &Category> {
        self.roots.iter().filter_map(|&pos| self.nodes.get(pos))
    }

    /// The direct children of a category, in display order.
    ///
    /// An unknown id yields an empty iterator.
    pub fn children(&self, id: &CategoryId) -> impl Iterator<Item = &Category> {
        self.index
            .get(id)
            .and_then(|&pos| self.children.get(pos))
            .into_iter()
            .flatten()
            .filter_map(|&pos| self.nodes.get(pos))
    }

    /// A category and all of its descendants, in depth-first display order.
    ///
    /// Used to widen an item filter from a parent category to everything
    /// underneath it. An unknown id yields an empty vector.
    #[must_use]
    pub fn subtree(&self, id: &CategoryId) -> Vec<&Category> {
        let Some(&start) = self.index.get(id) else {
            return Vec::new();
        };

        let mut visited = FxHashSet::default();
        let mut stack = vec![start];
        let mut result = Vec::new();

        while let Some(pos) = stack.pop() {
            if !visited.insert(pos) {
                continue;
            }

            if let Some(category) = self.nodes.get(pos) {
                result.push(category);
            }

            if let Some(group) = self.children.get(pos) {
                for &child in group.iter().rev() {
                    stack.push(child);
                }
            }
        }

        result
    }

    /// The path of names from the root down to a category, joined with `" > "`
    /// (for example `"Produce > Fruit"`).
    ///
    /// Cyclic parent chains are cut at the first repeated category.
    #[must_use]
    pub fn breadcrumb(&self, id: &CategoryId) -> Option<String> {
        let mut pos = *self.index.get(id)?;
        let mut visited = FxHashSet::default();
        let mut names: Vec<&str> = Vec::new();

        while visited.insert(pos) {
            let Some(category) = self.nodes.get(pos) else {
                break;
            };

            names.push(&category.name);

            match category.parent.as_ref().and_then(|p| self.index.get(p)) {
                Some(&parent) if parent != pos => pos = parent,
                _ => break,
            }
        }

        names.reverse();

        Some(names.join(" > "))
    }

    /// Get the number of categories in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Depth-first walk from the roots, then from any category a cycle left
/// unreachable, in input order. The visited guard ensures termination and
/// that every category is emitted exactly once.
fn flatten(categories: &[Category], children: &[Vec<usize>], roots: &[usize]) -> Vec<usize> {
    let mut flattened = Vec::with_capacity(categories.len());
    let mut visited = vec![false; categories.len()];

    let starts = roots.iter().copied().chain(0..categories.len());

    for start in starts {
        let mut stack = vec![start];

        while let Some(pos) = stack.pop() {
            if visited.get(pos).copied().unwrap_or(true) {
                continue;
            }

            if let Some(seen) = visited.get_mut(pos) {
                *seen = true;
            }

            flattened.push(pos);

            if let Some(group) = children.get(pos) {
                for &child in group.iter().rev() {
                    stack.push(child);
                }
            }
        }
    }

    flattened
}
