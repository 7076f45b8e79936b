//! In-memory catalog loaded once at startup

use crate::core::{Item, QueryableCatalog};
use std::sync::Arc;

/// Immutable in-memory catalog
///
/// The collection is shared behind an `Arc<[Item]>`; clones are cheap and
/// nothing can mutate the items after construction, so no locking is needed.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    items: Arc<[Item]>,
    categories: Arc<[String]>,
}

impl InMemoryCatalog {
    /// Create a catalog from items and the category set they are drawn from
    pub fn new(items: impl Into<Arc<[Item]>>, categories: impl Into<Arc<[String]>>) -> Self {
        Self {
            items: items.into(),
            categories: categories.into(),
        }
    }

    /// Create a catalog whose category set is derived from the items
    ///
    /// Categories keep the order of their first appearance.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for item in &items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        Self::new(items, categories)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl QueryableCatalog for InMemoryCatalog {
    fn list_all(&self) -> &[Item] {
        &self.items
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}
