//! Store trait for catalog sources that support filtering and sorting

use crate::core::item::{Item, ItemId};
use crate::core::query::CatalogQuery;
use crate::core::view::{CatalogView, compute_view};

/// Trait for catalog sources
///
/// Implementors only provide the immutable collection; filtering and sorting
/// come from [`compute_view`].
pub trait QueryableCatalog: Send + Sync {
    /// Get all items in catalog order (unfiltered, unsorted)
    fn list_all(&self) -> &[Item];

    /// The category set items are drawn from
    fn categories(&self) -> &[String];

    /// Get an item by ID
    fn get(&self, id: ItemId) -> Option<&Item> {
        self.list_all().iter().find(|item| item.id == id)
    }

    /// Apply a query to the collection
    ///
    /// # Returns
    /// A new view; the collection itself is never modified
    fn view(&self, query: &CatalogQuery) -> CatalogView<Item> {
        let items = self.list_all();
        CatalogView::new(compute_view(items, query), items.len(), query.clone())
    }
}
