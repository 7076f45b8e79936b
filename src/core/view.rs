//! The catalog filter/sort engine
//!
//! [`compute_view`] is a pure function of the source collection and a
//! [`CatalogQuery`]. It borrows the collection immutably and always returns a
//! freshly allocated, ordered view.

use crate::core::item::Item;
use crate::core::query::{CatalogQuery, SortKey};
use serde::Serialize;
use std::cmp::Ordering;

/// Apply a query to a collection of items
///
/// Filters run in order (search, category, price range) and the survivors are
/// stable-sorted by the query's sort key. Items without a price (videos) are
/// not subject to the price range and sort after priced items when ordering
/// by price.
///
/// # Example
/// ```rust,ignore
/// let view = compute_view(&items, &CatalogQuery::new().with_sort(SortKey::PriceAsc));
/// ```
pub fn compute_view(items: &[Item], query: &CatalogQuery) -> Vec<Item> {
    let needle = query.search.to_lowercase();

    let mut view: Vec<Item> = items
        .iter()
        .filter(|item| needle.is_empty() || item.matches_search(&needle))
        .filter(|item| query.category.matches(&item.category))
        .filter(|item| match (query.price_range, item.price()) {
            (Some(range), Some(price)) => range.contains(price),
            _ => true,
        })
        .cloned()
        .collect();

    // `sort_by` is stable, which keeps ties in catalog order
    match query.sort {
        SortKey::Featured => {}
        SortKey::PriceAsc => view.sort_by(|a, b| compare_price(a.price(), b.price(), false)),
        SortKey::PriceDesc => view.sort_by(|a, b| compare_price(a.price(), b.price(), true)),
        SortKey::Rating => view.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    view
}

fn compare_price(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.total_cmp(&a),
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A computed list view together with the query that produced it
#[derive(Debug, Serialize)]
pub struct CatalogView<T> {
    /// The ordered items
    pub data: Vec<T>,

    /// Number of items in the view
    pub count: usize,

    /// Number of items in the source collection
    pub total: usize,

    /// The query that produced this view
    pub query: CatalogQuery,
}

impl<T> CatalogView<T> {
    pub fn new(data: Vec<T>, total: usize, query: CatalogQuery) -> Self {
        Self {
            count: data.len(),
            data,
            total,
            query,
        }
    }

    /// Transform every entry, keeping the view metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> CatalogView<U> {
        CatalogView {
            data: self.data.into_iter().map(f).collect(),
            count: self.count,
            total: self.total,
            query: self.query,
        }
    }
}
