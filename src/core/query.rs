//! Catalog queries and their URL parameter form

use serde::{Deserialize, Serialize};

/// Sentinel category value that disables the category filter
pub const ALL_CATEGORIES: &str = "All";

/// Category filter: either everything or one exact category
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No category filter
    #[default]
    All,
    /// Exact, case-sensitive category match
    Exact(String),
}

impl CategoryFilter {
    /// Parse a raw category value
    ///
    /// Empty input and the "All" sentinel both disable the filter.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(raw.to_string())
        }
    }

    /// Check if a category passes this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(expected) => expected == category,
        }
    }

    /// The filter as it appears in URLs
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Exact(category) => category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Inclusive price range
///
/// A range with `min > max` contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if a price lies within `[min, max]`
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Ordering applied to a catalog view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep the catalog's own order
    #[default]
    Featured,
    /// Raw price, lowest first
    PriceAsc,
    /// Raw price, highest first
    PriceDesc,
    /// Rating, highest first
    Rating,
}

impl SortKey {
    /// Parse a sort key, falling back to [`SortKey::Featured`] for anything unknown
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "price-asc" | "price-ascending" | "price:asc" => SortKey::PriceAsc,
            "price-desc" | "price-descending" | "price:desc" => SortKey::PriceDesc,
            "rating" | "rating-desc" | "rating-descending" | "rating:desc" => SortKey::Rating,
            _ => SortKey::Featured,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Rating => "rating",
        }
    }
}

/// The current search/filter/sort criteria for a list view
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Free-text search, matched case-insensitively
    #[serde(default)]
    pub search: String,

    /// Category filter
    #[serde(default)]
    pub category: CategoryFilter,

    /// Price range (products only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,

    /// Ordering
    #[serde(default)]
    pub sort: SortKey,
}

impl CatalogQuery {
    /// The identity query: no filters, catalog order
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = CategoryFilter::parse(category);
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Query parameters for catalog list endpoints
///
/// Every field is kept as raw text so that malformed values degrade to
/// "no filter" instead of rejecting the request. Repeated keys are accepted
/// and the first value wins.
///
/// # Example
/// ```text
/// GET /api/products?search=skin&category=Skincare&min=10&max=60&sort=price-asc
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    /// Free-text search
    pub search: Option<String>,

    /// Category name or "All"
    pub category: Option<String>,

    /// Lower price bound
    pub min: Option<String>,

    /// Upper price bound
    pub max: Option<String>,

    /// `featured`, `price-asc`, `price-desc` or `rating`
    pub sort: Option<String>,
}

impl QueryParams {
    /// Collect decoded query pairs, ignoring unknown keys
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "search" => &mut params.search,
                "category" => &mut params.category,
                "min" => &mut params.min,
                "max" => &mut params.max,
                "sort" => &mut params.sort,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Convert raw parameters into a [`CatalogQuery`]
    ///
    /// The price range is active only when at least one bound parses; a
    /// missing bound is open.
    pub fn to_query(&self) -> CatalogQuery {
        let min = parse_bound(self.min.as_deref());
        let max = parse_bound(self.max.as_deref());
        let price_range = match (min, max) {
            (None, None) => None,
            (min, max) => Some(PriceRange::new(
                min.unwrap_or(0.0),
                max.unwrap_or(f64::INFINITY),
            )),
        };

        CatalogQuery {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            category: self
                .category
                .as_deref()
                .map(CategoryFilter::parse)
                .unwrap_or_default(),
            price_range,
            sort: self.sort.as_deref().map(SortKey::parse).unwrap_or_default(),
        }
    }
}

fn parse_bound(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
