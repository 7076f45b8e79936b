//! Catalog items shown in the storefront list views
//!
//! An [`Item`] is either a product sold in the marketplace or an educational
//! video from the learn section. Both share the fields the list views filter
//! and sort on (title, description, category, rating); the kind-specific
//! payload lives in [`ItemKind`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Stable identifier of a catalog item
pub type ItemId = u32;

/// A catalog record (product or video)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Item {
    /// Unique, stable identifier
    pub id: ItemId,

    /// Display title
    #[validate(length(min = 1))]
    pub title: String,

    /// Optional secondary line (maker, presenter, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Category, drawn from the configured category set
    #[validate(length(min = 1))]
    pub category: String,

    /// Average rating between 0.0 and 5.0
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default)]
    pub rating: f64,

    /// Ordered badges ("Handmade", "Eco-friendly", ...), may repeat
    #[serde(default)]
    pub badges: Vec<String>,

    /// Image path, resolved by the hosting shell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Kind-specific payload
    #[validate(custom(function = "validate_kind"))]
    pub kind: ItemKind,
}

/// Kind-specific part of an [`Item`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// A product for sale
    Product(ProductInfo),
    /// An educational video
    Video(VideoInfo),
}

/// Product-only fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Raw price before any discount
    pub price: f64,

    /// Discount percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,

    /// Units in stock
    #[serde(default)]
    pub stock: u32,

    /// Number of reviews behind the rating
    #[serde(default)]
    pub review_count: u32,

    /// Feature bullet points, in display order
    #[serde(default)]
    pub details: Vec<String>,

    /// Specification table, in display order
    #[serde(default)]
    pub specifications: IndexMap<String, String>,
}

/// Video-only fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    /// Running time in minutes
    pub duration_minutes: u32,

    /// Who presents the session
    #[serde(default)]
    pub presenter: String,
}

fn validate_kind(kind: &ItemKind) -> Result<(), ValidationError> {
    if let ItemKind::Product(product) = kind {
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(ValidationError::new("price_out_of_range"));
        }
        if product
            .discount
            .is_some_and(|discount| !(0.0..=100.0).contains(&discount))
        {
            return Err(ValidationError::new("discount_out_of_range"));
        }
    }
    Ok(())
}

impl Item {
    /// Raw price, `None` for videos
    pub fn price(&self) -> Option<f64> {
        self.as_product().map(|p| p.price)
    }

    /// Product payload, if this item is a product
    pub fn as_product(&self) -> Option<&ProductInfo> {
        match &self.kind {
            ItemKind::Product(product) => Some(product),
            ItemKind::Video(_) => None,
        }
    }

    /// Video payload, if this item is a video
    pub fn as_video(&self) -> Option<&VideoInfo> {
        match &self.kind {
            ItemKind::Video(video) => Some(video),
            ItemKind::Product(_) => None,
        }
    }

    /// Check if this item is a product
    pub fn is_product(&self) -> bool {
        matches!(self.kind, ItemKind::Product(_))
    }

    /// Case-insensitive substring match on title, description and category
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        [&self.title, &self.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, discount: Option<f64>) -> Item {
        Item {
            id: 1,
            title: "Handcrafted Jewelry Set".to_string(),
            subtitle: Some("By Artisan Creations".to_string()),
            description: "Earrings, necklace and bracelet".to_string(),
            category: "Jewelry".to_string(),
            rating: 4.7,
            badges: vec!["Handmade".to_string()],
            image: None,
            kind: ItemKind::Product(ProductInfo {
                price,
                discount,
                stock: 12,
                review_count: 124,
                details: vec![],
                specifications: IndexMap::new(),
            }),
        }
    }

    #[test]
    fn test_price_only_for_products() {
        let item = product(89.99, None);
        assert_eq!(item.price(), Some(89.99));
        assert!(item.is_product());

        let video = Item {
            kind: ItemKind::Video(VideoInfo {
                duration_minutes: 12,
                presenter: "Asha".to_string(),
            }),
            ..product(0.0, None)
        };
        assert_eq!(video.price(), None);
        assert!(video.as_video().is_some());
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let item = product(89.99, None);
        assert!(item.matches_search("jewelry"));
        assert!(item.matches_search("necklace"));
        assert!(!item.matches_search("skincare"));
    }

    #[test]
    fn test_validation_rejects_bad_discount() {
        assert!(product(10.0, Some(15.0)).validate().is_ok());
        assert!(product(10.0, Some(150.0)).validate().is_err());
        assert!(product(-1.0, None).validate().is_err());
    }

    #[test]
    fn test_validation_rejects_rating_above_five() {
        let mut item = product(10.0, None);
        item.rating = 5.5;
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_kind_serializes_with_type_tag() {
        let json = serde_json::to_value(product(10.0, Some(5.0))).unwrap();
        assert_eq!(json["kind"]["type"], "product");
        assert_eq!(json["kind"]["price"], 10.0);
    }
}
