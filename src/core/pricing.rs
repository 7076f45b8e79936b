//! Display values derived from prices and ratings
//!
//! Stored prices and discounts are never rounded; rounding happens only when
//! a value is formatted for display.

use crate::core::item::ProductInfo;
use serde::Serialize;

/// Number of stars in a rating widget
pub const MAX_STARS: u8 = 5;

/// Price after applying a percentage discount
///
/// Returns `None` when there is no discount (absent or zero), in which case
/// no discounted price is shown.
pub fn discounted_price(price: f64, discount: Option<f64>) -> Option<f64> {
    match discount {
        Some(discount) if discount != 0.0 => Some(price - price * discount / 100.0),
        _ => None,
    }
}

/// Format an amount with a currency sign and exactly two decimals
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Prices as they appear on a product card or detail page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayPrice {
    /// Price the customer pays
    pub current: String,

    /// Struck-through original price, only when discounted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,

    /// "15% OFF" style label, only when discounted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_label: Option<String>,
}

impl DisplayPrice {
    pub fn for_product(product: &ProductInfo) -> Self {
        match discounted_price(product.price, product.discount) {
            Some(discounted) => Self {
                current: format_price(discounted),
                original: Some(format_price(product.price)),
                discount_label: product.discount.map(|d| format!("{}% OFF", d)),
            },
            None => Self {
                current: format_price(product.price),
                original: None,
                discount_label: None,
            },
        }
    }
}

/// Star widget state for a rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarRating {
    /// Filled stars, `floor(rating)` clamped to `0..=5`
    pub filled: u8,

    /// Total stars drawn
    pub total: u8,

    /// Rating with one decimal, e.g. "4.7"
    pub label: String,
}

impl StarRating {
    pub fn from_rating(rating: f64) -> Self {
        let filled = if rating.is_finite() {
            rating.floor().clamp(0.0, f64::from(MAX_STARS)) as u8
        } else {
            0
        };
        Self {
            filled,
            total: MAX_STARS,
            label: format!("{:.1}", rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn product(price: f64, discount: Option<f64>) -> ProductInfo {
        ProductInfo {
            price,
            discount,
            stock: 1,
            review_count: 0,
            details: vec![],
            specifications: IndexMap::new(),
        }
    }

    #[test]
    fn test_discounted_price() {
        let discounted = discounted_price(89.99, Some(15.0)).unwrap();
        assert!((discounted - 76.4915).abs() < 1e-9);
        assert_eq!(format_price(discounted), "$76.49");
    }

    #[test]
    fn test_zero_or_missing_discount_shows_no_discounted_price() {
        assert_eq!(discounted_price(20.0, None), None);
        assert_eq!(discounted_price(20.0, Some(0.0)), None);
    }

    #[test]
    fn test_display_price_with_discount() {
        let display = DisplayPrice::for_product(&product(89.99, Some(15.0)));
        assert_eq!(display.current, "$76.49");
        assert_eq!(display.original.as_deref(), Some("$89.99"));
        assert_eq!(display.discount_label.as_deref(), Some("15% OFF"));
    }

    #[test]
    fn test_display_price_without_discount() {
        let display = DisplayPrice::for_product(&product(45.0, None));
        assert_eq!(display.current, "$45.00");
        assert!(display.original.is_none());
        assert!(display.discount_label.is_none());
    }

    #[test]
    fn test_star_rating() {
        let stars = StarRating::from_rating(4.7);
        assert_eq!(stars.filled, 4);
        assert_eq!(stars.total, 5);
        assert_eq!(stars.label, "4.7");

        assert_eq!(StarRating::from_rating(7.0).filled, 5);
        assert_eq!(StarRating::from_rating(-1.0).filled, 0);
    }
}
