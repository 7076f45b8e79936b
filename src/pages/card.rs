//! Card shown for each item in the list views

use crate::core::{DisplayPrice, Item, ItemKind, StarRating};
use serde::Serialize;

pub const DEFAULT_BUTTON_TEXT: &str = "View Details";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    #[default]
    Default,
    Minimal,
    Featured,
}

impl CardVariant {
    /// Discounted products are featured on the product page
    pub fn for_product(item: &Item) -> Self {
        match item.as_product() {
            Some(product) if product.discount.is_some_and(|d| d > 0.0) => CardVariant::Featured,
            _ => CardVariant::Default,
        }
    }
}

/// Everything a card renders for one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardModel {
    pub id: u32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Price block, products only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<DisplayPrice>,
    pub stars: StarRating,
    pub badges: Vec<String>,
    pub button_text: &'static str,
    pub variant: CardVariant,
    /// Where the button leads, if anywhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl CardModel {
    pub fn new(item: &Item, variant: CardVariant) -> Self {
        let (price, href) = match &item.kind {
            ItemKind::Product(product) => (
                Some(DisplayPrice::for_product(product)),
                Some(format!("/productdetail?id={}", item.id)),
            ),
            ItemKind::Video(_) => (None, None),
        };

        Self {
            id: item.id,
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            description: item.description.clone(),
            image: item.image.clone(),
            price,
            stars: StarRating::from_rating(item.rating),
            badges: item.badges.clone(),
            button_text: DEFAULT_BUTTON_TEXT,
            variant,
            href,
        }
    }
}
