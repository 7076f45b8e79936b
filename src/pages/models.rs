//! One model per routed page

use super::card::{CardModel, CardVariant};
use super::{Page, Sidebar};
use crate::carousel::SlideState;
use crate::config::{Banner, JoinConfig};
use crate::core::{
    ALL_CATEGORIES, CatalogError, CatalogQuery, CatalogView, DisplayPrice, IdentityProvider, Item,
    ItemId, QuantitySelector, QueryableCatalog, StarRating,
};
use serde::Serialize;

/// Number of cards in the "You May Also Like" row
pub const RELATED_LIMIT: usize = 4;

/// Category dropdown entries: "All" followed by the catalog's categories
fn category_options(catalog: &dyn QueryableCatalog) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(catalog.categories().iter().cloned())
        .collect()
}

/// Landing page
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub title: &'static str,
    pub sidebar: Sidebar,
    pub slide: SlideState,
    pub banners: Vec<Banner>,
}

impl HomePage {
    pub fn new(slide: SlideState, banners: &[Banner]) -> Self {
        Self {
            title: Page::Home.title(),
            sidebar: Sidebar::default(),
            slide,
            banners: banners.to_vec(),
        }
    }
}

/// Product listing
#[derive(Debug, Serialize)]
pub struct ProductPage {
    pub title: &'static str,
    pub sidebar: Sidebar,
    pub categories: Vec<String>,
    pub view: CatalogView<CardModel>,
}

impl ProductPage {
    pub fn new(catalog: &dyn QueryableCatalog, query: &CatalogQuery) -> Self {
        let view = catalog
            .view(query)
            .map(|item| CardModel::new(&item, CardVariant::for_product(&item)));
        Self {
            title: Page::Product.title(),
            sidebar: Sidebar::default(),
            categories: category_options(catalog),
            view,
        }
    }
}

/// Educational video listing
#[derive(Debug, Serialize)]
pub struct LearnPage {
    pub title: &'static str,
    pub sidebar: Sidebar,
    pub categories: Vec<String>,
    pub view: CatalogView<CardModel>,
}

impl LearnPage {
    pub fn new(catalog: &dyn QueryableCatalog, query: &CatalogQuery) -> Self {
        let view = catalog
            .view(query)
            .map(|item| CardModel::new(&item, CardVariant::Minimal));
        Self {
            title: Page::Learn.title(),
            sidebar: Sidebar::default(),
            categories: category_options(catalog),
            view,
        }
    }
}

/// Single product with its purchase controls
#[derive(Debug, Serialize)]
pub struct ProductDetailPage {
    pub title: &'static str,
    pub sidebar: Sidebar,
    pub item: Item,
    pub price: DisplayPrice,
    pub stars: StarRating,
    pub review_count: u32,
    /// "12 in stock" or "Out of stock"
    pub availability: String,
    /// Absent when the product is out of stock
    pub quantity: Option<QuantitySelector>,
    pub related: Vec<CardModel>,
}

impl ProductDetailPage {
    /// Build the page for `id`, applying a requested quantity when it is in range
    pub fn new(
        catalog: &dyn QueryableCatalog,
        id: ItemId,
        requested_quantity: Option<&str>,
    ) -> Result<Self, CatalogError> {
        let item = catalog.get(id).ok_or(CatalogError::ItemNotFound { id })?;
        let product = item.as_product().ok_or(CatalogError::NotAProduct { id })?;

        let availability = if product.stock > 0 {
            format!("{} in stock", product.stock)
        } else {
            "Out of stock".to_string()
        };

        let quantity = QuantitySelector::new(product.stock).map(|mut selector| {
            if let Some(raw) = requested_quantity {
                selector.set(raw);
            }
            selector
        });

        Ok(Self {
            title: Page::ProductDetail.title(),
            sidebar: Sidebar::default(),
            price: DisplayPrice::for_product(product),
            stars: StarRating::from_rating(item.rating),
            review_count: product.review_count,
            availability,
            quantity,
            related: related_products(catalog, item),
            item: item.clone(),
        })
    }
}

/// Other products, same category first, both groups in catalog order
fn related_products(catalog: &dyn QueryableCatalog, item: &Item) -> Vec<CardModel> {
    let others = move || {
        catalog
            .list_all()
            .iter()
            .filter(move |other| other.id != item.id && other.is_product())
    };
    let same = others().filter(|other| other.category == item.category);
    let rest = others().filter(|other| other.category != item.category);

    same.chain(rest)
        .take(RELATED_LIMIT)
        .map(|other| CardModel::new(other, CardVariant::Minimal))
        .collect()
}

/// Join page with the rotating word
#[derive(Debug, Clone, Serialize)]
pub struct JoinPage {
    pub title: &'static str,
    pub sidebar: Sidebar,
    pub headline: String,
    pub word: String,
    pub slide: SlideState,
    pub pitch: String,
    pub call_to_action: AuthLink,
}

impl JoinPage {
    pub fn new(config: &JoinConfig, slide: SlideState) -> Self {
        let word = config
            .words
            .get(slide.index)
            .cloned()
            .unwrap_or_default();
        Self {
            title: Page::Join.title(),
            sidebar: Sidebar::default(),
            headline: config.headline.clone(),
            word,
            slide,
            pitch: config.pitch.clone(),
            call_to_action: AuthLink {
                label: "Get Started",
                path: Page::Signup.path(),
            },
        }
    }
}

/// Link between the login and signup pages
#[derive(Debug, Clone, Serialize)]
pub struct AuthLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Login or signup page
#[derive(Debug, Clone, Serialize)]
pub struct AuthPage {
    pub page: Page,
    pub title: &'static str,
    pub prompt: &'static str,
    pub provider: String,
    pub button_text: String,
    pub authorization_url: String,
    /// Opaque value echoed back to `/auth/callback`
    pub state: String,
    pub back: AuthLink,
    pub alternate: AuthLink,
}

impl AuthPage {
    pub fn login(provider: &dyn IdentityProvider, state: String) -> Self {
        Self::new(
            Page::Login,
            "Sign in to access your account",
            AuthLink {
                label: "Join now",
                path: Page::Signup.path(),
            },
            provider,
            state,
        )
    }

    pub fn signup(provider: &dyn IdentityProvider, state: String) -> Self {
        Self::new(
            Page::Signup,
            "Create your account to start selling",
            AuthLink {
                label: "Sign in",
                path: Page::Login.path(),
            },
            provider,
            state,
        )
    }

    fn new(
        page: Page,
        prompt: &'static str,
        alternate: AuthLink,
        provider: &dyn IdentityProvider,
        state: String,
    ) -> Self {
        Self {
            page,
            title: page.title(),
            prompt,
            provider: provider.name().to_string(),
            button_text: format!("Continue with {}", provider.name()),
            authorization_url: provider.authorization_url(&state),
            state,
            back: AuthLink {
                label: "Back to Home",
                path: Page::Home.path(),
            },
            alternate,
        }
    }
}

/// Plain text page (service, about)
#[derive(Debug, Clone, Serialize)]
pub struct InfoPage {
    pub title: &'static str,
    pub sidebar: Sidebar,
    pub body: &'static str,
}

impl InfoPage {
    pub fn service() -> Self {
        Self {
            title: Page::Service.title(),
            sidebar: Sidebar::default(),
            body: "Mentoring, storefront setup and financial literacy workshops for \
                   women-led businesses.",
        }
    }

    pub fn about() -> Self {
        Self {
            title: Page::AboutUs.title(),
            sidebar: Sidebar::default(),
            body: "We connect women entrepreneurs with customers and with the skills \
                   to grow their brands.",
        }
    }
}
