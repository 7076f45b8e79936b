//! # Empower Storefront
//!
//! Catalog, carousel and page models for the Women Empowerment storefront.
//!
//! ## Features
//!
//! - **Catalog Engine**: search, category and price range filters with stable sorting
//! - **Banner Carousel**: wrap-around index with directional transitions and a scoped timer
//! - **Page Models**: one typed, JSON-serialisable model per routed page
//! - **Identity Injection**: pluggable OAuth-style provider for the login flow
//! - **Configuration-Based**: catalog, banners and rotating words from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront::prelude::*;
//!
//! let products = InMemoryCatalog::from_items(StorefrontConfig::default_config().catalog.products);
//! let view = products.view(&CatalogQuery::new().with_search("skin"));
//! assert_eq!(view.data[0].title, "Organic Skincare Bundle");
//!
//! StorefrontBuilder::new().serve("127.0.0.1:3000".parse()?).await?;
//! ```

pub mod carousel;
pub mod config;
pub mod core;
pub mod pages;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Catalog ===
    pub use crate::core::{
        CatalogQuery, CatalogView, CategoryFilter, Item, ItemId, ItemKind, PriceRange,
        ProductInfo, QueryParams, QueryableCatalog, SortKey, VideoInfo, compute_view,
    };

    // === Display ===
    pub use crate::core::{DisplayPrice, QuantitySelector, StarRating};

    // === Carousel ===
    pub use crate::carousel::{CarouselController, CarouselTicker, Direction, SlideState};
    pub use crate::core::{EventBus, EventEnvelope, Rotator, SlideChange, Trigger};

    // === Identity ===
    pub use crate::core::{Identity, IdentityProvider, MockIdentityProvider, Session};

    // === Errors ===
    pub use crate::core::{CatalogError, ConfigError, IdentityError, StorefrontError};

    // === Pages ===
    pub use crate::pages::{CardModel, CardVariant, NavItem, Page};

    // === Storage ===
    pub use crate::storage::InMemoryCatalog;

    // === Config ===
    pub use crate::config::StorefrontConfig;

    // === Server ===
    pub use crate::server::{RestExposure, StorefrontBuilder, StorefrontHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
