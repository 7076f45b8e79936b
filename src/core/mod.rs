//! Core module containing the catalog engine and its supporting types

pub mod auth;
pub mod error;
pub mod events;
pub mod item;
pub mod pricing;
pub mod quantity;
pub mod query;
pub mod store;
pub mod view;

pub use auth::{Identity, IdentityProvider, MockIdentityProvider, Session};
pub use error::{CatalogError, ConfigError, ErrorResponse, IdentityError, StorefrontError};
pub use events::{EventBus, EventEnvelope, Rotator, SlideChange, Trigger};
pub use item::{Item, ItemId, ItemKind, ProductInfo, VideoInfo};
pub use pricing::{DisplayPrice, StarRating, discounted_price, format_price};
pub use quantity::QuantitySelector;
pub use query::{ALL_CATEGORIES, CatalogQuery, CategoryFilter, PriceRange, QueryParams, SortKey};
pub use store::QueryableCatalog;
pub use view::{CatalogView, compute_view};
