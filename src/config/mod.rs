//! Configuration loading and management

mod seed;

use crate::core::{ConfigError, Item, ItemId};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use validator::{Validate, ValidationError};

/// Complete storefront configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StorefrontConfig {
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,

    /// Landing page banner carousel
    #[validate(nested)]
    pub carousel: CarouselConfig,

    /// Join page rotating words
    #[validate(nested)]
    pub join: JoinConfig,

    /// Products, videos and the category set they share
    #[validate(nested)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    #[validate(nested)]
    pub identity: IdentityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind")]
    #[validate(custom(function = "validate_bind"))]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(self.bind.parse()?)
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn validate_bind(bind: &str) -> Result<(), ValidationError> {
    bind.parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_socket_address"))
}

/// Banner carousel settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CarouselConfig {
    /// Milliseconds between automatic advances
    #[validate(range(min = 1))]
    pub interval_ms: u64,

    #[validate(length(min = 1), nested)]
    pub banners: Vec<Banner>,
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// One carousel slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Banner {
    #[validate(length(min = 1))]
    pub image: String,

    /// Alternative text, also used as the slide caption
    #[validate(length(min = 1))]
    pub alt: String,

    /// Optional page the slide links to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Join page settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JoinConfig {
    /// Milliseconds between word changes
    #[validate(range(min = 1))]
    pub interval_ms: u64,

    /// Fixed word in front of the rotating one
    #[validate(length(min = 1))]
    pub headline: String,

    #[validate(length(min = 1))]
    pub words: Vec<String>,

    #[serde(default)]
    pub pitch: String,
}

impl JoinConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// The static catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CatalogConfig {
    /// Category set, in display order
    #[validate(length(min = 1))]
    pub categories: Vec<String>,

    #[serde(default)]
    #[validate(nested)]
    pub products: Vec<Item>,

    #[serde(default)]
    #[validate(nested)]
    pub videos: Vec<Item>,
}

impl CatalogConfig {
    /// Configured categories used by at least one of `items`, in configured order
    pub fn categories_for(&self, items: &[Item]) -> Vec<String> {
        self.categories
            .iter()
            .filter(|category| items.iter().any(|item| &item.category == *category))
            .cloned()
            .collect()
    }
}

/// Identity provider settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IdentityConfig {
    /// Name shown on the login button
    #[validate(length(min = 1))]
    pub provider: String,

    #[validate(length(min = 1))]
    pub authorize_endpoint: String,

    #[validate(length(min = 1))]
    pub client_id: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            provider: "Google".to_string(),
            authorize_endpoint: "/auth/mock/authorize".to_string(),
            client_id: "storefront-dev".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    ///
    /// The result has passed [`StorefrontConfig::check`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(ConfigError::from)?;
        config.check()?;
        Ok(config)
    }

    /// Run field validation and the catalog consistency checks
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()?;
        self.validate_catalog()
    }

    /// Catalog consistency checks that field validation cannot express
    ///
    /// Every item category must be in the category set, ids must be unique
    /// across products and videos, and each section only holds its own kind.
    pub fn validate_catalog(&self) -> Result<(), ConfigError> {
        let catalog = &self.catalog;
        let categories: HashSet<&str> = catalog.categories.iter().map(String::as_str).collect();
        let mut seen: HashSet<ItemId> = HashSet::new();

        for item in catalog.products.iter().chain(&catalog.videos) {
            if !seen.insert(item.id) {
                return Err(ConfigError::DuplicateItemId(item.id));
            }
            if !categories.contains(item.category.as_str()) {
                return Err(ConfigError::UnknownCategory {
                    item_id: item.id,
                    category: item.category.clone(),
                });
            }
        }

        if let Some(item) = catalog.products.iter().find(|item| !item.is_product()) {
            return Err(ConfigError::WrongSection {
                item_id: item.id,
                section: "products",
                expected: "product",
            });
        }
        if let Some(item) = catalog.videos.iter().find(|item| item.as_video().is_none()) {
            return Err(ConfigError::WrongSection {
                item_id: item.id,
                section: "videos",
                expected: "video",
            });
        }

        Ok(())
    }

    /// The built-in storefront catalog
    pub fn default_config() -> Self {
        Self {
            server: seed::server(),
            carousel: seed::carousel(),
            join: seed::join(),
            catalog: seed::catalog(),
            identity: seed::identity(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StorefrontConfig::default_config();
        config.check().unwrap();

        assert_eq!(config.carousel.banners.len(), 6);
        assert_eq!(config.carousel.interval(), Duration::from_secs(5));
        assert_eq!(config.join.words.len(), 7);
        assert_eq!(config.join.interval(), Duration::from_secs(2));
        assert_eq!(config.catalog.products.len(), 12);
        assert_eq!(config.catalog.videos.len(), 6);
    }

    #[test]
    fn test_seed_jewelry_set() {
        let config = StorefrontConfig::default_config();
        let jewelry = &config.catalog.products[0];
        let product = jewelry.as_product().unwrap();

        assert_eq!(jewelry.title, "Handcrafted Jewelry Set");
        assert_eq!(product.price, 89.99);
        assert_eq!(product.discount, Some(15.0));
        assert_eq!(product.details.len(), 5);
        assert_eq!(
            product.specifications.keys().next().map(String::as_str),
            Some("Materials")
        );
    }

    #[test]
    fn test_categories_for() {
        let config = StorefrontConfig::default_config();
        let video_categories = config.catalog.categories_for(&config.catalog.videos);
        assert_eq!(video_categories, ["Finance", "Marketing", "Leadership"]);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut config = StorefrontConfig::default_config();
        config.catalog.products[1].category = "Gadgets".to_string();
        let err = config.check().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCategory { item_id: 2, .. }));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut config = StorefrontConfig::default_config();
        config.catalog.videos[0].id = 1;
        let err = config.check().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateItemId(1)));
    }

    #[test]
    fn test_video_in_products_is_rejected() {
        let mut config = StorefrontConfig::default_config();
        let video = config.catalog.videos.remove(0);
        config.catalog.products.push(video);
        let err = config.check().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::WrongSection {
                section: "products",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_banners_fail_validation() {
        let mut config = StorefrontConfig::default_config();
        config.carousel.banners.clear();
        let err = config.check().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFields(_)));
    }

    #[test]
    fn test_rating_out_of_range_fails_validation() {
        let mut config = StorefrontConfig::default_config();
        config.catalog.products[0].rating = 7.5;
        assert!(matches!(
            config.check().unwrap_err(),
            ConfigError::InvalidFields(_)
        ));
    }

    #[test]
    fn test_bad_bind_address() {
        let mut config = StorefrontConfig::default_config();
        config.server.bind = "not an address".to_string();
        assert!(config.check().is_err());
    }

    #[test]
    fn test_yaml_roundtrip_through_loader() {
        let yaml = serde_yaml::to_string(&StorefrontConfig::default_config()).unwrap();
        let config = StorefrontConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(config.catalog.products.len(), 12);
    }
}
