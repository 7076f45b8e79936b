//! Shared state behind every route
//!
//! The host owns the two catalogs, the two rotators and the identity
//! provider. It is built once by [`StorefrontBuilder`](super::StorefrontBuilder)
//! and shared as `Arc<StorefrontHost>`; dropping the last reference drops the
//! tickers, which cancels their timers.

use crate::carousel::{CarouselController, CarouselTicker};
use crate::config::StorefrontConfig;
use crate::core::{EventBus, IdentityProvider, QueryableCatalog, Rotator};
use crate::storage::InMemoryCatalog;
use anyhow::{Result, anyhow};
use std::sync::Arc;

pub struct StorefrontHost {
    /// Validated configuration
    pub config: Arc<StorefrontConfig>,

    /// Marketplace products
    pub products: Arc<dyn QueryableCatalog>,

    /// Learn section videos
    pub videos: Arc<dyn QueryableCatalog>,

    /// Landing page banner carousel
    pub banner: Arc<CarouselTicker>,

    /// Join page rotating word
    pub words: Arc<CarouselTicker>,

    pub identity: Arc<dyn IdentityProvider>,

    /// Slide changes from both rotators
    pub event_bus: EventBus,
}

impl StorefrontHost {
    /// Build the host from an already validated configuration
    ///
    /// The tickers are created stopped; call [`StorefrontHost::activate`].
    pub fn from_config(
        config: StorefrontConfig,
        identity: Arc<dyn IdentityProvider>,
        event_bus: EventBus,
    ) -> Result<Self> {
        let catalog = &config.catalog;
        let products = InMemoryCatalog::new(
            catalog.products.clone(),
            catalog.categories_for(&catalog.products),
        );
        let videos = InMemoryCatalog::new(
            catalog.videos.clone(),
            catalog.categories_for(&catalog.videos),
        );

        let banner_carousel = CarouselController::new(config.carousel.banners.len())
            .ok_or_else(|| anyhow!("The banner carousel needs at least one banner"))?;
        let word_carousel = CarouselController::new(config.join.words.len())
            .ok_or_else(|| anyhow!("The join page needs at least one rotating word"))?;

        let banner = CarouselTicker::new(
            Rotator::Banner,
            banner_carousel,
            config.carousel.interval(),
            event_bus.clone(),
        );
        let words = CarouselTicker::new(
            Rotator::Words,
            word_carousel,
            config.join.interval(),
            event_bus.clone(),
        );

        tracing::debug!(
            products = products.len(),
            videos = videos.len(),
            banners = config.carousel.banners.len(),
            "Storefront host built"
        );

        Ok(Self {
            config: Arc::new(config),
            products: Arc::new(products),
            videos: Arc::new(videos),
            banner: Arc::new(banner),
            words: Arc::new(words),
            identity,
            event_bus,
        })
    }

    /// Ticker for a rotator
    pub fn ticker(&self, rotator: Rotator) -> &CarouselTicker {
        match rotator {
            Rotator::Banner => &self.banner,
            Rotator::Words => &self.words,
        }
    }

    /// Start both rotators
    ///
    /// Returns `true` if at least one timer was started.
    pub fn activate(&self) -> bool {
        let banner = self.banner.start();
        let words = self.words.start();
        banner || words
    }

    /// Stop both rotators
    pub fn deactivate(&self) {
        self.banner.stop();
        self.words.stop();
    }

    pub fn is_active(&self) -> bool {
        self.banner.is_running() && self.words.is_running()
    }
}

impl std::fmt::Debug for StorefrontHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontHost")
            .field("products", &self.products.list_all().len())
            .field("videos", &self.videos.list_all().len())
            .field("banner", &self.banner)
            .field("words", &self.words)
            .field("identity", &self.identity.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MockIdentityProvider;

    fn host() -> StorefrontHost {
        StorefrontHost::from_config(
            StorefrontConfig::default_config(),
            Arc::new(MockIdentityProvider::default()),
            EventBus::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_catalogs_are_split_by_kind() {
        let host = host();
        assert!(host.products.list_all().iter().all(|item| item.is_product()));
        assert_eq!(host.videos.list_all().len(), 6);
        assert_eq!(host.videos.categories(), ["Finance", "Marketing", "Leadership"]);
    }

    #[tokio::test]
    async fn test_activate_and_deactivate() {
        let host = host();
        assert!(!host.is_active());
        assert!(host.activate());
        assert!(host.is_active());
        assert!(!host.activate());
        host.deactivate();
        assert!(!host.is_active());
    }

    #[tokio::test]
    async fn test_ticker_lookup() {
        let host = host();
        assert_eq!(host.ticker(Rotator::Words).state().await.len, 7);
        assert_eq!(host.ticker(Rotator::Banner).state().await.len, 6);
    }

    #[test]
    fn test_empty_banners_rejected() {
        let mut config = StorefrontConfig::default_config();
        config.carousel.banners.clear();
        let result = StorefrontHost::from_config(
            config,
            Arc::new(MockIdentityProvider::default()),
            EventBus::default(),
        );
        assert!(result.is_err());
    }
}
