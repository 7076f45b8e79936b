//! REST exposure of the storefront
//!
//! Consumes a `StorefrontHost` and produces an Axum `Router`.

use super::handlers;
use super::host::StorefrontHost;
use anyhow::Result;
use axum::http::Method;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub struct RestExposure;

impl RestExposure {
    /// Build the router from a host
    ///
    /// Routes:
    /// - health checks
    /// - one route per page, returning its page model
    /// - the catalog and carousel API under `/api`
    /// - the identity callback
    /// - custom routes, merged last
    ///
    /// Unknown paths answer with a JSON 404.
    pub fn build_router(host: Arc<StorefrontHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let mut app = Self::health_routes()
            .merge(Self::page_routes(host.clone()))
            .merge(Self::api_routes(host.clone()))
            .merge(Self::auth_routes(host));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);

        Ok(app.fallback(handlers::not_found).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        ))
    }

    fn page_routes(host: Arc<StorefrontHost>) -> Router {
        Router::new()
            .route("/", get(handlers::home_page))
            .route("/learn", get(handlers::learn_page))
            .route("/product", get(handlers::product_page))
            .route("/productdetail", get(handlers::product_detail_page))
            .route("/service", get(handlers::service_page))
            .route("/aboutus", get(handlers::about_page))
            .route("/join", get(handlers::join_page))
            .route("/login", get(handlers::login_page))
            .route("/signup", get(handlers::signup_page))
            .with_state(host)
    }

    fn api_routes(host: Arc<StorefrontHost>) -> Router {
        Router::new()
            .route("/api/pages", get(handlers::pages))
            .route("/api/products", get(handlers::list_products))
            .route("/api/products/{id}", get(handlers::get_product))
            .route("/api/videos", get(handlers::list_videos))
            .route("/api/carousel", get(handlers::get_carousel))
            .route("/api/carousel/next", post(handlers::next_slide))
            .route("/api/carousel/previous", post(handlers::previous_slide))
            .route("/api/carousel/jump/{index}", post(handlers::jump_to_slide))
            .route("/api/carousel/events", get(handlers::slide_events))
            .with_state(host)
    }

    fn auth_routes(host: Arc<StorefrontHost>) -> Router {
        Router::new()
            .route("/auth/callback", get(handlers::auth_callback))
            .with_state(host)
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "empower-storefront"
        }))
    }
}
