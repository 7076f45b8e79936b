//! HTTP handlers for pages and the JSON API
//!
//! Handlers only translate between HTTP and the page models; filtering,
//! sorting and rotation live in `core` and `carousel`.

use super::host::StorefrontHost;
use crate::carousel::SlideState;
use crate::config::Banner;
use crate::core::{
    CatalogError, CatalogView, IdentityError, Item, ItemId, QueryParams, Rotator, Session,
    SlideChange, StorefrontError,
};
use crate::pages::{
    AuthPage, HomePage, InfoPage, JoinPage, LearnPage, PageInfo, ProductDetailPage, ProductPage,
    route_table,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::Uri,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::{StreamExt, wrappers::BroadcastStream};
use uuid::Uuid;

pub type HostState = State<Arc<StorefrontHost>>;

type ApiResult<T> = Result<Json<T>, StorefrontError>;

/// Decoded query pairs; repeated keys are accepted
type RawQuery = Query<Vec<(String, String)>>;

/// First value of `key`, ignoring later repeats
fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

fn parse_item_id(raw: &str) -> Result<ItemId, StorefrontError> {
    raw.trim()
        .parse()
        .map_err(|_| StorefrontError::Validation(format!("Invalid item id '{}'", raw)))
}

fn login_state() -> String {
    Uuid::new_v4().simple().to_string()
}

// =============================================================================
// Pages
// =============================================================================

pub async fn home_page(State(host): HostState) -> Json<HomePage> {
    let slide = host.banner.state().await;
    Json(HomePage::new(slide, &host.config.carousel.banners))
}

pub async fn product_page(State(host): HostState, Query(pairs): RawQuery) -> Json<ProductPage> {
    let query = QueryParams::from_pairs(pairs).to_query();
    Json(ProductPage::new(host.products.as_ref(), &query))
}

pub async fn learn_page(State(host): HostState, Query(pairs): RawQuery) -> Json<LearnPage> {
    let query = QueryParams::from_pairs(pairs).to_query();
    Json(LearnPage::new(host.videos.as_ref(), &query))
}

pub async fn product_detail_page(
    State(host): HostState,
    Query(pairs): RawQuery,
) -> ApiResult<ProductDetailPage> {
    let raw = first_value(&pairs, "id")
        .ok_or_else(|| StorefrontError::Validation("Missing product id".to_string()))?;
    let id = parse_item_id(raw)?;
    let quantity = first_value(&pairs, "quantity");

    let page = ProductDetailPage::new(host.products.as_ref(), id, quantity)
        .inspect_err(|_| tracing::debug!(id, "Product detail miss"))?;
    Ok(Json(page))
}

pub async fn service_page() -> Json<InfoPage> {
    Json(InfoPage::service())
}

pub async fn about_page() -> Json<InfoPage> {
    Json(InfoPage::about())
}

pub async fn join_page(State(host): HostState) -> Json<JoinPage> {
    let slide = host.words.state().await;
    Json(JoinPage::new(&host.config.join, slide))
}

pub async fn login_page(State(host): HostState) -> Json<AuthPage> {
    Json(AuthPage::login(host.identity.as_ref(), login_state()))
}

pub async fn signup_page(State(host): HostState) -> Json<AuthPage> {
    Json(AuthPage::signup(host.identity.as_ref(), login_state()))
}

pub async fn pages() -> Json<Vec<PageInfo>> {
    Json(route_table())
}

pub async fn not_found(uri: Uri) -> StorefrontError {
    CatalogError::PageNotFound {
        path: uri.path().to_string(),
    }
    .into()
}

// =============================================================================
// Catalog API
// =============================================================================

pub async fn list_products(
    State(host): HostState,
    Query(pairs): RawQuery,
) -> Json<CatalogView<Item>> {
    Json(host.products.view(&QueryParams::from_pairs(pairs).to_query()))
}

pub async fn get_product(State(host): HostState, Path(raw): Path<String>) -> ApiResult<Item> {
    let id = parse_item_id(&raw)?;
    let item = host.products.get(id).ok_or_else(|| {
        tracing::debug!(id, "Product lookup miss");
        CatalogError::ItemNotFound { id }
    })?;
    Ok(Json(item.clone()))
}

pub async fn list_videos(
    State(host): HostState,
    Query(pairs): RawQuery,
) -> Json<CatalogView<Item>> {
    Json(host.videos.view(&QueryParams::from_pairs(pairs).to_query()))
}

// =============================================================================
// Carousel API
// =============================================================================

#[derive(Debug, Serialize)]
pub struct CarouselResponse {
    #[serde(flatten)]
    pub slide: SlideState,
    pub banner: Option<Banner>,
    pub interval_ms: u64,
    pub running: bool,
}

pub async fn get_carousel(State(host): HostState) -> Json<CarouselResponse> {
    let slide = host.banner.state().await;
    Json(CarouselResponse {
        banner: host.config.carousel.banners.get(slide.index).cloned(),
        slide,
        interval_ms: host.config.carousel.interval_ms,
        running: host.banner.is_running(),
    })
}

pub async fn next_slide(State(host): HostState) -> Json<SlideChange> {
    Json(host.banner.next().await)
}

pub async fn previous_slide(State(host): HostState) -> Json<SlideChange> {
    Json(host.banner.previous().await)
}

pub async fn jump_to_slide(
    State(host): HostState,
    Path(index): Path<String>,
) -> ApiResult<SlideChange> {
    let len = host.banner.state().await.len;
    let change = match index.trim().parse::<usize>() {
        Ok(index) => host.banner.jump(index).await,
        Err(_) => None,
    };
    change.map(Json).ok_or_else(|| {
        StorefrontError::Validation(format!(
            "Slide index '{}' is out of range (0..{})",
            index, len
        ))
    })
}

/// Server-sent slide changes
///
/// Each event is named after its rotator and carries the change as JSON.
/// `?rotator=banner|words` keeps one rotator's changes. Subscribers that fall
/// behind skip the missed changes.
pub async fn slide_events(
    State(host): HostState,
    Query(pairs): RawQuery,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, StorefrontError> {
    let filter = match first_value(&pairs, "rotator") {
        Some(raw) => Some(Rotator::parse(raw).ok_or_else(|| {
            StorefrontError::Validation(format!("Unknown rotator '{}'", raw))
        })?),
        None => None,
    };
    let receiver = host.event_bus.subscribe();

    let stream = BroadcastStream::new(receiver).filter_map(move |message| match message {
        Ok(envelope) if filter.is_none_or(|rotator| rotator == envelope.event.rotator) => {
            Event::default()
                .id(envelope.id.to_string())
                .event(envelope.event.rotator.as_str())
                .json_data(&envelope.event)
                .ok()
                .map(Ok)
        }
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(error = %err, "Slide event subscriber lagged");
            None
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

// =============================================================================
// Identity
// =============================================================================

pub async fn auth_callback(State(host): HostState, Query(pairs): RawQuery) -> ApiResult<Session> {
    let code = first_value(&pairs, "code")
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .ok_or(IdentityError::MissingCode)?;

    let identity = host.identity.exchange(code).await?;
    let session = Session::new(host.identity.name(), identity);

    tracing::info!(
        provider = %session.provider,
        subject = %session.identity.subject,
        state = first_value(&pairs, "state").unwrap_or(""),
        "Visitor signed in"
    );
    Ok(Json(session))
}
