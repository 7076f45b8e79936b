//! HTTP server for the storefront
//!
//! `StorefrontBuilder` validates the configuration, builds a
//! `StorefrontHost` and exposes it through `RestExposure`:
//! - page models for every routed page
//! - catalog and carousel JSON API, including server-sent slide changes
//! - the identity provider callback

pub mod builder;
pub mod handlers;
pub mod host;
pub mod rest;

pub use builder::StorefrontBuilder;
pub use host::StorefrontHost;
pub use rest::RestExposure;
