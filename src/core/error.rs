//! Typed error handling for the storefront
//!
//! The catalog engine itself never fails; these errors describe what can go
//! wrong around it: unknown routes or items, rejected configuration, a failed
//! identity exchange.
//!
//! # Error Categories
//!
//! - [`CatalogError`]: lookups against the catalog
//! - [`ConfigError`]: configuration parsing and validation
//! - [`IdentityError`]: the injected identity provider
//!
//! # Example
//!
//! ```rust,ignore
//! let item = catalog
//!     .get(id)
//!     .ok_or(StorefrontError::Catalog(CatalogError::ItemNotFound { id }))?;
//! ```

use crate::core::item::ItemId;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the storefront
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog lookup errors
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Identity provider errors
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Malformed request input that cannot be degraded to a default
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl StorefrontError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StorefrontError::Catalog(e) => e.status_code(),
            StorefrontError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StorefrontError::Identity(e) => e.status_code(),
            StorefrontError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            StorefrontError::Catalog(e) => e.error_code(),
            StorefrontError::Config(_) => "CONFIG_ERROR",
            StorefrontError::Identity(e) => e.error_code(),
            StorefrontError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            StorefrontError::Catalog(CatalogError::ItemNotFound { id })
            | StorefrontError::Catalog(CatalogError::NotAProduct { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            StorefrontError::Catalog(CatalogError::PageNotFound { path }) => {
                Some(serde_json::json!({ "path": path }))
            }
            StorefrontError::Config(ConfigError::InvalidFields(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(code = self.error_code(), error = %self, "Request failed");
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Catalog Errors
// =============================================================================

/// Errors from catalog lookups
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No item with this id
    #[error("Item with id '{id}' not found")]
    ItemNotFound { id: ItemId },

    /// The item exists but has no product payload
    #[error("Item with id '{id}' is not a product")]
    NotAProduct { id: ItemId },

    /// No page is routed at this path
    #[error("No page at '{path}'")]
    PageNotFound { path: String },
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            CatalogError::NotAProduct { .. } => "NOT_A_PRODUCT",
            CatalogError::PageNotFound { .. } => "PAGE_NOT_FOUND",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The YAML could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Field-level validation failures
    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidFields(Vec<String>),

    /// An item uses a category that is not in the category set
    #[error("Item '{item_id}' uses unknown category '{category}'")]
    UnknownCategory { item_id: ItemId, category: String },

    /// Two items share an id
    #[error("Duplicate item id '{0}'")]
    DuplicateItemId(ItemId),

    /// An item sits in the wrong catalog section
    #[error("Item '{item_id}' is listed under {section} but is not a {expected}")]
    WrongSection {
        item_id: ItemId,
        section: &'static str,
        expected: &'static str,
    },
}

impl From<validator::ValidationErrors> for ConfigError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .to_string()
            .lines()
            .map(str::to_string)
            .filter(|line| !line.is_empty())
            .collect();
        fields.sort();
        ConfigError::InvalidFields(fields)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

// =============================================================================
// Identity Errors
// =============================================================================

/// Errors raised by the identity provider integration
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The callback carried no authorization code
    #[error("Missing authorization code")]
    MissingCode,

    /// The provider refused the code
    #[error("Identity provider '{provider}' rejected the code: {message}")]
    Rejected { provider: String, message: String },
}

impl IdentityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            IdentityError::MissingCode => StatusCode::BAD_REQUEST,
            IdentityError::Rejected { .. } => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            IdentityError::MissingCode => "MISSING_AUTHORIZATION_CODE",
            IdentityError::Rejected { .. } => "IDENTITY_REJECTED",
        }
    }
}
