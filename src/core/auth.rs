//! Identity provider integration for the login and signup pages
//!
//! The hosting shell injects an [`IdentityProvider`] into the storefront; the
//! login page asks it for an authorization URL and the callback route hands
//! it the returned code. Nothing in the catalog engine depends on it.

use crate::core::error::IdentityError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated visitor, as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-scoped subject identifier
    pub subject: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A signed-in session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub provider: String,
    pub identity: Identity,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn new(provider: impl Into<String>, identity: Identity) -> Self {
        Self {
            id: Uuid::new_v4(),
            provider: provider.into(),
            identity,
            issued_at: Utc::now(),
        }
    }
}

/// Trait for OAuth-style identity providers
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Provider name shown on the login button ("Google", ...)
    fn name(&self) -> &str;

    /// URL the login button sends the visitor to
    fn authorization_url(&self, state: &str) -> String;

    /// Exchange the callback's authorization code for an identity
    async fn exchange(&self, code: &str) -> Result<Identity, IdentityError>;
}

/// Development provider that accepts any non-empty code
///
/// The identity is derived from the code, so the same code always signs in
/// the same visitor.
#[derive(Debug, Clone)]
pub struct MockIdentityProvider {
    name: String,
    authorize_endpoint: String,
    client_id: String,
}

impl MockIdentityProvider {
    pub fn new(
        name: impl Into<String>,
        authorize_endpoint: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            authorize_endpoint: authorize_endpoint.into(),
            client_id: client_id.into(),
        }
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new("Google", "/auth/mock/authorize", "storefront-dev")
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn authorization_url(&self, state: &str) -> String {
        let params = [
            ("response_type", "code"),
            ("client_id", self.client_id.as_str()),
            ("scope", "openid email profile"),
            ("state", state),
        ];
        match serde_urlencoded::to_string(&params[..]) {
            Ok(query) => format!("{}?{}", self.authorize_endpoint, query),
            Err(err) => {
                tracing::warn!(
                    provider = %self.name,
                    error = %err,
                    "Failed to encode authorization query"
                );
                self.authorize_endpoint.clone()
            }
        }
    }

    async fn exchange(&self, code: &str) -> Result<Identity, IdentityError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(IdentityError::MissingCode);
        }
        if code.eq_ignore_ascii_case("denied") {
            return Err(IdentityError::Rejected {
                provider: self.name.clone(),
                message: "access denied by user".to_string(),
            });
        }

        tracing::debug!(provider = %self.name, "Mock identity exchange");

        Ok(Identity {
            subject: format!("mock|{}", code),
            display_name: format!("Member {}", code),
            email: Some(format!("{}@example.com", code.to_lowercase())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_url_carries_state() {
        let provider = MockIdentityProvider::default();
        let url = provider.authorization_url("abc123");
        assert!(url.starts_with("/auth/mock/authorize?"));
        assert!(url.contains("state=abc123"));
        assert!(url.contains("client_id=storefront-dev"));
    }

    #[test]
    fn test_authorization_url_encodes_values() {
        let provider = MockIdentityProvider::new("Google", "/authorize", "my app&co");
        let url = provider.authorization_url("a b=c");
        assert!(url.contains("client_id=my+app%26co"));
        assert!(url.contains("state=a+b%3Dc"));
        assert!(url.contains("scope=openid+email+profile"));
        assert_eq!(url.matches('&').count(), 3);
    }

    #[test]
    fn test_exchange_is_deterministic() {
        let provider = MockIdentityProvider::default();
        let first = tokio_test::assert_ok!(tokio_test::block_on(provider.exchange("Asha")));
        let second = tokio_test::assert_ok!(tokio_test::block_on(provider.exchange("Asha")));
        assert_eq!(first, second);
        assert_eq!(first.email.as_deref(), Some("asha@example.com"));
    }

    #[tokio::test]
    async fn test_exchange_rejects_empty_code() {
        let provider = MockIdentityProvider::default();
        let err = provider.exchange("   ").await.unwrap_err();
        assert!(matches!(err, IdentityError::MissingCode));
    }

    #[tokio::test]
    async fn test_exchange_denied() {
        let provider = MockIdentityProvider::default();
        let err = provider.exchange("denied").await.unwrap_err();
        assert!(matches!(err, IdentityError::Rejected { .. }));
    }

    #[test]
    fn test_session_new() {
        let identity = Identity {
            subject: "mock|x".to_string(),
            display_name: "X".to_string(),
            email: None,
        };
        let session = Session::new("Google", identity);
        assert!(!session.id.is_nil());
        assert_eq!(session.provider, "Google");
    }
}
