//! OAuth refresh-token exchange.
//!
//! The exchange is performed eagerly before every upload so the upload call
//! always observes a fresh bearer token instead of racing a lazy refresh
//! inside the HTTP layer.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::credentials::DelegatedCredential;
use crate::error::{YoutubeError, YoutubeResult};

const DEFAULT_OAUTH_BASE_URL: &str = "https://oauth2.googleapis.com";

/// A short-lived bearer token obtained from a refresh token.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Capability interface for exchanging a refresh token for an access token.
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    async fn exchange(&self, credential: &DelegatedCredential) -> YoutubeResult<AccessToken>;
}

/// Wire shape of a successful token response.
#[derive(Debug, Deserialize)]
struct OAuthTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Wire shape of an OAuth error response.
#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Live exchanger posting to the Google OAuth token endpoint.
pub struct OAuthTokenExchanger {
    base_url: String,
    client: Client,
}

impl OAuthTokenExchanger {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_OAUTH_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Override the token endpoint base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for OAuthTokenExchanger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenExchanger for OAuthTokenExchanger {
    async fn exchange(&self, credential: &DelegatedCredential) -> YoutubeResult<AccessToken> {
        let url = format!("{}/token", self.base_url);

        let response = self
            .client
            .post(&url)
            .form(&[
                ("client_id", credential.client_id.as_str()),
                ("client_secret", credential.client_secret.as_str()),
                ("refresh_token", credential.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(|e| YoutubeError::token_exchange(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            // Quote the provider's error code only, never the credentials.
            let detail = serde_json::from_str::<OAuthErrorResponse>(&body)
                .map(|e| match e.error_description {
                    Some(description) => format!("{} ({})", e.error, description),
                    None => e.error,
                })
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(YoutubeError::token_exchange(detail));
        }

        let token: OAuthTokenResponse = response
            .json()
            .await
            .map_err(|e| YoutubeError::token_exchange(format!("invalid token response: {}", e)))?;

        debug!(expires_in = ?token.expires_in, "obtained fresh access token");
        Ok(AccessToken::new(token.access_token))
    }
}

/// Deterministic exchanger for tests; returns a fixed token and counts calls.
pub struct StaticTokenExchanger {
    token: String,
    calls: std::sync::atomic::AtomicUsize,
}

impl StaticTokenExchanger {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenExchanger for StaticTokenExchanger {
    async fn exchange(&self, _credential: &DelegatedCredential) -> YoutubeResult<AccessToken> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(AccessToken::new(self.token.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credential() -> DelegatedCredential {
        DelegatedCredential {
            client_id: "cid".to_string(),
            client_secret: "csecret".to_string(),
            refresh_token: "rtoken".to_string(),
        }
    }

    #[tokio::test]
    async fn test_exchange_posts_refresh_grant_and_returns_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains("refresh_token=rtoken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "fresh-token",
                "expires_in": 3599,
                "token_type": "Bearer"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let exchanger = OAuthTokenExchanger::new().with_base_url(server.uri());
        let token = exchanger.exchange(&credential()).await.unwrap();
        assert_eq!(token.as_str(), "fresh-token");
    }

    #[tokio::test]
    async fn test_exchange_failure_reports_provider_error_without_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_grant",
                "error_description": "Token has been expired or revoked."
            })))
            .mount(&server)
            .await;

        let exchanger = OAuthTokenExchanger::new().with_base_url(server.uri());
        let err = exchanger.exchange(&credential()).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid_grant"));
        assert!(!message.contains("rtoken"));
        assert!(!message.contains("csecret"));
    }

    #[test]
    fn test_access_token_debug_is_redacted() {
        let token = AccessToken::new("very-secret");
        assert_eq!(format!("{:?}", token), "AccessToken(<redacted>)");
    }
}
