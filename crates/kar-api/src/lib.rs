//! # kar-api
//!
//! REST client for the Karkhana back-office API.
//!
//! Every endpoint is a JSON resource under one base URL. Requests carry
//! `Authorization: Bearer <token>` once signed in; every response passes
//! through one status check that reduces 401/403 to "Unauthorized" and
//! other failures to the server's own message. Lists are cached briefly
//! per resource and dropped after any write to that resource.
//!
//! Resources:
//! - `/indent`, `/purchase`, `/grns`, `/production`, `/customer-order`
//!   (status workflows)
//! - `/raw-material`, `/raw-material/raw-material-batch`
//! - `/vendor`, `/user`, `/unit`, `/transit_register`
//! - `/manufacture-articles`, `/product`
//! - `/auth/*`, `/dashboard`, `/expenditure`

pub mod auth;
pub mod cache;
pub mod reports;
pub mod resource;
pub mod resources;

mod error;
mod http;

pub use cache::ListCache;
pub use error::{ApiError, UNAUTHORIZED_MESSAGE};
pub use resource::{Resource, WorkflowResource};

use std::time::Duration;

use kar_config::{ApiConfig, KarConfig};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::{check_response, read_json};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one backend and, optionally, one bearer token.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    cache: ListCache,
}

impl ApiClient {
    /// Build a client from the `[api]` config section. Lists are not cached.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the base URL is missing or invalid,
    /// or [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.validated_base_url()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url,
            token: None,
            cache: ListCache::new(Duration::ZERO),
        })
    }

    /// Build a client from the full config, with list caching enabled per
    /// `general.cache_ttl_secs`.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &KarConfig) -> Result<Self, ApiError> {
        Ok(Self::new(&config.api)?
            .with_cache_ttl(Duration::from_secs(config.general.cache_ttl_secs)))
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = ListCache::new(ttl);
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub const fn cache(&self) -> &ListCache {
        &self.cache
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        read_json(self.request(reqwest::Method::GET, path).send().await?).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        read_json(self.request(method, path).json(body).send().await?).await
    }

    pub(crate) async fn send_empty(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<(), ApiError> {
        check_response(self.request(method, path).send().await?).await?;
        Ok(())
    }
}

/// Join query pairs into an encoded query string (no leading `?`).
pub(crate) fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append an encoded query string to `path` when it is non-empty.
pub(crate) fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[test]
    fn builds_from_valid_config() {
        let client = ApiClient::new(&config("https://erp.example.in/api/")).unwrap();
        assert_eq!(client.base_url(), "https://erp.example.in/api");
        assert_eq!(client.url("/indent"), "https://erp.example.in/api/indent");
        assert!(!client.has_token());
        assert!(!client.cache().is_enabled());
    }

    #[test]
    fn missing_base_url_is_a_config_error() {
        let err = ApiClient::new(&config("")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn blank_token_is_ignored() {
        let client = ApiClient::new(&config("http://localhost:5000"))
            .unwrap()
            .with_token(Some("  ".into()));
        assert!(!client.has_token());
    }

    #[test]
    fn from_config_enables_cache() {
        let mut full = KarConfig::default();
        full.api.base_url = "http://localhost:5000".into();
        full.general.cache_ttl_secs = 15;
        let client = ApiClient::from_config(&full).unwrap();
        assert!(client.cache().is_enabled());
    }

    #[test]
    fn encodes_query_pairs() {
        let query = encode_query(&[
            ("page".into(), "1".into()),
            ("search".into(), "mild steel & co".into()),
        ]);
        assert_eq!(query, "page=1&search=mild%20steel%20%26%20co");
        assert_eq!(with_query("/vendor", &query), format!("/vendor?{query}"));
        assert_eq!(with_query("/vendor", ""), "/vendor");
    }
}
