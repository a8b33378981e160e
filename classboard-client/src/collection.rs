//! Collection endpoint client.
//!
//! One [`CollectionClient`] per backend serves every dashboard collection;
//! callers pass the endpoint path (`/exams`, `/students`, ...) per call.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::http;
use crate::token::TokenProvider;
use crate::types::{FetchedPage, PageQuery};

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Largest page size the backend accepts on list endpoints.
const MAX_PAGE_SIZE: u32 = 100;

/// Transport configuration for a [`CollectionClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash (e.g. `https://api.school.example/v1`).
    pub base_url: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout; surfaced as [`ApiError::Timeout`] when hit.
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Build the list URL for a path and query.
///
/// `page` and `page_size` are always present; `search` only when the term
/// is non-empty, urlencoded.
#[must_use]
pub fn list_url(base_url: &str, path: &str, query: &PageQuery) -> String {
    let mut url = format!(
        "{}{}?page={}&page_size={}",
        base_url, path, query.page, query.page_size
    );
    if let Some(term) = query.search_term() {
        url.push_str(&format!("&search={}", urlencoding::encode(term)));
    }
    url
}

/// HTTP client for the dashboard's REST collections.
///
/// Holds the transport, the backend base URL, and the injected
/// [`TokenProvider`]. Cheap to share behind an [`Arc`].
pub struct CollectionClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl CollectionClient {
    /// Create a client with default timeouts.
    #[must_use]
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self::with_config(ClientConfig::new(base_url), tokens)
    }

    /// Create a client from an explicit [`ClientConfig`].
    #[must_use]
    pub fn with_config(config: ClientConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            base_url: config.base_url,
            tokens,
        }
    }

    /// The backend base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach the bearer token, or fail before dispatch when none exists.
    fn authorize(&self, builder: RequestBuilder, endpoint: &str) -> Result<RequestBuilder> {
        let token = self
            .tokens
            .bearer_token()
            .ok_or_else(|| ApiError::MissingToken {
                endpoint: endpoint.to_string(),
            })?;
        Ok(builder.header("Authorization", format!("Bearer {token}")))
    }

    /// Fetch one page of a collection, normalized from either payload shape.
    ///
    /// Exactly one network call; unrecognized payload shapes come back as
    /// an empty page rather than an error.
    pub async fn fetch_page<T>(&self, path: &str, query: &PageQuery) -> Result<FetchedPage<T>>
    where
        T: DeserializeOwned,
    {
        let query = query.validated(MAX_PAGE_SIZE);
        let url = list_url(&self.base_url, path, &query);
        let request = self.authorize(self.client.get(&url), path)?;
        let (_, body) = http::execute_request(request, path, "GET").await?;
        Ok(FetchedPage::from_body(&body, path))
    }

    /// Create a record (POST).
    pub async fn create<B, T>(&self, path: &str, record: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let request = self.authorize(self.client.post(&url).json(record), path)?;
        let (_, body) = http::execute_request(request, path, "POST").await?;
        http::parse_json(&body, path)
    }

    /// Replace a record (PUT).
    pub async fn update<B, T>(&self, path: &str, id: &str, record: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}/{}", self.base_url, path, id);
        let request = self.authorize(self.client.put(&url).json(record), path)?;
        let (_, body) = http::execute_request(request, path, "PUT").await?;
        http::parse_json(&body, path)
    }

    /// Delete a record (DELETE). The response body, if any, is discarded.
    pub async fn remove(&self, path: &str, id: &str) -> Result<()> {
        let url = format!("{}{}/{}", self.base_url, path, id);
        let request = self.authorize(self.client.delete(&url), path)?;
        http::execute_request(request, path, "DELETE").await?;
        Ok(())
    }
}
