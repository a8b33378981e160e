//! The retrieval seam between the controller and the transport.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use classboard_client::{ApiError, CollectionClient, FetchedPage, PageQuery, Resource};

/// Retrieves one page of a collection.
///
/// The controller depends on this trait rather than the HTTP client so the
/// state machine can be driven with mocks and so alternative transports
/// can be injected.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    /// Fetch one page. Exactly one retrieval call per invocation.
    async fn fetch_page(&self, query: &PageQuery) -> Result<FetchedPage<T>, ApiError>;
}

/// Binds a [`CollectionClient`] to one endpoint path.
pub struct CollectionFetcher {
    client: Arc<CollectionClient>,
    path: String,
}

impl CollectionFetcher {
    pub fn new(client: Arc<CollectionClient>, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    /// Fetcher for a typed collection, using its canonical path.
    #[must_use]
    pub fn for_resource<T: Resource>(client: Arc<CollectionClient>) -> Self {
        Self::new(client, T::PATH)
    }

    /// The endpoint path this fetcher targets.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl<T> PageFetcher<T> for CollectionFetcher
where
    T: DeserializeOwned + Send + Sync,
{
    async fn fetch_page(&self, query: &PageQuery) -> Result<FetchedPage<T>, ApiError> {
        self.client.fetch_page(&self.path, query).await
    }
}
