//! Business service layer.
//!
//! Thin typed surface over the collection client: controllers wired to the
//! right endpoint, CRUD passthroughs with unified core errors, and batch
//! deletion for multi-row selections.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use classboard_client::{CollectionClient, Resource};

use crate::controller::ListController;
use crate::error::{CoreError, CoreResult};
use crate::fetch::CollectionFetcher;

/// Service facade over one backend's collections.
pub struct CollectionService {
    client: Arc<CollectionClient>,
}

impl CollectionService {
    #[must_use]
    pub fn new(client: Arc<CollectionClient>) -> Self {
        Self { client }
    }

    /// The underlying client, for callers that need raw access.
    #[must_use]
    pub fn client(&self) -> &Arc<CollectionClient> {
        &self.client
    }

    /// A list controller for a typed collection, wired to its canonical
    /// endpoint path.
    #[must_use]
    pub fn controller<T>(&self, page_size: u32) -> ListController<T>
    where
        T: Resource + DeserializeOwned + Send + Sync + 'static,
    {
        let fetcher = Arc::new(CollectionFetcher::for_resource::<T>(Arc::clone(
            &self.client,
        )));
        ListController::new(fetcher, page_size)
    }

    /// Create a record in a typed collection.
    pub async fn create<T, B>(&self, record: &B) -> CoreResult<T>
    where
        T: Resource + DeserializeOwned,
        B: Serialize + Sync,
    {
        Ok(self.client.create(T::PATH, record).await?)
    }

    /// Replace a record.
    pub async fn update<T, B>(&self, id: &str, record: &B) -> CoreResult<T>
    where
        T: Resource + DeserializeOwned,
        B: Serialize + Sync,
    {
        if id.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "record id must not be empty".to_string(),
            ));
        }
        Ok(self.client.update(T::PATH, id, record).await?)
    }

    /// Delete a record.
    pub async fn remove<T: Resource>(&self, id: &str) -> CoreResult<()> {
        if id.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "record id must not be empty".to_string(),
            ));
        }
        Ok(self.client.remove(T::PATH, id).await?)
    }

    /// Delete several records concurrently, collecting per-record failures
    /// instead of aborting on the first one.
    pub async fn remove_many<T: Resource>(&self, ids: &[String]) -> CoreResult<BatchRemoveResult> {
        let delete_futures: Vec<_> = ids
            .iter()
            .map(|id| self.client.remove(T::PATH, id))
            .collect();
        let results = futures::future::join_all(delete_futures).await;

        let mut success_count = 0;
        let mut failures = Vec::new();
        for (i, result) in results.into_iter().enumerate() {
            match result {
                Ok(()) => success_count += 1,
                Err(e) => {
                    log::warn!("Batch delete failed for {}: {e}", ids[i]);
                    failures.push(BatchRemoveFailure {
                        id: ids[i].clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(BatchRemoveResult {
            success_count,
            failed_count: failures.len(),
            failures,
        })
    }
}

/// Result of a batch delete operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRemoveResult {
    /// Number of records successfully deleted.
    pub success_count: usize,
    /// Number of records that failed to delete.
    pub failed_count: usize,
    /// Details about each failed deletion.
    pub failures: Vec<BatchRemoveFailure>,
}

/// Information about a single failed deletion in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRemoveFailure {
    /// ID of the record that failed to delete.
    pub id: String,
    /// Human-readable reason for the failure.
    pub reason: String,
}
