//! Rubric store: load-with-default, append, remove, persist-on-mutation.

use std::sync::Arc;

use tracing::warn;

use crate::domain::error::RubricStoreError;
use crate::domain::models::{Category, RubricSet};
use crate::domain::ports::RubricRepository;

/// Owns the ordered list of scoring categories and its persistence.
///
/// Every mutation persists the full resulting list; there is no incremental
/// persistence. A persisted blob that fails to parse degrades to the default
/// rubric without surfacing an error, and the default is never written back.
pub struct RubricStore {
    repo: Arc<dyn RubricRepository>,
}

impl RubricStore {
    pub fn new(repo: Arc<dyn RubricRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted rubric, falling back to [`RubricSet::default_set`]
    /// when the slot is empty or its contents fail to parse.
    pub async fn load(&self) -> RubricSet {
        match self.repo.read().await {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(set) => set,
                Err(err) => {
                    warn!(error = %err, "could not decode persisted rubric, using defaults");
                    RubricSet::default_set()
                }
            },
            None => RubricSet::default_set(),
        }
    }

    /// Append a category. A description that trims to empty is a no-op.
    pub async fn add(&self, description: &str) -> Result<(), RubricStoreError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        let mut set = self.load().await;
        set.push(Category::new(trimmed));
        self.persist(&set).await
    }

    /// Remove the category at `index`. Out-of-range indices are a no-op.
    pub async fn remove(&self, index: usize) -> Result<(), RubricStoreError> {
        let mut set = self.load().await;
        if set.remove(index) {
            self.persist(&set).await
        } else {
            Ok(())
        }
    }

    async fn persist(&self, set: &RubricSet) -> Result<(), RubricStoreError> {
        let blob = serde_json::to_string(set)?;
        self.repo.write(&blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryRubricRepository;

    fn store_with_repo() -> (RubricStore, Arc<InMemoryRubricRepository>) {
        let repo = Arc::new(InMemoryRubricRepository::new());
        (RubricStore::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn load_returns_defaults_when_slot_is_empty() {
        let (store, repo) = store_with_repo();
        let rubric = store.load().await;
        assert_eq!(rubric, RubricSet::default_set());
        // Defaults are recomputed each time, never written back.
        assert!(repo.read().await.is_none());
    }

    #[tokio::test]
    async fn corrupt_blob_degrades_to_defaults() {
        let (store, repo) = store_with_repo();
        repo.write("not json at all {").await.unwrap();
        assert_eq!(store.load().await, RubricSet::default_set());
    }

    #[tokio::test]
    async fn add_trims_and_persists_whole_list() {
        let (store, _repo) = store_with_repo();
        store.add("  Brevity  ").await.unwrap();
        let rubric = store.load().await;
        assert_eq!(rubric.len(), 4);
        assert_eq!(rubric.categories()[3].description, "Brevity");
    }

    #[tokio::test]
    async fn add_blank_description_is_noop() {
        let (store, repo) = store_with_repo();
        store.add("   ").await.unwrap();
        assert!(repo.read().await.is_none());
    }

    #[tokio::test]
    async fn remove_out_of_range_changes_nothing() {
        let (store, repo) = store_with_repo();
        store.add("Extra").await.unwrap();
        let before = repo.read().await;
        store.remove(10).await.unwrap();
        assert_eq!(repo.read().await, before);
    }

    #[tokio::test]
    async fn remove_persists_remaining_list() {
        let (store, _repo) = store_with_repo();
        store.remove(0).await.unwrap();
        let rubric = store.load().await;
        assert_eq!(rubric.len(), 2);
        assert_eq!(rubric.categories()[0].description, "Engagement and hook");
    }
}
