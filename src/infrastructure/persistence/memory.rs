//! In-memory rubric slot.
//!
//! Used in tests and wherever durable persistence is not needed but the
//! type system requires a `RubricRepository` implementation.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::error::RubricStoreError;
use crate::domain::ports::RubricRepository;

/// A rubric slot held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryRubricRepository {
    blob: Mutex<Option<String>>,
}

impl InMemoryRubricRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot, e.g. with a corrupt blob in tests.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }
}

#[async_trait]
impl RubricRepository for InMemoryRubricRepository {
    async fn read(&self) -> Option<String> {
        self.blob.lock().await.clone()
    }

    async fn write(&self, blob: &str) -> Result<(), RubricStoreError> {
        *self.blob.lock().await = Some(blob.to_string());
        Ok(())
    }
}
