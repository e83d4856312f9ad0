//! Rubric persistence port.

use async_trait::async_trait;

use crate::domain::error::RubricStoreError;

/// Storage contract for the rubric blob: a single named slot holding an
/// opaque serialized list of categories.
///
/// Read corruption is not this port's concern; the store layer degrades a
/// blob that fails to parse to the default rubric. Write failures propagate,
/// since silent data loss on write is worse than a crash.
#[async_trait]
pub trait RubricRepository: Send + Sync {
    /// Read the raw blob, or `None` when the slot has never been written.
    async fn read(&self) -> Option<String>;

    /// Overwrite the slot with `blob`.
    async fn write(&self, blob: &str) -> Result<(), RubricStoreError>;
}
