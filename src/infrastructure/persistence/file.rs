//! File-backed rubric slot.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::error::RubricStoreError;
use crate::domain::models::RubricConfig;
use crate::domain::ports::RubricRepository;

/// Stores the rubric blob in a single file. An absent file means the slot
/// has never been written.
pub struct FileRubricRepository {
    path: PathBuf,
}

impl FileRubricRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the slot path from configuration, defaulting to
    /// `<data dir>/ascent/categories.json`.
    pub fn from_config(config: &RubricConfig) -> Self {
        let path = config.slot_path.as_ref().map_or_else(
            || {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("ascent")
                    .join("categories.json")
            },
            PathBuf::from,
        );
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RubricRepository for FileRubricRepository {
    async fn read(&self) -> Option<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(blob) => Some(blob),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                // An unreadable slot degrades the same way an absent one
                // does; only writes are loud.
                warn!(path = %self.path.display(), error = %err, "could not read rubric slot");
                None
            }
        }
    }

    async fn write(&self, blob: &str) -> Result<(), RubricStoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, blob).await?;
        Ok(())
    }
}
