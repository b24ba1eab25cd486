//! Reference dataset loading.
//!
//! The dataset lives in a JSON file: an array of fact records. It is read
//! fresh on every verification call and never mutated, so there is no
//! caching layer and no locking. Load failures are reported distinctly
//! from a failed lookup.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{FactsError, FactsResult};
use super::models::FactRecord;

/// Source of the reference dataset.
///
/// The matcher only sees the materialized `Vec<FactRecord>`; the store owns
/// the single I/O suspension point of a verification call.
#[async_trait]
pub trait FactStore: Send + Sync {
    /// Load the full dataset.
    async fn load(&self) -> FactsResult<Vec<FactRecord>>;
}

/// File-backed dataset store.
pub struct FileFactStore {
    path: PathBuf,
}

impl FileFactStore {
    /// Create a store reading from the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The dataset file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FactStore for FileFactStore {
    async fn load(&self) -> FactsResult<Vec<FactRecord>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FactsError::read(&self.path, source))?;

        let records: Vec<FactRecord> = serde_json::from_str(&raw)?;

        debug!(
            "Loaded {} fact records from {}",
            records.len(),
            self.path.display()
        );

        Ok(records)
    }
}
