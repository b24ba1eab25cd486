//! Facts-domain error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for facts-domain operations.
pub type FactsResult<T> = std::result::Result<T, FactsError>;

/// Errors that can occur while loading the reference dataset.
///
/// A failed lookup is not an error; the matcher reports it as
/// `MatchResult::NoMatch`. These variants cover the dataset itself being
/// unavailable or malformed, which must be surfaced distinctly.
#[derive(Debug, Error)]
pub enum FactsError {
    /// The dataset file could not be read.
    #[error("Failed to read fact dataset {path}: {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset file is not a valid sequence of fact records.
    #[error("Malformed fact dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),
}

impl FactsError {
    /// Create a dataset read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DatasetRead {
            path: path.into(),
            source,
        }
    }
}
