//! Snapshot Exporter Port - Writes decision snapshots out of the process.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::decisions::DecisionSnapshot;

/// Errors that can occur while exporting a snapshot.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(String),
}

impl ExportError {
    pub fn io(message: impl Into<String>) -> Self {
        ExportError::Io(message.into())
    }
}

/// Location an export was written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPath(PathBuf);

impl ExportPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for ExportPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Port for handing a decision snapshot to the outside world
/// (a downloaded file in a browser, a file on disk here).
///
/// # Contract
///
/// Implementations must:
/// - Serialize with `DecisionSnapshot::to_json_pretty`
/// - Never leave a partially written file under `file_name`
#[async_trait]
pub trait SnapshotExporter: Send + Sync {
    /// Writes the snapshot under the given file name.
    async fn export(
        &self,
        file_name: &str,
        snapshot: &DecisionSnapshot,
    ) -> Result<ExportPath, ExportError>;
}
