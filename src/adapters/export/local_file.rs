//! Local file exporter - writes decision snapshots as JSON files.
//!
//! Uses a write-to-temp-then-rename pattern so a crash never leaves a
//! half-written export behind:
//! 1. Write content to `{file_name}.tmp`
//! 2. Sync to disk
//! 3. Rename to `{file_name}`
//!
//! The temp file is removed if any step after its creation fails.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::domain::decisions::DecisionSnapshot;
use crate::ports::{ExportError, ExportPath, SnapshotExporter};

/// Exports snapshots into a fixed directory.
///
/// # Usage
///
/// ```rust,ignore
/// let exporter = LocalSnapshotExporter::new("./exports");
/// let path = exporter.export("incident-briefing-decisions.json", &snapshot).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalSnapshotExporter {
    base_path: PathBuf,
}

impl LocalSnapshotExporter {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Rejects names that would escape the export directory.
    fn target_path(&self, file_name: &str) -> Result<PathBuf, ExportError> {
        let name = Path::new(file_name);
        let is_plain_name = name.components().count() == 1
            && name.file_name().map(|n| n == name.as_os_str()).unwrap_or(false);
        if file_name.is_empty() || !is_plain_name {
            return Err(ExportError::io(format!(
                "Invalid export file name: {}",
                file_name
            )));
        }
        Ok(self.base_path.join(name))
    }

    /// Writes `content` to `temp_path`, syncs it and moves it over `final_path`.
    async fn write_and_replace(
        temp_path: &Path,
        final_path: &Path,
        content: &str,
    ) -> Result<(), ExportError> {
        let mut file = fs::File::create(temp_path).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content.as_bytes()).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            ExportError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(temp_path, final_path).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl SnapshotExporter for LocalSnapshotExporter {
    async fn export(
        &self,
        file_name: &str,
        snapshot: &DecisionSnapshot,
    ) -> Result<ExportPath, ExportError> {
        let content = snapshot.to_json_pretty()?;
        let final_path = self.target_path(file_name)?;
        let temp_path = self.base_path.join(format!("{}.tmp", file_name));

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to create export directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        if let Err(e) = Self::write_and_replace(&temp_path, &final_path, &content).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        info!(
            path = %final_path.display(),
            decisions = snapshot.items.len(),
            approved = snapshot.approved_count(),
            "Exported decision snapshot"
        );
        Ok(ExportPath::new(final_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decisions::DecisionRecord;
    use crate::domain::foundation::{IncidentId, Timestamp};
    use tempfile::TempDir;

    fn snapshot() -> DecisionSnapshot {
        DecisionSnapshot {
            timestamp: Timestamp::now(),
            incident_id: IncidentId::new("INC-2025-0904-001").unwrap(),
            items: vec![DecisionRecord {
                label: "Approve failover".to_string(),
                approved: true,
            }],
        }
    }

    #[tokio::test]
    async fn export_writes_pretty_json() {
        let dir = TempDir::new().unwrap();
        let exporter = LocalSnapshotExporter::new(dir.path());

        let path = exporter
            .export("decisions.json", &snapshot())
            .await
            .unwrap();

        let written = std::fs::read_to_string(path.as_path()).unwrap();
        let parsed: DecisionSnapshot = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, snapshot_with_time(parsed.timestamp));
        assert!(written.contains("\n  \"executiveDecisions\""));
        assert!(!dir.path().join("decisions.json.tmp").exists());
    }

    fn snapshot_with_time(timestamp: Timestamp) -> DecisionSnapshot {
        DecisionSnapshot {
            timestamp,
            ..snapshot()
        }
    }

    #[tokio::test]
    async fn export_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("exports").join("today");
        let exporter = LocalSnapshotExporter::new(&nested);

        exporter.export("out.json", &snapshot()).await.unwrap();

        assert!(nested.join("out.json").exists());
    }

    #[tokio::test]
    async fn failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("decisions.json");
        std::fs::create_dir(&blocker).unwrap();
        std::fs::write(blocker.join("keep"), b"occupied").unwrap();
        let exporter = LocalSnapshotExporter::new(dir.path());

        let result = exporter.export("decisions.json", &snapshot()).await;

        assert!(matches!(result, Err(ExportError::Io(_))));
        assert!(!dir.path().join("decisions.json.tmp").exists());
        assert!(blocker.join("keep").exists());
    }

    #[tokio::test]
    async fn export_rejects_path_like_names() {
        let dir = TempDir::new().unwrap();
        let exporter = LocalSnapshotExporter::new(dir.path());

        let result = exporter.export("../escape.json", &snapshot()).await;

        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
