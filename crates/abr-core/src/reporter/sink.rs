//! Append-only sink guarded by one process-wide lock.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::record::{Category, OutcomeRecord};

/// Storage failure while appending a record. The lock is released on this
/// path too; the caller decides whether to log and continue.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("cannot create report directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot append to {path}: {source}")]
    Append {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Clonable handle to the shared report store. Every clone shares one root
/// and one mutex, so a run has exactly one writer at any instant.
#[derive(Debug, Clone)]
pub struct Reporter {
    root: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl Reporter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Append each non-empty field of the record to its per-field file under
    /// the category directory. The whole record is written under one lock
    /// acquisition; contended callers queue FIFO. There is no atomicity
    /// across the per-field files: a crash mid-record can leave them
    /// inconsistent with each other.
    pub async fn report(
        &self,
        category: Category,
        record: &OutcomeRecord,
    ) -> Result<(), ReportError> {
        let _guard = self.lock.lock().await;

        let dir = self.root.join(category.dir_name());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| ReportError::CreateDir {
                path: dir.clone(),
                source,
            })?;

        for (filename, value) in record.fields() {
            if value.is_empty() {
                continue;
            }
            let path = dir.join(filename);
            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .await
                .map_err(|source| ReportError::Append {
                    path: path.clone(),
                    source,
                })?;
            file.write_all(format!("{value}\n").as_bytes())
                .await
                .map_err(|source| ReportError::Append {
                    path: path.clone(),
                    source,
                })?;
        }

        Ok(())
    }
}
