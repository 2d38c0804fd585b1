use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::application::ports::{FeedbackStore, FeedbackStoreError};
use crate::domain::TrainingRecord;

/// Appends training records to a JSON-lines file, one object per line.
///
/// The retraining pipeline reads this file offline.
pub struct JsonlFeedbackStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlFeedbackStore {
    pub fn new(path: PathBuf) -> Result<Self, FeedbackStoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FeedbackStore for JsonlFeedbackStore {
    async fn append(&self, record: &TrainingRecord) -> Result<(), FeedbackStoreError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(path = %self.path.display(), "Training record appended");
        Ok(())
    }
}
