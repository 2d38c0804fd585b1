use async_trait::async_trait;

use crate::domain::TrainingRecord;

/// Append-only log of flagged messages and admin feedback.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn append(&self, record: &TrainingRecord) -> Result<(), FeedbackStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FeedbackStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
