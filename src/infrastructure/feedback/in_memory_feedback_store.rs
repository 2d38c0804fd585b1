use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::application::ports::{FeedbackStore, FeedbackStoreError};
use crate::domain::TrainingRecord;

#[derive(Default)]
pub struct InMemoryFeedbackStore {
    records: Mutex<Vec<TrainingRecord>>,
}

impl InMemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<TrainingRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn append(&self, record: &TrainingRecord) -> Result<(), FeedbackStoreError> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }
}
