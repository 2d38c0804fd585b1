use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChatId, FeedbackKind, RecordId, UserId};

/// A message the classifier flagged. `feedback` stays `None` in the log;
/// admin opinions arrive later as separate [`FeedbackRecord`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedRecord {
    pub id: RecordId,
    pub timestamp: DateTime<Utc>,
    pub user_id: UserId,
    pub chat_id: ChatId,
    pub text: String,
    pub feedback: Option<FeedbackKind>,
}

impl FlaggedRecord {
    pub fn new(user_id: UserId, chat_id: ChatId, text: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            timestamp,
            user_id,
            chat_id,
            text,
            feedback: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub timestamp: DateTime<Utc>,
    pub admin_id: UserId,
    pub chat_id: ChatId,
    pub feedback: FeedbackKind,
    pub original_text: String,
    pub flagged_record_id: Option<RecordId>,
}

/// One line of the training-data log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrainingRecord {
    Flagged(FlaggedRecord),
    Feedback(FeedbackRecord),
}

impl From<FlaggedRecord> for TrainingRecord {
    fn from(record: FlaggedRecord) -> Self {
        TrainingRecord::Flagged(record)
    }
}

impl From<FeedbackRecord> for TrainingRecord {
    fn from(record: FeedbackRecord) -> Self {
        TrainingRecord::Feedback(record)
    }
}
