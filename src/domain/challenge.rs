use chrono::{DateTime, Utc};

use super::{ChatId, RecordId, UserId};

/// Pending challenges are tracked per participant per chat: the same user
/// can be tested independently in two different groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChallengeKey {
    pub chat_id: ChatId,
    pub user_id: UserId,
}

impl ChallengeKey {
    pub fn new(chat_id: ChatId, user_id: UserId) -> Self {
        Self { chat_id, user_id }
    }
}

/// A sobriety test awaiting the user's answer. Never mutated after issue.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingChallenge {
    pub expected_phrase: String,
    pub issued_at: DateTime<Utc>,
    pub flagged_record_id: RecordId,
}

impl PendingChallenge {
    pub fn new(
        expected_phrase: impl Into<String>,
        issued_at: DateTime<Utc>,
        flagged_record_id: RecordId,
    ) -> Self {
        Self {
            expected_phrase: expected_phrase.into(),
            issued_at,
            flagged_record_id,
        }
    }
}
