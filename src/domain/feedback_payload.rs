use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::{ChatId, FeedbackKind, RecordId, UserId};

const FIELD_SEPARATOR: char = '|';

/// What a feedback button press refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTarget {
    Record(RecordId),
    /// Buttons rendered before records carried ids only name the flagged user.
    User(UserId),
}

/// Callback data attached to the like/dislike buttons under a challenge.
///
/// Encoded as `kind|chat_id|record_id` with the record id in simple (hyphenless)
/// form so the payload fits the 64 byte Telegram callback limit. The older
/// `kind|chat_id|user_id` form is still accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackPayload {
    pub kind: FeedbackKind,
    pub chat_id: ChatId,
    pub target: FeedbackTarget,
}

impl FeedbackPayload {
    pub fn for_record(kind: FeedbackKind, chat_id: ChatId, record_id: RecordId) -> Self {
        Self {
            kind,
            chat_id,
            target: FeedbackTarget::Record(record_id),
        }
    }

    pub fn record_id(&self) -> Option<RecordId> {
        match self.target {
            FeedbackTarget::Record(id) => Some(id),
            FeedbackTarget::User(_) => None,
        }
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FeedbackPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            FeedbackTarget::Record(id) => write!(
                f,
                "{}{sep}{}{sep}{}",
                self.kind,
                self.chat_id,
                id.as_uuid().simple(),
                sep = FIELD_SEPARATOR
            ),
            FeedbackTarget::User(user_id) => write!(
                f,
                "{}{sep}{}{sep}{}",
                self.kind,
                self.chat_id,
                user_id,
                sep = FIELD_SEPARATOR
            ),
        }
    }
}

impl FromStr for FeedbackPayload {
    type Err = FeedbackPayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(FIELD_SEPARATOR).collect();
        let [kind, chat_id, target] = parts.as_slice() else {
            return Err(FeedbackPayloadError::FieldCount(parts.len()));
        };

        let kind = kind
            .parse::<FeedbackKind>()
            .map_err(FeedbackPayloadError::InvalidKind)?;
        let chat_id = chat_id
            .parse::<i64>()
            .map(ChatId::new)
            .map_err(|e| FeedbackPayloadError::InvalidChatId(e.to_string()))?;

        let target = match target.parse::<i64>() {
            Ok(user_id) => FeedbackTarget::User(UserId::new(user_id)),
            Err(_) => Uuid::parse_str(target)
                .map(|uuid| FeedbackTarget::Record(RecordId::from_uuid(uuid)))
                .map_err(|e| FeedbackPayloadError::InvalidTarget(e.to_string()))?,
        };

        Ok(Self {
            kind,
            chat_id,
            target,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FeedbackPayloadError {
    #[error("expected 3 fields, got {0}")]
    FieldCount(usize),
    #[error("invalid kind: {0}")]
    InvalidKind(String),
    #[error("invalid chat id: {0}")]
    InvalidChatId(String),
    #[error("invalid target: {0}")]
    InvalidTarget(String),
}

/// Like/dislike buttons offered to admins under a challenge message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackButtons {
    pub like: FeedbackPayload,
    pub dislike: FeedbackPayload,
}

impl FeedbackButtons {
    pub fn for_record(chat_id: ChatId, record_id: RecordId) -> Self {
        Self {
            like: FeedbackPayload::for_record(FeedbackKind::Like, chat_id, record_id),
            dislike: FeedbackPayload::for_record(FeedbackKind::Dislike, chat_id, record_id),
        }
    }
}
