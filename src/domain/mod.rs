mod challenge;
mod chat_id;
mod feedback_kind;
mod feedback_payload;
mod inbound_message;
mod record_id;
mod tongue_twisters;
mod training_record;
mod user_id;

pub use challenge::{ChallengeKey, PendingChallenge};
pub use chat_id::ChatId;
pub use feedback_kind::FeedbackKind;
pub use feedback_payload::{
    FeedbackButtons, FeedbackPayload, FeedbackPayloadError, FeedbackTarget,
};
pub use inbound_message::{InboundMessage, MessageContent, VoiceClip};
pub use record_id::RecordId;
pub use tongue_twisters::TONGUE_TWISTERS;
pub use training_record::{FeedbackRecord, FlaggedRecord, TrainingRecord};
pub use user_id::UserId;
