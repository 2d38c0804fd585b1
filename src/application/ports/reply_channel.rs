use async_trait::async_trait;

use crate::domain::{ChatId, FeedbackButtons, UserId};

#[async_trait]
pub trait ReplyChannel: Send + Sync {
    async fn reply(
        &self,
        chat_id: ChatId,
        user_id: UserId,
        text: &str,
        buttons: Option<&FeedbackButtons>,
    ) -> Result<(), ReplyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rejected by transport: {0}")]
    Rejected(String),
}
