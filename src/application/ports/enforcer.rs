use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{ChatId, UserId};

/// Transport-level restriction of a chat participant.
#[async_trait]
pub trait Enforcer: Send + Sync {
    async fn mute(
        &self,
        chat_id: ChatId,
        user_id: UserId,
        duration: Duration,
    ) -> Result<(), EnforcementError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EnforcementError {
    #[error("chat {0} is not a restrictable group")]
    NotRestrictable(ChatId),
    #[error("user {0} owns the chat")]
    ChatOwner(UserId),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
