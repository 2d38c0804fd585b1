use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{EnforcementError, Enforcer, ReplyChannel, ReplyError};
use crate::domain::{ChatId, FeedbackButtons, UserId};
use crate::infrastructure::observability::sanitize_text;

/// Stands in for the chat transport in scaffold mode: replies and mutes are
/// only logged.
pub struct LoggingChatGateway;

#[async_trait]
impl ReplyChannel for LoggingChatGateway {
    async fn reply(
        &self,
        chat_id: ChatId,
        user_id: UserId,
        text: &str,
        buttons: Option<&FeedbackButtons>,
    ) -> Result<(), ReplyError> {
        tracing::info!(
            %chat_id,
            %user_id,
            text = %sanitize_text(text),
            with_feedback_buttons = buttons.is_some(),
            "Reply (scaffold)"
        );
        Ok(())
    }
}

#[async_trait]
impl Enforcer for LoggingChatGateway {
    async fn mute(
        &self,
        chat_id: ChatId,
        user_id: UserId,
        duration: Duration,
    ) -> Result<(), EnforcementError> {
        tracing::info!(%chat_id, %user_id, seconds = duration.as_secs(), "Mute (scaffold)");
        Ok(())
    }
}
