use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::ports::{Clock, EnforcementError, Enforcer, ReplyChannel, ReplyError};
use crate::domain::{ChatId, FeedbackButtons, UserId};

use super::telegram_types::{
    ApiResponse, Chat, ChatMember, ChatPermissions, GetChat, GetChatMember, InlineKeyboardButton,
    InlineKeyboardMarkup, RestrictChatMember, SendMessage,
};

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

const RESTRICTABLE_CHAT_TYPE: &str = "supergroup";
const OWNER_STATUS: &str = "creator";

/// Outbound side of the Telegram Bot API: replies and mutes.
pub struct TelegramClient {
    client: Client,
    base_url: String,
    token: String,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("request to {method} failed: {message}")]
    Request { method: &'static str, message: String },
    #[error("{method} rejected: {description}")]
    Api {
        method: &'static str,
        description: String,
    },
    #[error("{method} returned an unreadable body: {message}")]
    InvalidResponse { method: &'static str, message: String },
}

impl From<TelegramError> for ReplyError {
    fn from(err: TelegramError) -> Self {
        match err {
            TelegramError::Api { description, .. } => ReplyError::Rejected(description),
            other => ReplyError::ApiRequestFailed(other.to_string()),
        }
    }
}

impl From<TelegramError> for EnforcementError {
    fn from(err: TelegramError) -> Self {
        match err {
            invalid @ TelegramError::InvalidResponse { .. } => {
                EnforcementError::InvalidResponse(invalid.to_string())
            }
            other => EnforcementError::ApiRequestFailed(other.to_string()),
        }
    }
}

impl TelegramClient {
    pub fn new(token: String, base_url: Option<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token,
            clock,
        }
    }

    /// Unix timestamp at which a restriction of `duration` lifts.
    fn until_date(&self, duration: Duration) -> i64 {
        let duration = i64::try_from(duration.as_secs()).unwrap_or(i64::MAX);
        self.clock.now().timestamp().saturating_add(duration)
    }

    async fn call<P, R>(&self, method: &'static str, params: &P) -> Result<R, TelegramError>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}/bot{}/{}", self.base_url, self.token, method);

        let response = self
            .client
            .post(&url)
            .json(params)
            .send()
            .await
            .map_err(|e| TelegramError::Request {
                method,
                // reqwest errors embed the URL, which carries the bot token
                message: e.without_url().to_string(),
            })?;

        let envelope: ApiResponse<R> =
            response
                .json()
                .await
                .map_err(|e| TelegramError::InvalidResponse {
                    method,
                    message: e.without_url().to_string(),
                })?;

        match (envelope.ok, envelope.result) {
            (true, Some(result)) => Ok(result),
            (true, None) => Err(TelegramError::InvalidResponse {
                method,
                message: "missing result".to_string(),
            }),
            (false, _) => Err(TelegramError::Api {
                method,
                description: envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            }),
        }
    }
}

fn keyboard(buttons: &FeedbackButtons) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup {
        inline_keyboard: vec![vec![
            InlineKeyboardButton {
                text: "👍".to_string(),
                callback_data: buttons.like.encode(),
            },
            InlineKeyboardButton {
                text: "👎".to_string(),
                callback_data: buttons.dislike.encode(),
            },
        ]],
    }
}

#[async_trait]
impl ReplyChannel for TelegramClient {
    async fn reply(
        &self,
        chat_id: ChatId,
        _user_id: UserId,
        text: &str,
        buttons: Option<&FeedbackButtons>,
    ) -> Result<(), ReplyError> {
        let params = SendMessage {
            chat_id: chat_id.as_i64(),
            text,
            reply_markup: buttons.map(keyboard),
        };
        let _: serde_json::Value = self.call("sendMessage", &params).await?;
        Ok(())
    }
}

#[async_trait]
impl Enforcer for TelegramClient {
    async fn mute(
        &self,
        chat_id: ChatId,
        user_id: UserId,
        duration: Duration,
    ) -> Result<(), EnforcementError> {
        let chat: Chat = self
            .call(
                "getChat",
                &GetChat {
                    chat_id: chat_id.as_i64(),
                },
            )
            .await?;
        if chat.kind != RESTRICTABLE_CHAT_TYPE {
            return Err(EnforcementError::NotRestrictable(chat_id));
        }

        let member: ChatMember = self
            .call(
                "getChatMember",
                &GetChatMember {
                    chat_id: chat_id.as_i64(),
                    user_id: user_id.as_i64(),
                },
            )
            .await?;
        if member.status == OWNER_STATUS {
            return Err(EnforcementError::ChatOwner(user_id));
        }

        let until_date = self.until_date(duration);
        let _: bool = self
            .call(
                "restrictChatMember",
                &RestrictChatMember {
                    chat_id: chat_id.as_i64(),
                    user_id: user_id.as_i64(),
                    permissions: ChatPermissions {
                        can_send_messages: false,
                    },
                    until_date,
                },
            )
            .await?;

        tracing::info!(%chat_id, %user_id, until_date, "Chat member restricted");
        Ok(())
    }
}
