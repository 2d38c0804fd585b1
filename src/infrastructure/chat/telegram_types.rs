use serde::{Deserialize, Serialize};

/// Every Bot API response is wrapped in this envelope.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SendMessage<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

#[derive(Debug, Serialize)]
pub struct GetChat {
    pub chat_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct GetChatMember {
    pub chat_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ChatMember {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct RestrictChatMember {
    pub chat_id: i64,
    pub user_id: i64,
    pub permissions: ChatPermissions,
    pub until_date: i64,
}

#[derive(Debug, Serialize)]
pub struct ChatPermissions {
    pub can_send_messages: bool,
}
