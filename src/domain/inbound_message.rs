use super::{ChatId, UserId};

/// Raw audio of a voice message, in whatever container the transport delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceClip(Vec<u8>);

impl VoiceClip {
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    Text(String),
    Voice(VoiceClip),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub content: MessageContent,
}

impl InboundMessage {
    pub fn text(chat_id: ChatId, user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            user_id,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn voice(chat_id: ChatId, user_id: UserId, clip: VoiceClip) -> Self {
        Self {
            chat_id,
            user_id,
            content: MessageContent::Voice(clip),
        }
    }
}
