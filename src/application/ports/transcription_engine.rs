use async_trait::async_trait;

use crate::domain::VoiceClip;

/// Speech-to-text. An empty string means no usable speech was found.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, clip: &VoiceClip) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("empty audio clip")]
    EmptyClip,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("misconfigured engine: {0}")]
    Configuration(String),
}
