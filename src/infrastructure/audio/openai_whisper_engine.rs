use async_trait::async_trait;
use reqwest::{StatusCode, multipart};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::VoiceClip;
use crate::infrastructure::observability::sanitize_text;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "whisper-1";

/// Transcribes voice messages (OGG/Opus as delivered by chat apps) through an
/// OpenAI-compatible `/audio/transcriptions` endpoint.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    language: Option<String>,
}

impl OpenAiWhisperEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            language: language.filter(|l| !l.is_empty()),
        }
    }

    fn voice_form(&self, clip: &VoiceClip) -> Result<multipart::Form, TranscriptionError> {
        let voice = multipart::Part::bytes(clip.as_bytes().to_vec())
            .file_name("voice.ogg")
            .mime_str("audio/ogg")
            .map_err(|e| TranscriptionError::Configuration(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .part("file", voice)
            .text("model", self.model.clone())
            .text("response_format", "text");

        Ok(match &self.language {
            Some(language) => form.text("language", language.clone()),
            None => form,
        })
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(&self, clip: &VoiceClip) -> Result<String, TranscriptionError> {
        if clip.is_empty() {
            return Err(TranscriptionError::EmptyClip);
        }

        tracing::debug!(model = %self.model, bytes = clip.len(), "Sending voice clip to Whisper");

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(self.voice_form(clip)?)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(e.without_url().to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TranscriptionError::Configuration(format!(
                "credentials rejected with status {}",
                status
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status,
                sanitize_text(&body)
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(e.without_url().to_string()))?;
        let transcript = transcript.trim();

        tracing::info!(chars = transcript.chars().count(), "Voice clip transcribed");
        Ok(transcript.to_string())
    }
}
