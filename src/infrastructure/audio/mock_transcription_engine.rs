use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::VoiceClip;

/// Treats the clip bytes as UTF-8 text. Lets scaffold deployments exercise
/// the voice path by posting the "spoken" words as audio.
pub struct MockTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, clip: &VoiceClip) -> Result<String, TranscriptionError> {
        String::from_utf8(clip.as_bytes().to_vec())
            .map(|text| text.trim().to_string())
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))
    }
}
