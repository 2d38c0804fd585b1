use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::application::services::ModerationOutcome;
use crate::domain::{ChatId, InboundMessage, UserId, VoiceClip};
use crate::infrastructure::observability::sanitize_text;
use crate::presentation::handlers::error_response::bad_request;
use crate::presentation::state::AppState;

/// A chat message forwarded by the transport gateway. Voice messages carry
/// the audio as base64; when both fields are set the voice wins.
#[derive(Deserialize)]
pub struct InboundMessageRequest {
    pub chat_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice_base64: Option<String>,
}

#[derive(Serialize, Default)]
pub struct ModerationResponse {
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
}

impl From<ModerationOutcome> for ModerationResponse {
    fn from(outcome: ModerationOutcome) -> Self {
        let mut response = ModerationResponse {
            outcome: outcome.as_str(),
            ..Default::default()
        };
        match outcome {
            ModerationOutcome::Clean { score } => response.score = Some(score),
            ModerationOutcome::Challenged { record_id, .. } => {
                response.record_id = Some(record_id.to_string())
            }
            ModerationOutcome::Passed { similarity } => response.similarity = Some(similarity),
            ModerationOutcome::Failed { similarity, muted } => {
                response.similarity = Some(similarity);
                response.muted = Some(muted);
            }
            ModerationOutcome::Ignored
            | ModerationOutcome::Suppressed
            | ModerationOutcome::AwaitingUsableResponse => {}
        }
        response
    }
}

#[tracing::instrument(skip(state, request), fields(chat_id = request.chat_id, user_id = request.user_id))]
pub async fn message_handler(
    State(state): State<AppState>,
    Json(request): Json<InboundMessageRequest>,
) -> impl IntoResponse {
    let chat_id = ChatId::new(request.chat_id);
    let user_id = UserId::new(request.user_id);

    let message = match (request.voice_base64, request.text) {
        (Some(encoded), _) => match general_purpose::STANDARD.decode(encoded.trim()) {
            Ok(bytes) => InboundMessage::voice(chat_id, user_id, VoiceClip::new(bytes)),
            Err(e) => {
                tracing::warn!(error = %e, "Voice payload is not valid base64");
                return bad_request(format!("invalid voice_base64: {}", e));
            }
        },
        (None, Some(text)) => {
            tracing::debug!(text = %sanitize_text(&text), "Text message received");
            InboundMessage::text(chat_id, user_id, text)
        }
        (None, None) => return bad_request("either text or voice_base64 is required"),
    };

    let outcome = state.engine.handle(message).await;
    tracing::info!(outcome = outcome.as_str(), "Message handled");

    (StatusCode::OK, Json(ModerationResponse::from(outcome))).into_response()
}
