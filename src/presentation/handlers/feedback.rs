use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::{FeedbackPayload, UserId};
use crate::presentation::handlers::error_response::bad_request;
use crate::presentation::state::AppState;

pub const FEEDBACK_SAVED: &str = "Обратная связь сохранена.";

/// A like/dislike button press. `original_text` is the challenge message the
/// buttons were attached to, when the transport still has it.
#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub admin_id: i64,
    pub callback_data: String,
    #[serde(default)]
    pub original_text: Option<String>,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub message: &'static str,
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flagged_record_id: Option<String>,
}

#[tracing::instrument(skip(state, request), fields(admin_id = request.admin_id))]
pub async fn feedback_handler(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> impl IntoResponse {
    let payload = match request.callback_data.parse::<FeedbackPayload>() {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed feedback payload dropped");
            return bad_request(format!("malformed callback data: {}", e));
        }
    };

    let record = state
        .engine
        .on_feedback(UserId::new(request.admin_id), &payload, request.original_text)
        .await;

    (
        StatusCode::ACCEPTED,
        Json(FeedbackResponse {
            message: FEEDBACK_SAVED,
            feedback: record.feedback.to_string(),
            flagged_record_id: record.flagged_record_id.map(|id| id.to_string()),
        }),
    )
        .into_response()
}
