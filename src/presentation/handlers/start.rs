use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::domain::{ChatId, UserId};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct StartRequest {
    pub chat_id: i64,
    pub user_id: i64,
}

/// The `/start` command: confirms the bot is listening.
pub async fn start_handler(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> impl IntoResponse {
    state
        .engine
        .greet(ChatId::new(request.chat_id), UserId::new(request.user_id))
        .await;
    StatusCode::NO_CONTENT
}
