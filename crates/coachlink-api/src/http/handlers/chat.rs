//! AI-coach chat turn handler.

use std::time::Instant;

use axum::extract::State;
use axum::Json;

use coachlink_types::chat::{ChatReply, ChatTurnRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::{new_request_id, ApiResponse};
use crate::state::AppState;

/// POST /chat/message - Run one coach turn for a learner message.
pub async fn send_message(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ChatTurnRequest>,
) -> Result<Json<ApiResponse<ChatReply>>, AppError> {
    let start = Instant::now();
    let request_id = new_request_id();

    let reply = state.coach_service.handle_message(&body).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let memory_link = format!("/api/v1/memory/{}", body.user_id.trim());
    let resp = ApiResponse::success(reply, request_id, elapsed).with_link("memory", &memory_link);

    Ok(Json(resp))
}
