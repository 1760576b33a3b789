//! Coaching channel handler.

use std::time::Instant;

use axum::extract::State;
use axum::Json;

use coachlink_types::user::Channel;

use crate::http::error::AppError;
use crate::http::extractors::query::{ApiQuery, ChannelQuery};
use crate::http::response::{new_request_id, ApiResponse};
use crate::state::AppState;

/// POST /chat/channel?learner_id=&coach_id= - Create the learner/coach channel.
pub async fn create_channel(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ChannelQuery>,
) -> Result<Json<ApiResponse<Channel>>, AppError> {
    let start = Instant::now();
    let request_id = new_request_id();

    let channel = state
        .user_service
        .create_channel(query.learner_id.as_deref(), query.coach_id.as_deref())
        .await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(channel, request_id, elapsed)))
}
