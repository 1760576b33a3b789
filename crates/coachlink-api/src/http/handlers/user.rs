//! User registration handler.

use std::time::Instant;

use axum::extract::State;
use axum::Json;

use coachlink_types::user::User;

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::{new_request_id, ApiResponse};
use crate::state::AppState;

/// POST /users - Register a user with the chat vendor and initialize memory.
pub async fn register_user(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<User>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let start = Instant::now();
    let request_id = new_request_id();

    let user = state.user_service.register_user(body).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let memory_link = format!("/api/v1/memory/{}", user.id);
    let resp = ApiResponse::success(user, request_id, elapsed).with_link("memory", &memory_link);

    Ok(Json(resp))
}
