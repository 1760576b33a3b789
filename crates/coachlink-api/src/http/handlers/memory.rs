//! Learner memory handlers.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;

use coachlink_types::profile::{LearnerProfile, MemoryUpdate};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::{new_request_id, ApiResponse};
use crate::state::AppState;

/// GET /memory/{user_id} - Read a learner's memory.
pub async fn get_memory(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<LearnerProfile>>, AppError> {
    let start = Instant::now();
    let request_id = new_request_id();

    let profile = state.profile_service.get_profile(&user_id).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(profile, request_id, elapsed)))
}

/// POST /memory/{user_id} - Merge preferences, goals or role into a learner's memory.
pub async fn update_memory(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(update): ApiJson<MemoryUpdate>,
) -> Result<Json<ApiResponse<LearnerProfile>>, AppError> {
    let start = Instant::now();
    let request_id = new_request_id();

    let profile = state.profile_service.update_profile(&user_id, update).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(profile, request_id, elapsed)))
}
