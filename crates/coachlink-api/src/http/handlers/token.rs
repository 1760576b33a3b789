//! Chat token handler.

use std::time::Instant;

use axum::extract::State;
use axum::Json;

use coachlink_types::token::ChatToken;

use crate::http::error::AppError;
use crate::http::extractors::query::{ApiQuery, TokenQuery};
use crate::http::response::{new_request_id, ApiResponse};
use crate::state::AppState;

/// POST /chat/token?user_id= - Mint a chat token for a user.
pub async fn issue_token(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TokenQuery>,
) -> Result<Json<ApiResponse<ChatToken>>, AppError> {
    let start = Instant::now();
    let request_id = new_request_id();

    let token = state.token_service.issue_token(query.user_id.as_deref())?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(token, request_id, elapsed)))
}
