//! Liveness check.

use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /health - Liveness check. Not wrapped in the envelope.
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let learners = state.profile_service.profile_count().await.ok();
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "llm_provider": state.coach_service.provider_name(),
        "model": state.config.coach.model,
        "learners": learners,
    }))
}
