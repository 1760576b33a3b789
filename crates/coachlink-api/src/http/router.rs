//! Axum router configuration with middleware.
//!
//! Routes are served at the root (what the chat frontend calls) and again
//! under `/api/v1/`. Middleware: CORS, tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

fn api_routes() -> Router<AppState> {
    Router::new()
        // Vendor tokens, users and channels
        .route("/chat/token", post(handlers::token::issue_token))
        .route("/users", post(handlers::user::register_user))
        .route("/chat/channel", post(handlers::channel::create_channel))
        // Coach turn
        .route("/chat/message", post(handlers::chat::send_message))
        // Learner memory
        .route(
            "/memory/{user_id}",
            get(handlers::memory::get_memory).post(handlers::memory::update_memory),
        )
}

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api_routes())
        .nest("/api/v1", api_routes())
        .route("/health", get(handlers::health::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
