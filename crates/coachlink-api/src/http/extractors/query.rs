//! Query string extractors.

use axum::extract::FromRequestParts;
use serde::Deserialize;

use crate::http::error::AppError;

/// Like [`axum::extract::Query`], with envelope-formatted rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Query parameters for `POST /chat/token`.
#[derive(Debug, Deserialize, Default)]
pub struct TokenQuery {
    /// User to mint the token for.
    pub user_id: Option<String>,
}

/// Query parameters for `POST /chat/channel`.
#[derive(Debug, Deserialize, Default)]
pub struct ChannelQuery {
    /// Learner member of the channel.
    pub learner_id: Option<String>,
    /// Coach member and creator of the channel.
    pub coach_id: Option<String>,
}
