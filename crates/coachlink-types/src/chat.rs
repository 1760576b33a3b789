//! Chat turn request/response shapes.

use serde::{Deserialize, Serialize};

/// One message sent by a learner to the AI coach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurnRequest {
    pub user_id: String,
    pub message: String,
    /// Vendor channel the message was posted in. Carried for logging only.
    #[serde(default)]
    pub channel_id: String,
}

/// The coach's reply to a chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub ai_response: String,
    /// True when the reply is the fixed loop-breaking message rather than
    /// an LLM completion.
    #[serde(default)]
    pub loop_detected: bool,
}
