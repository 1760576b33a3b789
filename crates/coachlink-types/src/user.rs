//! Vendor-side users and channels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of a participant in a coaching channel.
///
/// Kept in local memory only; the vendor has no such predefined role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Learner,
    Coach,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Learner => write!(f, "learner"),
            UserRole::Coach => write!(f, "coach"),
        }
    }
}

/// Registration payload for a new chat user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
}

/// A 1:1 coaching channel on the vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub channel_id: String,
    pub channel_type: String,
    pub name: String,
    pub members: Vec<String>,
    pub created_by: String,
}

impl Channel {
    /// Vendor channel type used for coaching conversations.
    pub const CHANNEL_TYPE: &'static str = "messaging";

    /// Display name shown in the chat UI.
    pub const DISPLAY_NAME: &'static str = "AI Coach Chat";

    /// Build the coaching channel between a learner and their coach.
    pub fn coaching(learner_id: &str, coach_id: &str) -> Self {
        Self {
            channel_id: format!("coach-{coach_id}-learner-{learner_id}"),
            channel_type: Self::CHANNEL_TYPE.to_string(),
            name: Self::DISPLAY_NAME.to_string(),
            members: vec![learner_id.to_string(), coach_id.to_string()],
            created_by: coach_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Learner.to_string(), "learner");
        assert_eq!(UserRole::Coach.to_string(), "coach");
    }

    #[test]
    fn test_user_deserializes_lowercase_role() {
        let user: User =
            serde_json::from_str(r#"{"id": "ada", "name": "Ada", "role": "learner"}"#).unwrap();
        assert_eq!(user.role, UserRole::Learner);
    }

    #[test]
    fn test_coaching_channel_layout() {
        let channel = Channel::coaching("ada", "grace");
        assert_eq!(channel.channel_id, "coach-grace-learner-ada");
        assert_eq!(channel.channel_type, "messaging");
        assert_eq!(channel.name, "AI Coach Chat");
        assert_eq!(channel.members, vec!["ada", "grace"]);
        assert_eq!(channel.created_by, "grace");
    }
}
