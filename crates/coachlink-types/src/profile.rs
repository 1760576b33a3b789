//! Learner memory types.
//!
//! A [`LearnerProfile`] is the per-user record the coach reads and writes on
//! every chat turn. It lives only in process memory.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::llm::MessageRole;
use crate::user::UserRole;

/// One entry of a learner's conversation with the coach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub role: MessageRole,
    pub content: String,
}

impl ConversationEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Per-user learner memory record.
///
/// `preferences` is a set (serialized in sorted order); `goals` keeps
/// insertion order without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub preferences: BTreeSet<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub conversation_history: Vec<ConversationEntry>,
}

impl LearnerProfile {
    /// Empty profile for a user that has not been seen before.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: None,
            preferences: BTreeSet::new(),
            goals: Vec::new(),
            conversation_history: Vec::new(),
        }
    }

    /// Empty profile created at registration time, carrying the user's role.
    pub fn with_role(user_id: impl Into<String>, role: UserRole) -> Self {
        Self {
            role: Some(role),
            ..Self::new(user_id)
        }
    }

    /// Merge an update into this profile.
    ///
    /// Preferences are added to the set, goals are appended unless already
    /// present, and the role is replaced only when the update carries one.
    pub fn apply(&mut self, update: MemoryUpdate) {
        self.preferences.extend(
            update
                .preferences
                .into_iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        );

        for goal in update.goals {
            let goal = goal.trim().to_string();
            if !goal.is_empty() && !self.goals.contains(&goal) {
                self.goals.push(goal);
            }
        }

        if let Some(role) = update.role {
            self.role = Some(role);
        }
    }

    /// The last `n` conversation entries, oldest first.
    pub fn recent_history(&self, n: usize) -> &[ConversationEntry] {
        let start = self.conversation_history.len().saturating_sub(n);
        &self.conversation_history[start..]
    }
}

/// Partial update merged into an existing profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryUpdate {
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
}
