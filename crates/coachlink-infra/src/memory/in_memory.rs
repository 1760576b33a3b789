//! Process-lifetime learner memory backed by `DashMap`.
//!
//! Profiles are cloned on read so no `DashMap` guard outlives a call and none
//! is ever held across an `.await`. Nothing is persisted: dropping the last
//! clone (or restarting the process) discards every profile.

use std::sync::Arc;

use dashmap::DashMap;

use coachlink_core::memory::store::LearnerMemoryStore;
use coachlink_types::error::ProfileError;
use coachlink_types::profile::{ConversationEntry, LearnerProfile, MemoryUpdate};

/// Concurrent in-process learner memory.
///
/// Cloning produces a shared view of the same map (backed by `Arc`).
#[derive(Debug, Clone, Default)]
pub struct InMemoryLearnerStore {
    inner: Arc<DashMap<String, LearnerProfile>>,
}

impl InMemoryLearnerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LearnerMemoryStore for InMemoryLearnerStore {
    async fn get(&self, user_id: &str) -> Result<Option<LearnerProfile>, ProfileError> {
        Ok(self.inner.get(user_id).map(|r| r.value().clone()))
    }

    async fn get_or_create(&self, user_id: &str) -> Result<LearnerProfile, ProfileError> {
        let entry = self
            .inner
            .entry(user_id.to_string())
            .or_insert_with(|| LearnerProfile::new(user_id));
        Ok(entry.value().clone())
    }

    async fn insert(&self, profile: LearnerProfile) -> Result<bool, ProfileError> {
        Ok(self.inner.insert(profile.user_id.clone(), profile).is_some())
    }

    async fn apply_update(
        &self,
        user_id: &str,
        update: MemoryUpdate,
    ) -> Result<LearnerProfile, ProfileError> {
        let mut entry = self.inner.get_mut(user_id).ok_or(ProfileError::NotFound)?;
        entry.apply(update);
        Ok(entry.value().clone())
    }

    async fn record_turn(
        &self,
        user_id: &str,
        entries: Vec<ConversationEntry>,
    ) -> Result<(), ProfileError> {
        self.inner
            .entry(user_id.to_string())
            .or_insert_with(|| LearnerProfile::new(user_id))
            .conversation_history
            .extend(entries);
        Ok(())
    }

    async fn len(&self) -> Result<usize, ProfileError> {
        Ok(self.inner.len())
    }
}

#[cfg(test)]
mod tests {
    use coachlink_types::user::UserRole;

    use super::*;

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = InMemoryLearnerStore::new();
        assert!(store.get("ada").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_or_create_is_idempotent() {
        let store = InMemoryLearnerStore::new();
        let first = store.get_or_create("ada").await.unwrap();
        assert_eq!(first, LearnerProfile::new("ada"));

        store
            .record_turn("ada", vec![ConversationEntry::user("hi")])
            .await
            .unwrap();
        let second = store.get_or_create("ada").await.unwrap();
        assert_eq!(second.conversation_history.len(), 1);
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn preference_visible_only_to_its_user() {
        let store = InMemoryLearnerStore::new();
        store.insert(LearnerProfile::new("ada")).await.unwrap();
        store.insert(LearnerProfile::new("grace")).await.unwrap();

        store
            .apply_update(
                "ada",
                MemoryUpdate {
                    preferences: vec!["pair programming".into()],
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let ada = store.get("ada").await.unwrap().unwrap();
        let grace = store.get("grace").await.unwrap().unwrap();
        assert!(ada.preferences.contains("pair programming"));
        assert!(grace.preferences.is_empty());
    }

    #[tokio::test]
    async fn apply_update_on_unknown_user_is_not_found() {
        let store = InMemoryLearnerStore::new();
        let result = store.apply_update("ghost", MemoryUpdate::default()).await;
        assert!(matches!(result, Err(ProfileError::NotFound)));
        assert_eq!(store.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_replaces_existing_profile() {
        let store = InMemoryLearnerStore::new();
        store
            .record_turn("ada", vec![ConversationEntry::user("hi")])
            .await
            .unwrap();
        let replaced = store
            .insert(LearnerProfile::with_role("ada", UserRole::Learner))
            .await
            .unwrap();
        assert!(replaced);
        assert!(!store.insert(LearnerProfile::new("grace")).await.unwrap());

        let ada = store.get("ada").await.unwrap().unwrap();
        assert!(ada.conversation_history.is_empty());
        assert_eq!(ada.role, Some(UserRole::Learner));
    }

    #[tokio::test]
    async fn clones_share_state_but_new_store_starts_empty() {
        let store = InMemoryLearnerStore::new();
        let view = store.clone();
        store.insert(LearnerProfile::new("ada")).await.unwrap();
        assert!(view.get("ada").await.unwrap().is_some());
        assert!(view.get("grace").await.unwrap().is_none());

        // A fresh store stands in for a process restart: nothing survives.
        let restarted = InMemoryLearnerStore::new();
        assert!(restarted.get("ada").await.unwrap().is_none());
        assert_eq!(restarted.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn concurrent_turns_are_all_recorded() {
        let store = InMemoryLearnerStore::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .record_turn("ada", vec![ConversationEntry::user(format!("m{i}"))])
                    .await
                    .unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        let ada = store.get("ada").await.unwrap().unwrap();
        assert_eq!(ada.conversation_history.len(), 32);
    }
}
