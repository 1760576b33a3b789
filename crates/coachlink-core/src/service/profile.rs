//! Learner memory reads and updates exposed over the API.

use coachlink_types::error::{ProfileError, ServiceError};
use coachlink_types::profile::{LearnerProfile, MemoryUpdate};
use tracing::debug;

use crate::memory::store::LearnerMemoryStore;
use crate::validation::validate_user_id;

/// Reads and updates learner profiles.
pub struct ProfileService<M: LearnerMemoryStore> {
    memory: M,
}

impl<M: LearnerMemoryStore> ProfileService<M> {
    pub fn new(memory: M) -> Self {
        Self { memory }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &M {
        &self.memory
    }

    /// Read a profile. Unknown users are `ProfileError::NotFound`.
    pub async fn get_profile(&self, user_id: &str) -> Result<LearnerProfile, ServiceError> {
        let user_id = validate_user_id("user_id", Some(user_id))?;
        self.memory
            .get(&user_id)
            .await?
            .ok_or_else(|| ProfileError::NotFound.into())
    }

    /// Merge an update into an existing profile.
    ///
    /// Profiles are only created by registration or a chat turn, never here.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: MemoryUpdate,
    ) -> Result<LearnerProfile, ServiceError> {
        let user_id = validate_user_id("user_id", Some(user_id))?;
        let profile = self.memory.apply_update(&user_id, update).await?;
        debug!(
            user_id = %user_id,
            preferences = profile.preferences.len(),
            goals = profile.goals.len(),
            "learner memory updated"
        );
        Ok(profile)
    }

    /// Number of learners currently held in memory.
    pub async fn profile_count(&self) -> Result<usize, ServiceError> {
        Ok(self.memory.len().await?)
    }
}
