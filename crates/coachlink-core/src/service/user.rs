//! User registration and coaching channel creation.

use coachlink_types::error::ServiceError;
use coachlink_types::profile::LearnerProfile;
use coachlink_types::user::{Channel, User};
use tracing::{info, warn};

use crate::memory::store::LearnerMemoryStore;
use crate::validation::{require, validate_channel_id, validate_user_id};
use crate::vendor::ChatVendor;

/// Registers users with the vendor and sets up their local memory.
pub struct UserService<V: ChatVendor, M: LearnerMemoryStore> {
    vendor: V,
    memory: M,
}

impl<V: ChatVendor, M: LearnerMemoryStore> UserService<V, M> {
    pub fn new(vendor: V, memory: M) -> Self {
        Self { vendor, memory }
    }

    /// Upsert the user on the vendor, then (re)initialize their profile.
    ///
    /// The role is stored locally only. Re-registering resets the profile.
    pub async fn register_user(&self, user: User) -> Result<User, ServiceError> {
        let user = User {
            id: validate_user_id("id", Some(&user.id))?,
            name: require("name", Some(&user.name))?,
            role: user.role,
        };

        self.vendor.upsert_user(&user).await.map_err(|e| {
            warn!(user_id = %user.id, error = %e, "vendor user upsert failed");
            e
        })?;

        let reset = self
            .memory
            .insert(LearnerProfile::with_role(&user.id, user.role))
            .await?;

        info!(user_id = %user.id, role = %user.role, reset, "user registered");
        Ok(user)
    }

    /// Create the coaching channel between a learner and a coach.
    pub async fn create_channel(
        &self,
        learner_id: Option<&str>,
        coach_id: Option<&str>,
    ) -> Result<Channel, ServiceError> {
        let learner_id = validate_user_id("learner_id", learner_id)?;
        let coach_id = validate_user_id("coach_id", coach_id)?;
        let channel = Channel::coaching(&learner_id, &coach_id);
        validate_channel_id(&channel.channel_id)?;

        self.vendor.create_channel(&channel).await.map_err(|e| {
            warn!(channel_id = %channel.channel_id, error = %e, "vendor channel creation failed");
            e
        })?;

        info!(channel_id = %channel.channel_id, "coaching channel created");
        Ok(channel)
    }
}
