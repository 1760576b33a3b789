//! Learner memory store trait.
//!
//! Defines the interface for the per-user learner memory record.
//! Implementations live in coachlink-infra.

use coachlink_types::error::ProfileError;
use coachlink_types::profile::{ConversationEntry, LearnerProfile, MemoryUpdate};

/// Trait for learner memory storage keyed by user id.
///
/// Every method is atomic per user id. Implementations must not hold a lock
/// or map guard across an `.await` in the caller's future.
pub trait LearnerMemoryStore: Send + Sync {
    /// Get a copy of a profile. Returns None if the user has no record.
    fn get(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<LearnerProfile>, ProfileError>> + Send;

    /// Get a copy of a profile, creating an empty one if absent.
    fn get_or_create(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<LearnerProfile, ProfileError>> + Send;

    /// Insert a profile, replacing any existing record for the same user.
    ///
    /// Returns true when a record was replaced.
    fn insert(
        &self,
        profile: LearnerProfile,
    ) -> impl std::future::Future<Output = Result<bool, ProfileError>> + Send;

    /// Merge an update into an existing profile and return the result.
    ///
    /// Returns `ProfileError::NotFound` when the user has no record.
    fn apply_update(
        &self,
        user_id: &str,
        update: MemoryUpdate,
    ) -> impl std::future::Future<Output = Result<LearnerProfile, ProfileError>> + Send;

    /// Append entries to a user's conversation history, creating the profile
    /// if absent.
    fn record_turn(
        &self,
        user_id: &str,
        entries: Vec<ConversationEntry>,
    ) -> impl std::future::Future<Output = Result<(), ProfileError>> + Send;

    /// Number of stored profiles.
    fn len(&self) -> impl std::future::Future<Output = Result<usize, ProfileError>> + Send;
}
