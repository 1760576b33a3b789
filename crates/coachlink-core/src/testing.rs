//! In-process doubles for the vendor and memory ports, used by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use coachlink_types::error::{ProfileError, VendorError};
use coachlink_types::profile::{ConversationEntry, LearnerProfile, MemoryUpdate};
use coachlink_types::token::ChatToken;
use coachlink_types::user::{Channel, User};

use crate::memory::store::LearnerMemoryStore;
use crate::vendor::ChatVendor;

/// Map-backed store. Clones share the same map.
#[derive(Clone, Default)]
pub(crate) struct MapStore {
    inner: Arc<Mutex<HashMap<String, LearnerProfile>>>,
}

impl LearnerMemoryStore for MapStore {
    async fn get(&self, user_id: &str) -> Result<Option<LearnerProfile>, ProfileError> {
        Ok(self.inner.lock().unwrap().get(user_id).cloned())
    }

    async fn get_or_create(&self, user_id: &str) -> Result<LearnerProfile, ProfileError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_insert_with(|| LearnerProfile::new(user_id))
            .clone())
    }

    async fn insert(&self, profile: LearnerProfile) -> Result<bool, ProfileError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .insert(profile.user_id.clone(), profile)
            .is_some())
    }

    async fn apply_update(
        &self,
        user_id: &str,
        update: MemoryUpdate,
    ) -> Result<LearnerProfile, ProfileError> {
        let mut map = self.inner.lock().unwrap();
        let profile = map.get_mut(user_id).ok_or(ProfileError::NotFound)?;
        profile.apply(update);
        Ok(profile.clone())
    }

    async fn record_turn(
        &self,
        user_id: &str,
        entries: Vec<ConversationEntry>,
    ) -> Result<(), ProfileError> {
        self.inner
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_insert_with(|| LearnerProfile::new(user_id))
            .conversation_history
            .extend(entries);
        Ok(())
    }

    async fn len(&self) -> Result<usize, ProfileError> {
        Ok(self.inner.lock().unwrap().len())
    }
}

/// Vendor double that records calls instead of hitting the network.
#[derive(Clone, Default)]
pub(crate) struct FakeVendor {
    pub minted: Arc<AtomicUsize>,
    pub users: Arc<Mutex<Vec<User>>>,
    pub channels: Arc<Mutex<Vec<Channel>>>,
    pub fail: bool,
}

impl ChatVendor for FakeVendor {
    fn create_token(&self, user_id: &str) -> Result<ChatToken, VendorError> {
        let n = self.minted.fetch_add(1, Ordering::SeqCst);
        Ok(ChatToken {
            user_id: user_id.to_string(),
            token: format!("token-{user_id}-{n}"),
            issued_at: Utc::now(),
        })
    }

    async fn upsert_user(&self, user: &User) -> Result<(), VendorError> {
        if self.fail {
            return Err(VendorError::Status {
                status: 500,
                body: "boom".to_string(),
            });
        }
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn create_channel(&self, channel: &Channel) -> Result<(), VendorError> {
        if self.fail {
            return Err(VendorError::Request("connection refused".to_string()));
        }
        self.channels.lock().unwrap().push(channel.clone());
        Ok(())
    }
}
