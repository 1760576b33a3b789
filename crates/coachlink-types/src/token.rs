use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vendor chat authentication token minted for one user.
///
/// Created on demand and never persisted. Expiry, if any, is encoded in the
/// token itself.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatToken {
    pub user_id: String,
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

// Manual Debug so the bearer token never lands in logs.
impl std::fmt::Debug for ChatToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatToken")
            .field("user_id", &self.user_id)
            .field("token", &"[REDACTED]")
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let token = ChatToken {
            user_id: "ada".to_string(),
            token: "eyJhbGciOiJIUzI1NiJ9.secret.sig".to_string(),
            issued_at: Utc::now(),
        };
        let debug = format!("{token:?}");
        assert!(debug.contains("ada"));
        assert!(!debug.contains("secret"));
    }
}
