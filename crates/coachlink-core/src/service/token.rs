//! Chat token issuance.

use coachlink_types::error::ServiceError;
use coachlink_types::token::ChatToken;
use tracing::debug;

use crate::validation::validate_user_id;
use crate::vendor::ChatVendor;

/// Issues vendor chat tokens for validated user ids.
pub struct TokenService<V: ChatVendor> {
    vendor: V,
}

impl<V: ChatVendor> TokenService<V> {
    pub fn new(vendor: V) -> Self {
        Self { vendor }
    }

    /// Validate the user id and mint a token for it.
    ///
    /// Accepts `None` so a missing query parameter gets the same validation
    /// error as an empty one.
    pub fn issue_token(&self, user_id: Option<&str>) -> Result<ChatToken, ServiceError> {
        let user_id = validate_user_id("user_id", user_id)?;
        let token = self.vendor.create_token(&user_id)?;
        debug!(user_id = %token.user_id, "issued chat token");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::testing::FakeVendor;

    #[test]
    fn issues_token_for_valid_user() {
        let svc = TokenService::new(FakeVendor::default());
        let token = svc.issue_token(Some(" ada ")).unwrap();
        assert_eq!(token.user_id, "ada");
        assert!(token.token.starts_with("token-ada"));
    }

    #[test]
    fn issuing_twice_gives_two_tokens_for_same_user() {
        let vendor = FakeVendor::default();
        let svc = TokenService::new(vendor.clone());
        let a = svc.issue_token(Some("ada")).unwrap();
        let b = svc.issue_token(Some("ada")).unwrap();
        assert_eq!(a.user_id, b.user_id);
        assert_eq!(vendor.minted.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn missing_or_empty_user_id_rejected() {
        let vendor = FakeVendor::default();
        let svc = TokenService::new(vendor.clone());
        assert!(matches!(
            svc.issue_token(None),
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            svc.issue_token(Some("")),
            Err(ServiceError::Validation(_))
        ));
        assert_eq!(vendor.minted.load(Ordering::SeqCst), 0);
    }
}
