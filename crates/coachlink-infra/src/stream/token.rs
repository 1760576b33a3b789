//! HS256 JWT signing for Stream chat tokens.
//!
//! Stream accepts JWTs signed with the app's API secret:
//! - user tokens carry `{"user_id": ..., "iat": ...}` plus `exp` when a TTL
//!   is configured, and are handed to the browser client;
//! - the server token carries `{"server": true}` and authenticates our own
//!   REST calls.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use coachlink_types::error::VendorError;
use coachlink_types::token::ChatToken;

#[derive(Serialize)]
struct UserClaims<'a> {
    user_id: &'a str,
    iat: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

#[derive(Serialize)]
struct ServerClaims {
    server: bool,
}

/// Signs vendor tokens with the app secret.
///
/// Does NOT derive Debug; the secret must never reach logs.
pub struct TokenSigner {
    secret: SecretString,
    ttl: Option<Duration>,
}

impl TokenSigner {
    /// Create a signer. `ttl_secs` adds an `exp` claim to user tokens.
    pub fn new(secret: SecretString, ttl_secs: Option<u64>) -> Self {
        Self {
            secret,
            ttl: ttl_secs
                .and_then(|s| i64::try_from(s).ok())
                .and_then(Duration::try_seconds),
        }
    }

    /// Mint a client token for `user_id`, issued now.
    pub fn user_token(&self, user_id: &str) -> Result<ChatToken, VendorError> {
        self.user_token_at(user_id, Utc::now())
    }

    /// Mint a client token for `user_id` with an explicit issue time.
    pub fn user_token_at(
        &self,
        user_id: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<ChatToken, VendorError> {
        let claims = UserClaims {
            user_id,
            iat: issued_at.timestamp(),
            exp: self
                .ttl
                .and_then(|ttl| issued_at.checked_add_signed(ttl))
                .map(|exp| exp.timestamp()),
        };
        Ok(ChatToken {
            user_id: user_id.to_string(),
            token: self.sign(&claims)?,
            issued_at,
        })
    }

    /// Token for server-side REST calls.
    pub fn server_token(&self) -> Result<String, VendorError> {
        self.sign(&ServerClaims { server: true })
    }

    // Header::default() is HS256 with typ "JWT".
    fn sign(&self, claims: &impl Serialize) -> Result<String, VendorError> {
        let key = EncodingKey::from_secret(self.secret.expose_secret().as_bytes());
        jsonwebtoken::encode(&Header::default(), claims, &key)
            .map_err(|e| VendorError::Signing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

    use super::*;

    fn signer(ttl: Option<u64>) -> TokenSigner {
        TokenSigner::new(SecretString::from("test-secret".to_string()), ttl)
    }

    /// Check the token's signature against `secret` and return its claims.
    fn verify(token: &str, secret: &str) -> jsonwebtoken::errors::Result<serde_json::Value> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        let key = DecodingKey::from_secret(secret.as_bytes());
        decode::<serde_json::Value>(token, &key, &validation).map(|data| data.claims)
    }

    #[test]
    fn user_token_is_valid_jwt_for_user() {
        let issued = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let token = signer(None).user_token_at("ada", issued).unwrap();

        assert_eq!(token.user_id, "ada");
        assert_eq!(token.issued_at, issued);

        let header = decode_header(&token.token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.typ.as_deref(), Some("JWT"));

        let claims = verify(&token.token, "test-secret").unwrap();
        assert_eq!(claims["user_id"], "ada");
        assert_eq!(claims["iat"], 1_700_000_000);
        assert!(claims.get("exp").is_none());
    }

    #[test]
    fn ttl_adds_expiry() {
        let issued = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let token = signer(Some(3600)).user_token_at("ada", issued).unwrap();
        let claims = verify(&token.token, "test-secret").unwrap();
        assert_eq!(claims["exp"], 1_700_003_600);
    }

    #[test]
    fn two_tokens_for_same_user_both_verify() {
        let signer = signer(None);
        let a = signer.user_token("ada").unwrap();
        let b = signer.user_token("ada").unwrap();
        assert_eq!(verify(&a.token, "test-secret").unwrap()["user_id"], "ada");
        assert_eq!(verify(&b.token, "test-secret").unwrap()["user_id"], "ada");
    }

    #[test]
    fn wrong_secret_does_not_verify() {
        let token = signer(None).user_token("ada").unwrap();
        assert!(verify(&token.token, "other-secret").is_err());
    }

    #[test]
    fn server_token_claims() {
        let token = signer(None).server_token().unwrap();
        let claims = verify(&token, "test-secret").unwrap();
        assert_eq!(claims, serde_json::json!({"server": true}));
    }
}
