//! Stream chat vendor client.
//!
//! [`StreamChatClient`] implements [`ChatVendor`] against the Stream REST
//! API. User tokens are signed locally; user upserts and channel creation are
//! server-authenticated HTTP calls.

pub mod token;
pub mod types;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use coachlink_core::vendor::ChatVendor;
use coachlink_types::config::StreamConfig;
use coachlink_types::error::VendorError;
use coachlink_types::token::ChatToken;
use coachlink_types::user::{Channel, User};

use crate::credentials::StreamCredentials;

use self::token::TokenSigner;
use self::types::{ChannelData, ChannelQueryRequest, StreamUser, UpsertUsersRequest};

/// Stream chat vendor client.
///
/// Cloning is cheap and shares the HTTP connection pool and signer.
///
/// # API Key Security
///
/// Does NOT derive Debug. The signing secret lives inside [`TokenSigner`]
/// as a `SecretString` and is only exposed while computing a signature.
#[derive(Clone)]
pub struct StreamChatClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    signer: Arc<TokenSigner>,
}

impl StreamChatClient {
    /// Create a client from credentials and vendor settings.
    pub fn new(credentials: StreamCredentials, config: &StreamConfig) -> Result<Self, VendorError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VendorError::Request(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: credentials.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            signer: Arc::new(TokenSigner::new(
                credentials.api_secret,
                config.token_ttl_secs,
            )),
        })
    }

    /// Public app key, needed by clients to connect.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body with server authentication and check the status.
    async fn post_json(&self, path: &str, body: &impl Serialize) -> Result<(), VendorError> {
        let server_token = self.signer.server_token()?;

        let response = self
            .http
            .post(self.url(path))
            .query(&[("api_key", self.api_key.as_str())])
            .header("Authorization", server_token)
            .header("stream-auth-type", "jwt")
            .header("X-Stream-Client", concat!("coachlink-", env!("CARGO_PKG_VERSION")))
            .json(body)
            .send()
            .await
            .map_err(|e| VendorError::Request(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error_body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, path, body = %error_body, "vendor call rejected");
        Err(match status.as_u16() {
            401 | 403 => VendorError::AuthenticationFailed,
            code => VendorError::Status {
                status: code,
                body: error_body,
            },
        })
    }
}

impl ChatVendor for StreamChatClient {
    fn create_token(&self, user_id: &str) -> Result<ChatToken, VendorError> {
        self.signer.user_token(user_id)
    }

    async fn upsert_user(&self, user: &User) -> Result<(), VendorError> {
        let mut users = HashMap::new();
        users.insert(
            user.id.as_str(),
            StreamUser {
                id: &user.id,
                name: &user.name,
            },
        );
        self.post_json("/users", &UpsertUsersRequest { users }).await
    }

    async fn create_channel(&self, channel: &Channel) -> Result<(), VendorError> {
        let path = format!(
            "/channels/{}/{}/query",
            channel.channel_type, channel.channel_id
        );
        let body = ChannelQueryRequest {
            data: ChannelData {
                members: &channel.members,
                name: &channel.name,
                created_by_id: &channel.created_by,
            },
            state: false,
            watch: false,
            presence: false,
        };
        self.post_json(&path, &body).await
    }
}
