//! ChatVendor trait definition.
//!
//! The hosted chat service owns message delivery, presence and the UI
//! widgets. Coachlink only needs to mint user tokens and register users and
//! channels with it. Implementations live in coachlink-infra.

use coachlink_types::error::VendorError;
use coachlink_types::token::ChatToken;
use coachlink_types::user::{Channel, User};

/// Server-side operations against the hosted chat vendor.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition) for the calls
/// that hit the network. Token minting is local signing, so it is sync.
pub trait ChatVendor: Send + Sync {
    /// Mint a client authentication token for `user_id`.
    ///
    /// The id is assumed to be validated already.
    fn create_token(&self, user_id: &str) -> Result<ChatToken, VendorError>;

    /// Create or update a user on the vendor (id and display name only).
    fn upsert_user(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<(), VendorError>> + Send;

    /// Create the channel on the vendor, or fetch it if it already exists.
    fn create_channel(
        &self,
        channel: &Channel,
    ) -> impl std::future::Future<Output = Result<(), VendorError>> + Send;
}
