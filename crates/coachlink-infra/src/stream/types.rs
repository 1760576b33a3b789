//! Wire types for the Stream chat REST API.

use std::collections::HashMap;

use serde::Serialize;

/// Body of `POST /users` (batch upsert keyed by user id).
#[derive(Debug, Serialize)]
pub struct UpsertUsersRequest<'a> {
    pub users: HashMap<&'a str, StreamUser<'a>>,
}

/// A user as sent to the vendor. The local role is deliberately absent.
#[derive(Debug, Serialize)]
pub struct StreamUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

/// Body of `POST /channels/{type}/{id}/query`.
#[derive(Debug, Serialize)]
pub struct ChannelQueryRequest<'a> {
    pub data: ChannelData<'a>,
    pub state: bool,
    pub watch: bool,
    pub presence: bool,
}

/// Channel custom data and membership.
#[derive(Debug, Serialize)]
pub struct ChannelData<'a> {
    pub members: &'a [String],
    pub name: &'a str,
    pub created_by_id: &'a str,
}
