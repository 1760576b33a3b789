//! HTTP request handlers for the REST API.

pub mod channel;
pub mod chat;
pub mod health;
pub mod memory;
pub mod token;
pub mod user;
