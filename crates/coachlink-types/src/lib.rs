//! Shared domain types for Coachlink.
//!
//! Learner profiles, chat tokens, vendor users and channels, LLM request
//! shapes, configuration, and the error enums shared across crates.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod profile;
pub mod token;
pub mod user;
