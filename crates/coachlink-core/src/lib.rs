//! Business logic and port trait definitions for Coachlink.
//!
//! This crate defines the "ports" (vendor, memory store and LLM provider
//! traits) that the infrastructure layer implements. It depends only on
//! `coachlink-types` -- never on `coachlink-infra` or any network crate.

pub mod chat;
pub mod llm;
pub mod memory;
pub mod service;
pub mod validation;
pub mod vendor;

#[cfg(test)]
pub(crate) mod testing;
