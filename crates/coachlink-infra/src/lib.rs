//! Infrastructure layer for Coachlink.
//!
//! Contains implementations of the port traits defined in `coachlink-core`:
//! the Stream chat vendor client and token signer, the in-process learner
//! memory store, and the OpenAI-compatible LLM provider. Also loads
//! configuration and credentials at startup.

pub mod config;
pub mod credentials;
pub mod llm;
pub mod memory;
pub mod stream;
