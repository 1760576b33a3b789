//! HTTP/REST API layer for Coachlink.
//!
//! Axum-based REST API mounted at the root and under `/api/v1/`, with the
//! envelope response format and permissive CORS.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
