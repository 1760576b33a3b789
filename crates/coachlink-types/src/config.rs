//! Configuration types for Coachlink.
//!
//! `CoachlinkConfig` represents the optional `config.toml` that controls the
//! listen address, the chat vendor endpoint and the coach's LLM settings.
//! Credentials are never read from this file; they come from the environment.

use serde::{Deserialize, Serialize};

/// Top-level configuration. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachlinkConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub stream: StreamConfig,
    #[serde(default)]
    pub coach: CoachConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Hosted chat vendor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// REST base URL of the vendor API.
    #[serde(default = "default_stream_base_url")]
    pub base_url: String,
    /// Lifetime of issued user tokens. `None` issues non-expiring tokens.
    #[serde(default)]
    pub token_ttl_secs: Option<u64>,
    /// Timeout for server-side vendor calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_stream_base_url() -> String {
    "https://chat.stream-io-api.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_stream_base_url(),
            token_ttl_secs: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// AI coach completion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachConfig {
    /// OpenAI-compatible API base URL.
    #[serde(default = "default_llm_base_url")]
    pub llm_base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    /// Number of conversation entries (including the new message) sent as
    /// context on each turn.
    #[serde(default = "default_context_window")]
    pub context_window: usize,
}

fn default_llm_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    300
}

fn default_temperature() -> f64 {
    0.7
}

fn default_top_p() -> f64 {
    0.9
}

fn default_context_window() -> usize {
    6
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            llm_base_url: default_llm_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            context_window: default_context_window(),
        }
    }
}
