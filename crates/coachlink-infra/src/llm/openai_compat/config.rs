//! Configuration for OpenAI-compatible chat completion endpoints.

/// Default OpenAI API base URL.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,
}

impl OpenAiCompatConfig {
    /// Point the provider at a different OpenAI-compatible endpoint.
    ///
    /// The name becomes `openai-compatible` unless the URL is the OpenAI default.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        if base_url != OPENAI_BASE_URL {
            self.provider_name = "openai-compatible".into();
        }
        self.base_url = base_url.into();
        self
    }
}

/// OpenAI default configuration.
pub fn openai_defaults(api_key: &str, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: OPENAI_BASE_URL.into(),
        api_key: api_key.into(),
        model: model.into(),
    }
}
