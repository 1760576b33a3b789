//! LLM provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `coachlink-core`, plus [`create_coach_provider`], which
//! builds the boxed provider the coach service runs on.
//!
//! [`LlmProvider`]: coachlink_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::{ExposeSecret, SecretString};

use coachlink_core::llm::box_provider::BoxLlmProvider;
use coachlink_core::llm::provider::LlmProvider;
use coachlink_types::config::CoachConfig;

use self::openai_compat::OpenAiCompatibleProvider;

/// Create the coach's [`BoxLlmProvider`] from its configuration.
pub fn create_coach_provider(config: &CoachConfig, api_key: &SecretString) -> BoxLlmProvider {
    let oai_config = openai_compat::config::openai_defaults(api_key.expose_secret(), &config.model)
        .with_base_url(&config.llm_base_url);
    let provider = OpenAiCompatibleProvider::new(oai_config);

    tracing::debug!(
        provider = provider.name(),
        model = %config.model,
        base_url = %config.llm_base_url,
        "LLM provider created"
    );

    BoxLlmProvider::new(provider)
}
