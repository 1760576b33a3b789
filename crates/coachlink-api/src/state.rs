//! Application state wiring all services together.
//!
//! Services are generic over vendor/memory traits, but AppState pins them to
//! the concrete infra implementations. Every service shares one in-memory
//! learner store.

use std::sync::Arc;

use coachlink_core::chat::service::CoachService;
use coachlink_core::llm::box_provider::BoxLlmProvider;
use coachlink_core::service::profile::ProfileService;
use coachlink_core::service::token::TokenService;
use coachlink_core::service::user::UserService;
use coachlink_infra::credentials::Credentials;
use coachlink_infra::llm::create_coach_provider;
use coachlink_infra::memory::InMemoryLearnerStore;
use coachlink_infra::stream::StreamChatClient;
use coachlink_types::config::CoachlinkConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteTokenService = TokenService<StreamChatClient>;

pub type ConcreteUserService = UserService<StreamChatClient, InMemoryLearnerStore>;

pub type ConcreteProfileService = ProfileService<InMemoryLearnerStore>;

pub type ConcreteCoachService = CoachService<InMemoryLearnerStore>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub token_service: Arc<ConcreteTokenService>,
    pub user_service: Arc<ConcreteUserService>,
    pub profile_service: Arc<ConcreteProfileService>,
    pub coach_service: Arc<ConcreteCoachService>,
    pub config: Arc<CoachlinkConfig>,
}

impl AppState {
    /// Initialize the application state from config and credentials.
    pub fn init(config: CoachlinkConfig, credentials: Credentials) -> anyhow::Result<Self> {
        let vendor = StreamChatClient::new(credentials.stream, &config.stream)?;
        let llm = create_coach_provider(&config.coach, &credentials.openai_api_key);
        Ok(Self::from_parts(config, vendor, llm))
    }

    /// Wire services around an explicit vendor client and LLM provider.
    ///
    /// Starts with an empty learner memory.
    pub fn from_parts(config: CoachlinkConfig, vendor: StreamChatClient, llm: BoxLlmProvider) -> Self {
        let memory = InMemoryLearnerStore::new();

        Self {
            token_service: Arc::new(TokenService::new(vendor.clone())),
            user_service: Arc::new(UserService::new(vendor, memory.clone())),
            profile_service: Arc::new(ProfileService::new(memory.clone())),
            coach_service: Arc::new(CoachService::new(memory, llm, config.coach.clone())),
            config: Arc::new(config),
        }
    }
}
