//! Coach service running one AI-coach chat turn.
//!
//! A turn reads the learner's memory, short-circuits on a detected
//! conversation loop, otherwise asks the LLM for a reply and records both
//! sides of the exchange.

use coachlink_types::chat::{ChatReply, ChatTurnRequest};
use coachlink_types::config::CoachConfig;
use coachlink_types::error::ServiceError;
use coachlink_types::llm::{CompletionRequest, LlmError, Message, MessageRole};
use coachlink_types::profile::ConversationEntry;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::chat::loop_detector::{LoopCheckResult, LoopDetector};
use crate::chat::prompt::{system_prompt, LOOP_BREAK_REPLY};
use crate::llm::box_provider::BoxLlmProvider;
use crate::memory::store::LearnerMemoryStore;
use crate::validation::{require, validate_user_id};

/// Runs AI-coach chat turns against a learner memory store.
///
/// Generic over `LearnerMemoryStore` so coachlink-core never depends on
/// coachlink-infra.
pub struct CoachService<M: LearnerMemoryStore> {
    memory: M,
    llm: BoxLlmProvider,
    config: CoachConfig,
    loop_detector: LoopDetector,
}

impl<M: LearnerMemoryStore> CoachService<M> {
    pub fn new(memory: M, llm: BoxLlmProvider, config: CoachConfig) -> Self {
        Self {
            memory,
            llm,
            config,
            loop_detector: LoopDetector::new(),
        }
    }

    /// Name of the LLM provider backing the coach.
    pub fn provider_name(&self) -> &str {
        self.llm.name()
    }

    /// Handle one learner message and produce the coach's reply.
    ///
    /// Nothing is recorded when a loop is detected or the LLM call fails.
    pub async fn handle_message(&self, turn: &ChatTurnRequest) -> Result<ChatReply, ServiceError> {
        let user_id = validate_user_id("user_id", Some(&turn.user_id))?;
        let message = require("message", Some(&turn.message))?;

        // Unknown users get an empty view; the profile is created on record.
        let profile = self.memory.get(&user_id).await?;
        let history = profile
            .as_ref()
            .map(|p| p.conversation_history.as_slice())
            .unwrap_or_default();

        if let LoopCheckResult::LoopDetected { phrase, occurrences } =
            self.loop_detector.check(history)
        {
            info!(
                user_id = %user_id,
                channel_id = %turn.channel_id,
                phrase = %phrase,
                occurrences,
                "conversation loop detected, sending loop-break reply"
            );
            return Ok(ChatReply {
                ai_response: LOOP_BREAK_REPLY.to_string(),
                loop_detected: true,
            });
        }

        // Context window counts the new message.
        let keep = self.config.context_window.saturating_sub(1);
        let context = profile
            .as_ref()
            .map(|p| p.recent_history(keep))
            .unwrap_or_default();
        let mut messages: Vec<Message> = context
            .iter()
            .map(|e| Message {
                role: e.role,
                content: e.content.clone(),
            })
            .collect();
        messages.push(Message {
            role: MessageRole::User,
            content: message.clone(),
        });

        let (goals, preferences) = match &profile {
            Some(p) => (
                p.goals.clone(),
                p.preferences.iter().map(String::as_str).collect::<Vec<_>>(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages,
            system: Some(system_prompt(&goals, &preferences)),
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
            top_p: Some(self.config.top_p),
        };

        debug!(
            user_id = %user_id,
            provider = self.llm.name(),
            context_messages = request.messages.len(),
            "requesting coach completion"
        );

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.llm.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
        );

        let response = self.llm.complete(&request).instrument(span).await.map_err(|e| {
            warn!(user_id = %user_id, error = %e, "coach completion failed");
            e
        })?;

        let reply = response.content.trim().to_string();
        if reply.is_empty() {
            warn!(user_id = %user_id, "coach completion was empty");
            return Err(LlmError::EmptyResponse.into());
        }

        self.memory
            .record_turn(
                &user_id,
                vec![
                    ConversationEntry::user(message),
                    ConversationEntry::assistant(reply.clone()),
                ],
            )
            .await?;

        info!(
            user_id = %user_id,
            channel_id = %turn.channel_id,
            output_tokens = response.usage.output_tokens,
            "coach turn completed"
        );

        Ok(ChatReply {
            ai_response: reply,
            loop_detected: false,
        })
    }
}
