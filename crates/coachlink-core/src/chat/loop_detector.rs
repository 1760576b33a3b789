//! Conversation loop detection.
//!
//! Learners sometimes start parroting the coach ("I'm here to help", "let's
//! focus on ..."), and the two sides end up echoing each other. `LoopDetector`
//! scans the tail of the history for coach-style phrases repeated in the
//! learner's own messages.

use coachlink_types::llm::MessageRole;
use coachlink_types::profile::ConversationEntry;

/// Coach-style phrases that signal the learner is echoing the assistant.
pub const LOOP_PHRASES: &[&str] = &[
    "AI coach",
    "support you",
    "dive into",
    "let's focus",
    "break the cycle",
    "What specific",
    "what you're hoping",
    "I'm here to help",
];

/// Result of checking a conversation tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopCheckResult {
    /// No loop, or not enough history to judge.
    Ok,
    /// A phrase repeated across the learner's recent messages.
    LoopDetected { phrase: String, occurrences: usize },
}

/// Detects learner messages that keep repeating coach phrases.
#[derive(Debug, Clone)]
pub struct LoopDetector {
    window: usize,
    min_entries: usize,
    threshold: usize,
    phrases: Vec<String>,
}

impl LoopDetector {
    /// Detector over the last 6 entries, judging once 4 exist, flagging a
    /// phrase seen in 2 learner messages.
    pub fn new() -> Self {
        Self {
            window: 6,
            min_entries: 4,
            threshold: 2,
            phrases: LOOP_PHRASES.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// Check the tail of a conversation history.
    ///
    /// Matching is case-insensitive substring search over user entries only.
    pub fn check(&self, history: &[ConversationEntry]) -> LoopCheckResult {
        let start = history.len().saturating_sub(self.window);
        let recent = &history[start..];

        if recent.len() < self.min_entries {
            return LoopCheckResult::Ok;
        }

        let user_messages: Vec<String> = recent
            .iter()
            .filter(|e| e.role == MessageRole::User)
            .map(|e| e.content.to_lowercase())
            .collect();

        for phrase in &self.phrases {
            let occurrences = user_messages
                .iter()
                .filter(|m| m.contains(phrase.as_str()))
                .count();
            if occurrences >= self.threshold {
                return LoopCheckResult::LoopDetected {
                    phrase: phrase.clone(),
                    occurrences,
                };
            }
        }

        LoopCheckResult::Ok
    }
}

impl Default for LoopDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convo(pairs: &[(&str, &str)]) -> Vec<ConversationEntry> {
        pairs
            .iter()
            .flat_map(|(u, a)| [ConversationEntry::user(*u), ConversationEntry::assistant(*a)])
            .collect()
    }

    #[test]
    fn short_history_is_never_a_loop() {
        let detector = LoopDetector::new();
        let history = vec![
            ConversationEntry::user("I'm here to help"),
            ConversationEntry::user("I'm here to help"),
            ConversationEntry::user("I'm here to help"),
        ];
        assert_eq!(detector.check(&history), LoopCheckResult::Ok);
    }

    #[test]
    fn repeated_phrase_in_user_messages_is_a_loop() {
        let detector = LoopDetector::new();
        let history = convo(&[
            ("As your AI coach I want to support you", "Thanks! Tell me more."),
            ("I'm here to support you on this journey", "What are you working on?"),
        ]);
        match detector.check(&history) {
            LoopCheckResult::LoopDetected { phrase, occurrences } => {
                assert_eq!(phrase, "support you");
                assert_eq!(occurrences, 2);
            }
            other => panic!("expected loop, got {other:?}"),
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let detector = LoopDetector::new();
        let history = convo(&[
            ("LET'S FOCUS on you", "ok"),
            ("let's focus again", "ok"),
        ]);
        assert!(matches!(
            detector.check(&history),
            LoopCheckResult::LoopDetected { .. }
        ));
    }

    #[test]
    fn assistant_phrases_do_not_count() {
        let detector = LoopDetector::new();
        let history = convo(&[
            ("I want to learn Rust", "I'm here to help! What specific topic?"),
            ("Ownership confuses me", "I'm here to help. What specific part?"),
        ]);
        assert_eq!(detector.check(&history), LoopCheckResult::Ok);
    }

    #[test]
    fn only_recent_window_is_considered() {
        let detector = LoopDetector::new();
        let mut history = convo(&[
            ("let me dive into this", "sure"),
            ("let's dive into it", "sure"),
        ]);
        history.extend(convo(&[
            ("I like Python", "great"),
            ("and data science", "nice"),
            ("maybe ML too", "cool"),
        ]));
        assert_eq!(detector.check(&history), LoopCheckResult::Ok);
    }
}
