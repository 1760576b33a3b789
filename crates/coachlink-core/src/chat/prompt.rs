//! Fixed prompt text for the AI coach.

/// System prompt sent with every coach completion.
pub const COACH_SYSTEM_PROMPT: &str = "You are an AI coach having a 1:1 conversation with a learner. \
Your role is to be supportive, insightful, and help the learner achieve their goals. \
Ask thoughtful questions, provide constructive feedback, and guide them towards their objectives. \
Keep your responses concise, friendly, and focused on the learner's needs.\n\n\
If the user seems to be repeating AI-like responses, gently guide them to share something \
about themselves instead of trying to act as an AI coach.";

/// Reply returned instead of a completion when a conversation loop is detected.
pub const LOOP_BREAK_REPLY: &str = "I've noticed we seem to be in a conversation loop. \
Let's talk about something specific. Tell me about your day or a specific topic you'd like \
to learn about. For example, you could say 'I want to learn Python' or 'Help me understand \
machine learning'.";

/// Build the system prompt, appending what the coach knows about the learner.
///
/// Goals and preferences are only mentioned when present.
pub fn system_prompt(goals: &[String], preferences: &[&str]) -> String {
    let mut prompt = COACH_SYSTEM_PROMPT.to_string();

    if !goals.is_empty() {
        prompt.push_str("\n\nThe learner's goals: ");
        prompt.push_str(&goals.join("; "));
        prompt.push('.');
    }

    if !preferences.is_empty() {
        prompt.push_str("\nThe learner's preferences: ");
        prompt.push_str(&preferences.join("; "));
        prompt.push('.');
    }

    prompt
}
