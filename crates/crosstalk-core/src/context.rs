//! Upstream context construction.
//!
//! Builds the normalized message list sent to a provider: the assistant
//! persona prompt, a bounded suffix of the caller-supplied history, then
//! the current user message. History beyond the window never reaches the
//! wire.

use crosstalk_types::chat::{ConversationTurn, Message, MessageRole};

/// How many trailing history turns are included in upstream context.
pub const MAX_CONTEXT_TURNS: usize = 6;

/// Persona and behavioral guidelines prepended to every conversation.
const SYSTEM_PROMPT: &str = "You are Crosstalk, a helpful and friendly assistant. \
Answer clearly and concisely, stay on the user's topic, and use plain language. \
If you are unsure about something, say so instead of guessing. \
Politely decline requests that are harmful or unsafe.";

/// Build the outbound message list for one request.
///
/// Only the last [`MAX_CONTEXT_TURNS`] history turns are included, in their
/// original order, between the system prompt and the current message.
pub fn build_context(history: &[ConversationTurn], message: &str) -> Vec<Message> {
    let recent_start = history.len().saturating_sub(MAX_CONTEXT_TURNS);

    let mut messages = Vec::with_capacity(2 + history.len().min(MAX_CONTEXT_TURNS));
    messages.push(Message::new(MessageRole::System, SYSTEM_PROMPT));

    for turn in &history[recent_start..] {
        messages.push(Message::new(turn.role, turn.content.clone()));
    }

    messages.push(Message::new(MessageRole::User, message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn turn(role: MessageRole, content: &str) -> ConversationTurn {
        ConversationTurn {
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_empty_history_yields_system_and_message() {
        let messages = build_context(&[], "hello");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[1].content, "hello");
    }

    #[test]
    fn test_short_history_is_kept_in_order() {
        let history = vec![
            turn(MessageRole::User, "first"),
            turn(MessageRole::Assistant, "second"),
        ];
        let messages = build_context(&history, "third");
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].content, "first");
        assert_eq!(messages[2].content, "second");
        assert_eq!(messages[3].content, "third");
    }

    #[test]
    fn test_long_history_truncates_to_last_six() {
        let history: Vec<ConversationTurn> = (0..9)
            .map(|i| turn(MessageRole::User, &format!("turn-{i}")))
            .collect();

        let messages = build_context(&history, "current");

        // system + 6 turns + current
        assert_eq!(messages.len(), 8);
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        // The 7th-from-last turn ("turn-2") must never appear.
        assert!(!contents.contains(&"turn-2"));
        assert_eq!(messages[1].content, "turn-3");
        assert_eq!(messages[6].content, "turn-8");
        assert_eq!(messages[7].content, "current");
    }

    #[test]
    fn test_history_roles_are_preserved() {
        let history = vec![
            turn(MessageRole::User, "question"),
            turn(MessageRole::Assistant, "answer"),
        ];
        let messages = build_context(&history, "follow-up");
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[2].role, MessageRole::Assistant);
    }
}
