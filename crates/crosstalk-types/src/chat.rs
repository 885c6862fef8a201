//! Conversation and relay request/reply types.
//!
//! These model the one request/response contract the relay exposes:
//! a current user message plus caller-owned history in, a normalized
//! reply (or a classified failure) out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest message the relay accepts, in characters.
pub const MAX_MESSAGE_CHARS: usize = 10_000;

/// Minimum reply length (in characters) for a provider response to count
/// as a success. Shorter non-error outputs trigger failover.
pub const MIN_REPLY_CHARS: usize = 10;

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(MessageRole::System),
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single normalized message sent upstream to a provider.
///
/// This is the unit of the outbound payload; it carries no timestamp
/// because providers do not receive one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// One turn of caller-supplied conversation history.
///
/// Owned by the caller; the relay only reads a bounded suffix of these
/// when building upstream context and never persists them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Inbound chat request: the current message plus prior turns.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The current user message. `None` when the field was absent from
    /// the request body; rejected during validation.
    pub message: Option<String>,
    /// Prior conversation turns, oldest first. May be empty.
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

/// Normalized successful result of one relayed chat request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    /// The provider's response text.
    pub response: String,
    /// Name of the provider that produced the response.
    pub provider: String,
    /// Model identifier the winning provider used.
    pub model: String,
    /// When the reply was produced (RFC 3339 on the wire).
    pub timestamp: DateTime<Utc>,
    /// Elapsed time from admission to reply, in milliseconds.
    pub processing_time_ms: u64,
}

/// One provider's failure during a failover pass.
///
/// Collected in attempt order for operational logging; never included
/// in the response body.
#[derive(Debug, Clone)]
pub struct ProviderFailure {
    pub provider: String,
    pub message: String,
}
