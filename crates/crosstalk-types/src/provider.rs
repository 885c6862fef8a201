//! Provider configuration types.
//!
//! A [`ProviderConfig`] describes one upstream text-generation endpoint:
//! where it lives, how to authenticate, which request/response schema
//! family it speaks, and where it sits in the failover order.
//!
//! The credential is wrapped in [`secrecy::SecretString`] so it never
//! appears in `Debug` output or tracing logs.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Minimum credential length (exclusive) for a provider to be eligible.
const MIN_CREDENTIAL_LEN: usize = 10;

/// Credential values that are obviously unset template placeholders.
const PLACEHOLDER_CREDENTIALS: &[&str] = &["your-api-key-here", "changeme", "replace-me"];

/// The request/response schema family a provider speaks.
///
/// A closed set: new providers are expected to reuse one of these two
/// shapes rather than introduce a third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// OpenAI-style `/chat/completions` message-list schema.
    ChatCompletion,
    /// Bare `inputs` / `generated_text` schema (HF-inference style).
    TextGeneration,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::ChatCompletion => write!(f, "chat_completion"),
            ProviderKind::TextGeneration => write!(f, "text_generation"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat_completion" => Ok(ProviderKind::ChatCompletion),
            "text_generation" => Ok(ProviderKind::TextGeneration),
            other => Err(format!("invalid provider kind: '{other}'")),
        }
    }
}

/// Configuration for one upstream provider.
///
/// Built once at startup and immutable thereafter.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Human-readable name (e.g., "openai", "mistral-small").
    pub name: String,
    /// Schema family this provider speaks.
    pub kind: ProviderKind,
    /// Endpoint base URL.
    pub base_url: String,
    /// API credential. Never logged, never serialized.
    pub credential: SecretString,
    /// Model identifier, where the schema carries one in the payload.
    pub model: Option<String>,
    /// Failover priority; lower is tried first.
    pub priority: u32,
    /// Maximum response-token budget for this provider.
    pub max_tokens: Option<u32>,
    /// Operator-facing description.
    pub description: String,
}

impl ProviderConfig {
    /// Whether this provider's credential qualifies it for selection.
    ///
    /// A provider with an empty, too-short, or template-placeholder
    /// credential is never eligible.
    pub fn has_valid_credential(&self) -> bool {
        let credential = self.credential.expose_secret().trim();
        if credential.len() <= MIN_CREDENTIAL_LEN {
            return false;
        }
        !PLACEHOLDER_CREDENTIALS
            .iter()
            .any(|p| credential.eq_ignore_ascii_case(p))
    }

    /// The model identifier to report in replies.
    ///
    /// Providers without a configured model (the model can be baked into
    /// the endpoint URL) report their provider name instead.
    pub fn reported_model(&self) -> &str {
        self.model.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_credential(credential: &str) -> ProviderConfig {
        ProviderConfig {
            name: "primary".to_string(),
            kind: ProviderKind::ChatCompletion,
            base_url: "https://api.example.com/v1".to_string(),
            credential: SecretString::from(credential),
            model: Some("relay-large".to_string()),
            priority: 1,
            max_tokens: Some(2000),
            description: "primary chat endpoint".to_string(),
        }
    }

    #[test]
    fn test_provider_kind_roundtrip() {
        for kind in [ProviderKind::ChatCompletion, ProviderKind::TextGeneration] {
            let s = kind.to_string();
            let parsed: ProviderKind = s.parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_empty_credential_is_invalid() {
        assert!(!config_with_credential("").has_valid_credential());
        assert!(!config_with_credential("   ").has_valid_credential());
    }

    #[test]
    fn test_short_credential_is_invalid() {
        // Exactly 10 characters: still too short (must be strictly longer)
        assert!(!config_with_credential("0123456789").has_valid_credential());
    }

    #[test]
    fn test_placeholder_credential_is_invalid() {
        assert!(!config_with_credential("your-api-key-here").has_valid_credential());
        assert!(!config_with_credential("YOUR-API-KEY-HERE").has_valid_credential());
    }

    #[test]
    fn test_real_credential_is_valid() {
        assert!(config_with_credential("sk-live-0123456789abcdef").has_valid_credential());
    }

    #[test]
    fn test_debug_never_prints_credential() {
        let config = config_with_credential("sk-live-0123456789abcdef");
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-live-0123456789abcdef"));
    }

    #[test]
    fn test_reported_model_falls_back_to_name() {
        let mut config = config_with_credential("sk-live-0123456789abcdef");
        assert_eq!(config.reported_model(), "relay-large");
        config.model = None;
        assert_eq!(config.reported_model(), "primary");
    }
}
