//! ChatCompletionProvider -- concrete [`TextProvider`] for OpenAI-style APIs.
//!
//! Sends authenticated POSTs to `{base_url}/chat/completions` with the full
//! normalized message list and extracts the first choice's message content.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in error messages.

use secrecy::{ExposeSecret, SecretString};

use crosstalk_core::provider::TextProvider;
use crosstalk_types::chat::Message;
use crosstalk_types::error::ProviderError;
use crosstalk_types::provider::ProviderConfig;

use super::super::{REQUEST_TIMEOUT, USER_AGENT};
use super::types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, WireMessage};

/// Response-token budget when the provider config does not set one.
const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Fixed sampling temperature for relayed requests.
const TEMPERATURE: f64 = 0.7;

/// Chat-completion style provider adapter.
///
/// # API Key Security
///
/// Intentionally does NOT derive Debug, so the credential inside cannot
/// leak through debug formatting. The key is only exposed when building
/// the Authorization header.
pub struct ChatCompletionProvider {
    client: reqwest::Client,
    name: String,
    base_url: String,
    api_key: SecretString,
    model: String,
    max_tokens: u32,
}

impl ChatCompletionProvider {
    /// Build an adapter from a provider configuration.
    pub fn new(config: &ProviderConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            name: config.name.clone(),
            base_url: config.base_url.clone(),
            api_key: config.credential.clone(),
            model: config.reported_model().to_string(),
            max_tokens: config.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        }
    }

    /// Full chat-completions URL for this provider.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn transport_error(&self, err: reqwest::Error) -> ProviderError {
        ProviderError::Transport {
            provider: self.name.clone(),
            // reqwest errors carry the URL and cause, never the headers.
            message: err.to_string(),
        }
    }
}

impl TextProvider for ChatCompletionProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, messages: &[Message]) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            max_tokens: self.max_tokens,
            temperature: TEMPERATURE,
            stream: false,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = extract_api_error(status, &text);
            tracing::debug!(provider = %self.name, status = %status, "upstream rejected request");
            return Err(ProviderError::Api {
                provider: self.name.clone(),
                message,
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&text).map_err(|_| ProviderError::Format {
                provider: self.name.clone(),
            })?;

        // Contract: at least one choice with non-empty nested message content.
        parsed
            .choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .filter(|content| !content.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ProviderError::Format {
                provider: self.name.clone(),
            })
    }
}

/// Extract a human-readable message from a non-success response.
///
/// Tries the nested JSON error message first, then the raw body text,
/// then falls back to the HTTP status code.
fn extract_api_error(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = parsed.error.and_then(|e| e.message) {
            if !message.is_empty() {
                return message;
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    format!("HTTP {}", status.as_u16())
}
