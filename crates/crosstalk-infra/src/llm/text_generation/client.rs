//! TextGenerationProvider -- concrete [`TextProvider`] for bare
//! `inputs` / `generated_text` endpoints.
//!
//! These endpoints take a single prompt string rather than a message list,
//! so only the current user message goes on the wire; history and persona
//! stay local. Auth, user-agent, and timeout discipline match the
//! chat-completion adapter.

use secrecy::{ExposeSecret, SecretString};

use crosstalk_core::provider::TextProvider;
use crosstalk_types::chat::{Message, MessageRole};
use crosstalk_types::error::ProviderError;
use crosstalk_types::provider::ProviderConfig;

use super::super::{REQUEST_TIMEOUT, USER_AGENT};
use super::types::{GenerationParameters, TextGenerationRequest, TextGenerationResponse};

/// Maximum generated length for text-generation endpoints.
const MAX_NEW_TOKENS: u32 = 500;

/// Fixed sampling temperature for relayed requests.
const TEMPERATURE: f64 = 0.7;

/// Penalty discouraging verbatim repetition.
const REPETITION_PENALTY: f64 = 1.1;

/// Generic text-generation provider adapter.
///
/// # API Key Security
///
/// Intentionally does NOT derive Debug; the credential is only exposed
/// when building the Authorization header.
pub struct TextGenerationProvider {
    client: reqwest::Client,
    name: String,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl TextGenerationProvider {
    /// Build an adapter from a provider configuration.
    ///
    /// The endpoint URL is used as-is: text-generation endpoints encode
    /// the model in the URL path rather than the payload.
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
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ProviderError {
        ProviderError::Transport {
            provider: self.name.clone(),
            message: err.to_string(),
        }
    }
}

impl TextProvider for TextGenerationProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, messages: &[Message]) -> Result<String, ProviderError> {
        // The current user message is always the last user entry of the
        // normalized conversation.
        let inputs = messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.clone())
            .unwrap_or_default();

        let body = TextGenerationRequest {
            inputs,
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                do_sample: true,
                return_full_text: false,
                repetition_penalty: REPETITION_PENALTY,
            },
        };

        let response = self
            .client
            .post(&self.base_url)
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
            let trimmed = text.trim();
            let message = if trimmed.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                trimmed.to_string()
            };
            tracing::debug!(provider = %self.name, status = %status, "upstream rejected request");
            return Err(ProviderError::Api {
                provider: self.name.clone(),
                message,
            });
        }

        let parsed: TextGenerationResponse =
            serde_json::from_str(&text).map_err(|_| ProviderError::Format {
                provider: self.name.clone(),
            })?;

        let chunk = parsed.into_first().ok_or_else(|| ProviderError::Format {
            provider: self.name.clone(),
        })?;

        if let Some(message) = chunk.error {
            return Err(ProviderError::Api {
                provider: self.name.clone(),
                message,
            });
        }

        chunk
            .generated_text
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ProviderError::Format {
                provider: self.name.clone(),
            })
    }
}
