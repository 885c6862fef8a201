//! Failover orchestrator.
//!
//! Routes one chat request through admission control, validation, and the
//! priority-ordered provider list until a provider produces an acceptable
//! reply or the list is exhausted. Providers are tried strictly
//! sequentially -- the first success short-circuits the rest.
//!
//! Owns no per-request state; each invocation is independent apart from
//! shared reads of the registry and the limiter.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crosstalk_types::chat::{ChatReply, ChatRequest, ProviderFailure, MAX_MESSAGE_CHARS, MIN_REPLY_CHARS};
use crosstalk_types::error::RelayError;

use crate::context::build_context;
use crate::limiter::RateLimiter;
use crate::registry::ProviderRegistry;

/// The relay: admission check, validation, then provider failover.
pub struct ChatRelay {
    registry: Arc<ProviderRegistry>,
    limiter: Arc<RateLimiter>,
}

impl ChatRelay {
    pub fn new(registry: Arc<ProviderRegistry>, limiter: Arc<RateLimiter>) -> Self {
        Self { registry, limiter }
    }

    /// Handle one chat request from `client`.
    ///
    /// `client` is the caller's network address, used only for admission
    /// control. No provider is contacted when admission or validation
    /// fails, or when no provider is eligible.
    pub async fn handle(
        &self,
        client: &str,
        request: &ChatRequest,
    ) -> Result<ChatReply, RelayError> {
        let started = Instant::now();

        if !self.limiter.admit(client) {
            return Err(RelayError::RateLimited);
        }

        let message = validate_message(request)?;

        let eligible = self.registry.eligible();
        if eligible.is_empty() {
            tracing::error!("no eligible providers configured");
            return Err(RelayError::NoProviders);
        }

        let context = build_context(&request.history, message);
        let mut failures: Vec<ProviderFailure> = Vec::new();

        for entry in eligible {
            let name = entry.config.name.as_str();
            tracing::debug!(provider = name, priority = entry.config.priority, "trying provider");

            let attempt_started = Instant::now();
            match entry.adapter.generate(&context).await {
                Ok(text) if text.chars().count() > MIN_REPLY_CHARS => {
                    tracing::info!(
                        provider = name,
                        latency_ms = attempt_started.elapsed().as_millis() as u64,
                        attempts = failures.len() + 1,
                        "provider succeeded"
                    );
                    return Ok(ChatReply {
                        response: text,
                        provider: name.to_string(),
                        model: entry.config.reported_model().to_string(),
                        timestamp: Utc::now(),
                        processing_time_ms: started.elapsed().as_millis() as u64,
                    });
                }
                Ok(text) => {
                    // Quality floor: a too-short reply fails over even
                    // though no transport error occurred.
                    let message = format!(
                        "reply below quality floor ({} chars)",
                        text.chars().count()
                    );
                    tracing::warn!(provider = name, %message, "provider produced unusable reply");
                    failures.push(ProviderFailure {
                        provider: name.to_string(),
                        message,
                    });
                }
                Err(err) => {
                    tracing::warn!(provider = name, error = %err, "provider failed, trying next");
                    failures.push(ProviderFailure {
                        provider: name.to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }

        let attempted: Vec<String> = failures.into_iter().map(|f| f.provider).collect();
        tracing::error!(providers = ?attempted, "all providers failed");
        Err(RelayError::AllProvidersFailed { attempted })
    }
}

/// Validate the inbound message: present, non-empty after trimming, and
/// within the length limit. Runs before any provider is contacted.
fn validate_message(request: &ChatRequest) -> Result<&str, RelayError> {
    let message = request
        .message
        .as_deref()
        .ok_or_else(|| RelayError::InvalidMessage("Message is required.".to_string()))?;

    if message.trim().is_empty() {
        return Err(RelayError::InvalidMessage(
            "Message must not be empty.".to_string(),
        ));
    }

    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(RelayError::InvalidMessage(format!(
            "Message exceeds the {MAX_MESSAGE_CHARS} character limit."
        )));
    }

    Ok(message)
}
