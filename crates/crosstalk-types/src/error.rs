//! Error taxonomy for the relay.
//!
//! Two layers:
//! - [`ProviderError`]: one upstream provider's failure. Always caught by
//!   the failover loop and converted into a continuation; never surfaced
//!   raw to the external caller.
//! - [`RelayError`]: what a whole relayed request can fail with. This is
//!   the only error type that crosses the HTTP boundary.

use thiserror::Error;

/// Failure of a single upstream provider call.
///
/// The three variants are distinct diagnostic categories: an API-level
/// rejection (non-success status with a parseable message), a transport
/// fault (connect/timeout/read), and a response that arrived but did not
/// match the provider's schema.
///
/// Display strings never contain credentials -- only upstream status and
/// body text.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Non-success HTTP status with an extracted upstream message.
    #[error("{provider} API error: {message}")]
    Api { provider: String, message: String },

    /// The request never completed: connect failure, timeout, or a body
    /// read error.
    #[error("{provider} request failed: {message}")]
    Transport { provider: String, message: String },

    /// A 2xx response whose body did not match the expected schema.
    #[error("Invalid response format from {provider}")]
    Format { provider: String },
}

impl ProviderError {
    /// Name of the provider this error came from.
    pub fn provider(&self) -> &str {
        match self {
            ProviderError::Api { provider, .. }
            | ProviderError::Transport { provider, .. }
            | ProviderError::Format { provider } => provider,
        }
    }
}

/// Failure of a whole relayed chat request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The caller exceeded the per-client admission window.
    #[error("Too many requests. Please wait a moment before trying again.")]
    RateLimited,

    /// The request is malformed; the caller must fix it. Never retried.
    #[error("{0}")]
    InvalidMessage(String),

    /// No provider has a usable credential. Operator-facing.
    #[error("No providers are configured. Please contact the service operator.")]
    NoProviders,

    /// Every eligible provider was attempted and none produced an
    /// acceptable reply. Carries provider names only; upstream error
    /// detail stays in the logs.
    #[error("All providers are currently unavailable. Please try again later.")]
    AllProvidersFailed { attempted: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ProviderError::Api {
            provider: "primary".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "primary API error: boom");
    }

    #[test]
    fn test_format_error_display() {
        let err = ProviderError::Format {
            provider: "fallback".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid response format from fallback");
    }

    #[test]
    fn test_provider_accessor() {
        let err = ProviderError::Transport {
            provider: "primary".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(err.provider(), "primary");
    }

    #[test]
    fn test_all_failed_carries_names_not_details() {
        let err = RelayError::AllProvidersFailed {
            attempted: vec!["primary".to_string(), "fallback".to_string()],
        };
        // The display string is generic; attempted names travel separately.
        assert!(!err.to_string().contains("primary"));
        assert!(err.to_string().contains("try again later"));
    }
}
