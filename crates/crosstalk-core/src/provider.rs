//! TextProvider trait definition.
//!
//! This is the core abstraction that both provider adapters implement.
//! Uses RPITIT for `generate`; the object-safe wrapper for heterogeneous
//! registries lives in [`crate::box_provider`].

use crosstalk_types::chat::Message;
use crosstalk_types::error::ProviderError;

/// Trait for upstream text-generation providers.
///
/// Implementations live in crosstalk-infra (one per schema family:
/// chat-completion style and generic text-generation style). A provider
/// receives the already-bounded normalized conversation and returns plain
/// reply text; everything schema-specific stays behind this seam.
pub trait TextProvider: Send + Sync {
    /// Provider name as configured (e.g., "openai").
    fn name(&self) -> &str;

    /// Model identifier to report for replies produced by this provider.
    fn model(&self) -> &str;

    /// Send the conversation upstream and return the generated text.
    ///
    /// Any transport fault, non-success status, or unexpected response
    /// shape is returned as a classified [`ProviderError`]; the failover
    /// loop decides what happens next.
    fn generate(
        &self,
        messages: &[Message],
    ) -> impl std::future::Future<Output = Result<String, ProviderError>> + Send;
}
