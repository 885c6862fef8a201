//! Provider adapter implementations.
//!
//! Contains the concrete implementations of the
//! [`TextProvider`](crosstalk_core::provider::TextProvider) trait defined in
//! `crosstalk-core`, one per schema family, plus a factory
//! ([`build_adapter`]) that constructs the right adapter from a
//! [`ProviderConfig`] and a registry builder ([`build_registry`]).

pub mod chat_completion;
pub mod text_generation;

use std::time::Duration;

use crosstalk_core::box_provider::BoxTextProvider;
use crosstalk_core::registry::{ProviderRegistry, RegisteredProvider};
use crosstalk_types::provider::{ProviderConfig, ProviderKind};

pub use chat_completion::ChatCompletionProvider;
pub use text_generation::TextGenerationProvider;

/// Upper bound on any single upstream request, for both adapter kinds.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User-agent sent with every upstream request.
pub const USER_AGENT: &str = concat!("crosstalk/", env!("CARGO_PKG_VERSION"));

/// Construct the adapter matching a provider's schema family.
pub fn build_adapter(config: &ProviderConfig) -> BoxTextProvider {
    match config.kind {
        ProviderKind::ChatCompletion => BoxTextProvider::new(ChatCompletionProvider::new(config)),
        ProviderKind::TextGeneration => BoxTextProvider::new(TextGenerationProvider::new(config)),
    }
}

/// Build the provider registry from loaded configuration.
///
/// Every configured provider gets an adapter, eligible or not; the
/// registry's credential filter decides which are actually selectable.
pub fn build_registry(configs: Vec<ProviderConfig>) -> ProviderRegistry {
    let providers = configs
        .into_iter()
        .map(|config| {
            if !config.has_valid_credential() {
                tracing::warn!(
                    provider = %config.name,
                    "provider has no usable credential and will not be selected"
                );
            }
            let adapter = build_adapter(&config);
            RegisteredProvider::new(config, adapter)
        })
        .collect();
    ProviderRegistry::new(providers)
}
