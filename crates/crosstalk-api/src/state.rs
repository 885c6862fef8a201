//! Application state wiring the relay together.
//!
//! AppState holds the shared components built once at startup: the
//! immutable provider registry and the injectable rate limiter, composed
//! into the failover relay. Handlers clone the state cheaply; everything
//! inside is behind an `Arc`.

use std::sync::Arc;

use crosstalk_core::limiter::RateLimiter;
use crosstalk_core::registry::ProviderRegistry;
use crosstalk_core::relay::ChatRelay;
use crosstalk_infra::llm::build_registry;
use crosstalk_types::provider::ProviderConfig;

/// Shared application state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
    pub registry: Arc<ProviderRegistry>,
}

impl AppState {
    /// Build the state from resolved provider configurations.
    pub fn new(providers: Vec<ProviderConfig>) -> Self {
        let registry = Arc::new(build_registry(providers));
        tracing::info!(
            eligible = registry.eligible_count(),
            total = registry.total(),
            "provider registry initialized"
        );

        let limiter = Arc::new(RateLimiter::new());
        let relay = Arc::new(ChatRelay::new(Arc::clone(&registry), limiter));

        Self { relay, registry }
    }
}
