//! Provider registry: eligibility filtering and priority ordering.
//!
//! The registry is built once at startup from configuration and is
//! read-only thereafter. Selection is a pure read: filter out providers
//! without a usable credential, then order by ascending priority.

use crosstalk_types::provider::ProviderConfig;

use crate::box_provider::BoxTextProvider;

/// One configured provider paired with its adapter instance.
pub struct RegisteredProvider {
    pub config: ProviderConfig,
    pub adapter: BoxTextProvider,
}

impl RegisteredProvider {
    pub fn new(config: ProviderConfig, adapter: BoxTextProvider) -> Self {
        Self { config, adapter }
    }
}

/// Registry of configured providers, in configuration order.
pub struct ProviderRegistry {
    providers: Vec<RegisteredProvider>,
}

impl ProviderRegistry {
    /// Build a registry from configured providers.
    ///
    /// Ineligible providers are kept (they count toward [`total`]) but are
    /// never returned by [`eligible`].
    ///
    /// [`total`]: ProviderRegistry::total
    /// [`eligible`]: ProviderRegistry::eligible
    pub fn new(providers: Vec<RegisteredProvider>) -> Self {
        Self { providers }
    }

    /// Providers with a valid credential, sorted ascending by priority.
    ///
    /// The sort is stable: priority ties keep configuration order. An
    /// empty result is not an error here -- the orchestrator turns it
    /// into a "no providers configured" failure.
    pub fn eligible(&self) -> Vec<&RegisteredProvider> {
        let mut eligible: Vec<&RegisteredProvider> = self
            .providers
            .iter()
            .filter(|p| p.config.has_valid_credential())
            .collect();
        eligible.sort_by_key(|p| p.config.priority);
        eligible
    }

    /// How many configured providers are currently eligible.
    ///
    /// Diagnostic read for the health surface.
    pub fn eligible_count(&self) -> usize {
        self.providers
            .iter()
            .filter(|p| p.config.has_valid_credential())
            .count()
    }

    /// Total number of configured providers, eligible or not.
    pub fn total(&self) -> usize {
        self.providers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::TextProvider;
    use crosstalk_types::chat::Message;
    use crosstalk_types::error::ProviderError;
    use crosstalk_types::provider::ProviderKind;
    use secrecy::SecretString;

    struct StubProvider {
        name: String,
    }

    impl TextProvider for StubProvider {
        fn name(&self) -> &str {
            &self.name
        }

        fn model(&self) -> &str {
            "stub-model"
        }

        async fn generate(&self, _messages: &[Message]) -> Result<String, ProviderError> {
            Ok(format!("stub reply from {}", self.name))
        }
    }

    fn registered(name: &str, priority: u32, credential: &str) -> RegisteredProvider {
        RegisteredProvider::new(
            ProviderConfig {
                name: name.to_string(),
                kind: ProviderKind::ChatCompletion,
                base_url: "https://api.example.com/v1".to_string(),
                credential: SecretString::from(credential),
                model: None,
                priority,
                max_tokens: None,
                description: String::new(),
            },
            BoxTextProvider::new(StubProvider {
                name: name.to_string(),
            }),
        )
    }

    #[test]
    fn test_eligible_filters_invalid_credentials() {
        let registry = ProviderRegistry::new(vec![
            registered("valid", 1, "sk-live-0123456789"),
            registered("empty", 2, ""),
            registered("short", 3, "sk-123"),
        ]);

        let eligible = registry.eligible();
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].config.name, "valid");
    }

    #[test]
    fn test_eligible_sorts_by_priority() {
        let registry = ProviderRegistry::new(vec![
            registered("third", 30, "sk-live-0123456789"),
            registered("first", 1, "sk-live-0123456789"),
            registered("second", 2, "sk-live-0123456789"),
        ]);

        let names: Vec<&str> = registry
            .eligible()
            .iter()
            .map(|p| p.config.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_priority_ties_keep_configuration_order() {
        let registry = ProviderRegistry::new(vec![
            registered("a", 1, "sk-live-0123456789"),
            registered("b", 1, "sk-live-0123456789"),
            registered("c", 1, "sk-live-0123456789"),
        ]);

        let names: Vec<&str> = registry
            .eligible()
            .iter()
            .map(|p| p.config.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_eligible_is_not_an_error() {
        let registry = ProviderRegistry::new(vec![registered("unset", 1, "")]);
        assert!(registry.eligible().is_empty());
        assert_eq!(registry.eligible_count(), 0);
        assert_eq!(registry.total(), 1);
    }

    #[test]
    fn test_diagnostic_counts() {
        let registry = ProviderRegistry::new(vec![
            registered("valid", 1, "sk-live-0123456789"),
            registered("unset", 2, ""),
        ]);
        assert_eq!(registry.eligible_count(), 1);
        assert_eq!(registry.total(), 2);
    }
}
