//! Relay configuration loading.
//!
//! Reads `crosstalk.toml` and deserializes it into [`RelayConfig`].
//! Credentials are never stored in the file: each provider entry names an
//! environment variable (`api_key_env`) that is resolved at load time. A
//! missing variable leaves the credential empty, which makes the provider
//! ineligible rather than failing startup -- operators can bring providers
//! online one credential at a time.

use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;

use anyhow::Context;
use crosstalk_types::provider::{ProviderConfig, ProviderKind};

/// Default listen address when the config file does not set one.
fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

/// Top-level relay configuration file shape.
#[derive(Debug, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default)]
    pub providers: Vec<ProviderEntry>,
}

/// One `[[providers]]` table in the config file.
#[derive(Debug, Deserialize)]
pub struct ProviderEntry {
    pub name: String,
    pub kind: ProviderKind,
    pub base_url: String,
    /// Name of the environment variable holding the API credential.
    pub api_key_env: String,
    pub model: Option<String>,
    pub priority: u32,
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub description: String,
}

/// Load and parse the relay configuration file.
///
/// Unlike optional per-user settings, this file is required: the relay is
/// useless without at least the provider list.
pub async fn load_config(path: &Path) -> anyhow::Result<RelayConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Resolve config entries into provider configurations, reading credentials
/// from the process environment.
pub fn resolve_providers(entries: Vec<ProviderEntry>) -> Vec<ProviderConfig> {
    resolve_providers_with(entries, |name| std::env::var(name).ok())
}

/// Resolve config entries with an injectable credential lookup.
///
/// Split out from [`resolve_providers`] so tests can supply credentials
/// without mutating the process environment.
pub fn resolve_providers_with(
    entries: Vec<ProviderEntry>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Vec<ProviderConfig> {
    entries
        .into_iter()
        .map(|entry| {
            let credential = lookup(&entry.api_key_env).unwrap_or_default();
            if credential.is_empty() {
                tracing::warn!(
                    provider = %entry.name,
                    env = %entry.api_key_env,
                    "credential environment variable is not set"
                );
            }
            ProviderConfig {
                name: entry.name,
                kind: entry.kind,
                base_url: entry.base_url,
                credential: SecretString::from(credential),
                model: entry.model,
                priority: entry.priority,
                max_tokens: entry.max_tokens,
                description: entry.description,
            }
        })
        .collect()
}
