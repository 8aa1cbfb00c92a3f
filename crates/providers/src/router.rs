//! Narrative router — selects the correct provider based on config.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::openai_compat::OpenAiCompatNarrative;
use crate::static_stub::StaticNarrative;
use shelfwatch_core::narrative::NarrativeProvider;

/// Routes narrative requests to the configured provider.
pub struct NarrativeRouter {
    providers: HashMap<String, Arc<dyn NarrativeProvider>>,
    default_provider: String,
}

impl NarrativeRouter {
    /// Create a new router with a default provider name.
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider.into(),
        }
    }

    /// Register a provider.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn NarrativeProvider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Get the default provider.
    pub fn default(&self) -> Option<Arc<dyn NarrativeProvider>> {
        self.providers.get(&self.default_provider).cloned()
    }

    /// Get a specific provider by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn NarrativeProvider>> {
        self.providers.get(name).cloned()
    }

    /// List all registered provider names.
    pub fn list(&self) -> Vec<&str> {
        self.providers.keys().map(|s| s.as_str()).collect()
    }
}

/// Build providers from configuration.
pub fn build_from_config(config: &shelfwatch_config::AppConfig) -> NarrativeRouter {
    let mut router = NarrativeRouter::new(&config.default_provider);
    let timeout = Duration::from_secs(config.narrative.timeout_secs);

    for (name, provider_config) in &config.providers {
        let api_key = provider_config
            .api_key
            .clone()
            .or_else(|| config.api_key.clone())
            .unwrap_or_default();

        let base_url = provider_config
            .api_url
            .clone()
            .unwrap_or_else(|| default_base_url(name));

        router.register(name.clone(), make_provider(name, &base_url, &api_key, timeout));
    }

    // Ensure the default provider exists (even if not explicitly configured)
    if router.get(&config.default_provider).is_none() {
        let api_key = config.api_key.clone().unwrap_or_default();
        let base_url = default_base_url(&config.default_provider);
        router.register(
            config.default_provider.clone(),
            make_provider(&config.default_provider, &base_url, &api_key, timeout),
        );
    }

    router
}

fn make_provider(
    name: &str,
    base_url: &str,
    api_key: &str,
    timeout: Duration,
) -> Arc<dyn NarrativeProvider> {
    if name == "static" {
        Arc::new(StaticNarrative::offline())
    } else {
        Arc::new(OpenAiCompatNarrative::with_timeout(
            name, base_url, api_key, timeout,
        ))
    }
}

/// Get the default base URL for well-known providers.
fn default_base_url(provider_name: &str) -> String {
    match provider_name {
        "openrouter" => "https://openrouter.ai/api/v1".into(),
        "openai" => "https://api.openai.com/v1".into(),
        "ollama" => "http://localhost:11434/v1".into(),
        "deepseek" => "https://api.deepseek.com/v1".into(),
        "groq" => "https://api.groq.com/openai/v1".into(),
        "together" => "https://api.together.xyz/v1".into(),
        "vllm" => "http://localhost:8000/v1".into(),
        _ => format!("https://{provider_name}.api.example.com/v1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_register_and_lookup() {
        let mut router = NarrativeRouter::new("openrouter");
        let provider = Arc::new(OpenAiCompatNarrative::openrouter("sk-test"));
        router.register("openrouter", provider);

        assert!(router.get("openrouter").is_some());
        assert!(router.get("nonexistent").is_none());
        assert!(router.default().is_some());
    }

    #[test]
    fn default_base_urls() {
        assert!(default_base_url("openrouter").contains("openrouter.ai"));
        assert!(default_base_url("openai").contains("api.openai.com"));
        assert!(default_base_url("ollama").contains("localhost:11434"));
    }

    #[test]
    fn build_from_default_config() {
        let config = shelfwatch_config::AppConfig::default();
        let router = build_from_config(&config);
        assert!(router.default().is_some());
    }

    #[test]
    fn static_provider_name_builds_the_stub() {
        let mut config = shelfwatch_config::AppConfig::default();
        config.default_provider = "static".into();
        let router = build_from_config(&config);
        assert_eq!(router.default().unwrap().name(), "static");
    }
}
