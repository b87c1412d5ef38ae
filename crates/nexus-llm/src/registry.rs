//! Provider registry: turns settings into adapter instances
//!
//! The registry owns one adapter per known provider, whether or not its
//! credential is present. Unconfigured adapters stay in the registry and fail
//! fast with [`ProviderError::Unavailable`], which shortens any failover chain
//! that includes them without special-casing.

use crate::config::ProvidersConfig;
use crate::{CohereProvider, GeminiProvider, GroqProvider, ProviderError, TextProvider};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Known provider backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini
    Gemini,
    /// Groq
    Groq,
    /// Cohere
    Cohere,
}

impl ProviderKind {
    /// Every provider, in default post-generation priority order
    pub const ALL: [ProviderKind; 3] = [ProviderKind::Gemini, ProviderKind::Groq, ProviderKind::Cohere];

    /// Provider name as used in config files and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Groq => "groq",
            ProviderKind::Cohere => "cohere",
        }
    }

    /// Environment variable carrying the provider's API key
    pub fn env_var(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::Groq => "GROQ_API_KEY",
            ProviderKind::Cohere => "COHERE_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "groq" => Ok(ProviderKind::Groq),
            "cohere" => Ok(ProviderKind::Cohere),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// Whether a provider can currently be used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStatus {
    /// Provider name
    pub name: String,
    /// Credential present
    pub configured: bool,
}

/// Registry of adapter instances keyed by [`ProviderKind`]
#[derive(Clone)]
pub struct ProviderRegistry {
    providers: Vec<(ProviderKind, Arc<dyn TextProvider>)>,
}

impl ProviderRegistry {
    /// Build every adapter from configuration
    pub fn from_config(config: &ProvidersConfig) -> Result<Self, ProviderError> {
        let timeout = config.request_timeout();
        let mut providers: Vec<(ProviderKind, Arc<dyn TextProvider>)> = Vec::new();

        for kind in ProviderKind::ALL {
            let settings = config.settings(kind);
            let provider: Arc<dyn TextProvider> = match kind {
                ProviderKind::Gemini => Arc::new(GeminiProvider::new(settings, timeout)?),
                ProviderKind::Groq => Arc::new(GroqProvider::new(settings, timeout)?),
                ProviderKind::Cohere => Arc::new(CohereProvider::new(settings, timeout)?),
            };
            providers.push((kind, provider));
        }

        Ok(Self { providers })
    }

    /// Build a registry from explicit instances (test doubles, custom adapters)
    pub fn from_providers(providers: Vec<(ProviderKind, Arc<dyn TextProvider>)>) -> Self {
        Self { providers }
    }

    /// Adapter for `kind`, if registered
    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn TextProvider>> {
        self.providers
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, p)| Arc::clone(p))
    }

    /// Resolve an ordered chain; kinds without an adapter are skipped
    pub fn chain(&self, kinds: &[ProviderKind]) -> Vec<Arc<dyn TextProvider>> {
        kinds.iter().filter_map(|kind| self.get(*kind)).collect()
    }

    /// Configuration status of every registered provider
    pub fn statuses(&self) -> Vec<ProviderStatus> {
        self.providers
            .iter()
            .map(|(_, p)| ProviderStatus {
                name: p.name().to_string(),
                configured: p.is_configured(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderSettings;
    use crate::MockProvider;

    #[test]
    fn test_from_config_registers_all_providers() {
        let mut config = ProvidersConfig::default();
        config.groq = ProviderSettings::with_key("groq-key");

        let registry = ProviderRegistry::from_config(&config).unwrap();
        let statuses = registry.statuses();

        assert_eq!(statuses.len(), 3);
        assert_eq!(
            statuses,
            vec![
                ProviderStatus { name: "gemini".to_string(), configured: false },
                ProviderStatus { name: "groq".to_string(), configured: true },
                ProviderStatus { name: "cohere".to_string(), configured: false },
            ]
        );
    }

    #[test]
    fn test_chain_preserves_order() {
        let registry = ProviderRegistry::from_config(&ProvidersConfig::default()).unwrap();
        let chain = registry.chain(&[ProviderKind::Groq, ProviderKind::Gemini]);

        let names: Vec<_> = chain.iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, vec!["groq", "gemini"]);
    }

    #[test]
    fn test_chain_skips_unregistered() {
        let registry = ProviderRegistry::from_providers(vec![(
            ProviderKind::Cohere,
            Arc::new(MockProvider::new("cohere", "[]")) as Arc<dyn TextProvider>,
        )]);
        let chain = registry.chain(&ProviderKind::ALL);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].name(), "cohere");
    }

    #[test]
    fn test_provider_kind_parse_and_serde() {
        assert_eq!("Gemini".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
        assert!("openai".parse::<ProviderKind>().is_err());

        let json = serde_json::to_string(&ProviderKind::Cohere).unwrap();
        assert_eq!(json, r#""cohere""#);
        assert_eq!(ProviderKind::Groq.env_var(), "GROQ_API_KEY");
    }
}
