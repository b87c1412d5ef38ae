//! Configuration for the generation pipeline

use nexus_llm::{ProviderKind, ProvidersConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Default per-provider timeout enforced by the orchestrator (seconds)
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 45;

/// Ordered failover chain for each task type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Chain for post variations
    #[serde(default = "default_post_chain")]
    pub post: Vec<ProviderKind>,

    /// Chain for carousel slides
    #[serde(default = "default_carousel_chain")]
    pub carousel: Vec<ProviderKind>,

    /// Single best-effort provider for image prompts and topic suggestions
    #[serde(default = "default_auxiliary")]
    pub auxiliary: Option<ProviderKind>,
}

fn default_post_chain() -> Vec<ProviderKind> {
    vec![ProviderKind::Gemini, ProviderKind::Groq, ProviderKind::Cohere]
}

fn default_carousel_chain() -> Vec<ProviderKind> {
    vec![ProviderKind::Groq, ProviderKind::Gemini]
}

fn default_auxiliary() -> Option<ProviderKind> {
    Some(ProviderKind::Groq)
}

fn default_provider_timeout() -> u64 {
    DEFAULT_PROVIDER_TIMEOUT_SECS
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            post: default_post_chain(),
            carousel: default_carousel_chain(),
            auxiliary: default_auxiliary(),
        }
    }
}

/// Configuration for the generation pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum time for a single provider attempt (seconds)
    #[serde(default = "default_provider_timeout")]
    pub provider_timeout_secs: u64,

    /// Provider credentials and endpoints
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Failover chains per task type
    #[serde(default)]
    pub chains: ChainConfig,
}

impl Default for PipelineConfig {
    /// Chains as the product shipped them: three providers for posts, two for carousels
    fn default() -> Self {
        Self {
            provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
            providers: ProvidersConfig::default(),
            chains: ChainConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Get the provider timeout as a Duration
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.provider_timeout_secs == 0 {
            return Err("provider_timeout_secs must be greater than 0".to_string());
        }
        if self.providers.request_timeout_secs == 0 {
            return Err("providers.request_timeout_secs must be greater than 0".to_string());
        }
        check_chain("post", &self.chains.post)?;
        check_chain("carousel", &self.chains.carousel)?;
        Ok(())
    }

    /// Resilient preset: carousels get the same three-provider chain as posts
    pub fn resilient() -> Self {
        Self {
            chains: ChainConfig {
                carousel: default_post_chain(),
                ..ChainConfig::default()
            },
            ..Self::default()
        }
    }

    /// Fast preset: short timeouts so a slow provider is abandoned quickly
    pub fn fast() -> Self {
        let mut config = Self {
            provider_timeout_secs: 15,
            ..Self::default()
        };
        config.providers.request_timeout_secs = 15;
        config
    }

    /// Parse from TOML
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Overlay provider API keys from the process environment
    pub fn with_env_overrides(mut self) -> Self {
        self.providers = self.providers.with_env_overrides();
        self
    }
}

fn check_chain(task: &str, chain: &[ProviderKind]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for kind in chain {
        if !seen.insert(*kind) {
            return Err(format!("{} chain lists '{}' more than once", task, kind));
        }
    }
    Ok(())
}
