//! Provider credentials and endpoints
//!
//! Each provider has one independently optional credential. A missing
//! credential disables exactly that provider; it is never a startup error.

use crate::registry::ProviderKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default transport timeout for provider HTTP calls (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Settings for a single provider
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// API key; absent or empty disables the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Base URL override (mainly for proxies and tests)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ProviderSettings {
    /// Settings with only an API key
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// The API key, if present and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Settings for every known provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Transport timeout for each HTTP call (seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Google Gemini
    #[serde(default)]
    pub gemini: ProviderSettings,

    /// Groq
    #[serde(default)]
    pub groq: ProviderSettings,

    /// Cohere
    #[serde(default)]
    pub cohere: ProviderSettings,
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            gemini: ProviderSettings::default(),
            groq: ProviderSettings::default(),
            cohere: ProviderSettings::default(),
        }
    }
}

impl ProvidersConfig {
    /// Settings for `kind`
    pub fn settings(&self, kind: ProviderKind) -> &ProviderSettings {
        match kind {
            ProviderKind::Gemini => &self.gemini,
            ProviderKind::Groq => &self.groq,
            ProviderKind::Cohere => &self.cohere,
        }
    }

    fn settings_mut(&mut self, kind: ProviderKind) -> &mut ProviderSettings {
        match kind {
            ProviderKind::Gemini => &mut self.gemini,
            ProviderKind::Groq => &mut self.groq,
            ProviderKind::Cohere => &mut self.cohere,
        }
    }

    /// Transport timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Overlay API keys from the process environment
    /// (`GEMINI_API_KEY`, `GROQ_API_KEY`, `COHERE_API_KEY`)
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Overlay API keys from `lookup`; blank values are ignored
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for kind in ProviderKind::ALL {
            if let Some(key) = lookup(kind.env_var()).filter(|k| !k.trim().is_empty()) {
                self.settings_mut(kind).api_key = Some(key);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_counts_as_absent() {
        let settings = ProviderSettings::with_key("   ");
        assert_eq!(settings.api_key(), None);

        let settings = ProviderSettings::with_key("abc");
        assert_eq!(settings.api_key(), Some("abc"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let settings = ProviderSettings::with_key("super-secret");
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_overrides_fill_keys() {
        let config = ProvidersConfig::default().with_overrides(|var| match var {
            "GROQ_API_KEY" => Some("groq-key".to_string()),
            "COHERE_API_KEY" => Some("".to_string()),
            _ => None,
        });

        assert_eq!(config.groq.api_key(), Some("groq-key"));
        assert_eq!(config.gemini.api_key(), None);
        assert_eq!(config.cohere.api_key(), None);
    }

    #[test]
    fn test_overrides_replace_file_keys() {
        let mut config = ProvidersConfig::default();
        config.gemini = ProviderSettings::with_key("from-file");

        let config = config.with_overrides(|var| {
            (var == "GEMINI_API_KEY").then(|| "from-env".to_string())
        });
        assert_eq!(config.gemini.api_key(), Some("from-env"));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            request_timeout_secs = 15

            [gemini]
            api_key = "g-key"
            model = "gemini-2.0-flash"

            [cohere]
            endpoint = "http://localhost:9999/v1"
        "#;

        let config: ProvidersConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.gemini.api_key(), Some("g-key"));
        assert_eq!(config.gemini.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(config.groq, ProviderSettings::default());
        assert_eq!(
            config.settings(ProviderKind::Cohere).endpoint.as_deref(),
            Some("http://localhost:9999/v1")
        );
    }
}
