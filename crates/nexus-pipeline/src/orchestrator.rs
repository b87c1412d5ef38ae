//! Ordered failover across text providers
//!
//! Providers are tried strictly in chain order, one at a time. An attempt
//! succeeds only when the provider answers within the timeout AND its output
//! decodes into the full requested shape. Any failure moves on to the next
//! provider; when the chain is exhausted the simulation answers instead.

use crate::error::{AttemptFailure, ExtractError};
use crate::parser::{BracketSliceExtractor, JsonExtractor};
use crate::types::{FailedAttempt, Generated, Source};
use nexus_llm::{ProviderError, TextProvider};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Runs a prompt through a failover chain
#[derive(Clone)]
pub struct FailoverOrchestrator {
    extractor: Arc<dyn JsonExtractor>,
    provider_timeout: Duration,
}

impl FailoverOrchestrator {
    /// Create an orchestrator with the default extractor
    pub fn new(provider_timeout: Duration) -> Self {
        Self {
            extractor: Arc::new(BracketSliceExtractor),
            provider_timeout,
        }
    }

    /// Replace the JSON extractor
    pub fn with_extractor(mut self, extractor: Arc<dyn JsonExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Per-provider timeout
    pub fn provider_timeout(&self) -> Duration {
        self.provider_timeout
    }

    /// Try each provider in `chain` until one yields decodable output
    ///
    /// `decode` turns the extracted JSON into the caller's type and must reject
    /// anything short of a complete result. `simulate` runs only when every
    /// provider has failed.
    pub async fn run<T, D, S>(
        &self,
        task: &str,
        prompt: &str,
        chain: &[Arc<dyn TextProvider>],
        decode: D,
        simulate: S,
    ) -> Generated<T>
    where
        D: Fn(Value) -> Result<T, ExtractError>,
        S: FnOnce() -> T,
    {
        let mut attempts = Vec::new();

        for (position, provider) in chain.iter().enumerate() {
            let name = provider.name().to_string();
            debug!(task, provider = %name, position, "Trying provider");

            match self.attempt(provider.as_ref(), prompt, &decode).await {
                Ok(data) => {
                    info!(task, provider = %name, failed_attempts = attempts.len(), "Provider succeeded");
                    return Generated {
                        data,
                        source: Source::Provider(name),
                        attempts,
                    };
                }
                Err(reason) => {
                    if reason.is_unavailable() {
                        debug!(task, provider = %name, "Provider not configured, skipping");
                    } else {
                        warn!(task, provider = %name, error = %reason, "Provider attempt failed");
                    }
                    attempts.push(FailedAttempt {
                        provider: name,
                        reason,
                    });
                }
            }
        }

        warn!(
            task,
            chain_len = chain.len(),
            "All providers failed, using simulation"
        );
        Generated {
            data: simulate(),
            source: Source::Simulation,
            attempts,
        }
    }

    /// Single best-effort call with the timeout applied; no extraction
    pub async fn call(&self, provider: &dyn TextProvider, prompt: &str) -> Result<String, ProviderError> {
        match tokio::time::timeout(self.provider_timeout, provider.generate(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(self.provider_timeout)),
        }
    }

    async fn attempt<T, D>(
        &self,
        provider: &dyn TextProvider,
        prompt: &str,
        decode: &D,
    ) -> Result<T, AttemptFailure>
    where
        D: Fn(Value) -> Result<T, ExtractError>,
    {
        let raw = self.call(provider, prompt).await?;
        let value = self.extractor.extract(&raw)?;
        Ok(decode(value)?)
    }
}
