//! Models command implementation.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use nexus_llm::{GeminiProvider, TextProvider};
use tracing::debug;

/// Execute the models command.
///
/// Lists the Gemini models that accept `generateContent` for the configured
/// key. Useful when a model id in the config stops resolving.
pub async fn execute_models(config: &Config, formatter: &Formatter) -> Result<()> {
    let providers = &config.pipeline.providers;
    let gemini = GeminiProvider::new(&providers.gemini, providers.request_timeout())?;

    if !gemini.is_configured() {
        return Err(CliError::Config(
            "Gemini API key missing: set GEMINI_API_KEY or [pipeline.providers.gemini] api_key"
                .to_string(),
        ));
    }

    let models = gemini.list_models().await?;
    debug!(count = models.len(), "Listed Gemini models");

    println!("{}", formatter.format_models(&models)?);

    Ok(())
}
