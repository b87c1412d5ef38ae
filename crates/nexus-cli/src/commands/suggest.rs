//! Suggest command implementation.

use crate::error::Result;
use crate::output::Formatter;
use nexus_pipeline::GenerationService;

/// Execute the suggest command.
pub async fn execute_suggest(service: &GenerationService, formatter: &Formatter) -> Result<()> {
    let topic = service.suggest_topic().await;
    println!("{}", formatter.format_topic(&topic)?);
    Ok(())
}
