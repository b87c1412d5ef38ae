//! Providers command implementation.

use crate::error::Result;
use crate::output::Formatter;
use nexus_pipeline::GenerationService;

/// Execute the providers command.
pub fn execute_providers(service: &GenerationService, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.format_providers(
            service.provider_statuses(),
            &service.post_chain_names(),
            &service.carousel_chain_names(),
        )?
    );
    Ok(())
}
