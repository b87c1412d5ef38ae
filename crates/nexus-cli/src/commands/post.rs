//! Post command implementation.

use crate::cli::PostArgs;
use crate::error::Result;
use crate::output::Formatter;
use nexus_domain::GenerationRequest;
use nexus_pipeline::GenerationService;
use tracing::debug;

/// Execute the post command.
pub async fn execute_post(
    args: PostArgs,
    service: &GenerationService,
    formatter: &Formatter,
) -> Result<()> {
    let request = GenerationRequest::new(args.topic, args.tone.into(), args.length.into())?;

    let generated = service.generate_post_variations(&request).await;

    for attempt in &generated.attempts {
        debug!(provider = %attempt.provider, reason = %attempt.reason, "Provider attempt failed");
    }
    if generated.is_simulated() {
        debug!(topic = %request.topic(), "Falling back to simulated content");
    }

    println!("{}", formatter.format_posts(&generated)?);

    Ok(())
}
