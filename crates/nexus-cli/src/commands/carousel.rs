//! Carousel command implementation.

use crate::cli::CarouselArgs;
use crate::error::Result;
use crate::output::Formatter;
use nexus_domain::CarouselRequest;
use nexus_pipeline::GenerationService;
use tracing::debug;

/// Execute the carousel command.
pub async fn execute_carousel(
    args: CarouselArgs,
    service: &GenerationService,
    formatter: &Formatter,
) -> Result<()> {
    let request = CarouselRequest::new(args.topic, args.slides)?;

    let generated = service.generate_carousel_slides(&request).await;

    for attempt in &generated.attempts {
        debug!(provider = %attempt.provider, reason = %attempt.reason, "Provider attempt failed");
    }
    if generated.is_simulated() {
        debug!(topic = %request.topic(), "Falling back to simulated content");
    }

    println!("{}", formatter.format_slides(&generated)?);

    Ok(())
}
