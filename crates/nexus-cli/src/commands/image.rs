//! Image command implementation.

use crate::cli::ImageArgs;
use crate::error::Result;
use crate::output::Formatter;
use nexus_domain::ImageRequest;
use nexus_pipeline::GenerationService;

/// Execute the image command.
pub async fn execute_image(
    args: ImageArgs,
    service: &GenerationService,
    formatter: &Formatter,
) -> Result<()> {
    let request = ImageRequest::new(args.topic, args.style)?;

    let image = service.generate_image_prompt(&request).await?;

    println!("{}", formatter.format_image(&image)?);

    Ok(())
}
