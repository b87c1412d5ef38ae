//! Image URL construction for the image-prompt operation

use crate::error::PipelineError;
use url::Url;

/// Base URL of the image renderer
pub const IMAGE_BASE_URL: &str = "https://image.pollinations.ai/prompt/";

/// Rendered image edge length in pixels (square, feed-sized)
pub const IMAGE_SIZE: u32 = 1080;

/// Exclusive upper bound for the random seed
pub const SEED_RANGE: u32 = 1000;

/// Build a renderable image URL for `prompt`
///
/// The prompt becomes a single percent-encoded path segment.
pub fn image_url(prompt: &str, seed: u32) -> Result<String, PipelineError> {
    let mut url = Url::parse(IMAGE_BASE_URL).map_err(|e| PipelineError::ImageUrl(e.to_string()))?;

    url.path_segments_mut()
        .map_err(|_| PipelineError::ImageUrl("Base URL cannot take path segments".to_string()))?
        .pop_if_empty()
        .push(prompt);

    let size = IMAGE_SIZE.to_string();
    url.query_pairs_mut()
        .append_pair("seed", &seed.to_string())
        .append_pair("width", &size)
        .append_pair("height", &size)
        .append_pair("nologo", "true");

    Ok(url.into())
}

/// Random seed in `0..SEED_RANGE`
pub fn random_seed() -> u32 {
    rand::random_range(0..SEED_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_encodes_prompt() {
        let url = image_url("A calm desk at dawn, 50% fog", 42).unwrap();
        assert_eq!(
            url,
            "https://image.pollinations.ai/prompt/A%20calm%20desk%20at%20dawn,%2050%25%20fog?seed=42&width=1080&height=1080&nologo=true"
        );
    }

    #[test]
    fn test_image_url_keeps_slash_inside_segment() {
        let url = image_url("input/output", 7).unwrap();
        assert!(url.starts_with("https://image.pollinations.ai/prompt/input%2Foutput?"));
    }

    #[test]
    fn test_random_seed_in_range() {
        for _ in 0..100 {
            assert!(random_seed() < SEED_RANGE);
        }
    }
}
