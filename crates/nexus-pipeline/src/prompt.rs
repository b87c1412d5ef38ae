//! Prompt templates for each generation task
//!
//! Every provider in a chain receives the same prompt text. Providers add
//! their own framing (system messages, JSON-only suffixes) on top.

use nexus_domain::{CarouselRequest, GenerationRequest, ImageRequest, SlideRole, POST_VARIATION_COUNT};

/// Example of the JSON shape expected for post variations
pub const POST_SCHEMA_EXAMPLE: &str = r#"[{"id":1,"title":"The Hook Title","content":"First sentence.\n\nSecond sentence.\n\n- Tip 1\n- Tip 2\n\nQuestion?"}]"#;

/// Example of the JSON shape expected for carousel slides
pub const CAROUSEL_SCHEMA_EXAMPLE: &str =
    r#"[{"id":1, "title":"..", "content":".."}, {"id":2, "title":"..", "content":".."}...]"#;

/// Prompt for the topic-suggestion call
pub const TOPIC_SUGGESTION_PROMPT: &str = "One trending B2B topic. Text only. No JSON.";

/// Builds the prompt text for each task type
///
/// All builders are pure: the same request always renders the same prompt.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Prompt asking for exactly three distinct post variations
    pub fn post(request: &GenerationRequest) -> String {
        let (min_words, max_words) = request.length().word_range();
        let mut prompt = String::new();

        prompt.push_str("Role: Expert LinkedIn Ghostwriter.\n");
        prompt.push_str(&format!("Topic: \"{}\"\n", request.topic()));
        prompt.push_str(&format!("Tone: {}\n", request.tone()));
        prompt.push_str(&format!("Length: {} (Must be detailed)\n\n", request.length()));

        prompt.push_str("INSTRUCTIONS:\n");
        prompt.push_str(&format!(
            "1. Write EXACTLY {} DISTINCT posts.\n",
            POST_VARIATION_COUNT
        ));
        prompt.push_str("2. Format: Short sentences. Line break after every sentence.\n");
        prompt.push_str("3. Structure: Hook -> Story/Context -> Actionable Tips -> CTA.\n");
        prompt.push_str("4. NO generic fluff. Give specific advice.\n");
        prompt.push_str(&format!(
            "5. Length: {} to {} words per post.\n\n",
            min_words, max_words
        ));

        prompt.push_str("Output strictly valid JSON array:\n");
        prompt.push_str(POST_SCHEMA_EXAMPLE);
        prompt.push('\n');
        prompt
    }

    /// Prompt asking for exactly `slide_count` slides with a role per position
    pub fn carousel(request: &CarouselRequest) -> String {
        let count = request.slide_count();
        let mut prompt = String::new();

        prompt.push_str("Act as a LinkedIn Carousel Architect.\n");
        prompt.push_str(&format!("Topic: \"{}\"\n", request.topic()));
        prompt.push_str(&format!("Total Slides: {}\n\n", count));

        prompt.push_str("Task: Create a sequential narrative structure.\n");
        prompt.push_str("Constraints:\n");
        prompt.push_str(&format!("1. EXACTLY {} slides.\n", count));
        prompt.push_str("2. EACH SLIDE MUST HAVE UNIQUE CONTENT. Do not repeat the intro.\n");
        prompt.push_str("3. Content must be short and punchy (LinkedIn Style).\n\n");

        prompt.push_str("Structure:\n");
        for (position, role) in (1..).zip(SlideRole::sequence(count)) {
            prompt.push_str(&format!("- Slide {}: {}\n", position, role.describe()));
        }
        prompt.push('\n');

        prompt.push_str("Output strictly valid JSON Array:\n");
        prompt.push_str(CAROUSEL_SCHEMA_EXAMPLE);
        prompt.push('\n');
        prompt
    }

    /// Prompt asking for a plain-text visual description
    pub fn image_description(request: &ImageRequest) -> String {
        format!(
            "Describe a visual image for: \"{}\". Style: {}. Return only the description text. No JSON.",
            request.topic(),
            request.style()
        )
    }

    /// Prompt asking for one trending topic
    pub fn topic_suggestion() -> &'static str {
        TOPIC_SUGGESTION_PROMPT
    }
}
