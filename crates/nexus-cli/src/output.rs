//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use nexus_domain::{CarouselSlide, PostVariation};
use nexus_llm::{GeminiModel, ProviderStatus};
use nexus_pipeline::{Generated, ImagePrompt};
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format generated post variations.
    pub fn format_posts(&self, generated: &Generated<Vec<PostVariation>>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "source": generated.source.as_str(),
                "data": generated.data,
            }))?),
            OutputFormat::Text => {
                let mut out = self.source_line(generated);
                for post in &generated.data {
                    out.push_str("\n\n");
                    out.push_str(&self.colorize(&format!("#{} {}", post.id, post.title), "cyan"));
                    out.push('\n');
                    out.push_str(&post.content);
                }
                Ok(out)
            }
        }
    }

    /// Format generated carousel slides.
    pub fn format_slides(&self, generated: &Generated<Vec<CarouselSlide>>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "source": generated.source.as_str(),
                "data": generated.data,
            }))?),
            OutputFormat::Text => {
                let mut out = self.source_line(generated);
                let total = generated.data.len();
                for slide in &generated.data {
                    out.push_str("\n\n");
                    out.push_str(&self.colorize(
                        &format!("[{}/{}] {}", slide.id, total, slide.title),
                        "magenta",
                    ));
                    out.push('\n');
                    out.push_str(&slide.content);
                }
                Ok(out)
            }
        }
    }

    /// Format an image prompt.
    pub fn format_image(&self, image: &ImagePrompt) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(image)?),
            OutputFormat::Text => Ok(format!(
                "{}\n{}",
                self.info(&format!("Prompt: {}", image.prompt)),
                image.image_url
            )),
        }
    }

    /// Format a suggested topic.
    pub fn format_topic(&self, topic: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({ "topic": topic }))?),
            OutputFormat::Text => Ok(topic.to_string()),
        }
    }

    /// Format the Gemini model listing.
    pub fn format_models(&self, models: &[GeminiModel]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_models: Vec<serde_json::Value> = models
                    .iter()
                    .map(|m| json!({ "name": m.name, "display_name": m.display_name }))
                    .collect();
                Ok(serde_json::to_string_pretty(&json_models)?)
            }
            OutputFormat::Text => {
                if models.is_empty() {
                    return Ok(self.colorize("No models found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Model", "Display Name"]);
                for model in models {
                    builder.push_record([
                        model.name.as_str(),
                        model.display_name.as_deref().unwrap_or("-"),
                    ]);
                }
                Ok(self.render_table(builder))
            }
        }
    }

    /// Format provider statuses and the failover chains.
    pub fn format_providers(
        &self,
        statuses: &[ProviderStatus],
        post_chain: &[String],
        carousel_chain: &[String],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "providers": statuses,
                "post_chain": post_chain,
                "carousel_chain": carousel_chain,
            }))?),
            OutputFormat::Text => {
                let mut builder = Builder::default();
                builder.push_record(["Provider", "Status"]);
                for status in statuses {
                    let label = if status.configured { "configured" } else { "no API key" };
                    builder.push_record([status.name.as_str(), label]);
                }

                Ok(format!(
                    "{}\nPost chain:     {}\nCarousel chain: {}",
                    self.render_table(builder),
                    chain_label(post_chain),
                    chain_label(carousel_chain)
                ))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn source_line<T>(&self, generated: &Generated<T>) -> String {
        if generated.is_simulated() {
            self.warning("All providers failed; showing simulated content")
        } else {
            self.success(&format!("Generated by {}", generated.source))
        }
    }

    fn render_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn chain_label(chain: &[String]) -> String {
    if chain.is_empty() {
        "(simulation only)".to_string()
    } else {
        format!("{} -> simulation", chain.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_pipeline::{Simulation, Source};

    fn simulated_posts() -> Generated<Vec<PostVariation>> {
        Generated {
            data: Simulation::posts("Remote Work"),
            source: Source::Simulation,
            attempts: Vec::new(),
        }
    }

    #[test]
    fn test_json_posts() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_posts(&simulated_posts()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["source"], "simulation");
        assert_eq!(value["data"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_text_posts() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_posts(&simulated_posts()).unwrap();
        assert!(output.starts_with("⚠ All providers failed"));
        assert!(output.contains("#1 The Strategy (Simulated)"));
        assert!(output.contains("Remote Work"));
    }

    #[test]
    fn test_text_slides_from_provider() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let generated = Generated {
            data: Simulation::slides("Deep Work", 3),
            source: Source::Provider("groq".to_string()),
            attempts: Vec::new(),
        };
        let output = formatter.format_slides(&generated).unwrap();
        assert!(output.starts_with("✓ Generated by groq"));
        assert!(output.contains("[3/3] Summary"));
    }

    #[test]
    fn test_image_json_is_camel_case() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let image = ImagePrompt {
            image_url: "https://example.test/x".to_string(),
            prompt: "x".to_string(),
        };
        let output = formatter.format_image(&image).unwrap();
        assert!(output.contains("\"imageUrl\""));
    }

    #[test]
    fn test_models_table() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let models = vec![GeminiModel {
            name: "gemini-1.5-flash".to_string(),
            display_name: Some("Gemini 1.5 Flash".to_string()),
        }];
        let output = formatter.format_models(&models).unwrap();
        assert!(output.contains("Display Name"));
        assert!(output.contains("gemini-1.5-flash"));

        let output = formatter.format_models(&[]).unwrap();
        assert!(output.contains("No models found"));
    }

    #[test]
    fn test_providers_table() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let statuses = vec![
            ProviderStatus { name: "gemini".to_string(), configured: true },
            ProviderStatus { name: "groq".to_string(), configured: false },
        ];
        let output = formatter
            .format_providers(&statuses, &["gemini".to_string()], &[])
            .unwrap();
        assert!(output.contains("no API key"));
        assert!(output.contains("Post chain:     gemini -> simulation"));
        assert!(output.contains("Carousel chain: (simulation only)"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
