//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use nexus_domain::{Length, Tone, DEFAULT_SLIDE_COUNT};

/// Nexus CLI - Generate social content with multi-provider failover.
#[derive(Debug, Parser)]
#[command(name = "nexus")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log verbosity (e.g. "debug", "nexus_pipeline=debug")
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate three post variations
    Post(PostArgs),

    /// Generate carousel slides
    Carousel(CarouselArgs),

    /// Build an image URL for a topic
    Image(ImageArgs),

    /// Suggest a trending topic
    Suggest,

    /// List Gemini models available to the configured key
    Models,

    /// Show which providers are configured and the failover chains
    Providers,

    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the post command.
#[derive(Debug, Parser)]
pub struct PostArgs {
    /// Topic to write about
    #[arg(short, long)]
    pub topic: String,

    /// Tone of voice
    #[arg(long, value_enum, default_value = "professional")]
    pub tone: ToneArg,

    /// Post length
    #[arg(short, long, value_enum, default_value = "medium")]
    pub length: LengthArg,
}

/// Arguments for the carousel command.
#[derive(Debug, Parser)]
pub struct CarouselArgs {
    /// Topic of the carousel
    #[arg(short, long)]
    pub topic: String,

    /// Number of slides (3-10)
    #[arg(short, long, default_value_t = DEFAULT_SLIDE_COUNT)]
    pub slides: u32,
}

/// Arguments for the image command.
#[derive(Debug, Parser)]
pub struct ImageArgs {
    /// Subject of the image
    #[arg(short, long)]
    pub topic: String,

    /// Visual style (default: Photorealistic)
    #[arg(short, long)]
    pub style: Option<String>,
}

/// Arguments for the init command.
#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Tone argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ToneArg {
    /// Measured, expert register
    Professional,
    /// Scroll-stopping hook
    Viral,
    /// First-person narrative
    Storytelling,
    /// Contrarian take
    Controversial,
}

/// Length argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LengthArg {
    /// A handful of lines
    Short,
    /// The usual feed post
    Medium,
    /// Long-form post
    Long,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<ToneArg> for Tone {
    fn from(tone: ToneArg) -> Self {
        match tone {
            ToneArg::Professional => Tone::Professional,
            ToneArg::Viral => Tone::ViralHook,
            ToneArg::Storytelling => Tone::Storytelling,
            ToneArg::Controversial => Tone::Controversial,
        }
    }
}

impl From<LengthArg> for Length {
    fn from(length: LengthArg) -> Self {
        match length {
            LengthArg::Short => Length::Short,
            LengthArg::Medium => Length::Medium,
            LengthArg::Long => Length::Long,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_command() {
        let cli = Cli::parse_from([
            "nexus",
            "post",
            "--topic",
            "Remote Work",
            "--tone",
            "viral",
            "--length",
            "long",
        ]);
        match cli.command {
            Command::Post(args) => {
                assert_eq!(args.topic, "Remote Work");
                assert_eq!(Tone::from(args.tone), Tone::ViralHook);
                assert_eq!(Length::from(args.length), Length::Long);
            }
            _ => panic!("Expected Post command"),
        }
    }

    #[test]
    fn test_post_defaults() {
        let cli = Cli::parse_from(["nexus", "post", "-t", "Rust"]);
        match cli.command {
            Command::Post(args) => {
                assert_eq!(Tone::from(args.tone), Tone::Professional);
                assert_eq!(Length::from(args.length), Length::Medium);
            }
            _ => panic!("Expected Post command"),
        }
    }

    #[test]
    fn test_carousel_default_slides() {
        let cli = Cli::parse_from(["nexus", "carousel", "--topic", "Deep Work"]);
        match cli.command {
            Command::Carousel(args) => assert_eq!(args.slides, 5),
            _ => panic!("Expected Carousel command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "nexus",
            "image",
            "--topic",
            "AI",
            "--format",
            "json",
            "--no-color",
            "--config",
            "/tmp/nexus.toml",
        ]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        assert_eq!(cli.config.as_deref(), Some("/tmp/nexus.toml"));
    }

    #[test]
    fn test_missing_topic_rejected() {
        assert!(Cli::try_parse_from(["nexus", "post"]).is_err());
        assert!(Cli::try_parse_from(["nexus", "post", "-t", "x", "--tone", "sarcastic"]).is_err());
    }
}
