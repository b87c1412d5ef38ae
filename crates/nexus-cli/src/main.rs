//! Nexus CLI - Command-line interface for multi-provider content generation.

use clap::Parser;
use nexus_cli::commands;
use nexus_cli::config::OutputFormat;
use nexus_cli::{Cli, Command, Config, Formatter};
use nexus_pipeline::GenerationService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> nexus_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };

    // Init writes the file, so it must not require one to exist
    if let Command::Init(args) = cli.command {
        let formatter = Formatter::new(OutputFormat::Text, !cli.no_color);
        return commands::execute_init(args, &config_path, &formatter);
    }

    // An explicit config path must exist; the default one is optional
    let config = if cli.config.is_some() {
        Config::load_from(&config_path)?
    } else {
        Config::load()?
    };
    let config = Config {
        pipeline: config.pipeline.with_env_overrides(),
        ..config
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Post(args) => {
            let service = GenerationService::from_config(&config.pipeline)?;
            commands::execute_post(args, &service, &formatter).await?;
        }
        Command::Carousel(args) => {
            let service = GenerationService::from_config(&config.pipeline)?;
            commands::execute_carousel(args, &service, &formatter).await?;
        }
        Command::Image(args) => {
            let service = GenerationService::from_config(&config.pipeline)?;
            commands::execute_image(args, &service, &formatter).await?;
        }
        Command::Suggest => {
            let service = GenerationService::from_config(&config.pipeline)?;
            commands::execute_suggest(&service, &formatter).await?;
        }
        Command::Providers => {
            let service = GenerationService::from_config(&config.pipeline)?;
            commands::execute_providers(&service, &formatter)?;
        }
        Command::Models => {
            commands::execute_models(&config, &formatter).await?;
        }
        Command::Init(_) => {}
    }

    Ok(())
}
