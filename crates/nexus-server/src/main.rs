//! Nexus Server CLI
//!
//! Starts the HTTP server for content generation.

use nexus_server::{config::ServerConfig, start_server, ServerError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        // Load from specified config file
        let config_path = &args[2];
        ServerConfig::from_file(config_path)?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        // Use default configuration
        eprintln!("Warning: No config file specified, using default configuration");
        eprintln!("Usage: nexus-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::default_test_config()
    };

    // Start the server
    start_server(config.with_env_overrides()).await?;

    Ok(())
}

fn print_help() {
    println!("Nexus Server - Multi-Provider Content Generation");
    println!();
    println!("USAGE:");
    println!("    nexus-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    nexus-server --config config/server.toml");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: Port number (default: 3000)");
    println!("    - [pipeline]: provider_timeout_secs, [pipeline.chains], [pipeline.providers.*]");
    println!();
    println!("ENVIRONMENT:");
    println!("    PORT                Overrides bind_port");
    println!("    GEMINI_API_KEY      Enables the Gemini provider");
    println!("    GROQ_API_KEY        Enables the Groq provider");
    println!("    COHERE_API_KEY      Enables the Cohere provider");
    println!("    RUST_LOG            Log filter (default: info)");
    println!();
}
