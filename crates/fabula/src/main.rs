//! Fabula CLI binary.
//!
//! Suggests a short scripted story for a cast of characters:
//! - Draws a genre from the weighted table, or takes one from `--genre`
//! - Sends the bound prompt to the configured chat-completion model
//! - Prints the story, then any format findings when `--lint` is given

use clap::Parser;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = cli::Cli::parse();

    // Initialize tracing; stdout is reserved for the story
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
