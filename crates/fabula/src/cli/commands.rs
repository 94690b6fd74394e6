//! CLI argument definitions.

use clap::Parser;
use fabula::Genre;
use std::path::PathBuf;

/// Fabula - weighted-genre story suggestions from a chat-completion model
#[derive(Parser, Debug)]
#[command(name = "fabula")]
#[command(about = "Suggest a short scripted story for a cast of characters", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Character names, in the order they should be listed
    #[arg(default_values = ["Dhoak", "Stuma", "BaronessMadlin"])]
    pub characters: Vec<String>,

    /// Use this story type instead of drawing one (e.g. Comedy, Sci-Fi)
    #[arg(long, value_parser = parse_genre)]
    pub genre: Option<Genre>,

    /// Seed for the genre draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Configuration file to use instead of ./fabula.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fail on the first error instead of retrying
    #[arg(long)]
    pub no_retry: bool,

    /// Report deviations from the requested story format on stderr
    #[arg(long)]
    pub lint: bool,

    /// Print the chosen story type and prompt without contacting the model
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_genre(label: &str) -> Result<Genre, String> {
    Genre::parse_label(label).map_err(|e| e.to_string())
}
