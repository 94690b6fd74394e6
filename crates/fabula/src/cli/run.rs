//! Story suggestion command handler.

use super::Cli;
use fabula::{
    FabulaResult, GenreTable, ModelConfig, PromptTemplate, initialize_model, lint_story,
    preview_prompt, suggest_story,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process::ExitCode;
use tracing::{info, warn};

/// Load settings with CLI overrides applied on top.
fn load_config(cli: &Cli) -> FabulaResult<ModelConfig> {
    let mut config = match &cli.config {
        Some(path) => ModelConfig::load_from(path)?,
        None => ModelConfig::load()?,
    };

    if let Some(model) = &cli.model {
        config = config.with_model(model.clone());
    }
    if let Some(temperature) = cli.temperature {
        config = config.with_temperature(temperature);
    }
    if cli.no_retry {
        config = config.with_no_retry(true);
    }
    Ok(config)
}

/// Run one story suggestion.
///
/// The story goes to stdout only once it has been received in full. An
/// interrupt while waiting on the model ends the run with nothing printed.
pub async fn run(cli: Cli) -> FabulaResult<ExitCode> {
    let table = GenreTable::default_table();
    let template = PromptTemplate::story();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if cli.dry_run {
        let preview = preview_prompt(&cli.characters, &table, &template, cli.genre, &mut rng)?;
        preview.write_to(&mut std::io::stdout().lock())?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    let model = initialize_model(config)?;
    info!(model = %model.config().model(), "Model ready");

    let suggestion = tokio::select! {
        result = suggest_story(&model, &cli.characters, &table, &template, cli.genre, &mut rng) => result?,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted before the story arrived");
            return Ok(ExitCode::from(130));
        }
    };

    suggestion.write_to(&mut std::io::stdout().lock())?;

    if cli.lint {
        let findings = lint_story(suggestion.story(), &cli.characters);
        if findings.is_empty() {
            eprintln!("lint: story follows the requested format");
        }
        for finding in findings {
            eprintln!("lint: {}", finding);
        }
    }

    Ok(ExitCode::SUCCESS)
}
