//! Story generation against a model driver.

use fabula_core::{GenerateRequest, Genre, PromptTemplate, Story};
use fabula_error::FabulaResult;
use fabula_interface::FabulaDriver;
use tracing::{debug, instrument};

/// Bind the prompt, send it as a single request, and return the reply.
///
/// The reply text is returned unmodified. Driver failures propagate as-is,
/// so callers can still tell configuration, transport and provider errors
/// apart.
///
/// # Errors
///
/// Returns a validation error for an empty cast, or whatever the driver
/// reports.
#[instrument(
    skip_all,
    fields(
        provider = driver.provider_name(),
        model = driver.model_name(),
        characters = characters.len(),
        %genre
    )
)]
pub async fn generate_story<D, S>(
    driver: &D,
    characters: &[S],
    genre: Genre,
    template: &PromptTemplate,
) -> FabulaResult<Story>
where
    D: FabulaDriver + ?Sized,
    S: AsRef<str>,
{
    let prompt = template.format(characters, genre)?;
    debug!(prompt_len = prompt.len(), "Prompt bound");

    let response = driver.generate(&GenerateRequest::from_prompt(prompt)).await?;
    let story = Story::new(response.text());

    debug!(story_len = story.as_str().len(), "Story received");
    Ok(story)
}
