//! End-to-end story suggestion.

use crate::generate_story;
use fabula_core::{Genre, GenreTable, PromptTemplate, Story, render_character_list};
use fabula_error::{FabulaResult, OutputError};
use fabula_interface::FabulaDriver;
use rand::Rng;
use std::io::Write;
use tracing::{info, instrument};

fn output_error(e: std::io::Error) -> OutputError {
    OutputError::new(format!("Failed to write output: {}", e))
}

/// A generated story together with what it was generated from.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct Suggestion {
    /// Genre the story was requested in
    genre: Genre,
    /// Cast, in the order given
    characters: Vec<String>,
    /// Model reply, unmodified
    story: Story,
}

impl Suggestion {
    /// Write the genre, the cast, and the story.
    ///
    /// The story text follows the two header lines byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns an output error if the writer fails.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> FabulaResult<()> {
        writeln!(out, "Story type: {}", self.genre).map_err(output_error)?;
        writeln!(out, "Characters: {}", render_character_list(&self.characters))
            .map_err(output_error)?;
        out.write_all(self.story.as_str().as_bytes())
            .map_err(output_error)?;
        if !self.story.as_str().ends_with('\n') {
            writeln!(out).map_err(output_error)?;
        }
        out.flush().map_err(output_error)?;
        Ok(())
    }
}

/// The prompt a suggestion would send, without sending it.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct PromptPreview {
    /// Genre the prompt was bound with
    genre: Genre,
    /// Fully bound prompt
    prompt: String,
}

impl PromptPreview {
    /// Write the genre, a blank line, and the prompt.
    ///
    /// # Errors
    ///
    /// Returns an output error if the writer fails.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> FabulaResult<()> {
        writeln!(out, "Story type: {}", self.genre).map_err(output_error)?;
        writeln!(out).map_err(output_error)?;
        out.write_all(self.prompt.as_bytes()).map_err(output_error)?;
        out.flush().map_err(output_error)?;
        Ok(())
    }
}

fn choose_genre<R: Rng + ?Sized>(
    table: &GenreTable,
    genre_override: Option<Genre>,
    rng: &mut R,
) -> FabulaResult<Genre> {
    let genre = match genre_override {
        Some(genre) => genre,
        None => table.select(rng)?,
    };
    info!(%genre, "Story type chosen");
    Ok(genre)
}

/// Choose a genre and bind the prompt, with no driver involved.
///
/// Draws from `table` exactly as [`suggest_story`] would, so the same seed
/// previews the same genre.
///
/// # Errors
///
/// Returns a validation error for an empty cast or an unusable table.
#[instrument(skip_all, fields(characters = characters.len(), genre_override = ?genre_override))]
pub fn preview_prompt<S, R>(
    characters: &[S],
    table: &GenreTable,
    template: &PromptTemplate,
    genre_override: Option<Genre>,
    rng: &mut R,
) -> FabulaResult<PromptPreview>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let genre = choose_genre(table, genre_override, rng)?;
    let prompt = template.format(characters, genre)?;
    Ok(PromptPreview { genre, prompt })
}

/// Draw a genre (unless one is given), then generate a story for the cast.
///
/// Nothing is written anywhere. The caller decides what to do with the
/// returned [`Suggestion`], so a failed call leaves no partial output.
///
/// # Errors
///
/// Returns a validation error for an empty cast, or whatever the driver
/// reports.
#[instrument(skip_all, fields(characters = characters.len(), genre_override = ?genre_override))]
pub async fn suggest_story<D, S, R>(
    driver: &D,
    characters: &[S],
    table: &GenreTable,
    template: &PromptTemplate,
    genre_override: Option<Genre>,
    rng: &mut R,
) -> FabulaResult<Suggestion>
where
    D: FabulaDriver + ?Sized,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let genre = choose_genre(table, genre_override, rng)?;
    let story = generate_story(driver, characters, genre, template).await?;

    Ok(Suggestion {
        genre,
        characters: characters.iter().map(|c| c.as_ref().to_string()).collect(),
        story,
    })
}
