//! Story genres and the weighted genre draw.

use fabula_error::{FabulaError, FabulaResult, ValidationError, ValidationErrorKind};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Story categories used to bias generated content.
///
/// # Examples
///
/// ```
/// use fabula_core::Genre;
///
/// assert_eq!(Genre::SciFi.to_string(), "Sci-Fi");
/// assert_eq!("comedy".parse::<Genre>().unwrap(), Genre::Comedy);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Genre {
    /// Whodunits and puzzles
    Mystery,
    /// Love stories
    Romance,
    /// Quests and journeys
    Adventure,
    /// Humor
    Comedy,
    /// Magic and myth
    Fantasy,
    /// Dread and monsters
    Horror,
    /// Science fiction
    #[serde(rename = "Sci-Fi")]
    #[strum(to_string = "Sci-Fi", serialize = "SciFi", serialize = "Sci Fi")]
    SciFi,
}

impl Genre {
    /// Parse a genre label, reporting unknown labels as a validation error.
    pub fn parse_label(label: &str) -> FabulaResult<Self> {
        label
            .trim()
            .parse()
            .map_err(|_| ValidationError::new(ValidationErrorKind::UnknownGenre(label.to_string())).into())
    }
}

/// Genres with their positional selection weights.
///
/// Weights are relative: they do not need to sum to one.
///
/// # Examples
///
/// ```
/// use fabula_core::{Genre, GenreTable};
///
/// let table = GenreTable::default_table();
/// assert_eq!(table.genres().len(), table.weights().len());
/// assert_eq!(table.weight_of(Genre::Comedy), Some(0.4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGenreTable")]
pub struct GenreTable {
    genres: Vec<Genre>,
    weights: Vec<f64>,
}

/// Unchecked wire form of [`GenreTable`].
#[derive(Deserialize)]
struct RawGenreTable {
    genres: Vec<Genre>,
    weights: Vec<f64>,
}

impl TryFrom<RawGenreTable> for GenreTable {
    type Error = FabulaError;

    fn try_from(raw: RawGenreTable) -> FabulaResult<Self> {
        Self::new(raw.genres, raw.weights)
    }
}

impl GenreTable {
    /// The fixed seven-genre table, with Comedy weighted four times the rest.
    pub fn default_table() -> Self {
        Self {
            genres: vec![
                Genre::Mystery,
                Genre::Romance,
                Genre::Adventure,
                Genre::Comedy,
                Genre::Fantasy,
                Genre::Horror,
                Genre::SciFi,
            ],
            weights: vec![0.1, 0.1, 0.1, 0.4, 0.1, 0.1, 0.1],
        }
    }

    /// Build a custom table.
    ///
    /// # Errors
    ///
    /// Fails when the sequences differ in length, are empty, or contain a
    /// negative or non-finite weight.
    pub fn new(genres: Vec<Genre>, weights: Vec<f64>) -> FabulaResult<Self> {
        check_table(&genres, &weights)?;
        Ok(Self { genres, weights })
    }

    /// Genre labels, in table order.
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Weights, parallel to [`genres`](Self::genres).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight assigned to a genre, if it is in the table.
    pub fn weight_of(&self, genre: Genre) -> Option<f64> {
        self.genres
            .iter()
            .position(|g| *g == genre)
            .and_then(|i| self.weights.get(i).copied())
    }

    /// Draw one genre proportionally to its weight.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> FabulaResult<Genre> {
        select_genre(&self.genres, &self.weights, rng)
    }
}

impl Default for GenreTable {
    fn default() -> Self {
        Self::default_table()
    }
}

fn check_table(genres: &[Genre], weights: &[f64]) -> FabulaResult<()> {
    if genres.len() != weights.len() {
        return Err(ValidationError::new(ValidationErrorKind::LengthMismatch {
            genres: genres.len(),
            weights: weights.len(),
        })
        .into());
    }
    if genres.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyTable).into());
    }
    for (genre, weight) in genres.iter().zip(weights) {
        if !weight.is_finite() || *weight < 0.0 {
            return Err(ValidationError::new(ValidationErrorKind::InvalidWeight {
                genre: genre.to_string(),
                weight: weight.to_string(),
            })
            .into());
        }
    }
    Ok(())
}

/// Draw one genre so that genre `i` is chosen with probability
/// `weights[i] / sum(weights)`.
///
/// The random source is supplied by the caller, so a seeded RNG gives a
/// reproducible draw.
///
/// # Errors
///
/// Returns a validation error when the sequences differ in length, are
/// empty, contain a negative or non-finite weight, or have no positive weight.
///
/// # Examples
///
/// ```
/// use fabula_core::{Genre, select_genre};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let genre = select_genre(&[Genre::Horror, Genre::Comedy], &[0.0, 1.0], &mut rng).unwrap();
/// assert_eq!(genre, Genre::Comedy);
/// ```
#[instrument(skip(rng), fields(choices = genres.len()))]
pub fn select_genre<R: Rng + ?Sized>(
    genres: &[Genre],
    weights: &[f64],
    rng: &mut R,
) -> FabulaResult<Genre> {
    check_table(genres, weights)?;

    let dist = WeightedIndex::new(weights)
        .map_err(|_| ValidationError::new(ValidationErrorKind::NoPositiveWeight))?;
    let genre = genres[dist.sample(rng)];

    debug!(%genre, "Selected genre");
    Ok(genre)
}
