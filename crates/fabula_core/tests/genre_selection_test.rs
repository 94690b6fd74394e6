//! Tests for the genre table and weighted genre draw.

use fabula_core::{Genre, GenreTable, select_genre};
use fabula_error::{FabulaErrorKind, ValidationErrorKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use strum::IntoEnumIterator;

fn validation_kind(err: &fabula_error::FabulaError) -> ValidationErrorKind {
    match err.kind() {
        FabulaErrorKind::Validation(e) => e.kind().clone(),
        other => panic!("expected validation error, got {}", other),
    }
}

#[test]
fn test_default_table_is_parallel() {
    let table = GenreTable::default_table();
    assert_eq!(table.genres().len(), 7);
    assert_eq!(table.genres().len(), table.weights().len());

    let labels: Vec<String> = table.genres().iter().map(ToString::to_string).collect();
    assert_eq!(
        labels,
        ["Mystery", "Romance", "Adventure", "Comedy", "Fantasy", "Horror", "Sci-Fi"]
    );
}

#[test]
fn test_comedy_weighted_four_times_others() {
    let table = GenreTable::default_table();
    let comedy = table.weight_of(Genre::Comedy).unwrap();
    for genre in Genre::iter().filter(|g| *g != Genre::Comedy) {
        assert_eq!(table.weight_of(genre).unwrap() * 4.0, comedy);
    }
}

#[test]
fn test_draw_frequencies_follow_weights() -> anyhow::Result<()> {
    const DRAWS: usize = 100_000;
    let table = GenreTable::default_table();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut counts: HashMap<Genre, usize> = HashMap::new();

    for _ in 0..DRAWS {
        *counts.entry(table.select(&mut rng)?).or_default() += 1;
    }

    for genre in Genre::iter() {
        let freq = counts.get(&genre).copied().unwrap_or(0) as f64 / DRAWS as f64;
        let expected = if genre == Genre::Comedy { 0.4 } else { 0.1 };
        assert!(
            (freq - expected).abs() < 0.01,
            "{} drawn at {:.4}, expected ~{}",
            genre,
            freq,
            expected
        );
    }
    Ok(())
}

#[test]
fn test_same_seed_same_genre() -> anyhow::Result<()> {
    let table = GenreTable::default_table();
    let first = table.select(&mut StdRng::seed_from_u64(42))?;
    let second = table.select(&mut StdRng::seed_from_u64(42))?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_zero_weight_never_drawn() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1_000 {
        let genre = select_genre(&[Genre::Horror, Genre::Fantasy], &[0.0, 3.0], &mut rng)?;
        assert_eq!(genre, Genre::Fantasy);
    }
    Ok(())
}

#[test]
fn test_unequal_lengths_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = select_genre(&[Genre::Mystery, Genre::Comedy], &[1.0], &mut rng).unwrap_err();
    assert_eq!(
        validation_kind(&err),
        ValidationErrorKind::LengthMismatch {
            genres: 2,
            weights: 1
        }
    );
}

#[test]
fn test_empty_lists_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = select_genre(&[], &[], &mut rng).unwrap_err();
    assert_eq!(validation_kind(&err), ValidationErrorKind::EmptyTable);
}

#[test]
fn test_all_zero_weights_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = select_genre(&[Genre::Mystery, Genre::Comedy], &[0.0, 0.0], &mut rng).unwrap_err();
    assert_eq!(validation_kind(&err), ValidationErrorKind::NoPositiveWeight);
}

#[test]
fn test_negative_and_nan_weights_rejected() {
    let err = GenreTable::new(vec![Genre::Mystery], vec![-1.0]).unwrap_err();
    assert!(matches!(
        validation_kind(&err),
        ValidationErrorKind::InvalidWeight { .. }
    ));

    let err = GenreTable::new(vec![Genre::Mystery], vec![f64::NAN]).unwrap_err();
    assert!(matches!(
        validation_kind(&err),
        ValidationErrorKind::InvalidWeight { .. }
    ));
}

#[test]
fn test_genre_labels_parse() -> anyhow::Result<()> {
    assert_eq!(Genre::parse_label("Sci-Fi")?, Genre::SciFi);
    assert_eq!(Genre::parse_label("scifi")?, Genre::SciFi);
    assert_eq!(Genre::parse_label(" HORROR ")?, Genre::Horror);

    let err = Genre::parse_label("Western").unwrap_err();
    assert_eq!(
        validation_kind(&err),
        ValidationErrorKind::UnknownGenre("Western".to_string())
    );
    Ok(())
}

#[test]
fn test_genre_serializes_with_display_label() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&Genre::SciFi)?, "\"Sci-Fi\"");
    assert_eq!(serde_json::from_str::<Genre>("\"Comedy\"")?, Genre::Comedy);
    Ok(())
}

#[test]
fn test_deserialized_table_is_validated() -> anyhow::Result<()> {
    let table: GenreTable =
        serde_json::from_str(r#"{"genres":["Comedy","Sci-Fi"],"weights":[0.4,0.1]}"#)?;
    assert_eq!(table.weight_of(Genre::SciFi), Some(0.1));

    let lopsided =
        serde_json::from_str::<GenreTable>(r#"{"genres":["Comedy","Horror"],"weights":[0.4]}"#);
    assert!(lopsided.is_err());

    let negative =
        serde_json::from_str::<GenreTable>(r#"{"genres":["Comedy"],"weights":[-1.0]}"#);
    assert!(negative.is_err());
    Ok(())
}

#[test]
fn test_weight_of_missing_genre_is_none() {
    let table = GenreTable::default_table();
    assert_eq!(table.weight_of(Genre::Comedy), Some(0.4));

    let custom = GenreTable::new(vec![Genre::Mystery], vec![1.0]).unwrap();
    assert_eq!(custom.weight_of(Genre::Horror), None);
}
