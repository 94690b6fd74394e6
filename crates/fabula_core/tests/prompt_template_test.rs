//! Tests for the story prompt template.

use fabula_core::{CHARACTER_NAMES_SLOT, Genre, PromptTemplate, STORY_TYPE_SLOT};
use fabula_error::{FabulaErrorKind, ValidationErrorKind};
use std::collections::HashMap;
use strum::IntoEnumIterator;

#[test]
fn test_story_template_has_two_slots() {
    let template = PromptTemplate::story();
    assert_eq!(
        template.input_variables(),
        &vec![CHARACTER_NAMES_SLOT.to_string(), STORY_TYPE_SLOT.to_string()]
    );
    assert!(template.template().contains("{character_names}"));
    assert!(template.template().contains("{story_type}"));
}

#[test]
fn test_prompt_contains_characters_and_genre() -> anyhow::Result<()> {
    let prompt = PromptTemplate::story().format(&["Alice", "Bob", "Charlie"], Genre::Comedy)?;

    for needle in ["Alice", "Bob", "Charlie", "Comedy"] {
        assert!(prompt.contains(needle), "prompt missing {}", needle);
    }
    assert!(prompt.contains(r#"Character Names: ["Alice", "Bob", "Charlie"]"#));
    assert!(prompt.contains("Story type: Comedy"));
    Ok(())
}

#[test]
fn test_no_placeholders_remain() -> anyhow::Result<()> {
    let prompt = PromptTemplate::story().format(&["Dhoak", "Stuma"], Genre::SciFi)?;
    assert!(!prompt.contains('{'));
    assert!(!prompt.contains('}'));
    Ok(())
}

#[test]
fn test_instruction_text_survives_for_every_genre() -> anyhow::Result<()> {
    let template = PromptTemplate::story();
    let pieces = template.instruction_text();
    assert_eq!(pieces.len(), 3);

    let characters = vec!["Dhoak".to_string(), "BaronessMadlin".to_string()];
    for genre in Genre::iter() {
        let prompt = template.format(&characters, genre)?;
        for piece in &pieces {
            assert!(prompt.contains(piece));
        }
        assert!(prompt.contains(&genre.to_string()));
    }
    Ok(())
}

#[test]
fn test_instruction_rules_present() {
    let template = PromptTemplate::story();
    let text = template.template();
    assert!(text.contains("\"A walks to B\""));
    assert!(text.contains("\"CharacterName: Dialogue text\""));
    assert!(text.contains("maximum of 2 seconds"));
    assert!(text.contains("between 10-20 lines"));
    assert!(text.contains("Title \"A Chance Encounter in the Park\""));
}

#[test]
fn test_worked_example_obeys_its_own_rules() {
    let template = PromptTemplate::story();
    let text = template.template();
    assert!(text.contains("Example Input:\n[\"Alice\", \"Bob\", \"Charlie\"]\n"));
    assert!(text.contains("\nPause for 2\n"));
    assert!(!text.contains("Pause for 3"));
}

#[test]
fn test_empty_character_list_rejected() {
    let empty: Vec<String> = Vec::new();
    let err = PromptTemplate::story()
        .format(&empty, Genre::Horror)
        .unwrap_err();
    match err.kind() {
        FabulaErrorKind::Validation(e) => {
            assert_eq!(e.kind(), &ValidationErrorKind::EmptyCharacters)
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[test]
fn test_render_reports_unbound_slot() {
    let template = PromptTemplate::new(
        "Hello {name}, welcome to {place}",
        vec!["name".to_string(), "place".to_string()],
    );
    let mut values = HashMap::new();
    values.insert("name", "Alice".to_string());

    let err = template.render(&values).unwrap_err();
    match err.kind() {
        FabulaErrorKind::Validation(e) => {
            assert_eq!(e.kind(), &ValidationErrorKind::UnboundSlot("place".to_string()))
        }
        other => panic!("expected validation error, got {}", other),
    }
}

#[test]
fn test_placeholder_text_in_name_kept_verbatim() -> anyhow::Result<()> {
    let prompt = PromptTemplate::story().format(&["Alice", "{story_type}"], Genre::Comedy)?;

    assert!(prompt.contains(r#"Character Names: ["Alice", "{story_type}"]"#));
    assert!(prompt.contains("Story type: Comedy"));
    assert_eq!(prompt.matches("Comedy").count(), 1);
    Ok(())
}

#[test]
fn test_slot_value_naming_other_slot_not_expanded() -> anyhow::Result<()> {
    let mut values = HashMap::new();
    values.insert(CHARACTER_NAMES_SLOT, r#"["Alice"]"#.to_string());
    values.insert(STORY_TYPE_SLOT, "{character_names}".to_string());

    let prompt = PromptTemplate::story().render(&values)?;

    assert!(prompt.contains("Story type: {character_names}\n"));
    assert!(prompt.contains(r#"Character Names: ["Alice"]"#));
    Ok(())
}

#[test]
fn test_unknown_braces_left_alone() -> anyhow::Result<()> {
    let template = PromptTemplate::new("{greeting}, {name}! {{x}} {", vec!["name".to_string()]);
    let mut values = HashMap::new();
    values.insert("name", "{greeting}".to_string());

    let rendered = template.render(&values)?;

    assert_eq!(rendered, "{greeting}, {greeting}! {{x}} {");
    Ok(())
}
