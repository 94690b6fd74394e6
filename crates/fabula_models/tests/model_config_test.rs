//! Tests for model configuration loading.

use fabula_error::FabulaErrorKind;
use fabula_models::ModelConfig;
use std::io::Write;
use tempfile::Builder;

#[test]
fn test_defaults() {
    let config = ModelConfig::default();
    assert_eq!(config.model(), "gpt-4o");
    assert_eq!(*config.temperature(), 0.2);
    assert_eq!(config.base_url(), "https://api.openai.com/v1/chat/completions");
    assert_eq!(*config.timeout_secs(), 60);
    assert!(config.api_key().is_none());
    assert!(config.max_retries().is_none());
    assert!(!*config.no_retry());
}

#[test]
fn test_load_bundled_defaults() -> anyhow::Result<()> {
    let config = ModelConfig::load()?;
    assert!(!config.model().is_empty());
    assert!(config.validate().is_ok());
    Ok(())
}

#[test]
fn test_config_from_file() -> anyhow::Result<()> {
    let mut temp_file = Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        temp_file,
        r#"
model = "gpt-4o-mini"
temperature = 0.7
timeout_secs = 15
max_retries = 4
"#
    )?;

    let config = ModelConfig::from_file(temp_file.path())?;
    assert_eq!(config.model(), "gpt-4o-mini");
    assert_eq!(*config.temperature(), 0.7);
    assert_eq!(*config.timeout_secs(), 15);
    assert_eq!(*config.max_retries(), Some(4));
    assert_eq!(config.base_url(), "https://api.openai.com/v1/chat/completions");
    Ok(())
}

#[test]
fn test_explicit_file_overrides_bundled_defaults() -> anyhow::Result<()> {
    let mut temp_file = Builder::new().suffix(".toml").tempfile()?;
    writeln!(temp_file, "base_url = \"http://localhost:8080/v1/chat/completions\"")?;

    let config = ModelConfig::load_from(temp_file.path())?;
    assert_eq!(config.base_url(), "http://localhost:8080/v1/chat/completions");
    Ok(())
}

#[test]
fn test_missing_explicit_file_is_config_error() {
    let err = ModelConfig::load_from("/definitely/not/here/fabula.toml").unwrap_err();
    assert!(matches!(err.kind(), FabulaErrorKind::Config(_)));
}

#[test]
fn test_malformed_file_is_config_error() -> anyhow::Result<()> {
    let mut temp_file = Builder::new().suffix(".toml").tempfile()?;
    writeln!(temp_file, "temperature = \"warm\"")?;

    let err = ModelConfig::from_file(temp_file.path()).unwrap_err();
    assert!(matches!(err.kind(), FabulaErrorKind::Config(_)));
    Ok(())
}

#[test]
fn test_debug_output_redacts_credential() {
    let config = ModelConfig::default().with_api_key("sk-very-secret");
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("sk-very-secret"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn test_credential_checks() {
    assert!(ModelConfig::default().credential().is_err());
    assert!(ModelConfig::default().with_api_key("  ").credential().is_err());
    assert_eq!(
        ModelConfig::default()
            .with_api_key("sk-abc123")
            .credential()
            .ok(),
        Some("sk-abc123")
    );
}
