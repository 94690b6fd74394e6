//! Model configuration loading.
//!
//! Configuration is layered, later sources overriding earlier ones:
//! 1. Bundled defaults (`fabula.toml` shipped with the library)
//! 2. `~/.config/fabula/fabula.toml`
//! 3. `./fabula.toml`, or an explicit file passed to [`ModelConfig::load_from`]
//! 4. `FABULA_*` environment variables
//!
//! The credential is never part of the bundled file. It comes from
//! `FABULA_API_KEY` (or an `api_key` entry in a user file), falling back to
//! `OPENAI_API_KEY`.

use config::{Config, Environment, File, FileFormat};
use fabula_error::{ConfigError, FabulaError, FabulaResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Environment variable consulted when no `api_key` is configured.
pub const API_KEY_FALLBACK_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_CONFIG: &str = include_str!("../../../fabula.toml");

/// Settings for the chat-completion model handle.
///
/// # Example
///
/// ```toml
/// model = "gpt-4o"
/// temperature = 0.2
/// timeout_secs = 60
/// max_retries = 3
/// ```
#[derive(Clone, PartialEq, Deserialize, Serialize, derive_getters::Getters)]
pub struct ModelConfig {
    /// Model identifier sent to the provider
    #[serde(default = "default_model")]
    model: String,

    /// Access credential
    #[serde(default, skip_serializing)]
    api_key: Option<String>,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    temperature: f32,

    /// Full URL of the chat-completions endpoint
    #[serde(default = "default_base_url")]
    base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,

    /// Retry attempt cap; the error's own strategy applies when unset
    #[serde(default)]
    max_retries: Option<usize>,

    /// Initial retry backoff in milliseconds; the error's own strategy applies when unset
    #[serde(default)]
    retry_backoff_ms: Option<u64>,

    /// Disable retry entirely
    #[serde(default)]
    no_retry: bool,
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_base_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            temperature: default_temperature(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: None,
            retry_backoff_ms: None,
            no_retry: false,
        }
    }
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_ms", &self.retry_backoff_ms)
            .field("no_retry", &self.no_retry)
            .finish()
    }
}

impl ModelConfig {
    /// Load configuration with the default precedence.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> FabulaResult<Self> {
        Self::load_layers(None)
    }

    /// Load configuration, replacing `./fabula.toml` with an explicit file.
    ///
    /// The explicit file must exist.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file is missing or malformed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_from(path: impl AsRef<Path>) -> FabulaResult<Self> {
        Self::load_layers(Some(path.as_ref()))
    }

    /// Load a single file on top of the built-in defaults, ignoring the
    /// environment and user directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> FabulaResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                FabulaError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FabulaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    fn load_layers(explicit: Option<&Path>) -> FabulaResult<Self> {
        debug!("Loading configuration with precedence: env > file > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/fabula/fabula.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = match explicit {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("fabula").required(false)),
        };

        builder = builder.add_source(Environment::with_prefix("FABULA").try_parsing(true));

        let mut loaded: Self = builder
            .build()
            .map_err(|e| {
                FabulaError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FabulaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        if loaded.api_key.is_none() {
            loaded.api_key = std::env::var(API_KEY_FALLBACK_ENV).ok();
        }

        debug!(config = ?loaded, "Configuration loaded");
        Ok(loaded)
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the credential.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the endpoint URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Override the retry attempt cap.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Override the initial retry backoff.
    pub fn with_retry_backoff_ms(mut self, retry_backoff_ms: u64) -> Self {
        self.retry_backoff_ms = Some(retry_backoff_ms);
        self
    }

    /// Enable or disable retry.
    pub fn with_no_retry(mut self, no_retry: bool) -> Self {
        self.no_retry = no_retry;
        self
    }

    /// Check every setting except the credential.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first invalid setting.
    pub fn validate(&self) -> FabulaResult<()> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::new("Model name must not be empty").into());
        }
        if !self.temperature.is_finite() || !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::new(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ))
            .into());
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::new("Endpoint URL must not be empty").into());
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::new("Timeout must be at least one second").into());
        }
        Ok(())
    }

    /// Return the credential, checking it is present and well formed.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no key is configured, the key is
    /// blank, or it contains whitespace or control characters.
    pub fn credential(&self) -> FabulaResult<&str> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            ConfigError::new(format!(
                "API key not configured (set FABULA_API_KEY or {})",
                API_KEY_FALLBACK_ENV
            ))
        })?;
        if key.is_empty() {
            return Err(ConfigError::new("API key is empty").into());
        }
        if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ConfigError::new("API key contains whitespace or control characters").into());
        }
        Ok(key)
    }
}
