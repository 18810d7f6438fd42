//! Environment-driven configuration for stores and the AI client.
//!
//! Values are read through a lookup function so that tests can supply a map
//! instead of touching the process environment. [`StoreConfig::from_env`]
//! and [`OpenAiConfig::from_env`] use the real environment.
//!
//! # Environment Variables
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `STORE_MODE` | `memory`, `file` or `supabase` | `supabase` when URL and key are set, else `memory` |
//! | `SUPABASE_URL` / `SUPABASE_KEY` | PostgREST endpoint and key | required for `supabase` |
//! | `SUPABASE_TABLE` | table name | `todos` |
//! | `TODO_FILE` | path of the JSON file store | `todos.json` |
//! | `OPENAI_API_KEY` | chat completions key | unset |
//! | `OPENAI_BASE_URL` | chat completions base URL | `https://api.openai.com/v1` |
//! | `OPENAI_MODEL` | model name | `gpt-3.5-turbo` |

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_TABLE: &str = "todos";
pub const DEFAULT_TODO_FILE: &str = "todos.json";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

// =============================================================================
// Dotenv
// =============================================================================

/// Loads `.env` from the working directory, then from its parent.
///
/// Variables already set in the environment win over both files.
/// Returns the files that were found.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }
    let parent = Path::new("..").join(".env");
    if dotenvy::from_path(&parent).is_ok() {
        loaded.push(parent);
    }
    loaded
}

// =============================================================================
// StorageMode
// =============================================================================

/// Backend selected for the todo store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// Process-local vector; contents vanish on exit.
    #[default]
    InMemory,
    /// Whole collection in one JSON file.
    File,
    /// Remote PostgREST table.
    Supabase,
}

impl FromStr for StorageMode {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(Self::InMemory),
            "file" | "json" => Ok(Self::File),
            "supabase" | "remote" => Ok(Self::Supabase),
            _ => Err(ConfigurationError::InvalidStorageMode(value.to_string())),
        }
    }
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InMemory => write!(formatter, "memory"),
            Self::File => write!(formatter, "file"),
            Self::Supabase => write!(formatter, "supabase"),
        }
    }
}

// =============================================================================
// SupabaseConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project URL without the `/rest/v1` suffix.
    pub url: String,
    pub key: String,
    pub table: String,
    /// `None` leaves requests without a deadline.
    pub timeout: Option<Duration>,
}

impl SupabaseConfig {
    #[must_use]
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            key: key.into(),
            table: DEFAULT_TABLE.to_string(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn from_lookup<F>(lookup: &F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = non_empty(lookup("SUPABASE_URL"))?;
        let key = non_empty(lookup("SUPABASE_KEY"))?;
        let config = Self::new(url, key);
        Some(match non_empty(lookup("SUPABASE_TABLE")) {
            Some(table) => config.with_table(table),
            None => config,
        })
    }
}

// =============================================================================
// StoreConfig
// =============================================================================

/// Which store to build and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_mode: StorageMode,
    pub supabase: Option<SupabaseConfig>,
    pub file_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_mode: StorageMode::InMemory,
            supabase: None,
            file_path: PathBuf::from(DEFAULT_TODO_FILE),
        }
    }
}

impl StoreConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when `STORE_MODE` is unknown or
    /// Supabase is selected without `SUPABASE_URL` and `SUPABASE_KEY`.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`StoreConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with(lookup, None, None)
    }

    /// Like [`StoreConfig::from_env`], with command-line values taking the
    /// place of `STORE_MODE` and `TODO_FILE` before validation.
    ///
    /// # Errors
    ///
    /// See [`StoreConfig::from_env`].
    pub fn from_env_with(
        storage_mode: Option<StorageMode>,
        file_path: Option<PathBuf>,
    ) -> Result<Self, ConfigurationError> {
        Self::from_lookup_with(|key| env::var(key).ok(), storage_mode, file_path)
    }

    /// Reads the configuration through `lookup`, preferring the given
    /// values over `STORE_MODE` and `TODO_FILE`.
    ///
    /// # Errors
    ///
    /// See [`StoreConfig::from_env`].
    pub fn from_lookup_with<F>(
        lookup: F,
        storage_mode: Option<StorageMode>,
        file_path: Option<PathBuf>,
    ) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let supabase = SupabaseConfig::from_lookup(&lookup);

        let storage_mode = match (storage_mode, non_empty(lookup("STORE_MODE"))) {
            (Some(mode), _) => mode,
            (None, Some(value)) => value.parse()?,
            (None, None) if supabase.is_some() => StorageMode::Supabase,
            (None, None) => StorageMode::InMemory,
        };

        let file_path = file_path.unwrap_or_else(|| {
            non_empty(lookup("TODO_FILE"))
                .map_or_else(|| PathBuf::from(DEFAULT_TODO_FILE), PathBuf::from)
        });

        let config = Self {
            storage_mode,
            supabase,
            file_path,
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingSupabaseCredentials`] when
    /// Supabase is selected without credentials.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if matches!(self.storage_mode, StorageMode::Supabase) && self.supabase.is_none() {
            return Err(ConfigurationError::MissingSupabaseCredentials);
        }
        Ok(())
    }
}

// =============================================================================
// StoreConfigBuilder
// =============================================================================

/// Builder for [`StoreConfig`].
///
/// # Examples
///
/// ```
/// use listy_infrastructure::{StorageMode, StoreConfig};
///
/// let config = StoreConfig::builder()
///     .storage_mode(StorageMode::File)
///     .file_path("/tmp/todos.json")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.storage_mode, StorageMode::File);
/// ```
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    storage_mode: StorageMode,
    supabase: Option<SupabaseConfig>,
    file_path: Option<PathBuf>,
}

impl StoreConfigBuilder {
    #[must_use]
    pub const fn storage_mode(mut self, mode: StorageMode) -> Self {
        self.storage_mode = mode;
        self
    }

    #[must_use]
    pub fn supabase(mut self, config: SupabaseConfig) -> Self {
        self.supabase = Some(config);
        self
    }

    #[must_use]
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the configuration is invalid.
    pub fn build(self) -> Result<StoreConfig, ConfigurationError> {
        let config = StoreConfig {
            storage_mode: self.storage_mode,
            supabase: self.supabase,
            file_path: self
                .file_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TODO_FILE)),
        };
        config.validate()?;
        Ok(config)
    }
}

// =============================================================================
// OpenAiConfig
// =============================================================================

/// Settings for the chat-completions breakdown client.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiConfig {
    /// `None` makes every breakdown fail with an upstream error.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1000,
            timeout: Duration::from_secs(60),
        }
    }
}

impl OpenAiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            api_key: non_empty(lookup("OPENAI_API_KEY")),
            base_url: non_empty(lookup("OPENAI_BASE_URL"))
                .map_or(defaults.base_url, |url| url.trim_end_matches('/').to_string()),
            model: non_empty(lookup("OPENAI_MODEL")).unwrap_or(defaults.model),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// =============================================================================
// ConfigurationError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Invalid store mode: '{0}'. Expected 'memory', 'file' or 'supabase'")]
    InvalidStorageMode(String),

    #[error("SUPABASE_URL and SUPABASE_KEY must be set to use the supabase store")]
    MissingSupabaseCredentials,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

// =============================================================================
// Tests
// =============================================================================
