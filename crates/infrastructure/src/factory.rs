//! Builds the configured store and breakdown client.

use std::sync::Arc;

use listy_workflow::{TaskBreakdown, TodoStore};

use crate::adapters::{
    InMemoryTodoStore, JsonFileTodoStore, OpenAiTaskBreakdown, SupabaseTodoStore,
};
use crate::config::{ConfigurationError, OpenAiConfig, StorageMode, StoreConfig};
use crate::errors::InfraError;

// =============================================================================
// FactoryError
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Infrastructure(#[from] InfraError),
}

// =============================================================================
// StoreFactory
// =============================================================================

/// Creates the todo store selected by a [`StoreConfig`].
///
/// # Examples
///
/// ```
/// use listy_infrastructure::{StoreConfig, StoreFactory};
///
/// let store = StoreFactory::new(StoreConfig::default()).create().unwrap();
/// assert_eq!(store.backend_name(), "memory");
/// ```
#[derive(Debug, Clone)]
pub struct StoreFactory {
    config: StoreConfig,
}

impl StoreFactory {
    #[must_use]
    pub const fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// # Errors
    ///
    /// Returns [`FactoryError::Configuration`] if the environment is invalid.
    pub fn from_env() -> Result<Self, FactoryError> {
        Ok(Self::new(StoreConfig::from_env()?))
    }

    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Builds the store for the configured mode.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError`] when Supabase is selected without
    /// credentials or its HTTP client cannot be created.
    pub fn create(&self) -> Result<Arc<dyn TodoStore>, FactoryError> {
        let store: Arc<dyn TodoStore> = match self.config.storage_mode {
            StorageMode::InMemory => Arc::new(InMemoryTodoStore::new()),
            StorageMode::File => Arc::new(JsonFileTodoStore::new(&self.config.file_path)),
            StorageMode::Supabase => {
                let supabase = self
                    .config
                    .supabase
                    .clone()
                    .ok_or(ConfigurationError::MissingSupabaseCredentials)?;
                Arc::new(SupabaseTodoStore::new(supabase)?)
            }
        };

        tracing::info!(
            backend = store.backend_name(),
            mode = %self.config.storage_mode,
            "todo store ready"
        );
        Ok(store)
    }

    /// Builds the OpenAI breakdown client.
    ///
    /// A missing API key is not an error here; breakdown requests fail
    /// with an upstream error instead.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Infrastructure`] if the HTTP client cannot be built.
    pub fn create_breakdown(config: OpenAiConfig) -> Result<Arc<dyn TaskBreakdown>, FactoryError> {
        let breakdown = OpenAiTaskBreakdown::new(config)?;
        if !breakdown.is_configured() {
            tracing::warn!("OPENAI_API_KEY is not set; AI breakdown requests will fail");
        }
        Ok(Arc::new(breakdown))
    }
}

// =============================================================================
// Tests
// =============================================================================
